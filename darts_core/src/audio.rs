/// Sound cues the menu layer asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    MenuSelect,
    MenuBack,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::MenuSelect => "menu-select",
            SoundCue::MenuBack => "menu-back",
        }
    }
}

/// Host audio service.
pub trait AudioSink {
    fn play_sound(&mut self, cue: SoundCue);
}

/// Audio sink that discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play_sound(&mut self, _cue: SoundCue) {}
}
