use darts_core::{AudioSink, SoundCue};

/// Terminal stand-in for the sound system: remembers the last cue so the
/// footer can show it, and logs every cue played.
#[derive(Debug)]
pub struct CueDisplay {
    pub enabled: bool,
    last: Option<SoundCue>,
    played: u64,
}

impl CueDisplay {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
            played: 0,
        }
    }

    pub fn last(&self) -> Option<SoundCue> {
        self.last
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for CueDisplay {
    fn play_sound(&mut self, cue: SoundCue) {
        if !self.enabled {
            return;
        }
        log::debug!("sound cue {}", cue.name());
        self.last = Some(cue);
        self.played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sink_stays_quiet() {
        let mut audio = CueDisplay::new(false);
        audio.play_sound(SoundCue::MenuBack);
        assert_eq!(audio.last(), None);

        audio.enabled = true;
        audio.play_sound(SoundCue::MenuSelect);
        assert_eq!(audio.last(), Some(SoundCue::MenuSelect));
        assert_eq!(audio.played(), 1);
    }
}
