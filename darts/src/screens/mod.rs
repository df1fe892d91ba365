pub mod game_setup;
pub mod main_menu;
pub mod options;

use ratatui::layout::Rect;
use ratatui::Frame;

use darts_core::{
    ContentManager, InputState, MenuContext, MenuError, MenuScreen, Options, ScreenState,
    ScreenStatus, SoundCue, Viewport,
};
use darts_widgets::BufferSink;

use crate::app::ScreenAction;

pub const MENU_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "Navigate"),
    ("\u{2190}\u{2192}", "Change"),
    ("Enter", "Select"),
    ("Esc", "Back"),
];

/// One entry of the screen stack
pub trait Screen {
    fn load_content(&mut self, content: &mut ContentManager, options: &Options) -> Result<(), MenuError>;
    fn unload_content(&mut self);
    fn handle_input(&mut self, input: &InputState, ctx: &mut MenuContext<'_>) -> Vec<ScreenAction>;
    fn update(&mut self, dt: f32, covered: bool) -> ScreenStatus;
    fn render(&mut self, frame: &mut Frame, area: Rect, options: &Options);
    fn state(&self) -> ScreenState;

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        MENU_HINTS
    }
}

/// Draw a menu screen into `area` of the frame.
pub fn draw_menu<A: Clone>(menu: &mut MenuScreen<A>, frame: &mut Frame, area: Rect, options: &Options) {
    let viewport = Viewport::new(area.width as i32, area.height as i32);
    let mut sink = BufferSink::new(frame.buffer_mut(), area);
    menu.draw(options, viewport, &mut sink);
}

/// Leave the menu the same way the cancel key does. A menu already on its
/// way out is left alone.
pub fn back_out<A: Clone>(menu: &mut MenuScreen<A>, ctx: &mut MenuContext<'_>) {
    if menu.transition().is_exiting() {
        return;
    }
    ctx.audio.play_sound(SoundCue::MenuBack);
    menu.cancel_screen();
}
