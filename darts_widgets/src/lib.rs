pub mod backdrop;
pub mod hint_bar;
pub mod stack_panel;
pub mod theme;

pub use stack_panel::{BufferSink, StackPanelWidget};
pub use theme::Theme;
