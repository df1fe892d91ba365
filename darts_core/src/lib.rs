pub mod audio;
pub mod color;
pub mod content;
pub mod curve;
pub mod entry;
pub mod error;
pub mod geometry;
pub mod input;
pub mod menu;
pub mod options;
pub mod panel;
pub mod pulse;
pub mod text;
pub mod transition;

pub use audio::{AudioSink, Silent, SoundCue};
pub use color::Color;
pub use content::{ContentManager, ContentSource};
pub use curve::{Curve, CurveKey};
pub use entry::{EntryKind, EntryValue, MenuEntry, MenuEvent};
pub use error::{ConfigError, ContentError, MenuError};
pub use geometry::{Point, Rect, Vec2, Viewport};
pub use input::InputState;
pub use menu::{MenuContext, MenuScreen, RenderSink};
pub use options::{Options, MAX_ENTRY_PADDING};
pub use panel::{Orientation, PanelItem, StackPanel};
pub use text::TextBlock;
pub use transition::{ScreenState, ScreenStatus};
