use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;
use tachyonfx::Duration;

use darts_core::{
    Color, ContentManager, MenuContext, MenuError, Options, ScreenState, ScreenStatus, Viewport,
};
use darts_widgets::backdrop::{BackdropWidget, FrameWidget};
use darts_widgets::hint_bar::HintBarWidget;

use crate::audio::CueDisplay;
use crate::effects::{self, FxManager};
use crate::input::InputMapper;
use crate::screens::game_setup::{GameMode, GameSetupScreen};
use crate::screens::main_menu::MainMenuScreen;
use crate::screens::options::OptionsScreen;
use crate::screens::{Screen, MENU_HINTS};

/// What a screen asks the host to do
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    OpenGameSetup,
    OpenOptions,
    StartGame { mode: GameMode, players: u8 },
    SetSound(bool),
    SetHighlight(Color),
}

/// Main application state: a stack of screens, topmost has focus
pub struct App {
    pub options: Options,
    pub audio: CueDisplay,
    pub tick: u64,
    pub fx: FxManager,
    screens: Vec<Box<dyn Screen>>,
    content: ContentManager,
    input: InputMapper,
    viewport: Viewport,
    status: Option<String>,
}

impl App {
    pub fn new(options: Options, viewport: Viewport) -> Result<Self, MenuError> {
        let mut fx = FxManager::default();
        fx.add_unique_effect("startup_reveal", effects::startup_reveal());

        let mut app = Self {
            content: ContentManager::new(options.content_root.clone()),
            audio: CueDisplay::new(options.sound_enabled),
            options,
            tick: 0,
            fx,
            screens: Vec::new(),
            input: InputMapper::new(),
            viewport,
            status: None,
        };
        let main_menu = MainMenuScreen::new(&app.options)?;
        app.push(Box::new(main_menu))?;
        Ok(app)
    }

    fn push(&mut self, mut screen: Box<dyn Screen>) -> Result<(), MenuError> {
        screen.load_content(&mut self.content, &self.options)?;
        self.screens.push(screen);
        log::debug!("screen pushed, stack depth {}", self.screens.len());
        Ok(())
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.input.handle_key(key)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.input.handle_mouse(mouse);
    }

    pub fn handle_resize(&mut self, w: u16, h: u16) {
        self.viewport = Viewport::new(w as i32, h as i32);
    }

    /// Advance one frame. Returns false once every screen has left.
    pub fn tick(&mut self, dt: f32) -> Result<bool, MenuError> {
        self.tick += 1;

        let input = self.input.take();
        let actions = match self.screens.last_mut() {
            Some(top) => {
                let mut ctx = MenuContext {
                    options: &self.options,
                    viewport: self.viewport,
                    audio: &mut self.audio,
                };
                top.handle_input(&input, &mut ctx)
            }
            None => Vec::new(),
        };
        for action in actions {
            self.process_action(action)?;
        }

        let count = self.screens.len();
        let mut finished = Vec::new();
        for (i, screen) in self.screens.iter_mut().enumerate() {
            let covered = i + 1 < count;
            if screen.update(dt, covered) == ScreenStatus::Finished {
                finished.push(i);
            }
        }
        for i in finished.into_iter().rev() {
            let mut screen = self.screens.remove(i);
            screen.unload_content();
            log::debug!("screen removed, stack depth {}", self.screens.len());
        }

        Ok(!self.screens.is_empty())
    }

    fn process_action(&mut self, action: ScreenAction) -> Result<(), MenuError> {
        match action {
            ScreenAction::OpenGameSetup => {
                let screen = GameSetupScreen::new(&self.options)?;
                self.push(Box::new(screen))?;
            }
            ScreenAction::OpenOptions => {
                let screen = OptionsScreen::new(&self.options)?;
                self.push(Box::new(screen))?;
            }
            ScreenAction::StartGame { mode, players } => {
                log::info!("starting {} with {} player(s)", mode.label(), players);
                let noun = if players == 1 { "player" } else { "players" };
                self.status = Some(format!("Game on: {}, {} {}", mode.label(), players, noun));
            }
            ScreenAction::SetSound(on) => {
                self.options.sound_enabled = on;
                self.audio.enabled = on;
            }
            ScreenAction::SetHighlight(color) => {
                self.options.selected_menu_item_foreground = color;
            }
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.viewport = Viewport::new(area.width as i32, area.height as i32);

        frame.render_widget(BackdropWidget::new(self.tick), area);
        frame.render_widget(FrameWidget::new(self.tick), area);

        for screen in self.screens.iter_mut() {
            if screen.state() != ScreenState::Hidden {
                screen.render(frame, area, &self.options);
            }
        }

        let hints = self.screens.last().map_or(MENU_HINTS, |s| s.hints());
        let status = self
            .status
            .clone()
            .or_else(|| self.audio.last().map(|cue| format!("\u{266a} {}", cue.name())));
        if area.height > 2 && area.width > 2 {
            let footer = Rect::new(area.x + 1, area.bottom() - 2, area.width - 2, 1);
            frame.render_widget(HintBarWidget::new(hints).status(status.as_deref()), footer);
        }

        let tick_duration = Duration::from_millis(33);
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }
}
