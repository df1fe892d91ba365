//! The menu screen.
//!
//! A [`MenuScreen`] owns a panel tree made of a title and a stack of
//! entries, tracks which entry is selected and animates itself on and off
//! the screen stack. The host drives it once per frame:
//!
//! 1. [`MenuScreen::handle_input`] with the polled [`InputState`],
//! 2. [`MenuScreen::update`] with the frame time and covered flag,
//! 3. [`MenuScreen::draw`] into a [`RenderSink`].

use crate::audio::{AudioSink, SoundCue};
use crate::content::ContentSource;
use crate::curve::Curve;
use crate::entry::{MenuEntry, MenuEvent};
use crate::error::MenuError;
use crate::geometry::{Point, Rect, Vec2, Viewport};
use crate::input::InputState;
use crate::options::{Options, MAX_ENTRY_PADDING};
use crate::panel::{Orientation, PanelItem, StackPanel};
use crate::pulse::pulse_color;
use crate::text::TextBlock;
use crate::transition::{MenuSlide, ScreenState, ScreenStatus, ScreenTransition};

/// Host services handed to a screen while it handles input.
pub struct MenuContext<'a> {
    pub options: &'a Options,
    pub viewport: Viewport,
    pub audio: &'a mut dyn AudioSink,
}

/// Host renderer for panel trees.
pub trait RenderSink<A> {
    fn begin(&mut self) {}

    fn draw_panel(&mut self, panel: &StackPanel<A>, origin: Point, alpha: f32);

    fn end(&mut self) {}
}

pub struct MenuScreen<A> {
    panel: StackPanel<A>,
    /// Index of the entries panel inside `panel`.
    items_slot: usize,
    selected: usize,
    menu_position: Vec2,
    transition: ScreenTransition,
    slide: MenuSlide,
    covered: bool,
    curve_asset: String,
    curve: Option<Curve>,
}

impl<A: Clone> MenuScreen<A> {
    /// Build a menu from a title and its entries.
    ///
    /// Fails when `entries` is empty or none of them is enabled.
    pub fn new(
        title: impl Into<String>,
        entries: Vec<MenuEntry<A>>,
        options: &Options,
    ) -> Result<Self, MenuError> {
        if entries.is_empty() {
            return Err(MenuError::EmptyMenu);
        }
        if !entries.iter().any(|e| e.enabled) {
            return Err(MenuError::NoSelectableEntry);
        }

        let mut items = StackPanel::new(Orientation::Vertical);
        for mut entry in entries {
            entry.padding_x = options.entry_padding_x.clamp(0, MAX_ENTRY_PADDING);
            entry.padding_y = options.entry_padding_y.clamp(0, MAX_ENTRY_PADDING);
            entry.color = options.menu_item_foreground;
            items.push(PanelItem::Entry(entry));
        }

        let title = TextBlock::new(title, options.title_foreground).padding(0, 1);
        let panel = StackPanel::new(Orientation::Vertical)
            .with(PanelItem::Text(title))
            .with(PanelItem::Panel(items));

        let mut menu = MenuScreen {
            panel,
            items_slot: 1,
            selected: 0,
            menu_position: options.menu_position,
            transition: ScreenTransition::new(
                options.transition_on_time,
                options.transition_off_time,
            ),
            slide: MenuSlide::default(),
            covered: false,
            curve_asset: options.menu_curve.clone(),
            curve: None,
        };
        menu.select_first(options);
        Ok(menu)
    }

    /// Lay the entries out side by side instead of stacked.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        if let Some(items) = self.items_mut() {
            items.orientation = orientation;
        }
        self
    }

    /// Load the screen's assets and reset the selection to the first entry.
    pub fn load_content(
        &mut self,
        content: &mut dyn ContentSource,
        options: &Options,
    ) -> Result<(), MenuError> {
        self.curve = Some(content.load_curve(&self.curve_asset)?);
        self.select_first(options);
        Ok(())
    }

    pub fn unload_content(&mut self) {
        self.curve = None;
    }

    pub fn handle_input(
        &mut self,
        input: &InputState,
        ctx: &mut MenuContext<'_>,
    ) -> Vec<MenuEvent<A>> {
        let mut events = Vec::new();
        if !self.transition.is_active() {
            return events;
        }

        let previous = self.selected;
        self.handle_keyboard(input, ctx, &mut events);
        self.handle_mouse(input, ctx.viewport, &mut events);

        if previous != self.selected {
            self.recolor(previous, ctx.options);
            ctx.audio.play_sound(SoundCue::MenuSelect);
        }
        events
    }

    fn handle_keyboard(
        &mut self,
        input: &InputState,
        ctx: &mut MenuContext<'_>,
        events: &mut Vec<MenuEvent<A>>,
    ) {
        if let Some(event) = self
            .selected_entry_mut()
            .and_then(|entry| entry.handle_input(input))
        {
            events.push(event);
        }

        if input.menu_down {
            self.step_selection(1);
        }
        if input.menu_up {
            self.step_selection(-1);
        }

        if input.menu_cancel {
            ctx.audio.play_sound(SoundCue::MenuBack);
            self.cancel_screen();
            events.push(MenuEvent::ScreenCancelled);
        }
    }

    /// Hover and click hit-testing against the resting layout.
    fn handle_mouse(&mut self, input: &InputState, viewport: Viewport, events: &mut Vec<MenuEvent<A>>) {
        if !input.pointer_active() {
            return;
        }

        let Some(index) = self.entry_at(viewport, input.pointer) else {
            return;
        };
        let Some(entry) = self
            .items_mut()
            .and_then(|items| items.items.get_mut(index))
            .and_then(PanelItem::as_entry_mut)
        else {
            return;
        };
        if !entry.enabled {
            return;
        }

        if input.mouse_click {
            events.push(entry.select());
        } else if input.mouse_right_click {
            events.push(entry.cancel());
        }
        self.selected = index;
    }

    /// Index of the first items-panel child under `point`, if any.
    pub fn entry_at(&self, viewport: Viewport, point: Point) -> Option<usize> {
        let origin = self.rest_origin(viewport);
        let rects = self.panel.child_rects(origin);
        let slot = rects.get(self.items_slot)?;
        self.items()?.hit_test(slot.origin(), point)
    }

    /// Bounding boxes of the items-panel children at the resting position.
    pub fn entry_rects(&self, viewport: Viewport) -> Vec<Rect> {
        let origin = self.rest_origin(viewport);
        let rects = self.panel.child_rects(origin);
        match (rects.get(self.items_slot), self.items()) {
            (Some(slot), Some(items)) => items.child_rects(slot.origin()),
            _ => Vec::new(),
        }
    }

    /// Panel origin once the slide has settled on the active position.
    pub fn rest_origin(&self, viewport: Viewport) -> Point {
        Point::new(
            (self.menu_position.x * viewport.width as f32) as i32,
            (self.menu_position.y * viewport.height as f32) as i32,
        )
    }

    /// Move the selection by `delta`, wrapping and skipping non-selectable items.
    fn step_selection(&mut self, delta: isize) {
        let Some(items) = self.items() else {
            return;
        };
        let len = items.len() as isize;
        if len == 0 {
            return;
        }

        let mut index = self.selected as isize;
        for _ in 0..len {
            index = (index + delta).rem_euclid(len);
            if items.items[index as usize].is_selectable() {
                self.selected = index as usize;
                return;
            }
        }
    }

    fn select_first(&mut self, options: &Options) {
        let first = self
            .items()
            .and_then(|items| items.items.iter().position(PanelItem::is_selectable))
            .unwrap_or(0);
        let previous = self.selected;
        self.selected = first;
        self.recolor(previous, options);
    }

    fn recolor(&mut self, previous: usize, options: &Options) {
        let selected = self.selected;
        let Some(items) = self.items_mut() else {
            return;
        };
        if let Some(entry) = items.items.get_mut(previous).and_then(PanelItem::as_entry_mut) {
            entry.color = options.menu_item_foreground;
        }
        if let Some(entry) = items.items.get_mut(selected).and_then(PanelItem::as_entry_mut) {
            entry.color = options.selected_menu_item_foreground;
        }
    }

    /// Start exiting the screen.
    pub fn cancel_screen(&mut self) {
        log::debug!("menu cancelled");
        self.transition.exit();
        self.slide.restart();
    }

    pub fn update(&mut self, dt: f32, covered: bool) -> ScreenStatus {
        self.covered = covered;
        self.slide.tick(dt, covered);
        self.transition.update(dt, covered)
    }

    /// Ease the slide, pulse the selected entry and hand the panel to `sink`.
    ///
    /// Returns the origin the panel was drawn at.
    pub fn draw<R: RenderSink<A>>(&mut self, options: &Options, viewport: Viewport, sink: &mut R) -> Point {
        let target = MenuSlide::target(self.covered, &self.transition);
        let position = self.slide.ease(target);
        let factor = match &self.curve {
            Some(curve) => curve.evaluate(position),
            None => position,
        };

        let origin = Point::new(
            (factor * self.menu_position.x * viewport.width as f32) as i32,
            (self.menu_position.y * viewport.height as f32) as i32,
        );

        let highlight = pulse_color(options.selected_menu_item_foreground, self.transition.elapsed());
        if let Some(entry) = self.selected_entry_mut() {
            entry.color = highlight;
        }

        sink.begin();
        sink.draw_panel(&self.panel, origin, self.transition.alpha());
        sink.end();
        origin
    }
}

impl<A> MenuScreen<A> {
    pub fn panel(&self) -> &StackPanel<A> {
        &self.panel
    }

    pub fn items(&self) -> Option<&StackPanel<A>> {
        self.panel.items.get(self.items_slot)?.as_panel()
    }

    fn items_mut(&mut self) -> Option<&mut StackPanel<A>> {
        self.panel.items.get_mut(self.items_slot)?.as_panel_mut()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry<A>> {
        self.entry(self.selected)
    }

    fn selected_entry_mut(&mut self) -> Option<&mut MenuEntry<A>> {
        let selected = self.selected;
        self.items_mut()?.items.get_mut(selected)?.as_entry_mut()
    }

    pub fn entry(&self, index: usize) -> Option<&MenuEntry<A>> {
        self.items()?.items.get(index)?.as_entry()
    }

    pub fn entry_count(&self) -> usize {
        self.items().map_or(0, StackPanel::len)
    }

    pub fn transition(&self) -> &ScreenTransition {
        &self.transition
    }

    pub fn state(&self) -> ScreenState {
        self.transition.state()
    }

    pub fn slide(&self) -> &MenuSlide {
        &self.slide
    }

    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }
}
