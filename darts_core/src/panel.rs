//! Stack layout for menu content.
//!
//! A [`StackPanel`] places its children one after another along its axis,
//! each child starting where the previous one ended.

use crate::entry::MenuEntry;
use crate::geometry::{Point, Rect};
use crate::text::TextBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Anything a panel can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelItem<A> {
    Text(TextBlock),
    Entry(MenuEntry<A>),
    Panel(StackPanel<A>),
}

impl<A> PanelItem<A> {
    pub fn width(&self) -> i32 {
        match self {
            PanelItem::Text(text) => text.width(),
            PanelItem::Entry(entry) => entry.width(),
            PanelItem::Panel(panel) => panel.width(),
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            PanelItem::Text(text) => text.height(),
            PanelItem::Entry(entry) => entry.height(),
            PanelItem::Panel(panel) => panel.height(),
        }
    }

    pub fn as_entry(&self) -> Option<&MenuEntry<A>> {
        match self {
            PanelItem::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_entry_mut(&mut self) -> Option<&mut MenuEntry<A>> {
        match self {
            PanelItem::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_panel(&self) -> Option<&StackPanel<A>> {
        match self {
            PanelItem::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn as_panel_mut(&mut self) -> Option<&mut StackPanel<A>> {
        match self {
            PanelItem::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    /// True for enabled entries, the only items a menu may select.
    pub fn is_selectable(&self) -> bool {
        self.as_entry().is_some_and(|entry| entry.enabled)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackPanel<A> {
    pub orientation: Orientation,
    pub items: Vec<PanelItem<A>>,
}

impl<A> Default for StackPanel<A> {
    fn default() -> Self {
        Self::new(Orientation::Vertical)
    }
}

impl<A> StackPanel<A> {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: PanelItem<A>) {
        self.items.push(item);
    }

    pub fn with(mut self, item: PanelItem<A>) -> Self {
        self.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn width(&self) -> i32 {
        let widths = self.items.iter().map(PanelItem::width);
        match self.orientation {
            Orientation::Horizontal => widths.sum(),
            Orientation::Vertical => widths.max().unwrap_or(0),
        }
    }

    pub fn height(&self) -> i32 {
        let heights = self.items.iter().map(PanelItem::height);
        match self.orientation {
            Orientation::Horizontal => heights.max().unwrap_or(0),
            Orientation::Vertical => heights.sum(),
        }
    }

    /// Bounding box of every direct child when the panel sits at `origin`.
    pub fn child_rects(&self, origin: Point) -> Vec<Rect> {
        let mut offset = 0;
        self.items
            .iter()
            .map(|item| {
                let (w, h) = (item.width(), item.height());
                let rect = match self.orientation {
                    Orientation::Vertical => Rect::new(origin.x, origin.y + offset, w, h),
                    Orientation::Horizontal => Rect::new(origin.x + offset, origin.y, w, h),
                };
                offset += match self.orientation {
                    Orientation::Vertical => h,
                    Orientation::Horizontal => w,
                };
                rect
            })
            .collect()
    }

    /// Index of the first direct child whose box contains `point`.
    pub fn hit_test(&self, origin: Point, point: Point) -> Option<usize> {
        self.child_rects(origin)
            .iter()
            .position(|rect| rect.contains(point))
    }
}
