//! # Page Scroller Layout
//!
//! Pages sit side by side on a horizontal strip. Selecting a page slides the
//! strip so that page is centered in the viewport:
//!
//! ```text
//! offset = -offset_left(page) + viewport_width / 2 - page_width / 2
//! ```
//!
//! The container that clips the strip has its own scroll position. Nested
//! content can push it off the origin, so it is reset whenever the strip is
//! recentered and again on a short interval by the app.

/// Width a rendered page claims on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewWidth {
    /// As wide as the viewport.
    Viewport,
    /// Fixed number of columns.
    Cells(u16),
}

/// What a page hands back from `render()`: its footprint on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewHandle {
    pub width: ViewWidth,
}

impl ViewHandle {
    pub fn viewport() -> Self {
        Self {
            width: ViewWidth::Viewport,
        }
    }

    pub fn cells(width: u16) -> Self {
        Self {
            width: ViewWidth::Cells(width),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    page_id: String,
    width: ViewWidth,
}

/// A page's position on screen after the strip offset is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedSlot {
    pub page_id: String,
    /// Column relative to the viewport's left edge (may be negative).
    pub x: i32,
    pub width: u16,
}

#[derive(Debug, Clone, Default)]
pub struct PageScroller {
    slots: Vec<Slot>,
    viewport_width: u16,
    viewport_height: u16,
    offset: i32,
    container_scroll: (u16, u16),
}

impl PageScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's view to the strip, after everything inserted so far.
    pub fn insert(&mut self, page_id: &str, view: ViewHandle) {
        self.slots.push(Slot {
            page_id: page_id.to_string(),
            width: view.width,
        });
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn container_scroll(&self) -> (u16, u16) {
        self.container_scroll
    }

    fn resolve_width(&self, width: ViewWidth) -> u16 {
        match width {
            ViewWidth::Viewport => self.viewport_width,
            ViewWidth::Cells(cells) => cells,
        }
    }

    /// Column where the page starts on the unshifted strip.
    pub fn offset_left(&self, page_id: &str) -> Option<i32> {
        let mut left = 0i32;
        for slot in &self.slots {
            if slot.page_id == page_id {
                return Some(left);
            }
            left += i32::from(self.resolve_width(slot.width));
        }
        None
    }

    /// Slide the strip so `page_id` is centered. Returns `false` (and leaves
    /// the offset alone) when the page has no view on the strip.
    pub fn center_on(&mut self, page_id: &str) -> bool {
        let Some(slot) = self.slots.iter().find(|s| s.page_id == page_id) else {
            return false;
        };
        let page_width = i32::from(self.resolve_width(slot.width));
        let Some(left) = self.offset_left(page_id) else {
            return false;
        };
        self.offset = -left + i32::from(self.viewport_width) / 2 - page_width / 2;
        self.container_scroll = (0, 0);
        true
    }

    /// Content scrolled the clipping container (e.g. a horizontal wheel).
    pub fn drift_container(&mut self, dx: i16, dy: i16) {
        let (x, y) = self.container_scroll;
        self.container_scroll = (x.saturating_add_signed(dx), y.saturating_add_signed(dy));
    }

    pub fn reset_container_scroll(&mut self) {
        self.container_scroll = (0, 0);
    }

    /// Slots that intersect the viewport, in strip order.
    pub fn visible_slots(&self) -> Vec<PlacedSlot> {
        let viewport = i32::from(self.viewport_width);
        let mut left = self.offset - i32::from(self.container_scroll.0);
        let mut placed = Vec::new();
        for slot in &self.slots {
            let width = self.resolve_width(slot.width);
            let right = left + i32::from(width);
            if right > 0 && left < viewport {
                placed.push(PlacedSlot {
                    page_id: slot.page_id.clone(),
                    x: left,
                    width,
                });
            }
            left = right;
        }
        placed
    }
}
