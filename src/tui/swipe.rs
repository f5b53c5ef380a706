//! Mouse drag → swipe detection.
//!
//! A left-button press followed by a release counts as a swipe when the
//! pointer travelled at least `threshold` columns horizontally. Anything
//! shorter is a click at the release position.

use crate::core::navigation::SwipeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(SwipeDirection),
    /// (column, row)
    Click(u16, u16),
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    pressed_at: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            pressed_at: None,
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.pressed_at = Some((column, row));
    }

    /// `None` when there was no matching press.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Gesture> {
        let (start, _) = self.pressed_at.take()?;
        let travel = i32::from(column) - i32::from(start);
        let gesture = if travel <= -i32::from(self.threshold) {
            // Content dragged left brings the next page in.
            Gesture::Swipe(SwipeDirection::Left)
        } else if travel >= i32::from(self.threshold) {
            Gesture::Swipe(SwipeDirection::Right)
        } else {
            Gesture::Click(column, row)
        };
        Some(gesture)
    }
}
