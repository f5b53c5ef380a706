use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::Action;
use crate::tui::TuiApp;
use crate::tui::component::Component;
use crate::tui::components::{ConfirmDialog, Header, ScrollerBar, ScrollerButton};

/// Header row, page strip, scroller bar.
pub fn regions(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

/// Height of the page strip for a terminal `height` rows tall.
pub fn body_height(height: u16) -> u16 {
    height.saturating_sub(2)
}

pub fn draw_ui(frame: &mut Frame, app: &mut TuiApp) {
    let area = frame.area();
    let [header_area, body_area, bar_area] = regions(area);

    if app.nav.chrome().header_visible {
        Header::new(app.nav.headers()).render(frame, header_area);
    }

    draw_pages(frame, body_area, app);

    ScrollerBar::new(app.nav.chrome(), &app.status_message).render(frame, bar_area);

    if let Some(pending) = app.nav.pending_confirmation() {
        ConfirmDialog::new(&pending.request).render(frame, area);
    }
}

/// Draw every page that intersects the strip viewport at its scroller offset.
///
/// Pages are drawn off screen at full size and only their visible columns
/// are copied, so a page cut off on the left shows its right-hand side.
fn draw_pages(frame: &mut Frame, area: Rect, app: &mut TuiApp) {
    let slots = app.nav.scroller().visible_slots();
    let (pages, ctx) = app.nav.parts_mut();
    for slot in slots {
        let Some(visible) = clip(slot.x, slot.width, area) else {
            continue;
        };
        let Some(entry) = pages.iter_mut().find(|e| e.id == slot.page_id) else {
            continue;
        };
        let full = Rect::new(0, 0, slot.width, area.height);
        let mut page_buf = Buffer::empty(full);
        entry.page_mut().draw(full, &mut page_buf, &ctx);

        let src_x = (i32::from(visible.x - area.x) - slot.x) as u16;
        blit(&page_buf, src_x, frame.buffer_mut(), visible);
    }
}

/// Copy `visible.width` columns of `src`, starting at column `src_x`, into
/// `visible` on `dst`.
fn blit(src: &Buffer, src_x: u16, dst: &mut Buffer, visible: Rect) {
    for row in 0..visible.height {
        for col in 0..visible.width {
            if let Some(cell) = src.cell((src_x + col, row))
                && let Some(target) = dst.cell_mut((visible.x + col, visible.y + row))
            {
                *target = cell.clone();
            }
        }
    }
}

/// The on-screen part of a slot starting at column `x` (relative to `area`).
fn clip(x: i32, width: u16, area: Rect) -> Option<Rect> {
    let left = x.max(0);
    let right = (x + i32::from(width)).min(i32::from(area.width));
    (right > left).then(|| {
        Rect::new(
            area.x + left as u16,
            area.y,
            (right - left) as u16,
            area.height,
        )
    })
}

/// Hit test a click: header items enter their page, scroller buttons step
/// sideways or page vertically.
pub fn hit_test(area: Rect, app: &TuiApp, column: u16, row: u16) -> Option<Action> {
    let [header_area, _, bar_area] = regions(area);

    if row == header_area.y && app.nav.chrome().header_visible {
        return Header::new(app.nav.headers())
            .hit_test(header_area, column)
            .map(|id| Action::EnterPage(id.to_string()));
    }

    if row == bar_area.y {
        let button =
            ScrollerBar::new(app.nav.chrome(), &app.status_message).hit_test(bar_area, column)?;
        return Some(match button {
            ScrollerButton::Prev => Action::PrevPage,
            ScrollerButton::Next => Action::NextPage,
            ScrollerButton::Up => Action::PageUp,
            ScrollerButton::Down => Action::PageDown,
        });
    }

    None
}
