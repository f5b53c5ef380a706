//! Summary of the current nucleus. The wizard lands here after a commit.

use chrono::{DateTime, Local, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::data::Nucleus;
use crate::core::navigation::DataContext;
use crate::core::page::{Page, PageLink, PageType};
use crate::tui::component::TuiPage;
use crate::tui::pages::{COMMUNITIES, NUCLEUS};

pub struct NucleusPage;

fn format_created(ts: i64) -> String {
    let dt: DateTime<Local> = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(&Local);
    dt.format("%b %d, %Y %H:%M").to_string()
}

fn summary(nucleus: &Nucleus) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(Span::styled(
            nucleus.display_name().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Created  ", label),
            Span::raw(format_created(nucleus.created_at)),
        ]),
        Line::from(vec![
            Span::styled("Souls    ", label),
            Span::raw(nucleus.souls.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Spaces   ", label),
            Span::raw(nucleus.spaces.len().to_string()),
        ]),
    ]
}

impl Page for NucleusPage {
    fn id(&self) -> &str {
        NUCLEUS
    }

    fn page_type(&self) -> PageType {
        PageType::Page
    }

    fn title(&self) -> Option<&str> {
        Some("Nucleus")
    }

    /// Back goes to the overview, not into the finished wizard.
    fn prev_page(&self) -> PageLink {
        PageLink::To(COMMUNITIES.to_string())
    }
}

impl TuiPage for NucleusPage {
    fn draw(&mut self, area: Rect, buf: &mut Buffer, ctx: &DataContext<'_>) {
        let nucleus = ctx.current_nucleus_id.and_then(|id| ctx.data.nucleus(id));
        let lines = match nucleus {
            Some(nucleus) => summary(nucleus),
            None => vec![Line::from(Span::styled(
                "No nucleus selected. Pick one on Communities.",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        let body = Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        body.render(area, buf);
    }
}
