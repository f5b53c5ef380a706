//! Souls or spaces of the current nucleus, one per line, paged with ↑/↓.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::data::Nucleus;
use crate::core::navigation::DataContext;
use crate::core::page::{Page, PageType};
use crate::tui::component::TuiPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Souls,
    Spaces,
}

impl EntityKind {
    fn rows(self, nucleus: &Nucleus) -> Vec<(&str, &str)> {
        match self {
            EntityKind::Souls => nucleus
                .souls
                .iter()
                .map(|s| (s.name.as_str(), s.kind.as_str()))
                .collect(),
            EntityKind::Spaces => nucleus
                .spaces
                .iter()
                .map(|s| (s.name.as_str(), s.kind.as_str()))
                .collect(),
        }
    }

    fn noun(self) -> &'static str {
        match self {
            EntityKind::Souls => "souls",
            EntityKind::Spaces => "spaces",
        }
    }
}

pub struct EntityListPage {
    id: &'static str,
    title: &'static str,
    kind: EntityKind,
    scroll: usize,
}

impl EntityListPage {
    pub fn new(id: &'static str, title: &'static str, kind: EntityKind) -> Self {
        Self {
            id,
            title,
            kind,
            scroll: 0,
        }
    }
}

impl Page for EntityListPage {
    fn id(&self) -> &str {
        self.id
    }

    fn page_type(&self) -> PageType {
        PageType::Page
    }

    fn title(&self) -> Option<&str> {
        Some(self.title)
    }

    fn show_vertical_arrow(&self) -> bool {
        true
    }

    fn on_enter(&mut self) {
        self.scroll = 0;
    }

    fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

impl TuiPage for EntityListPage {
    fn draw(&mut self, area: Rect, buf: &mut Buffer, ctx: &DataContext<'_>) {
        let block = Block::default().padding(Padding::new(2, 2, 1, 0));
        let Some(nucleus) = ctx.current_nucleus_id.and_then(|id| ctx.data.nucleus(id)) else {
            let empty = Paragraph::new("No nucleus selected.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            empty.render(area, buf);
            return;
        };

        let rows = self.kind.rows(nucleus);
        self.scroll = self.scroll.min(rows.len().saturating_sub(1));

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} · {} {}", nucleus.display_name(), rows.len(), self.kind.noun()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("No {} yet.", self.kind.noun()),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.extend(rows.iter().skip(self.scroll).map(|(name, kind)| {
            Line::from(vec![
                Span::raw(format!("{name:<24}")),
                Span::styled(kind.to_string(), Style::default().fg(Color::Gray)),
            ])
        }));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
