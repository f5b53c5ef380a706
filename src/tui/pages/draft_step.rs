//! Wizard step: an editable list of draft rows (name + type).
//!
//! Keys: type to edit the focused field, Tab switches between name and type,
//! Enter adds a row, Delete removes the selected row, ↑/↓ move between rows.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Padding, Paragraph, StatefulWidget, Widget,
};

use crate::core::navigation::DataContext;
use crate::core::page::{Page, PageType};
use crate::core::wizard::{DraftItem, DraftKind, DraftList};
use crate::tui::component::{PageResponse, TuiPage};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Kind,
}

pub struct DraftStepPage {
    id: &'static str,
    heading: &'static str,
    kind: DraftKind,
    drafts: DraftList,
    field: Field,
}

impl DraftStepPage {
    pub fn new(id: &'static str, heading: &'static str, kind: DraftKind) -> Self {
        Self {
            id,
            heading,
            kind,
            drafts: DraftList::new(),
            field: Field::Name,
        }
    }

    fn focused_text(&mut self) -> &mut String {
        let row = self.drafts.current_mut();
        match self.field {
            Field::Name => &mut row.name,
            Field::Kind => &mut row.kind,
        }
    }

    fn row_line(&self, row: &DraftItem, selected: bool) -> Line<'static> {
        let focus = Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
        let name_style = if selected && self.field == Field::Name { focus } else { Style::default() };
        let kind_style = if selected && self.field == Field::Kind {
            focus
        } else {
            Style::default().fg(Color::Gray)
        };
        let name = if row.name.is_empty() { "(name)".to_string() } else { row.name.clone() };
        let kind = if row.kind.is_empty() { "(type)".to_string() } else { row.kind.clone() };
        Line::from(vec![
            Span::styled(format!("{name:<24}"), name_style),
            Span::raw("  "),
            Span::styled(kind, kind_style),
        ])
    }
}

impl Page for DraftStepPage {
    fn id(&self) -> &str {
        self.id
    }

    fn page_type(&self) -> PageType {
        PageType::Assistant
    }

    fn show_header(&self) -> bool {
        false
    }

    fn show_vertical_arrow(&self) -> bool {
        true
    }

    /// Every step starts with one template row to type into.
    fn on_enter(&mut self) {
        if self.drafts.is_empty() {
            self.drafts.push_blank();
        }
        self.field = Field::Name;
    }

    fn page_up(&mut self) {
        self.drafts.select_prev();
    }

    fn page_down(&mut self) {
        self.drafts.select_next();
    }

    fn draft_kind(&self) -> Option<DraftKind> {
        Some(self.kind)
    }

    fn draft_items(&self) -> Vec<DraftItem> {
        self.drafts.items().to_vec()
    }

    fn clear_draft_items(&mut self) {
        self.drafts.clear();
    }
}

impl TuiPage for DraftStepPage {
    fn draw(&mut self, area: Rect, buf: &mut Buffer, _ctx: &DataContext<'_>) {
        let [intro, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                self.heading,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tab name/type  Enter add row  Del remove  ← back  → continue",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().padding(Padding::horizontal(2)));
        hint.render(intro, buf);

        let selected = self.drafts.selected();
        let items: Vec<ListItem> = self
            .drafts
            .items()
            .iter()
            .enumerate()
            .map(|(i, row)| ListItem::new(self.row_line(row, selected == Some(i))))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(2)),
            )
            .highlight_symbol("› ");
        let mut state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, list_area, buf, &mut state);
    }

    fn handle_event(&mut self, event: &TuiEvent, _ctx: &DataContext<'_>) -> PageResponse {
        match event {
            TuiEvent::InputChar(c) => self.focused_text().push(*c),
            TuiEvent::Backspace => {
                self.focused_text().pop();
            }
            TuiEvent::Tab => {
                self.field = match self.field {
                    Field::Name => Field::Kind,
                    Field::Kind => Field::Name,
                };
            }
            TuiEvent::Submit => {
                self.drafts.push_blank();
                self.field = Field::Name;
            }
            TuiEvent::Delete => self.drafts.remove_selected(),
            _ => return PageResponse::Ignored,
        }
        PageResponse::Consumed
    }
}
