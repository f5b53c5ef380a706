//! Landing page: the stored nuclei and the way into the wizard.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Padding, Paragraph, StatefulWidget, Widget,
};

use crate::core::action::Action;
use crate::core::navigation::DataContext;
use crate::core::page::{Page, PageType};
use crate::tui::component::{PageResponse, TuiPage};
use crate::tui::event::TuiEvent;
use crate::tui::pages::{COMMUNITIES, NUCLEUS, SOULS_STEP};

#[derive(Default)]
pub struct CommunitiesPage {
    highlighted: usize,
}

impl CommunitiesPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp(&mut self, len: usize) {
        self.highlighted = self.highlighted.min(len.saturating_sub(1));
    }
}

impl Page for CommunitiesPage {
    fn id(&self) -> &str {
        COMMUNITIES
    }

    fn page_type(&self) -> PageType {
        PageType::Intro
    }

    fn title(&self) -> Option<&str> {
        Some("Communities")
    }

    fn page_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    fn page_down(&mut self) {
        self.highlighted = self.highlighted.saturating_add(1);
    }
}

impl TuiPage for CommunitiesPage {
    fn draw(&mut self, area: Rect, buf: &mut Buffer, ctx: &DataContext<'_>) {
        let nuclei = ctx.data.nuclei();
        self.clamp(nuclei.len());

        let [intro, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your nuclei",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "n new nucleus  Enter open  ↑/↓ choose",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().padding(Padding::horizontal(2)));
        hint.render(intro, buf);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(2));

        if nuclei.is_empty() {
            let empty = Paragraph::new("No nuclei yet. Press n to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            empty.render(list_area, buf);
            return;
        }

        let items: Vec<ListItem> = nuclei
            .iter()
            .map(|nucleus| {
                let marker = if ctx.current_nucleus_id == Some(nucleus.id.as_str()) {
                    "● "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::raw(nucleus.display_name().to_string()),
                    Span::styled(
                        format!("  {} souls, {} spaces", nucleus.souls.len(), nucleus.spaces.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default().with_selected(Some(self.highlighted));
        StatefulWidget::render(list, list_area, buf, &mut state);
    }

    fn handle_event(&mut self, event: &TuiEvent, ctx: &DataContext<'_>) -> PageResponse {
        match event {
            TuiEvent::InputChar('n') => {
                PageResponse::Actions(vec![Action::EnterPage(SOULS_STEP.to_string())])
            }
            TuiEvent::Submit => {
                let nuclei = ctx.data.nuclei();
                self.clamp(nuclei.len());
                match nuclei.get(self.highlighted) {
                    Some(nucleus) => PageResponse::Actions(vec![
                        Action::SelectNucleus(nucleus.id.clone()),
                        Action::EnterPage(NUCLEUS.to_string()),
                    ]),
                    None => PageResponse::Consumed,
                }
            }
            _ => PageResponse::Ignored,
        }
    }
}
