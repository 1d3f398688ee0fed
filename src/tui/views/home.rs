//! Landing page: saved profiles, statistics, and entry points into the wizard.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::ViewResult;
use crate::core::profile::{Profile, ProfileStore};
use crate::tui::events::Action;
use crate::tui::theme;

#[derive(Debug, Default)]
pub struct HomeState {
    /// Index of the highlighted profile.
    selected: usize,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted profile, clamped to the current list.
    pub fn selected_index(&self, store: &ProfileStore) -> Option<usize> {
        if store.is_empty() {
            None
        } else {
            Some(self.selected.min(store.len() - 1))
        }
    }

    pub fn selected_profile<'a>(&self, store: &'a ProfileStore) -> Option<&'a Profile> {
        self.selected_index(store)
            .and_then(|i| store.profiles().get(i))
    }

    /// Keep the highlight inside the list after it shrinks.
    pub fn sync(&mut self, store: &ProfileStore) {
        self.selected = self.selected_index(store).unwrap_or(0);
    }

    pub fn handle_input(&mut self, event: &Event, store: &ProfileStore) -> ViewResult {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return ViewResult::Ignored;
        };

        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return ViewResult::Ignored;
        }

        match code {
            KeyCode::Char('a') | KeyCode::Char('n') => ViewResult::Action(Action::NewProfile),
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(i) = self.selected_index(store) {
                    self.selected = (i + 1).min(store.len() - 1);
                }
                ViewResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(i) = self.selected_index(store) {
                    self.selected = i.saturating_sub(1);
                }
                ViewResult::Consumed
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.selected = 0;
                ViewResult::Consumed
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = store.len().saturating_sub(1);
                ViewResult::Consumed
            }
            KeyCode::Char('e') | KeyCode::Enter => match self.selected_profile(store) {
                Some(p) => ViewResult::Action(Action::EditProfile(p.id.clone())),
                // Empty list: Enter starts the first profile
                None if *code == KeyCode::Enter => ViewResult::Action(Action::NewProfile),
                None => ViewResult::Consumed,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_profile(store) {
                Some(p) => ViewResult::Action(Action::DeleteProfile(p.id.clone())),
                None => ViewResult::Consumed,
            },
            _ => ViewResult::Ignored,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, store: &ProfileStore) {
        let block = theme::card("Profile Manager", theme::BLUE);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let stats_height = if store.is_empty() { 0 } else { 4 };
        let chunks = Layout::vertical([
            Constraint::Length(2),            // Subtitle
            Constraint::Min(3),               // Profiles
            Constraint::Length(stats_height), // Statistics
            Constraint::Length(1),            // Help
        ])
        .split(inner);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            "Create, edit, and manage user profiles with multi-step forms",
            theme::muted(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(subtitle, chunks[0]);

        if store.is_empty() {
            self.render_empty(frame, chunks[1]);
        } else {
            self.render_list(frame, chunks[1], store);
            self.render_stats(frame, chunks[2], store);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("a", theme::key_hint()),
            Span::raw(":add  "),
            Span::styled("e/Enter", theme::key_hint()),
            Span::raw(":edit  "),
            Span::styled("d", theme::key_hint()),
            Span::raw(":delete  "),
            Span::styled("j/k", theme::key_hint()),
            Span::raw(":select"),
        ]));
        frame.render_widget(help, chunks[3]);
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                "No profiles yet. Create your first profile to get started!",
                theme::muted(),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("a", theme::key_hint()),
                Span::raw(" to create your first profile"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, store: &ProfileStore) {
        let items: Vec<ListItem> = store
            .profiles()
            .iter()
            .map(|p| {
                let age = p.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string());
                ListItem::new(vec![
                    Line::from(Span::styled(
                        p.full_name.clone(),
                        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![
                        Span::styled("  Email: ", theme::muted()),
                        Span::raw(p.email.clone()),
                        Span::styled("  Age: ", theme::muted()),
                        Span::raw(age),
                    ]),
                    Line::from(vec![
                        Span::styled("  Location: ", theme::muted()),
                        Span::raw(p.location()),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Profiles ({}) ", store.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::TEXT_DIM)),
            )
            .highlight_style(theme::highlight())
            .highlight_symbol("▸ ");

        let mut state = ListState::default();
        state.select(self.selected_index(store));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, store: &ProfileStore) {
        let stats = store.stats();
        let lines = vec![
            Line::from(vec![
                Span::styled("Total Profiles: ", theme::muted()),
                Span::styled(stats.total_profiles.to_string(), theme::title(theme::BLUE)),
                Span::raw("   "),
                Span::styled("Average Age: ", theme::muted()),
                Span::styled(stats.average_age.to_string(), theme::title(theme::INDIGO)),
                Span::raw("   "),
                Span::styled("Countries: ", theme::muted()),
                Span::styled(stats.unique_countries.to_string(), theme::title(theme::PURPLE)),
            ]),
        ];
        let block = Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::TEXT_DIM));
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            area,
        );
    }
}
