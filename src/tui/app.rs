use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use super::events::{Action, AppEvent, Notification, NotificationLevel, Screen};
use super::layout::{centered_rect, AppLayout};
use super::theme;
use super::views::home::HomeState;
use super::views::wizard::WizardViewState;
use super::views::ViewResult;
use crate::core::profile::ProfileStore;
use crate::core::wizard::WizardStep;
use crate::error::{AppError, Result};

/// Most notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Help modal rows: `(key, description)`; an empty description marks a
/// section heading and an empty pair a blank line.
const HELP_KEYBINDINGS: &[(&str, &str)] = &[
    ("Global:", ""),
    ("?", "Toggle this help (outside text fields)"),
    ("q", "Quit (outside text fields)"),
    ("Ctrl+C", "Quit"),
    ("", ""),
    ("Profiles:", ""),
    ("a / n", "Add a new profile"),
    ("e / Enter", "Edit selected profile"),
    ("d / Delete", "Delete selected profile"),
    ("j/k", "Move selection"),
    ("", ""),
    ("Form pages:", ""),
    ("Tab / Shift+Tab", "Next / previous field"),
    ("Enter / Ctrl+N", "Next step (validates)"),
    ("Ctrl+U", "Clear field"),
    ("Esc", "Previous step / cancel"),
    ("", ""),
    ("Review page:", ""),
    ("Enter / y", "Create or update profile"),
    ("e", "Edit information"),
    ("b", "Back to address"),
    ("Esc", "Cancel and discard draft"),
];

/// Central application state (Elm architecture).
///
/// Owns the profile store and lends it to views for each event.
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Page currently on screen.
    pub screen: Screen,
    /// Saved profiles and the wizard draft.
    pub store: ProfileStore,
    /// Landing page state.
    pub home: HomeState,
    /// Wizard pages state.
    pub wizard: WizardViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Lifetime of new notifications, in ticks.
    notification_ttl: u32,
    /// Whether the help modal is open.
    pub show_help: bool,
}

impl AppState {
    pub fn new(store: ProfileStore, notification_ttl: u32) -> Self {
        Self {
            running: true,
            screen: Screen::Home,
            store,
            home: HomeState::new(),
            wizard: WizardViewState::new(),
            notifications: Vec::new(),
            notification_ttl,
            show_help: false,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(crossterm_event)) => self.handle_event(AppEvent::Input(crossterm_event)),
                    Some(Err(e)) => return Err(AppError::Io(e)),
                    None => return Err(AppError::InputClosed),
                },
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Current page
                let result = match self.screen {
                    Screen::Home => self.home.handle_input(&crossterm_event, &self.store),
                    Screen::Wizard(_) => self.wizard.handle_input(&crossterm_event, &mut self.store),
                };
                match result {
                    ViewResult::Consumed => return,
                    ViewResult::Action(action) => {
                        self.handle_action(action);
                        return;
                    }
                    ViewResult::Ignored => {}
                }

                // Priority 3: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Tick => self.on_tick(),
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => Some(Action::ShowHelp),
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        tracing::debug!(?action, screen = self.screen.label(), "handling action");
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::NewProfile => {
                self.store.reset_draft();
                self.open_wizard();
            }
            Action::EditProfile(id) => {
                if self.store.load_profile_for_edit(&id) {
                    self.open_wizard();
                } else {
                    self.push_notification("Profile not found".to_string(), NotificationLevel::Warning);
                }
            }
            Action::DeleteProfile(id) => {
                if let Some(removed) = self.store.delete_profile(&id) {
                    self.home.sync(&self.store);
                    self.push_notification(
                        format!("Deleted {}", removed.full_name),
                        NotificationLevel::Info,
                    );
                }
            }
            Action::GoToStep(step) => {
                self.wizard.set_step(step);
                self.screen = Screen::Wizard(step);
            }
            Action::SubmitWizard => self.submit_wizard(),
            Action::CancelWizard => {
                self.store.reset_draft();
                self.screen = Screen::Home;
            }
        }
    }

    fn open_wizard(&mut self) {
        self.wizard.start(self.store.draft());
        self.screen = Screen::Wizard(WizardStep::BasicInfo);
    }

    /// Commit the draft: update in edit mode, otherwise create.
    fn submit_wizard(&mut self) {
        if self.store.is_editing() {
            match self.store.update_profile() {
                Some(_) => {
                    self.push_notification("Profile updated".to_string(), NotificationLevel::Success)
                }
                None => self.push_notification(
                    "Profile no longer exists; changes discarded".to_string(),
                    NotificationLevel::Warning,
                ),
            }
        } else if self.store.create_profile().is_some() {
            self.push_notification("Profile created".to_string(), NotificationLevel::Success);
        } else {
            // Draft is kept; send the user back to fill in the missing fields
            self.push_notification(
                "Full name and email are required".to_string(),
                NotificationLevel::Error,
            );
            self.handle_action(Action::GoToStep(WizardStep::BasicInfo));
            return;
        }

        self.home.sync(&self.store);
        self.screen = Screen::Home;
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: self.notification_ttl,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area, self.screen.is_wizard());

        if let Some(progress_area) = layout.progress {
            self.wizard.render_progress(frame, progress_area);
        }

        match self.screen {
            Screen::Home => self.home.render(frame, layout.main, &self.store),
            Screen::Wizard(_) => self.wizard.render(frame, layout.main, &self.store),
        }

        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.screen {
            Screen::Home => Span::raw(""),
            Screen::Wizard(_) if self.store.is_editing() => {
                Span::styled(" EDIT ", Style::default().fg(theme::WARNING).add_modifier(Modifier::BOLD))
            }
            Screen::Wizard(_) => {
                Span::styled(" NEW ", Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD))
            }
        };

        let status = Line::from(vec![
            Span::styled(" PROFILES ", theme::brand_badge()),
            Span::raw(" "),
            mode,
            Span::raw(" "),
            Span::styled(
                self.screen.label(),
                Style::default().fg(theme::INFO).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(format!("{} saved", self.store.len()), theme::muted()),
            Span::raw(" │ "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 0, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);


        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title(theme::BLUE))),
            Line::raw(""),
        ];

        for &(key, desc) in HELP_KEYBINDINGS {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title(theme::INDIGO))));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<18}", key), theme::key_hint()),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BLUE));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}
