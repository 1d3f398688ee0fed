//! Three-page profile wizard: basic info, address, review.
//!
//! Field edits are written into the store's draft as they happen. Moving
//! forward is gated by the step's validation; the Review page asks the app to
//! commit the draft.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::ViewResult;
use crate::core::profile::{Draft, DraftPatch, ProfileStore};
use crate::core::wizard::{
    parse_age, validate_address, validate_basic_info, Field, FieldErrors, WizardStep,
};
use crate::tui::events::Action;
use crate::tui::theme;
use crate::tui::widgets::text_field::{TextField, FIELD_HEIGHT};

/// Fields per form page.
const FIELDS_PER_STEP: usize = 3;

pub struct WizardViewState {
    pub step: WizardStep,
    basic: [TextField; FIELDS_PER_STEP],
    address: [TextField; FIELDS_PER_STEP],
    /// Focused field on the current form page.
    pub focus_index: usize,
    pub errors: FieldErrors,
}

impl Default for WizardViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardViewState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            basic: [
                TextField::new(Field::FullName),
                TextField::new(Field::Email),
                TextField::new(Field::Age),
            ],
            address: [
                TextField::new(Field::City),
                TextField::new(Field::State),
                TextField::new(Field::Country),
            ],
            focus_index: 0,
            errors: FieldErrors::new(),
        }
    }

    /// Begin a wizard session on step 1, seeding the fields from the draft.
    pub fn start(&mut self, draft: &Draft) {
        self.basic[0].set_text(&draft.full_name);
        self.basic[1].set_text(&draft.email);
        self.basic[2].set_text(&draft.age.map(|a| a.to_string()).unwrap_or_default());
        self.address[0].set_text(&draft.city);
        self.address[1].set_text(&draft.state);
        self.address[2].set_text(&draft.country);
        self.set_step(WizardStep::BasicInfo);
    }

    pub fn set_step(&mut self, step: WizardStep) {
        self.step = step;
        self.focus_index = 0;
        self.errors = FieldErrors::new();
    }

    /// Text currently typed into a field.
    pub fn field_text(&self, field: Field) -> &str {
        self.basic
            .iter()
            .chain(self.address.iter())
            .find(|f| f.field() == field)
            .map(TextField::text)
            .unwrap_or_default()
    }

    fn page_fields(&self) -> Option<&[TextField; FIELDS_PER_STEP]> {
        match self.step {
            WizardStep::BasicInfo => Some(&self.basic),
            WizardStep::Address => Some(&self.address),
            WizardStep::Review => None,
        }
    }

    fn page_fields_mut(&mut self) -> Option<&mut [TextField; FIELDS_PER_STEP]> {
        match self.step {
            WizardStep::BasicInfo => Some(&mut self.basic),
            WizardStep::Address => Some(&mut self.address),
            WizardStep::Review => None,
        }
    }

    /// Run the current page's validation; errors are kept for rendering.
    pub fn validate_current(&mut self) -> bool {
        self.errors = match self.step {
            WizardStep::BasicInfo => validate_basic_info(
                self.basic[0].text(),
                self.basic[1].text(),
                self.basic[2].text(),
            ),
            WizardStep::Address => validate_address(
                self.address[0].text(),
                self.address[1].text(),
                self.address[2].text(),
            ),
            WizardStep::Review => FieldErrors::new(),
        };
        self.errors.is_valid()
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, store: &mut ProfileStore) -> ViewResult {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return ViewResult::Ignored,
        };

        match self.step {
            WizardStep::BasicInfo | WizardStep::Address => self.handle_form_input(key, store),
            WizardStep::Review => self.handle_review_input(key),
        }
    }

    fn handle_form_input(&mut self, key: KeyEvent, store: &mut ProfileStore) -> ViewResult {
        match (key.modifiers, key.code) {
            (_, KeyCode::Tab) | (_, KeyCode::Down) => {
                self.focus_index = (self.focus_index + 1) % FIELDS_PER_STEP;
                ViewResult::Consumed
            }
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
                self.focus_index = (self.focus_index + FIELDS_PER_STEP - 1) % FIELDS_PER_STEP;
                ViewResult::Consumed
            }
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => self.try_advance(),
            (_, KeyCode::Enter) => {
                if self.focus_index + 1 == FIELDS_PER_STEP {
                    self.try_advance()
                } else {
                    self.focus_index += 1;
                    ViewResult::Consumed
                }
            }
            (_, KeyCode::Esc) => match self.step.previous() {
                Some(prev) => ViewResult::Action(Action::GoToStep(prev)),
                None => ViewResult::Action(Action::CancelWizard),
            },
            // Let Ctrl+C reach the global quit binding
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => ViewResult::Ignored,
            _ => {
                let focus = self.focus_index;
                let Some(fields) = self.page_fields_mut() else {
                    return ViewResult::Ignored;
                };
                let field = &mut fields[focus];
                if field.handle_key(key) {
                    let patch = draft_patch_for(field.field(), field.text());
                    store.set_draft_field(patch);
                }
                ViewResult::Consumed
            }
        }
    }

    fn handle_review_input(&mut self, key: KeyEvent) -> ViewResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => ViewResult::Action(Action::SubmitWizard),
            KeyCode::Char('e') => ViewResult::Action(Action::GoToStep(WizardStep::BasicInfo)),
            KeyCode::Char('b') | KeyCode::Left => ViewResult::Action(Action::GoToStep(WizardStep::Address)),
            KeyCode::Esc => ViewResult::Action(Action::CancelWizard),
            _ => ViewResult::Ignored,
        }
    }

    fn try_advance(&mut self) -> ViewResult {
        if !self.validate_current() {
            log::debug!("{} blocked by {} invalid field(s)", self.step, self.errors.len());
            return ViewResult::Consumed;
        }
        match self.step.next() {
            Some(next) => ViewResult::Action(Action::GoToStep(next)),
            None => ViewResult::Consumed,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// "Step N of 3" header with a three-segment progress bar.
    pub fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let accent = theme::step_color(self.step);
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let header = Line::from(vec![
            Span::styled(self.step.to_string(), theme::label()),
            Span::raw("  "),
            Span::styled(self.step.title(), theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(header), rows[0]);

        let segment_width = (area.width as usize / WizardStep::COUNT).saturating_sub(1);
        let spans: Vec<Span> = WizardStep::ALL
            .iter()
            .map(|s| {
                let color = if s.number() <= self.step.number() {
                    accent
                } else {
                    theme::TEXT_DIM
                };
                Span::styled(format!("{} ", "━".repeat(segment_width)), Style::default().fg(color))
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, store: &ProfileStore) {
        let accent = theme::step_color(self.step);
        let title = format!("Step {}: {}", self.step.number(), self.step.title());
        let block = theme::card(&title, accent);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.page_fields() {
            Some(fields) => self.render_form(frame, inner, fields, store.is_editing(), accent),
            None => self.render_review(frame, inner, store),
        }
    }

    fn render_form(
        &self,
        frame: &mut Frame,
        area: Rect,
        fields: &[TextField; FIELDS_PER_STEP],
        editing: bool,
        accent: Color,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(2),            // Subtitle
            Constraint::Length(FIELD_HEIGHT), // Field 1
            Constraint::Length(FIELD_HEIGHT), // Field 2
            Constraint::Length(FIELD_HEIGHT), // Field 3
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(area);

        let verb = if editing { "Edit your" } else { "Enter your" };
        let what = match self.step {
            WizardStep::BasicInfo => "basic details",
            _ => "address details",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{verb} {what}"), theme::muted())),
            chunks[0],
        );

        for (i, field) in fields.iter().enumerate() {
            field.render(
                frame,
                chunks[i + 1],
                i == self.focus_index,
                self.errors.get(field.field()),
                accent,
            );
        }

        let back = if self.step.is_first() { ":cancel  " } else { ":back  " };
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":next field  "),
            Span::styled("Enter/Ctrl+N", theme::key_hint()),
            Span::raw(":next step  "),
            Span::styled("Esc", theme::key_hint()),
            Span::raw(back),
        ]));
        frame.render_widget(help, chunks[5]);
    }

    fn render_review(&self, frame: &mut Frame, area: Rect, store: &ProfileStore) {
        let draft = store.draft();
        let editing = store.is_editing();
        let age = draft.age.map(|a| a.to_string()).unwrap_or_default();

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {label:<10}"), theme::muted()),
                Span::styled(value, Style::default().fg(theme::TEXT)),
            ])
        };

        let subtitle = if editing {
            "Review your updated profile"
        } else {
            "Please review your details before submitting"
        };
        let submit = if editing { "Update Profile" } else { "Create Profile" };

        let lines = vec![
            Line::from(Span::styled(subtitle, theme::muted())),
            Line::raw(""),
            Line::from(Span::styled("Basic Information", theme::title(theme::BLUE))),
            row("Full Name", draft.full_name.clone()),
            row("Email", draft.email.clone()),
            row("Age", age),
            Line::raw(""),
            Line::from(Span::styled("Address Information", theme::title(theme::INDIGO))),
            row("City", draft.city.clone()),
            row("State", draft.state.clone()),
            row("Country", draft.country.clone()),
            Line::raw(""),
            Line::from(Span::styled(
                "All information is complete and ready to be saved!",
                Style::default().fg(theme::SUCCESS),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Enter/y", theme::key_hint()),
                Span::raw(format!(":{submit}  ")),
                Span::styled("e", theme::key_hint()),
                Span::raw(":edit information  "),
                Span::styled("b", theme::key_hint()),
                Span::raw(":back  "),
                Span::styled("Esc", theme::key_hint()),
                Span::raw(":cancel"),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Patch that writes one field's text into the draft.
fn draft_patch_for(field: Field, text: &str) -> DraftPatch {
    let patch = DraftPatch::new();
    match field {
        Field::FullName => patch.full_name(text),
        Field::Email => patch.email(text),
        Field::Age => patch.age(parse_age(text)),
        Field::City => patch.city(text),
        Field::State => patch.state(text),
        Field::Country => patch.country(text),
    }
}
