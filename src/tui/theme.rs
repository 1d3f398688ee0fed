//! Blue / indigo / purple theme for the profile wizard.
//!
//! Views import colors and style helpers from here instead of using inline
//! `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::wizard::WizardStep;

// ── Step palette ────────────────────────────────────────────────────────────

/// Blue: step 1 and the landing page.
pub const BLUE: Color = Color::Rgb(0x25, 0x63, 0xEB);
/// Indigo: step 2.
pub const INDIGO: Color = Color::Rgb(0x4F, 0x46, 0xE5);
/// Purple: step 3 and submit actions.
pub const PURPLE: Color = Color::Rgb(0x93, 0x33, 0xEA);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
/// Muted text, secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
/// Dim text, placeholders and inactive progress segments.
pub const TEXT_DIM: Color = Color::Rgb(0x4B, 0x55, 0x63);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const WARNING: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const INFO: Color = Color::Rgb(0x3B, 0x82, 0xF6);

/// Accent color for a wizard step.
pub fn step_color(step: WizardStep) -> Color {
    match step {
        WizardStep::BasicInfo => BLUE,
        WizardStep::Address => INDIGO,
        WizardStep::Review => PURPLE,
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Bold accent text for page titles.
pub fn title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Field label.
pub fn label() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Placeholder text in an empty field.
pub fn placeholder() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
}

/// Inline validation message.
pub fn error_text() -> Style {
    Style::default().fg(ERROR)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD)
}

/// Selected list row.
pub fn highlight() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::BOLD)
}

/// Text cursor cell.
pub fn cursor() -> Style {
    Style::default().fg(Color::Black).bg(TEXT)
}

/// Status bar badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BLUE)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// Border for an input field, colored by focus and error state.
pub fn field_block(title: &str, focused: bool, has_error: bool, accent: Color) -> Block<'_> {
    let border = if has_error {
        ERROR
    } else if focused {
        accent
    } else {
        TEXT_DIM
    };

    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Bordered page card.
pub fn card(title: &str, accent: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_step_has_distinct_color() {
        assert_ne!(step_color(WizardStep::BasicInfo), step_color(WizardStep::Address));
        assert_ne!(step_color(WizardStep::Address), step_color(WizardStep::Review));
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(label(), Style::default());
        assert_ne!(error_text(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(placeholder(), Style::default());
    }
}
