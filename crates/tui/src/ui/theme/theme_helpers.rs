use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tcalc_types::{ElementKind, ElementState};

use super::roles::Theme;
use crate::ui::theme::roles::ThemeRoles;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Visual weight of a keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Primary,
    Secondary,
    Tertiary,
}

impl From<ElementKind> for ButtonType {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Number => ButtonType::Primary,
            ElementKind::Operator => ButtonType::Secondary,
            ElementKind::Special => ButtonType::Tertiary,
        }
    }
}

/// Fill and text style for a button in the given state.
pub fn button_style<T: Theme + ?Sized>(theme: &T, button_type: ButtonType, state: ElementState) -> Style {
    let roles = theme.roles();
    let fill = match button_type {
        ButtonType::Primary => roles.key_number,
        ButtonType::Secondary => roles.key_operator,
        ButtonType::Tertiary => roles.key_special,
    };
    match state {
        ElementState::Disabled => Style::default().bg(roles.background).fg(roles.text_muted),
        ElementState::Pressed => Style::default()
            .bg(roles.accent_primary)
            .fg(roles.background)
            .add_modifier(Modifier::BOLD),
        ElementState::Focused => Style::default().bg(fill).fg(roles.text).add_modifier(Modifier::BOLD),
        ElementState::Normal => Style::default().bg(fill).fg(roles.text),
    }
}

/// Border style for a button in the given state.
pub fn button_border_style<T: Theme + ?Sized>(theme: &T, state: ElementState) -> Style {
    match state {
        ElementState::Disabled => theme.text_muted_style(),
        ElementState::Focused => theme.border_style(true),
        ElementState::Pressed => theme.accent_primary_style(),
        ElementState::Normal => theme.border_style(false),
    }
}

/// Renders a keypad button. Focused buttons get a thick border.
pub fn render_button<T: Theme + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    button_type: ButtonType,
    state: ElementState,
    theme: &T,
) {
    let border_type = if state == ElementState::Focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(button_border_style(theme, state));

    // Center the label vertically inside the bordered cell.
    let inner_height = area.height.saturating_sub(2);
    let padding = "\n".repeat(usize::from(inner_height.saturating_sub(1) / 2));

    frame.render_widget(
        Paragraph::new(format!("{padding}{label}"))
            .centered()
            .block(block)
            .style(button_style(theme, button_type, state)),
        area,
    );
}
