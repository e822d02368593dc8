//! Hint bar component for keyboard shortcuts.
//!
//! Renders the single-line strip at the bottom of the screen with the key
//! bindings and, when there is one, the last handled keypad action.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use tcalc_engine::ActionKind;

use crate::{app::App, ui::components::component::Component};

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl HintBarComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let t = &*app.theme;
        let mut spans = vec![
            Span::styled("←↑↓→/hjkl", t.accent_emphasis_style()),
            Span::styled(" move  ", t.text_muted_style()),
            Span::styled("Tab", t.accent_emphasis_style()),
            Span::styled(" next  ", t.text_muted_style()),
            Span::styled("Enter", t.accent_emphasis_style()),
            Span::styled(" press  ", t.text_muted_style()),
            Span::styled("Esc", t.accent_emphasis_style()),
            Span::styled(" blur  ", t.text_muted_style()),
            Span::styled("q", t.accent_emphasis_style()),
            Span::styled(" quit", t.text_muted_style()),
        ];
        if let Some(action) = &app.last_action {
            let verb = match action.kind {
                ActionKind::Navigate => "focus",
                ActionKind::Activate | ActionKind::Direct => "press",
                ActionKind::Blur => "blur",
            };
            let label = action.element.as_ref().map_or("", |element| element.label.as_str());
            spans.push(Span::styled(format!("  [{verb} {label}]"), t.text_secondary_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(t.text_muted_style()), rect);
    }
}
