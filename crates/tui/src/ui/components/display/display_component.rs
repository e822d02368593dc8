//! Calculator display: pending expression above the current entry.

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthChar;

use crate::{
    app::App,
    ui::{components::component::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct DisplayComponent;

impl DisplayComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for DisplayComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let block = th::block(theme, Some(" tcalc "), false);
        let width = usize::from(block.inner(rect).width);

        let value_style = if app.calculator.error().is_some() {
            theme.status_error()
        } else {
            theme.text_primary_style()
        };
        let expression = app.calculator.expression();
        let lines = vec![
            Line::from(Span::styled(keep_tail(&expression, width), theme.text_muted_style())),
            Line::from(Span::styled(
                keep_tail(app.calculator.display(), width),
                value_style.add_modifier(Modifier::BOLD),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).right_aligned().block(block), rect);
    }
}

/// Longest suffix of `text` that fits in `width` columns.
fn keep_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = index;
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tcalc_engine::{NavigatorConfig, keypad};

    #[test]
    fn keep_tail_trims_from_the_left() {
        assert_eq!(keep_tail("123456", 4), "3456");
        assert_eq!(keep_tail("12 ×", 10), "12 ×");
        assert_eq!(keep_tail("abc", 0), "");
    }

    #[test]
    fn renders_expression_and_value() {
        let mut app = App::new(keypad::standard_dispatcher(NavigatorConfig::default()).unwrap());
        for key in ["1", "2", "+", "3"] {
            app.calculator.input(key).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        terminal
            .draw(|frame| DisplayComponent::new().render(frame, frame.area(), &mut app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| (0..20).map(|x| buffer[(x, y)].symbol()).collect::<String>();
        assert!(row(1).ends_with("12 +│"));
        assert!(row(2).ends_with("3│"));
    }
}
