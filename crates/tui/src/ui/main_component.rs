use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::{Frame, layout::Rect, widgets::Block};

use super::components::{Component, DisplayComponent, HintBarComponent, KeypadComponent};
use super::layout::MainLayout;
use super::theme::theme_helpers as th;
use crate::app::{App, Effect, Msg};

/// Root view: display on top, keypad in the middle, hints at the bottom.
#[derive(Debug, Default)]
pub struct MainView {
    pub display_view: DisplayComponent,
    pub keypad_view: KeypadComponent,
    pub hint_bar_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes an application message to the app and every component.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.display_view.update(app, &msg));
        effects.extend(self.keypad_view.update(app, &msg));
        effects.extend(self.hint_bar_view.update(app, &msg));
        effects
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Release
            && key.code == KeyCode::Char('q')
            && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
        {
            return vec![Effect::Quit];
        }
        self.keypad_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.keypad_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::panel_style(&*app.theme)), rect);
        let [display, keypad, hints] = MainLayout::split(rect);
        self.display_view.render(frame, display, app);
        self.keypad_view.render(frame, keypad, app);
        self.hint_bar_view.render(frame, hints, app);
    }
}
