//! Keypad grid: renders every registered element as a button and routes
//! keyboard and mouse input to the shared dispatcher.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, layout::Rect};
use tcalc_engine::{Element, ElementState};
use tracing::debug;

use crate::{
    app::{App, Effect},
    ui::{
        components::component::Component,
        layout::{ButtonGeometry, grid_cells},
        theme::theme_helpers::{self as th, ButtonType},
    },
};

#[derive(Debug, Default)]
pub struct KeypadComponent {
    geometry: ButtonGeometry,
}

impl KeypadComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> &ButtonGeometry {
        &self.geometry
    }
}

impl Component for KeypadComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        app.dispatcher
            .with(|dispatcher| dispatcher.handle_key_event(key))
            .map(Effect::Feedback)
            .into_iter()
            .collect()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let geometry = &self.geometry;
        let action = app
            .dispatcher
            .with(|dispatcher| dispatcher.handle_pointer_event(mouse.column, mouse.row, geometry));
        if action.is_none() {
            debug!(column = mouse.column, row = mouse.row, "click outside any enabled key");
        }
        action.map(Effect::Feedback).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let block = th::block(theme, Some(" Keypad "), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let elements: Vec<Element> = app
            .dispatcher
            .with(|dispatcher| dispatcher.registry().elements().cloned().collect());
        let rows = elements.iter().map(|e| e.position().row + 1).max().unwrap_or(0);
        let cols = elements.iter().map(|e| e.position().col + 1).max().unwrap_or(0);

        let cells = grid_cells(inner, rows, cols);
        let mut rendered = Vec::with_capacity(elements.len());
        for element in &elements {
            let position = element.position();
            let Some((_, area)) = cells.iter().find(|(p, _)| *p == position) else {
                continue;
            };
            let state = match element.state() {
                ElementState::Disabled => ElementState::Disabled,
                _ if app.flash == Some(position) => ElementState::Pressed,
                state => state,
            };
            th::render_button(frame, *area, element.label(), ButtonType::from(element.kind()), state, theme);
            rendered.push((position, *area));
        }
        self.geometry = ButtonGeometry::new(rendered);
    }
}
