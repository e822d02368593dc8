//! End-to-end keypad scenarios driven through the dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tcalc_engine::{
    ActionKind, Calculator, ElementKind, ElementState, FocusError, InteractionDispatcher, NavigatorConfig, Position,
    WrapMode, keypad,
};

fn press(dispatcher: &mut InteractionDispatcher, code: KeyCode, times: usize) {
    for _ in 0..times {
        let _ = dispatcher.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }
}

fn focused(dispatcher: &InteractionDispatcher) -> Option<Position> {
    dispatcher.registry().focused_position()
}

fn type_keys(dispatcher: &mut InteractionDispatcher, calculator: &mut Calculator, keys: &str) {
    for ch in keys.chars().filter(|ch| !ch.is_whitespace()) {
        let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
        if let Some(action) = dispatcher.handle_key_event(key)
            && action.is_activation()
        {
            let _ = calculator.input(&action.value);
        }
    }
}

#[test]
fn walking_to_the_gap_falls_back_to_the_nearest_key() {
    let config = NavigatorConfig::default().with_wrap_mode(WrapMode::None);
    let mut dispatcher = keypad::standard_dispatcher(config).unwrap();
    assert_eq!(focused(&dispatcher), Some(Position::new(0, 0)));

    press(&mut dispatcher, KeyCode::Down, 4);
    assert_eq!(focused(&dispatcher), Some(Position::new(4, 0)));

    press(&mut dispatcher, KeyCode::Right, 2);
    assert_eq!(focused(&dispatcher), Some(Position::new(4, 2)));

    // (4, 3) is empty; the fallback search finds (3, 3) one column over.
    press(&mut dispatcher, KeyCode::Right, 1);
    assert_eq!(focused(&dispatcher), Some(Position::new(3, 3)));
}

#[test]
fn moving_past_the_edge_without_wrap_keeps_focus() {
    let config = NavigatorConfig::default().with_wrap_mode(WrapMode::None);
    let mut dispatcher = keypad::standard_dispatcher(config).unwrap();

    let action = dispatcher.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    assert!(action.is_none());
    assert_eq!(focused(&dispatcher), Some(Position::new(0, 0)));
}

#[test]
fn row_wrap_is_the_default() {
    let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default()).unwrap();
    press(&mut dispatcher, KeyCode::Left, 1);
    assert_eq!(focused(&dispatcher), Some(Position::new(0, 3)));
    press(&mut dispatcher, KeyCode::Right, 1);
    assert_eq!(focused(&dispatcher), Some(Position::new(0, 0)));
}

#[test]
fn disabled_clear_key_rejects_press() {
    let mut registry = keypad::standard_registry().unwrap();
    let clear = Position::new(0, 0);
    registry.disable(clear).unwrap();

    let element = registry.element_at(clear).unwrap();
    assert_eq!(element.value(), "C");
    assert_eq!(element.kind(), ElementKind::Special);
    assert_eq!(element.state(), ElementState::Disabled);

    let mut element = element.clone();
    assert_eq!(
        element.press(),
        Err(FocusError::InvalidTransition {
            from: ElementState::Disabled,
            to: ElementState::Pressed,
        })
    );
    assert_eq!(element.state(), ElementState::Disabled);
    assert_eq!(
        registry.activate(clear),
        Err(FocusError::InvalidTransition {
            from: ElementState::Disabled,
            to: ElementState::Pressed,
        })
    );
    assert_eq!(registry.element_at(clear).unwrap().state(), ElementState::Disabled);
}

#[test]
fn disabled_sign_key_stays_disabled_under_arrows_and_enter() {
    let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default()).unwrap();
    let sign = Position::new(0, 1);
    dispatcher.set_enabled(sign, false).unwrap();

    press(&mut dispatcher, KeyCode::Right, 1);
    assert_ne!(focused(&dispatcher), Some(sign));

    let action = dispatcher.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(action.is_some_and(|action| action.value != "±"));

    press(&mut dispatcher, KeyCode::Right, 3);
    press(&mut dispatcher, KeyCode::Tab, 20);
    press(&mut dispatcher, KeyCode::BackTab, 20);
    assert_eq!(dispatcher.registry().element_at(sign).unwrap().state(), ElementState::Disabled);
    assert_eq!(dispatcher.registry().interactive_positions().len(), 18);
}

#[test]
fn typed_expression_chains_left_to_right() {
    let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default()).unwrap();
    let mut calculator = Calculator::new();

    type_keys(&mut dispatcher, &mut calculator, "1 + 2 x 3 =");
    assert_eq!(calculator.display(), "9");
    assert_eq!(focused(&dispatcher), Some(Position::new(4, 2)));
}

#[test]
fn typed_division_by_zero_shows_error() {
    let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default()).unwrap();
    let mut calculator = Calculator::new();

    type_keys(&mut dispatcher, &mut calculator, "1 : 0 =");
    assert_eq!(calculator.display(), "Error");
}

#[test]
fn enter_activates_the_focused_key() {
    let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default()).unwrap();
    press(&mut dispatcher, KeyCode::Down, 1);

    let action = dispatcher
        .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
        .unwrap();
    assert_eq!(action.kind, ActionKind::Activate);
    assert_eq!(action.value, "7");
    assert_eq!(action.element.map(|element| element.state), Some(ElementState::Focused));
}

#[test]
fn tab_walks_every_key_in_reading_order() {
    let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default()).unwrap();
    let mut visited = vec![focused(&dispatcher).unwrap()];
    for _ in 1..19 {
        press(&mut dispatcher, KeyCode::Tab, 1);
        visited.push(focused(&dispatcher).unwrap());
    }
    let mut sorted = visited.clone();
    sorted.sort();
    assert_eq!(visited, sorted);
    assert_eq!(visited.last(), Some(&Position::new(4, 2)));

    press(&mut dispatcher, KeyCode::Tab, 1);
    assert_eq!(focused(&dispatcher), Some(Position::new(0, 0)));
}
