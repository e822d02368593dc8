mod keypad_component;

pub use keypad_component::KeypadComponent;
