//! UI components: display, keypad, hint bar.

pub mod component;
pub mod display;
pub mod hint_bar;
pub mod keypad;

pub use component::*;
pub use display::DisplayComponent;
pub use hint_bar::HintBarComponent;
pub use keypad::KeypadComponent;
