//! # tcalc engine
//!
//! Focus and interaction core for a grid-shaped calculator keypad.
//!
//! The engine keeps a registry of keypad elements, each with its own
//! visual state machine, and at most one focused element. Keyboard and
//! pointer input are classified by the [`InteractionDispatcher`] and turned
//! into focus moves, tab traversal or activations, each reported as an
//! [`Action`] record. The [`Calculator`] consumes activated values.
//!
//! ## Usage
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use tcalc_engine::{keypad, Calculator, NavigatorConfig};
//!
//! let mut dispatcher = keypad::standard_dispatcher(NavigatorConfig::default())?;
//! let mut calculator = Calculator::new();
//!
//! for ch in ['7', 'x', '6', '='] {
//!     let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
//!     if let Some(action) = dispatcher.handle_key_event(key) {
//!         calculator.input(&action.value)?;
//!     }
//! }
//! assert_eq!(calculator.display(), "42");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - **`element`**: per-element state machine
//! - **`registry`**: element storage, focus pointer and history
//! - **`navigation`**: directional moves with wrapping and fallback search
//! - **`tab_order`**: row-major sequential traversal
//! - **`dispatch`**: key and pointer input routing
//! - **`calculator`**: arithmetic on activated values

pub mod action;
pub mod calculator;
pub mod dispatch;
pub mod element;
pub mod geometry;
pub mod keypad;
pub mod navigation;
pub mod registry;
pub mod shared;
pub mod tab_order;

pub use action::{Action, ElementSnapshot};
pub use calculator::{CalcError, Calculator};
pub use dispatch::{InputClass, InteractionDispatcher};
pub use element::{Element, StateMachine};
pub use geometry::GridGeometry;
pub use navigation::{Navigator, NavigatorConfig, SearchBound};
pub use registry::FocusRegistry;
pub use shared::SharedDispatcher;
pub use tcalc_types::{ActionKind, Direction, ElementKind, ElementState, FocusError, Position, WrapMode};
