//! Records handed back by the dispatcher for each handled input.

use serde::{Deserialize, Serialize};
use tcalc_types::{ActionKind, ElementKind, ElementState, Position};

use crate::element::Element;

/// Owned copy of an element as it was right after an input was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub kind: ElementKind,
    pub label: String,
    pub value: String,
    pub position: Position,
    pub state: ElementState,
}

impl From<&Element> for ElementSnapshot {
    fn from(element: &Element) -> Self {
        Self {
            kind: element.kind(),
            label: element.label().to_string(),
            value: element.value().to_string(),
            position: element.position(),
            state: element.state(),
        }
    }
}

/// Record of one handled input, handed to rendering, audio feedback and
/// application logic. It does not borrow the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub element: Option<ElementSnapshot>,
    pub value: String,
    pub position: Option<Position>,
}

impl Action {
    pub fn for_element(kind: ActionKind, element: &Element) -> Self {
        Self {
            kind,
            element: Some(ElementSnapshot::from(element)),
            value: element.value().to_string(),
            position: Some(element.position()),
        }
    }

    /// Blur record; `element` is whatever lost focus, if anything did.
    pub fn blur(element: Option<&Element>) -> Self {
        match element {
            Some(element) => Self::for_element(ActionKind::Blur, element),
            None => Self {
                kind: ActionKind::Blur,
                element: None,
                value: String::new(),
                position: None,
            },
        }
    }

    /// Whether the record asks the application to consume `value`.
    pub fn is_activation(&self) -> bool {
        matches!(self.kind, ActionKind::Activate | ActionKind::Direct)
    }
}
