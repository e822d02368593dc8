use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use crate::dispatch::InteractionDispatcher;

/// Cloneable handle to one dispatcher shared between the input loop and
/// whatever else needs to look at focus.
///
/// Every read-then-write sequence goes through [`SharedDispatcher::with`],
/// so it runs inside a single lock scope.
#[derive(Debug, Clone)]
pub struct SharedDispatcher {
    inner: Arc<Mutex<InteractionDispatcher>>,
}

impl SharedDispatcher {
    pub fn new(dispatcher: InteractionDispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispatcher)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut InteractionDispatcher) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    fn lock(&self) -> MutexGuard<'_, InteractionDispatcher> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            // Registry mutations never leave partial state, so the data is usable.
            warn!("dispatcher lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl From<InteractionDispatcher> for SharedDispatcher {
    fn from(dispatcher: InteractionDispatcher) -> Self {
        Self::new(dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use tcalc_types::{Direction, ElementState, Position};

    use super::*;
    use crate::{keypad, navigation::NavigatorConfig};

    #[test]
    fn concurrent_navigation_keeps_one_focused_element() {
        let shared = SharedDispatcher::new(keypad::standard_dispatcher(NavigatorConfig::default()).unwrap());

        let handles: Vec<_> = Direction::ALL
            .into_iter()
            .map(|direction| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        let _ = shared.with(|dispatcher| dispatcher.navigate(direction));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        shared.with(|dispatcher| {
            let focused: Vec<_> = dispatcher
                .registry()
                .elements()
                .filter(|element| element.state() == ElementState::Focused)
                .map(|element| element.position())
                .collect();
            assert_eq!(focused.len(), 1);
            assert_eq!(dispatcher.registry().focused_position(), focused.first().copied());
        });
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let shared = SharedDispatcher::new(keypad::standard_dispatcher(NavigatorConfig::default()).unwrap());
        let clone = shared.clone();
        let _ = thread::spawn(move || {
            clone.with(|_| panic!("poison the lock"));
        })
        .join();

        let focused = shared.with(|dispatcher| dispatcher.registry().focused_position());
        assert_eq!(focused, Some(Position::new(0, 0)));
    }
}
