//! Change notification and final-result callbacks.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::models::range::RangeSelection;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

/// Observer list fired after every committed picker change.
///
/// Listeners carry no payload; they re-read the picker through its queries.
/// Clones share the same registry, so a listener may hold a clone and
/// unsubscribe itself while being notified.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Rc<RefCell<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.entries.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Unknown or already removed ids are ignored.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every listener registered when notification starts.
    ///
    /// The list is copied before iterating and the registry borrow released,
    /// so listeners may subscribe or unsubscribe during the call. Changes take
    /// effect from the next notification.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Receives the outcome of the dialog.
#[cfg_attr(test, mockall::automock)]
pub trait RangeResultListener {
    /// The user confirmed; disabled sides are `None`.
    fn on_range_set(&self, selection: &RangeSelection);

    /// The user dismissed the dialog without confirming.
    fn on_cancel(&self);
}
