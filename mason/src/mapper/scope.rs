//! Thread-local activation of an injected mapper.
//!
//! Encoding runs through serde, which offers no way to pass configuration
//! into `skip_serializing_if` predicates. A mapper applied to a single call is
//! therefore parked in a thread-local slot for the duration of that call and
//! restored afterwards, so nested and re-entrant calls see the innermost
//! mapper.

use std::cell::Cell;

use super::{GLOBAL, Inclusion, Mapper};

thread_local! {
    static ACTIVE: Cell<Option<Mapper>> = const { Cell::new(None) };
}

/// Restores the previously active mapper when dropped, including on unwind.
struct Restore(Option<Mapper>);

impl Drop for Restore {
    fn drop(&mut self) {
        ACTIVE.with(|slot| slot.set(self.0));
    }
}

/// Run `f` with `mapper` active on this thread.
pub(super) fn with_active<R>(mapper: Mapper, f: impl FnOnce() -> R) -> R {
    let _restore = Restore(ACTIVE.with(|slot| slot.replace(Some(mapper))));
    f()
}

/// Returns the mapper scoped to the current call, if any.
pub(super) fn scoped() -> Option<Mapper> {
    ACTIVE.with(Cell::get)
}

/// Returns the inclusion policy in force on this thread.
pub(crate) fn active_inclusion() -> Inclusion {
    scoped().map_or_else(|| GLOBAL.read().inclusion(), |mapper| mapper.inclusion())
}
