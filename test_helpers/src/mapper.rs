//! Helpers for safely replacing the global mapper in tests.
//!
//! Each replacement acquires a global mutex and returns an RAII guard that
//! reinstalls the previous mapper when dropped, so tests that depend on the
//! inclusion policy never observe one another's settings.
//!
//! # Examples
//!
//! ```
//! use mason::{Inclusion, Mapper};
//! use mason_test_helpers::mapper;
//!
//! let guard = mapper::install(Mapper::default().with_inclusion(Inclusion::Always));
//! assert_eq!(mason::mapper().inclusion(), Inclusion::Always);
//! drop(guard);
//! ```

use std::sync::{Arc, LazyLock};

use mason::{Inclusion, Mapper};
use parking_lot::{Mutex, MutexGuard};

static MAPPER_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard restoring the global mapper to its prior value on drop.
pub struct MapperGuard {
    previous: Arc<Mapper>,
    _lock: MutexGuard<'static, ()>,
}

impl MapperGuard {
    /// Returns the mapper that was installed before this guard.
    #[must_use]
    pub fn previous(&self) -> &Mapper {
        &self.previous
    }
}

/// Install `replacement` as the global mapper until the guard drops.
#[must_use = "dropping the guard restores the previous mapper immediately"]
pub fn install(replacement: Mapper) -> MapperGuard {
    let lock = MAPPER_MUTEX.lock();
    let previous = mason::set_mapper(replacement);
    MapperGuard {
        previous,
        _lock: lock,
    }
}

/// Install the default mapper with `inclusion` until the guard drops.
#[must_use = "dropping the guard restores the previous mapper immediately"]
pub fn with_inclusion(inclusion: Inclusion) -> MapperGuard {
    install(Mapper::default().with_inclusion(inclusion))
}

impl Drop for MapperGuard {
    fn drop(&mut self) {
        mason::set_mapper(*self.previous);
    }
}
