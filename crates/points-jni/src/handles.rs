//! Process-wide point registry for JNI handles
//!
//! Java holds points as `long` handles into a single [`PointArena`]. Every
//! native call locks the registry for exactly one arena operation, so
//! concurrent calls never race on a slot; ordering between threads that
//! share a handle is up to the caller.

use points_core::PointArena;
use std::sync::{Arc, Mutex, MutexGuard};

lazy_static::lazy_static! {
    /// Registry of all live points
    pub(crate) static ref POINT_REGISTRY: Arc<Mutex<PointArena>> = Arc::new(Mutex::new(PointArena::new()));
}

/// Lock a registry, recovering from poisoning.
///
/// Arena operations never leave a slot half-updated, so the data behind a
/// poisoned lock is still consistent.
pub(crate) fn lock_registry<T>(mutex: &Arc<Mutex<T>>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Point registry mutex was poisoned, recovering data");
            poisoned.into_inner()
        }
    }
}

/// Number of points currently allocated through the bridge
pub fn live_points() -> usize {
    lock_registry(&POINT_REGISTRY).len()
}

/// Release every point in the registry.
///
/// # Warning
///
/// This invalidates all outstanding handles. Intended for tests.
pub fn clear_registry() {
    let mut registry = lock_registry(&POINT_REGISTRY);
    let released = registry.len();
    registry.clear();
    tracing::info!(released, "Point registry cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_clear_registry() {
        clear_registry();

        lock_registry(&POINT_REGISTRY).allocate();
        lock_registry(&POINT_REGISTRY).allocate();
        assert_eq!(live_points(), 2);

        clear_registry();
        assert_eq!(live_points(), 0);
    }

    #[test]
    #[serial]
    fn test_poisoned_registry_is_recovered() {
        let registry = Arc::new(Mutex::new(PointArena::new()));
        let poisoner = Arc::clone(&registry);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(registry.is_poisoned());
        let handle = lock_registry(&registry).allocate();
        assert!(lock_registry(&registry).contains(handle));
    }
}
