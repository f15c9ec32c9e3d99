//! Handle-based point operations behind the `JNIPoint` natives
//!
//! These are the JVM-independent halves of the JNI entry points: raw `u64`
//! handles in, plain Rust results out. The exports in [`crate::exports`]
//! only translate arguments and turn errors into Java exceptions.

use crate::handles::{lock_registry, POINT_REGISTRY};
use points_core::{Point, PointHandle, Result};

/// Allocate a point at the origin and return its handle.
pub fn point_allocate() -> u64 {
    let handle = lock_registry(&POINT_REGISTRY).allocate();
    tracing::debug!(handle = handle.raw(), "Point allocated");
    handle.raw()
}

/// Release a point, returning its last value.
///
/// # Errors
///
/// `InvalidHandle` if the handle is not live, including a second release.
pub fn point_free(handle: u64) -> Result<Point> {
    let point = lock_registry(&POINT_REGISTRY).release(PointHandle::from_raw(handle))?;
    tracing::debug!(handle, x = point.x, y = point.y, "Point released");
    Ok(point)
}

pub fn point_get_x(handle: u64) -> Result<i32> {
    lock_registry(&POINT_REGISTRY).get_x(PointHandle::from_raw(handle))
}

pub fn point_set_x(handle: u64, value: i32) -> Result<()> {
    lock_registry(&POINT_REGISTRY).set_x(PointHandle::from_raw(handle), value)
}

pub fn point_get_y(handle: u64) -> Result<i32> {
    lock_registry(&POINT_REGISTRY).get_y(PointHandle::from_raw(handle))
}

pub fn point_set_y(handle: u64, value: i32) -> Result<()> {
    lock_registry(&POINT_REGISTRY).set_y(PointHandle::from_raw(handle), value)
}

/// Distance between two registered points.
pub fn point_distance(a: u64, b: u64) -> Result<f64> {
    lock_registry(&POINT_REGISTRY).distance(PointHandle::from_raw(a), PointHandle::from_raw(b))
}
