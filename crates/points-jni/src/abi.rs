//! C ABI exports
//!
//! Plain `extern "C"` entry points for hosts that call the library through a
//! foreign linker instead of JNI. Symbol names and signatures are fixed:
//!
//! ```c
//! typedef struct { int x; int y; } Point;
//! double distance(Point p1, Point p2);
//! double distance_ptrs(Point* p1, Point* p2);
//! uint32_t points_abi_version(void);
//! ```

use points_core::Point;

/// C ABI version
pub const ABI_VERSION: u32 = 1;

#[no_mangle]
pub extern "C" fn points_abi_version() -> u32 {
    ABI_VERSION
}

/// Distance between two points passed by value.
#[no_mangle]
pub extern "C" fn distance(p1: Point, p2: Point) -> f64 {
    points_core::distance::distance(p1, p2)
}

/// Distance between two points passed by pointer.
///
/// A null pointer yields `NaN`.
///
/// # Safety
///
/// Each non-null pointer must reference a readable `Point` for the duration
/// of the call. No alignment beyond that of `Point` is required.
#[no_mangle]
pub unsafe extern "C" fn distance_ptrs(p1: *const Point, p2: *const Point) -> f64 {
    // SAFETY: the caller guarantees non-null pointers are valid for reads.
    match unsafe { (p1.as_ref(), p2.as_ref()) } {
        (Some(p1), Some(p2)) => points_core::distance_ref(p1, p2),
        _ => {
            tracing::error!(p1_null = p1.is_null(), p2_null = p2.is_null(), "distance_ptrs called with null point");
            f64::NAN
        }
    }
}
