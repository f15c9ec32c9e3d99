//! # jnipoint - JNI bridge for points
//!
//! Native library behind the `JNIPoint` and `BBPoint` benchmark classes,
//! loaded with `System.loadLibrary("jnipoint")`.
//!
//! ## Architecture
//!
//! - **`JNIPoint`** - points owned by the library, addressed from Java by a
//!   `long` handle into a process-wide generation-checked registry
//! - **`BBPoint`** - points living in caller-owned direct `ByteBuffer`s,
//!   read in place and never retained
//! - **C ABI** - `distance` / `distance_ptrs` for foreign-linker callers
//!
//! Invalid handles, undersized buffers and heap buffers are reported to Java
//! as exceptions (`IllegalArgumentException`, `IndexOutOfBoundsException`)
//! rather than corrupting memory. Logging is configured from `POINTS_*`
//! environment variables when the library is loaded.

use std::ffi::c_void;

use jni::sys::{jint, JavaVM, JNI_VERSION_1_8};
use points_tracing::{timed_block, TracingConfig};

mod abi;
mod buffer;
mod error;
mod exports;
mod handles;
mod point;

pub use abi::{distance, distance_ptrs, points_abi_version, ABI_VERSION};
pub use error::{BridgeError, BridgeResult};
pub use handles::{clear_registry, live_points};
pub use point::{
    point_allocate, point_distance, point_free, point_get_x, point_get_y, point_set_x, point_set_y,
};

/// Get the version of the jnipoint library
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Called by the JVM when the library is loaded.
///
/// Installs the shared tracing subscriber unless the process already has
/// one.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    let (installed, init_us) = timed_block!("tracing_init", { points_tracing::init_once(&TracingConfig::from_env()) });
    tracing::info!(version = %get_version(), subscriber = installed, init_us, "jnipoint loaded");
    JNI_VERSION_1_8
}
