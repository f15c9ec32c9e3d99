//! # points-core - Point model for the native bridge
//!
//! Everything the JNI layer needs that does not depend on a JVM lives here:
//!
//! - [`Point`] - two `i32` fields laid out exactly as the native `struct { int x; int y; }`
//! - [`distance`] - Euclidean distance by value, by reference, and with wide intermediates
//! - [`arena::PointArena`] - owned points addressed by generation-checked `u64` handles
//! - [`view::PointView`] - bounds-checked, read-only views over caller-owned buffers
//!
//! ## Example
//!
//! ```rust
//! use points_core::{arena::PointArena, Point};
//!
//! let mut arena = PointArena::new();
//! let a = arena.allocate();
//! let b = arena.allocate();
//! arena.set_x(b, 3)?;
//! arena.set_y(b, 4)?;
//!
//! assert_eq!(arena.distance(a, b)?, 5.0);
//! assert_eq!(Point::new(0, 0).distance(&Point::new(3, 4)), 5.0);
//!
//! arena.release(a)?;
//! assert!(arena.release(a).is_err());
//! # Ok::<(), points_core::PointError>(())
//! ```

pub mod arena;
pub mod distance;
pub mod error;
pub mod point;
pub mod view;

pub use arena::{PointArena, PointHandle};
pub use distance::{distance, distance_ref, distance_wide};
pub use error::{PointError, Result};
pub use point::Point;
pub use view::{distance_from_buffers, write_point, PointView};
