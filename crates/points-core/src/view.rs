//! Read-only point views over caller-owned memory
//!
//! Hosts can hand the bridge a raw memory region (for JNI, a direct
//! `ByteBuffer`) holding a point in its native layout: two native-endian
//! `i32`s, `x` then `y`. The region is borrowed for the duration of a call;
//! it is never copied into an owned point, retained, or freed here.

use crate::distance::distance;
use crate::error::{PointError, Result};
use crate::point::Point;

/// Bounds-checked view of a point stored in a byte buffer
#[derive(Debug, Clone, Copy)]
pub struct PointView<'a> {
    bytes: &'a [u8; Point::LAYOUT_SIZE],
}

impl<'a> PointView<'a> {
    /// View the first [`Point::LAYOUT_SIZE`] bytes of `bytes` as a point.
    ///
    /// Trailing bytes are ignored. No alignment is required.
    ///
    /// # Errors
    ///
    /// [`PointError::BufferTooSmall`] when `bytes` is shorter than a point.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        match bytes.first_chunk::<{ Point::LAYOUT_SIZE }>() {
            Some(bytes) => Ok(Self { bytes }),
            None => Err(PointError::BufferTooSmall {
                required: Point::LAYOUT_SIZE,
                actual: bytes.len(),
            }),
        }
    }

    pub fn x(&self) -> i32 {
        self.point().x
    }

    pub fn y(&self) -> i32 {
        self.point().y
    }

    /// Decode the viewed point.
    pub fn point(&self) -> Point {
        bytemuck::pod_read_unaligned(self.bytes)
    }

    pub fn distance(&self, other: &PointView<'_>) -> f64 {
        distance(self.point(), other.point())
    }
}

/// Distance between two points stored in caller-owned buffers.
///
/// # Example
///
/// ```rust
/// use points_core::{distance_from_buffers, write_point, Point};
///
/// let mut a = [0u8; 8];
/// let mut b = [0u8; 8];
/// write_point(&mut a, Point::new(1, 1))?;
/// write_point(&mut b, Point::new(4, 5))?;
/// assert_eq!(distance_from_buffers(&a, &b)?, 5.0);
/// # Ok::<(), points_core::PointError>(())
/// ```
pub fn distance_from_buffers(a: &[u8], b: &[u8]) -> Result<f64> {
    let a = PointView::new(a)?;
    let b = PointView::new(b)?;
    Ok(a.distance(&b))
}

/// Encode `point` into the first [`Point::LAYOUT_SIZE`] bytes of `buf`.
pub fn write_point(buf: &mut [u8], point: Point) -> Result<()> {
    let actual = buf.len();
    let dst = buf
        .first_chunk_mut::<{ Point::LAYOUT_SIZE }>()
        .ok_or(PointError::BufferTooSmall {
            required: Point::LAYOUT_SIZE,
            actual,
        })?;
    dst.copy_from_slice(bytemuck::bytes_of(&point));
    Ok(())
}
