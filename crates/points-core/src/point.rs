//! The point type shared by every bridge entry point

use bytemuck::{Pod, Zeroable};

/// A point with two signed 32-bit coordinates.
///
/// `#[repr(C)]` keeps the layout identical to the native
/// `struct { int x; int y; }`: `x` at offset 0, `y` at offset 4, 8 bytes
/// total. This is what lets a `Point` be passed by value through the C ABI
/// and decoded straight out of a direct buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin, `(0, 0)`. Freshly allocated points start here.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Size of the in-memory layout in bytes
    pub const LAYOUT_SIZE: usize = std::mem::size_of::<Point>();

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to `other`, see [`crate::distance::distance`].
    pub fn distance(&self, other: &Point) -> f64 {
        crate::distance::distance_ref(self, other)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
