//! Generation-checked storage for owned points
//!
//! Points handed out to a host runtime are addressed by opaque `u64` handles
//! instead of native addresses. A handle packs a slot index (low 32 bits)
//! with the slot's generation (high 32 bits):
//!
//! ```text
//!  63                32 31                 0
//! +--------------------+--------------------+
//! |     generation     |        index       |
//! +--------------------+--------------------+
//! ```
//!
//! Releasing a point bumps its slot's generation, so every handle that
//! referred to the old occupant stops matching. Use-after-free and double
//! release surface as [`PointError::InvalidHandle`] instead of touching
//! recycled memory. Generations start at 1, which keeps handle `0` free to
//! mean "null" on the host side.

use crate::distance::distance;
use crate::error::{PointError, Result};
use crate::point::Point;

/// Opaque handle to a point owned by a [`PointArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointHandle(u64);

impl PointHandle {
    /// The null handle. Never live.
    pub const NULL: PointHandle = PointHandle(0);

    fn new(index: u32, generation: u32) -> Self {
        Self((u64::from(generation) << 32) | u64::from(index))
    }

    /// Reinterpret a raw value received from the host.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value to hand to the host.
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    pub fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

impl From<PointHandle> for u64 {
    fn from(handle: PointHandle) -> Self {
        handle.0
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    point: Option<Point>,
}

/// Slot map of points keyed by [`PointHandle`]
///
/// Freed slots are reused most-recently-freed first. The arena itself is not
/// synchronized; callers sharing one across threads wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct PointArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl PointArena {
    /// Slot indices occupy the low 32 bits of a handle.
    pub const MAX_SLOTS: u64 = 1 << 32;

    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena with room for `capacity` points before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Allocate a new point at the origin and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if every free slot is in use and the arena already holds
    /// [`PointArena::MAX_SLOTS`] slots.
    pub fn allocate(&mut self) -> PointHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.point = Some(Point::ORIGIN);
            self.live += 1;
            tracing::trace!(index, generation = slot.generation, "Reusing point slot");
            return PointHandle::new(index, slot.generation);
        }

        let index = slot_index(self.slots.len());
        self.slots.push(Slot {
            generation: 1,
            point: Some(Point::ORIGIN),
        });
        self.live += 1;
        PointHandle::new(index, 1)
    }

    /// Retire the point behind `handle`, returning its final value.
    ///
    /// # Errors
    ///
    /// [`PointError::InvalidHandle`] if `handle` is not live, including a
    /// second release of the same handle.
    pub fn release(&mut self, handle: PointHandle) -> Result<Point> {
        let index = handle.index();
        let slot = self.live_slot_mut(handle)?;
        let point = slot.point.take().unwrap_or_default();
        slot.generation = next_generation(slot.generation);

        self.free.push(index);
        self.live -= 1;
        Ok(point)
    }

    pub fn get(&self, handle: PointHandle) -> Result<Point> {
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.point)
            .ok_or(PointError::InvalidHandle(handle.raw()))
    }

    pub fn set(&mut self, handle: PointHandle, point: Point) -> Result<()> {
        *self.point_mut(handle)? = point;
        Ok(())
    }

    pub fn get_x(&self, handle: PointHandle) -> Result<i32> {
        self.get(handle).map(|p| p.x)
    }

    pub fn get_y(&self, handle: PointHandle) -> Result<i32> {
        self.get(handle).map(|p| p.y)
    }

    pub fn set_x(&mut self, handle: PointHandle, x: i32) -> Result<()> {
        self.point_mut(handle)?.x = x;
        Ok(())
    }

    pub fn set_y(&mut self, handle: PointHandle, y: i32) -> Result<()> {
        self.point_mut(handle)?.y = y;
        Ok(())
    }

    /// Distance between two owned points, see [`crate::distance::distance`].
    pub fn distance(&self, a: PointHandle, b: PointHandle) -> Result<f64> {
        Ok(distance(self.get(a)?, self.get(b)?))
    }

    /// Whether `handle` currently refers to a point.
    pub fn contains(&self, handle: PointHandle) -> bool {
        self.get(handle).is_ok()
    }

    /// Number of live points
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever created (live or free)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Retire every live point. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.point.take().is_some() {
                slot.generation = next_generation(slot.generation);
                self.free.push(index as u32);
            }
        }
        self.live = 0;
    }

    fn live_slot_mut(&mut self, handle: PointHandle) -> Result<&mut Slot> {
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation() && slot.point.is_some())
            .ok_or(PointError::InvalidHandle(handle.raw()))
    }

    fn point_mut(&mut self, handle: PointHandle) -> Result<&mut Point> {
        let raw = handle.raw();
        self.live_slot_mut(handle)?
            .point
            .as_mut()
            .ok_or(PointError::InvalidHandle(raw))
    }
}

/// Index for a slot appended after `len` existing ones.
fn slot_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(index) => index,
        Err(_) => panic!("point arena index space exhausted ({} slots)", PointArena::MAX_SLOTS),
    }
}

/// Next generation for a slot, skipping 0 on wrap-around.
fn next_generation(generation: u32) -> u32 {
    match generation.wrapping_add(1) {
        0 => 1,
        next => next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut arena = PointArena::new();
        let h = arena.allocate();
        arena.set_x(h, 7).unwrap();
        arena.set_y(h, 9).unwrap();
        assert_eq!(arena.get_x(h).unwrap(), 7);
        assert_eq!(arena.get_y(h).unwrap(), 9);
        assert_eq!(arena.release(h).unwrap(), Point::new(7, 9));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_new_points_start_at_origin() {
        let mut arena = PointArena::new();
        let h = arena.allocate();
        assert_eq!(arena.get(h).unwrap(), Point::ORIGIN);
    }

    #[test]
    fn test_null_handle_is_never_live() {
        let mut arena = PointArena::new();
        let _ = arena.allocate();
        assert_eq!(arena.get(PointHandle::NULL), Err(PointError::InvalidHandle(0)));
        assert_eq!(arena.release(PointHandle::NULL), Err(PointError::InvalidHandle(0)));
    }

    #[test]
    fn test_double_release_is_rejected() {
        let mut arena = PointArena::new();
        let h = arena.allocate();
        arena.release(h).unwrap();
        assert_eq!(arena.release(h), Err(PointError::InvalidHandle(h.raw())));
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn test_stale_handle_does_not_alias_reused_slot() {
        let mut arena = PointArena::new();
        let old = arena.allocate();
        arena.release(old).unwrap();

        let new = arena.allocate();
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());

        arena.set_x(new, 42).unwrap();
        assert!(arena.get_x(old).is_err());
        assert!(arena.set_y(old, 1).is_err());
        assert_eq!(arena.get(new).unwrap(), Point::new(42, 0));
    }

    #[test]
    fn test_unknown_index_is_rejected() {
        let arena = PointArena::new();
        let bogus = PointHandle::from_raw((1 << 32) | 99);
        assert_eq!(arena.get_x(bogus), Err(PointError::InvalidHandle(bogus.raw())));
    }

    #[test]
    fn test_distance_between_handles() {
        let mut arena = PointArena::new();
        let a = arena.allocate();
        let b = arena.allocate();
        arena.set(a, Point::new(1, 1)).unwrap();
        arena.set(b, Point::new(4, 5)).unwrap();
        assert_eq!(arena.distance(a, b).unwrap(), 5.0);

        arena.release(b).unwrap();
        assert_eq!(arena.distance(a, b), Err(PointError::InvalidHandle(b.raw())));
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut arena = PointArena::new();
        let handles: Vec<_> = (0..4).map(|_| arena.allocate()).collect();
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), 4);
        for h in handles {
            assert!(!arena.contains(h));
        }

        // Cleared slots are handed out again
        let _ = arena.allocate();
        assert_eq!(arena.capacity(), 4);
    }

    #[test]
    fn test_generation_skips_zero() {
        assert_eq!(next_generation(1), 2);
        assert_eq!(next_generation(u32::MAX), 1);
    }

    #[test]
    fn test_slot_index_covers_full_range() {
        assert_eq!(slot_index(0), 0);
        assert_eq!(slot_index(u32::MAX as usize), u32::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "point arena index space exhausted")]
    fn test_slot_index_rejects_overflow() {
        slot_index(PointArena::MAX_SLOTS as usize);
    }

    #[test]
    fn test_handle_packing() {
        let h = PointHandle::new(5, 3);
        assert_eq!(h.raw(), (3u64 << 32) | 5);
        assert_eq!(h.index(), 5);
        assert_eq!(h.generation(), 3);
        assert_eq!(PointHandle::from_raw(h.raw()), h);
    }
}
