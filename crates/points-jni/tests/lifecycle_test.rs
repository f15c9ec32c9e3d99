//! Handle lifecycle through the public bridge functions

use jnipoint::{
    clear_registry, distance, get_version, live_points, point_allocate, point_distance, point_free, point_get_x,
    point_get_y, point_set_x, point_set_y, points_abi_version,
};
use points_core::{Point, PointError};
use proptest::prelude::*;
use serial_test::serial;

#[test]
fn test_version() {
    assert!(!get_version().is_empty());
    assert_eq!(points_abi_version(), jnipoint::ABI_VERSION);
}

#[test]
#[serial]
fn test_round_trip() {
    clear_registry();

    let h = point_allocate();
    point_set_x(h, 7).unwrap();
    point_set_y(h, 9).unwrap();
    assert_eq!(point_get_x(h).unwrap(), 7);
    assert_eq!(point_get_y(h).unwrap(), 9);
    point_free(h).unwrap();

    assert_eq!(live_points(), 0);
}

#[test]
#[serial]
fn test_handle_and_value_forms_agree() {
    clear_registry();

    let a = point_allocate();
    let b = point_allocate();
    point_set_x(a, 1).unwrap();
    point_set_y(a, 1).unwrap();
    point_set_x(b, 4).unwrap();
    point_set_y(b, 5).unwrap();

    let by_handle = point_distance(a, b).unwrap();
    assert_eq!(by_handle, distance(Point::new(1, 1), Point::new(4, 5)));
    assert_eq!(by_handle, 5.0);

    point_free(a).unwrap();
    point_free(b).unwrap();
}

#[test]
#[serial]
fn test_never_issued_handles_are_rejected() {
    clear_registry();

    for bogus in [0u64, 1, u64::MAX, 0xdead_beef] {
        assert_eq!(point_get_x(bogus), Err(PointError::InvalidHandle(bogus)));
        assert_eq!(point_free(bogus), Err(PointError::InvalidHandle(bogus)));
    }
}

#[test]
#[serial]
fn test_cleared_handles_are_rejected() {
    clear_registry();

    let h = point_allocate();
    clear_registry();
    assert!(point_get_y(h).is_err());

    // The slot is reused under a fresh generation
    let fresh = point_allocate();
    assert_ne!(fresh, h);
    assert_eq!(point_get_y(fresh).unwrap(), 0);
    point_free(fresh).unwrap();
}

#[test]
#[serial]
fn test_concurrent_allocation_yields_distinct_handles() {
    clear_registry();

    let threads: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                (0..100)
                    .map(|i| {
                        let h = point_allocate();
                        point_set_x(h, t).unwrap();
                        point_set_y(h, i).unwrap();
                        h
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut handles: Vec<u64> = threads.into_iter().flat_map(|t| t.join().unwrap()).collect();
    assert_eq!(live_points(), 800);

    handles.sort_unstable();
    handles.dedup();
    assert_eq!(handles.len(), 800);

    for h in handles {
        point_free(h).unwrap();
    }
    assert_eq!(live_points(), 0);
}

#[test]
#[serial]
fn test_shared_handle_across_threads() {
    clear_registry();
    let h = point_allocate();

    let threads: Vec<_> = (1..=8)
        .map(|t| {
            std::thread::spawn(move || {
                for _ in 0..500 {
                    point_set_x(h, t).unwrap();
                    let x = point_get_x(h).unwrap();
                    assert!((1..=8).contains(&x), "torn or foreign value {x}");
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }

    let last = point_free(h).unwrap();
    assert!((1..=8).contains(&last.x));
    assert_eq!(last.y, 0);
    assert_eq!(live_points(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    #[serial]
    fn prop_lifecycle_preserves_values(
        points in prop::collection::vec(any::<(i32, i32)>(), 1..32),
        free_reversed in any::<bool>(),
    ) {
        clear_registry();

        let handles: Vec<u64> = points
            .iter()
            .map(|&(x, y)| {
                let h = point_allocate();
                point_set_x(h, x).unwrap();
                point_set_y(h, y).unwrap();
                h
            })
            .collect();
        prop_assert_eq!(live_points(), points.len());

        for (&h, &(x, y)) in handles.iter().zip(&points) {
            prop_assert_eq!(point_get_x(h).unwrap(), x);
            prop_assert_eq!(point_get_y(h).unwrap(), y);
        }

        let mut order: Vec<usize> = (0..handles.len()).collect();
        if free_reversed {
            order.reverse();
        }
        for i in order {
            let (x, y) = points[i];
            prop_assert_eq!(point_free(handles[i]).unwrap(), Point::new(x, y));
            prop_assert_eq!(point_get_x(handles[i]), Err(PointError::InvalidHandle(handles[i])));
        }
        prop_assert_eq!(live_points(), 0);
    }
}
