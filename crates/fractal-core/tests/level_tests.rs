use fractal_core::config::{MAX_DEPTH, MIN_DEPTH};
use fractal_core::level::LevelStore;
use fractal_core::part::{child_rotation, child_slot, parent_index, DIRECTIONS};
use glam::{Quat, Vec3};

#[test]
fn test_level_counts_follow_powers_of_five() {
    for depth in MIN_DEPTH..=MAX_DEPTH {
        let store = LevelStore::allocate(depth).unwrap();
        assert_eq!(store.depth(), depth);

        let mut expected = 1;
        for level in 0..depth {
            assert_eq!(
                store.level_len(level),
                expected,
                "depth {depth} level {level} node count"
            );
            assert_eq!(
                store.matrices[level].len(),
                expected,
                "depth {depth} level {level} matrix count"
            );
            expected *= 5;
        }
    }
}

#[test]
fn test_parent_index_maps_into_previous_level() {
    let store = LevelStore::allocate(4).unwrap();
    for level in 1..store.depth() {
        for i in 0..store.level_len(level) {
            let parent = parent_index(i);
            assert!(
                parent < store.level_len(level - 1),
                "node {i} at level {level} points at parent {parent} out of range"
            );
        }
    }

    assert_eq!(parent_index(0), 0);
    assert_eq!(parent_index(4), 0);
    assert_eq!(parent_index(5), 1);
    assert_eq!(parent_index(24), 4);
}

#[test]
fn test_child_slots_cycle_in_order() {
    let store = LevelStore::allocate(3).unwrap();

    // The root uses slot 0's direction and rotation.
    assert_eq!(store.parts[0][0].direction, DIRECTIONS[0]);
    assert_eq!(store.parts[0][0].rotation, child_rotation(0));

    for level in 1..store.depth() {
        for (i, part) in store.parts[level].iter().enumerate() {
            let slot = child_slot(i);
            assert_eq!(
                part.direction, DIRECTIONS[slot],
                "level {level} node {i} direction"
            );
            assert_eq!(
                part.rotation,
                child_rotation(slot),
                "level {level} node {i} rotation"
            );
        }
    }
}

#[test]
fn test_fresh_allocation_has_zeroed_frame_state() {
    let store = LevelStore::allocate(3).unwrap();
    for level in 0..store.depth() {
        for (i, part) in store.parts[level].iter().enumerate() {
            assert_eq!(part.spin_angle, 0.0, "level {level} node {i} spin");
            assert_eq!(
                part.world_position,
                Vec3::ZERO,
                "level {level} node {i} position"
            );
            assert_eq!(
                part.world_rotation,
                Quat::IDENTITY,
                "level {level} node {i} rotation"
            );
        }
        for (i, matrix) in store.matrices[level].iter().enumerate() {
            assert_eq!(matrix.c3, [0.0; 3], "level {level} matrix {i} translation");
        }
    }
}

#[test]
fn test_release_is_idempotent_and_allocate_reentrant() {
    let mut store = LevelStore::allocate(3).unwrap();
    store.release();
    assert_eq!(store.depth(), 0);
    assert_eq!(store.node_count(), 0);

    // No-op on an already-empty store.
    store.release();
    assert_eq!(store.depth(), 0);

    let store = LevelStore::allocate(5).unwrap();
    assert_eq!(store.depth(), 5);
    assert_eq!(store.node_count(), 1 + 5 + 25 + 125 + 625);
}
