use pig_tetris::core::Arena;

#[test]
fn test_new_arena_is_empty() {
    let arena = Arena::new(15, 30);
    assert_eq!(arena.width(), 15);
    assert_eq!(arena.height(), 30);
    assert_eq!(arena.cells().len(), 15 * 30);
    assert_eq!(arena.filled_count(), 0);
    assert!((0..30).all(|y| arena.row(y).len() == 15));
}

#[test]
fn test_out_of_bounds_reads_are_none() {
    let arena = Arena::new(3, 2);
    assert_eq!(arena.get(-1, 0), None);
    assert_eq!(arena.get(3, 0), None);
    assert_eq!(arena.get(0, -1), None);
    assert_eq!(arena.get(0, 2), None);
    assert_eq!(arena.get(2, 1), Some(0));
    assert!(!arena.is_free(3, 0));
}

#[test]
fn test_out_of_bounds_writes_are_ignored() {
    let mut arena = Arena::new(3, 2);
    assert!(!arena.set(5, 5, 1));
    assert!(arena.set(1, 1, 6));
    assert_eq!(arena.filled_count(), 1);
}

#[test]
fn test_remove_row_shifts_rows_above() {
    let mut arena = Arena::from_rows(&[
        &[1, 0, 0],
        &[0, 2, 0],
        &[3, 3, 3],
        &[0, 0, 4],
    ]);
    arena.remove_row(2);

    assert_eq!(
        arena,
        Arena::from_rows(&[&[0, 0, 0], &[1, 0, 0], &[0, 2, 0], &[0, 0, 4]])
    );
}

#[test]
fn test_row_full_detection() {
    let arena = Arena::from_rows(&[&[1, 2, 3], &[1, 0, 3]]);
    assert!(arena.is_row_full(0));
    assert!(!arena.is_row_full(1));
}

#[test]
fn test_occupied_lists_coordinates() {
    let arena = Arena::from_rows(&[&[0, 7], &[5, 0]]);
    let cells: Vec<_> = arena.occupied().collect();
    assert_eq!(cells, vec![(1, 0, 7), (0, 1, 5)]);
}

#[test]
fn test_clear_and_copy_from() {
    let mut a = Arena::from_rows(&[&[1, 1], &[2, 2]]);
    let mut b = Arena::new(0, 0);
    b.copy_from(&a);
    assert_eq!(a, b);

    a.clear();
    assert_eq!(a.filled_count(), 0);
    assert_eq!(b.filled_count(), 4);
}
