use super::*;

#[test]
fn two_tiles_share_one_column() {
    let mut tiler = Tiler::new(2);
    assert_eq!(tiler.next_position(4.0, 13.0), Position::new(3.5, 8.0, 0.0));
    assert_eq!(tiler.next_position(13.0, 4.0), Position::new(8.0, 19.5, 0.0));
    assert_eq!(tiler.bounds(), Position::new(16.0, 23.0, 0.0));
}

#[test]
fn full_column_wraps_to_the_right_of_the_widest_tile() {
    let mut tiler = Tiler::new(4);
    let placed: Vec<_> = (0..4).map(|_| tiler.next_position(4.0, 4.0)).collect();

    assert_eq!(placed[0], Position::new(3.5, 3.5, 0.0));
    assert_eq!(placed[1], Position::new(3.5, 10.5, 0.0));
    // Third tile exceeds the row length of 2 and starts a new column at x = 4 + 3.
    assert_eq!(placed[2], Position::new(10.5, 3.5, 0.0));
    assert_eq!(placed[3], Position::new(10.5, 10.5, 0.0));
    assert_eq!(tiler.bounds(), Position::new(14.0, 14.0, 0.0));
}

#[test]
fn no_wrap_while_column_stays_narrower_than_widest_tile() {
    let mut tiler = Tiler::new(2);
    tiler.next_position(100.0, 1.0);
    tiler.next_position(1.0, 1.0);
    // Past the row length, but y_ref (8) + depth (1) is still below max width (100).
    let third = tiler.next_position(1.0, 1.0);
    assert_eq!(third, Position::new(2.0, 10.0, 0.0));
    assert_eq!(tiler.bounds(), Position::new(103.0, 12.0, 0.0));
}

#[test]
fn custom_margin_is_used_for_centers_and_bounds() {
    let mut tiler = Tiler::with_margin(1, 0.0);
    assert_eq!(tiler.margin(), 0.0);
    assert_eq!(tiler.next_position(6.0, 2.0), Position::new(3.0, 1.0, 0.0));
    assert_eq!(tiler.bounds(), Position::new(6.0, 2.0, 0.0));
}

#[test]
fn bounds_before_any_tile_is_just_the_margin() {
    let tiler = Tiler::new(0);
    assert_eq!(tiler.bounds(), Position::new(DEFAULT_MARGIN, DEFAULT_MARGIN, 0.0));
}

#[test]
fn partial_bounds_grow_with_each_tile() {
    let mut tiler = Tiler::new(3);
    tiler.next_position(5.0, 5.0);
    let first = tiler.bounds();
    tiler.next_position(5.0, 5.0);
    let second = tiler.bounds();
    assert_eq!(first, Position::new(8.0, 8.0, 0.0));
    assert_eq!(second, Position::new(8.0, 16.0, 0.0));
}
