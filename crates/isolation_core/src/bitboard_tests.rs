use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // (0, 0)
    assert_eq!(Bitboard::from_square(7).0, 128); // (0, 7)
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // (7, 7)
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::from_square(0).popcount(), 1);
    assert_eq!(Bitboard::COL_0.popcount(), 8);
}

#[test]
fn test_iterator() {
    let bb = Bitboard(0b1010);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_board_mask() {
    let mask = Bitboard::board_mask(3, 3);
    assert_eq!(mask.popcount(), 9);
    assert!(mask.contains(0));
    assert!(mask.contains(2));
    assert!(!mask.contains(3)); // (0, 3) is off a 3-wide board
    assert!(mask.contains(8 + 2)); // (1, 2)
    assert!(mask.contains(2 * 8 + 2)); // (2, 2)
    assert!(!mask.contains(3 * 8)); // (3, 0)

    assert_eq!(Bitboard::board_mask(8, 8).popcount(), 64);
    assert_eq!(Bitboard::board_mask(7, 7).popcount(), 49);
}

#[test]
fn test_column_masks() {
    assert!(!Bitboard::NOT_COL_0.contains(0));
    assert!(!Bitboard::NOT_COL_7.contains(7));
    assert!(!Bitboard::NOT_COL_7.contains(63));
    assert_eq!(Bitboard::NOT_COL_7.popcount(), 56);
    assert_eq!(
        Bitboard::from_square(3) | Bitboard::from_square(5),
        Bitboard(0b10_1000)
    );
}
