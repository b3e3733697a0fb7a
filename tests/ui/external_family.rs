use flag_bitset::{BitSet, FlagError, bitset, flag_family};

flag_family! {
    /// Directions a sensor can report.
    pub struct Direction: 20 {
        /// Pointing up.
        up = 0,
        down = 1,
        left = 17,
        right = 19,
    }
}

fn main() {
    let mut directions = BitSet::<Direction>::new();
    directions.insert(Direction::right());
    directions.insert(Direction::up());
    assert_eq!(directions.word(), (1u32 << 19) | 1);
    assert_eq!(directions.capacity(), 20);

    let horizontal = bitset![Direction::left(), Direction::right()];
    assert!(horizontal.contains(Direction::left()));
    assert!(!horizontal.contains(Direction::down()));

    let names: Vec<&str> = horizontal.iter().map(Direction::name).collect();
    assert_eq!(names, ["left", "right"]);
    assert_eq!(format!("{horizontal:?}"), "{Direction::left, Direction::right}");

    assert_eq!(horizontal.end().get(), Err(FlagError::DereferenceAtEnd));
}
