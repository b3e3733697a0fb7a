use flag_bitset::{BitSet, Capacity, Flag, FlagError, FlagValue, Token};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
struct Lane(FlagValue<Capacity<40>>);

impl Lane {
    fn first() -> Self {
        Self(FlagValue::new(0))
    }

    fn last() -> Self {
        Self(FlagValue::new(39))
    }
}

impl Flag for Lane {
    type Width = Capacity<40>;

    fn from_value(value: FlagValue<Capacity<40>>, _: Token) -> Self {
        Self(value)
    }

    fn value(self) -> FlagValue<Capacity<40>> {
        self.0
    }
}

fn main() -> Result<(), FlagError> {
    let lanes: BitSet<Lane> = [Lane::last(), Lane::first()].into_iter().collect();
    assert_eq!(lanes.word(), (1u64 << 39) | 1);

    let mut cursor = lanes.begin();
    assert_eq!(cursor.get()?, Lane::first());
    cursor.move_next()?;
    assert_eq!(cursor.get()?, Lane::last());
    cursor.move_next()?;
    assert!(cursor.is_end());
    assert_eq!(cursor.move_next(), Err(FlagError::AdvancePastEnd));

    assert_eq!(lanes.iter().rev().collect::<Vec<_>>(), [Lane::last(), Lane::first()]);
    assert_eq!(
        FlagValue::<Capacity<40>>::try_new(40),
        Err(FlagError::OutOfRange {
            position: 40,
            capacity: 40
        })
    );
    Ok(())
}
