use flag_bitset::{Flag, FlagValue, Token, flag_family};

flag_family! {
    pub struct Prop: 7 {
        is_high = 0,
        is_low = 1,
    }
}

fn main() {
    let forged = Prop::from_value(FlagValue::new(5), Token { _sealed: () });
    assert_eq!(forged.name(), Prop::is_low().name());
    assert_ne!(forged, Prop::is_high());
}
