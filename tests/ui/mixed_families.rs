use flag_bitset::{BitSet, flag_family};

flag_family! { pub struct Color: 3 { red = 0 } }
flag_family! { pub struct Shape: 3 { round = 0 } }

fn main() {
    let mut colors = BitSet::<Color>::new();
    colors.insert(Color::red());
    colors.insert(Shape::round());
}
