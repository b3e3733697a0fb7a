use flag_bitset::flag_family;

flag_family! { pub struct Tiny: 2 { first = 0, too_far = 2 } }

fn main() {
    assert_ne!(Tiny::first(), Tiny::too_far());
}
