use flag_bitset::{Capacity, Width};

fn main() {
    let _ = <Capacity<0> as Width>::CAPACITY;
}
