use flag_bitset::{Capacity, Width};

fn main() {
    let _ = <Capacity<65> as Width>::CAPACITY;
}
