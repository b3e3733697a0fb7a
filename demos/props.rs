use flag_bitset::{BitSet, FlagError, bitset, flag_family};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

flag_family! {
    pub struct Prop: 7 {
        is_high = 0,
        is_low = 1,
        is_tiny = 2,
        is_big = 4,
        is_huge = 6,
    }
}

type Props = BitSet<Prop>;

fn report(label: &str, props: &Props) {
    info!(
        label,
        size = props.len(),
        capacity = props.capacity(),
        empty = props.is_empty(),
        "{props:?}"
    );
}

fn main() -> Result<(), FlagError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let mut c1 = Props::new();
    c1.insert(Prop::is_high());
    c1.insert(Prop::is_high());
    c1.insert(Prop::is_low());

    let c2 = bitset![Prop::is_tiny(), Prop::is_big(), Prop::is_huge()];

    report("c1", &c1);
    c1.erase(Prop::is_low());
    report("c1", &c1);
    c1.erase(Prop::is_high());
    report("c1", &c1);
    report("c2", &c2);

    c1 = bitset![Prop::is_tiny(), Prop::is_low()];

    let mut cursor = c1.begin();
    while cursor != c1.end() {
        if cursor.get()? == Prop::is_low() {
            info!(position = cursor.position(), "found is_low with a cursor");
        }
        cursor.move_next()?;
    }

    for prop in &c1 {
        if prop == Prop::is_low() {
            info!("found is_low with an iterator");
        }
    }

    if let Err(err) = c1.end().get() {
        warn!(%err, "end cursor cannot be dereferenced");
    }

    Ok(())
}
