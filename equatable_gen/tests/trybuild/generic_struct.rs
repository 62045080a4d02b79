//! Trybuild fixture verifying the derive carries generics and where clauses.

use equatable_gen::Reflect;

#[derive(Reflect)]
struct Tagged<T, const N: usize>
where
    T: Clone,
{
    value: T,
    tags: [u8; N],
}

fn main() {
    let tagged = Tagged { value: 1_u8, tags: [0_u8; 2] };
    assert_eq!(
        <Tagged<u8, 2> as Reflect>::FIELD_NAMES,
        ["value", "tags"].as_slice()
    );
    let _ = (tagged.value, tagged.tags);
}
