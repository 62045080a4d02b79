//! Trybuild fixture verifying `#[equatable(crate = "...")]` works with a
//! genuine rename via `use ... as`.

use equatable_gen as swift_gen;
use swift_gen::Reflect;

#[derive(Reflect)]
#[equatable(crate = "swift_gen")]
struct AliasedPoint {
    x: i32,
    y: i32,
}

fn main() {
    let point = AliasedPoint { x: 1, y: 2 };
    let shape = point.shape();
    assert_eq!(shape.fields(), ["x", "y"]);
    let _ = (point.x, point.y);
}
