//! Generic linear algebra and geometry for real-time rendering code
//!
//! Provides small copyable vector and matrix types over `i32`, `f32` and `f64`, axis-aligned bounding boxes with
//! their hot-path queries (union, containment, overlap, ray casting and transform-then-union) and a ray/box slab test.
//!
//! Matrices use the row-vector convention: a point is transformed as `[x y z 1] * M`, so the translation lives in row 3.

mod numeric;
pub use numeric::*;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod ray;
pub use ray::*;

mod intersections;
pub use intersections::*;

mod aabb;
pub use aabb::*;
