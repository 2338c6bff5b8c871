use koml_math::*;
use koml_stack::*;

/// Bounds of a small hierarchy, built by walking it with a matrix stack
#[test]
fn hierarchy_bounds_with_stack() {
    let unit = f32aabb::new(f32v3::set(-0.5), f32v3::set(0.5));

    let mut stack = Mat4x3Stack::<f64>::with_capacity(4);
    let mut bounds = f64aabb::new_empty();

    stack.mul(f64m4x3::create_translation(f64v3::new(10.0, 0.0, 0.0)));
    bounds = unit.transform_union(stack.current(), bounds);

    stack.scoped(|stack| {
        stack.pre_mul(f64m4x3::create_translation(f64v3::new(0.0, 3.0, 0.0)));
        bounds = unit.transform_union(stack.current(), bounds);

        stack.scoped(|stack| {
            stack.pre_mul(f64m4x3::create_scale(f64v3::set(2.0)));
            bounds = unit.transform_union(stack.current(), bounds);
        }).unwrap();
    }).unwrap();

    assert_eq!(stack.depth(), 0);
    assert_eq!(bounds.min, f64v3::new(9.0, -0.5, -1.0));
    assert_eq!(bounds.max, f64v3::new(11.0, 4.0, 1.0));
    assert!(bounds.test_point(f64v3::new(10.0, 3.9, 0.9)));
    assert!(!bounds.test_point(f64v3::new(10.0, -0.6, 0.0)));
}
