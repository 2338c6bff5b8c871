use proptest::prelude::*;
use bytes::BytesMut;
use koml_math::*;
use koml_stack::*;

#[derive(Clone, Debug)]
enum Op {
    Push,
    Pop,
    Translate(f64, f64, f64),
    Rotate(f64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Push),
        4 => Just(Op::Pop),
        3 => (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y, z)| Op::Translate(x, y, z)),
        2 => (-3.0..3.0f64).prop_map(Op::Rotate),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// A stack behaves like a plain current value plus a `Vec` of saved values
    #[test]
    fn matches_vec_model(capacity in 0usize..6, ops in prop::collection::vec(op(), 0..64)) {
        let mut stack = Mat4x3Stack::<f64>::with_capacity(capacity);
        let mut current = f64m4x3::identity();
        let mut saved: Vec<f64m4x3> = Vec::new();

        for op in ops {
            match op {
                Op::Push => {
                    let res = stack.push();
                    if saved.len() < capacity {
                        prop_assert!(res.is_ok());
                        saved.push(current);
                    } else {
                        prop_assert_eq!(res.unwrap_err(), StackError::Overflow { capacity });
                    }
                },
                Op::Pop => match saved.pop() {
                    Some(prev) => {
                        prop_assert_eq!(stack.pop(), Ok(current));
                        current = prev;
                    },
                    None => prop_assert_eq!(stack.pop(), Err(StackError::Underflow)),
                },
                Op::Translate(x, y, z) => {
                    let mat = f64m4x3::create_translation(f64v3::new(x, y, z));
                    stack.mul(mat);
                    current = current * mat;
                },
                Op::Rotate(angle) => {
                    let mat = f64m4x3::create_rotation_y(angle);
                    stack.pre_mul(mat);
                    current = mat * current;
                },
                Op::Clear => {
                    stack.clear();
                    current = f64m4x3::identity();
                    saved.clear();
                },
            }

            prop_assert_eq!(*stack.current(), current);
            prop_assert_eq!(stack.saved(), saved.as_slice());
            prop_assert!(stack.depth() <= capacity);
        }

        let mut buf = BytesMut::new();
        stack.encode(&mut buf);
        prop_assert_eq!(buf.len(), stack.encoded_len());
        let decoded = Mat4x3Stack::<f64>::decode(&mut buf.freeze(), StackLimit::Bounded(capacity));
        prop_assert_eq!(decoded, Ok(stack));
    }
}
