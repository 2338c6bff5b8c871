use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use koml_math::*;

fn random_vec(rng: &mut StdRng, min: f64, max: f64) -> f64v3 {
    f64v3::new(rng.gen_range(min..max), rng.gen_range(min..max), rng.gen_range(min..max))
}

fn random_transform(rng: &mut StdRng) -> f64m4x3 {
    f64m4x3::create_scale(random_vec(rng, 0.1, 4.0)) *
    f64m4x3::create_rotation_x(rng.gen_range(-3.2..3.2)) *
    f64m4x3::create_rotation_y(rng.gen_range(-3.2..3.2)) *
    f64m4x3::create_rotation_z(rng.gen_range(-3.2..3.2)) *
    f64m4x3::create_translation(random_vec(rng, -100.0, 100.0))
}

#[test]
fn transformed_box_encloses_transformed_points() {
    let mut rng = StdRng::seed_from_u64(0x6b6f_6d6c);

    for _ in 0..200 {
        let min = random_vec(&mut rng, -10.0, 10.0);
        let aabb = f64aabb::new(min, min + random_vec(&mut rng, 0.0, 5.0));
        let mat = random_transform(&mut rng);
        let res = aabb.transform(&mat).add_margin(1e-9);

        for _ in 0..16 {
            let t = random_vec(&mut rng, 0.0, 1.0);
            let point = aabb.min + aabb.size() * t;
            assert!(res.test_point(mat.transform_point(point)), "{} escapes {}", point, res);
        }
    }
}

#[test]
fn transformed_box_is_tight() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..100 {
        let min = random_vec(&mut rng, -10.0, 10.0);
        let aabb = f64aabb::new(min, min + random_vec(&mut rng, 0.0, 5.0));
        let mat = random_transform(&mut rng);
        let res = aabb.transform(&mat);

        // Every face of the result is touched by a transformed corner
        for axis in 0..3 {
            let corners = (0..8).map(|idx| mat.transform_point(aabb.corner(idx))[axis]);
            let (lo, hi) = corners.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), val| (lo.min(val), hi.max(val)));
            assert_abs_diff_eq!(res.get_min(axis), lo, epsilon = 1e-12);
            assert_abs_diff_eq!(res.get_max(axis), hi, epsilon = 1e-12);
        }
    }
}

#[test]
fn accumulating_many_boxes() {
    let mut rng = StdRng::seed_from_u64(3);
    let local = f32aabb::from_min_max(-1.0, 1.0);

    let mut fused = f64aabb::new_empty();
    let mut two_step = f64aabb::new_empty();
    for _ in 0..64 {
        let mat = random_transform(&mut rng);
        fused = local.transform_union(&mat, fused);
        two_step = two_step.union(local.transform(&mat));
    }

    assert_eq!(fused, two_step);
    assert!(!fused.is_empty());
    assert!(fused.volume() > 0.0);
}

#[test]
fn single_precision_matches_double_precision() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let min = random_vec(&mut rng, -10.0, 10.0);
        let wide = f64aabb::new(min, min + random_vec(&mut rng, 0.0, 5.0));
        let narrow = wide.cast::<f32>();
        let mat = random_transform(&mut rng);

        let res_wide = narrow.cast::<f64>().transform(&mat);
        let mat_narrow: f32m4x3 = mat.cast();
        let res_narrow = narrow.transform(&mat_narrow);
        assert!(res_narrow.cast::<f64>().is_close_to(res_wide, 1e-2));
    }
}
