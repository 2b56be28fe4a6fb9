use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spacehex_geometry::core::math::{midpoint, point_from_parametric, vec2d, LineSegment2D, Vec2D};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8};

const TEST_ROTATION_ANGLES: &[f64] = &[FRAC_PI_8, FRAC_PI_6, FRAC_PI_4, FRAC_PI_3];

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment2D {
    LineSegment2D::new(vec2d(x0, y0), vec2d(x1, y1))
}

fn rand_sign(rng: &mut StdRng) -> f64 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}

/// Intersection existence must not depend on end point order.
fn check_all_intersects(a: LineSegment2D, b: LineSegment2D) {
    assert!(a.intersects(b).is_some(), "does not intersect {}, {}", a, b);
    assert!(
        a.swap().intersects(b).is_some(),
        "does not intersect {}, {}",
        a,
        b
    );
    assert!(
        a.intersects(b.swap()).is_some(),
        "does not intersect {}, {}",
        a,
        b
    );
    assert!(
        a.swap().intersects(b.swap()).is_some(),
        "does not intersect {}, {}",
        a,
        b
    );
}

fn check_all_not_intersects(a: LineSegment2D, b: LineSegment2D) {
    assert!(a.intersects(b).is_none(), "does intersect {}, {}", a, b);
    assert!(
        a.swap().intersects(b).is_none(),
        "does intersect {}, {}",
        a,
        b
    );
    assert!(
        a.intersects(b.swap()).is_none(),
        "does intersect {}, {}",
        a,
        b
    );
    assert!(
        a.swap().intersects(b.swap()).is_none(),
        "does intersect {}, {}",
        a,
        b
    );
}

#[test]
fn crossing_segments() {
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-1.0, 1.0, 1.0, -1.0);
    let pt = a.intersects(b).unwrap();
    check_all_intersects(a, b);
    assert!((pt - Vec2D::zero()).length() < 0.01);
}

#[test]
fn crossing_segments_rotated() {
    // rotating the crossing segment about the intersection point must not
    // change the outcome
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-1.0, 1.0, 1.0, -1.0);
    for &angle in TEST_ROTATION_ANGLES {
        let rotated = LineSegment2D::new(
            b.start.rotate_about(Vec2D::zero(), angle),
            b.end.rotate_about(Vec2D::zero(), angle),
        );
        let pt = a.intersects(rotated).unwrap();
        check_all_intersects(a, rotated);
        assert!((pt - Vec2D::zero()).length() < 0.01);
    }
}

#[test]
fn collinear_disjoint_segments() {
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-2.0, -2.0, -1.5, -1.5);
    check_all_not_intersects(a, b);
}

#[test]
fn collinear_touching_and_overlapping_segments() {
    // touching at one end point
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-2.0, -2.0, -1.0, -1.0);
    check_all_intersects(a, b);

    // fully containing
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-2.0, -2.0, 2.0, 2.0);
    check_all_intersects(a, b);

    // partially overlapping
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-0.5, -0.5, 2.0, 2.0);
    check_all_intersects(a, b);

    // degenerate segment lying on the segment
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-0.5, -0.5, -0.5, -0.5);
    check_all_intersects(a, b);
}

#[test]
fn intersect_in_end_point() {
    let a = seg(-1.0, 1.0, 1.0, 1.0);
    let b = seg(-2.0, -2.0, 1.0, 1.0);
    let pt = a.intersects(b).unwrap();
    check_all_intersects(a, b);
    assert!((pt - vec2d(1.0, 1.0)).length() < 0.01);
}

#[test]
fn intersect_in_shared_point() {
    let a = seg(-2.0, -2.0, 1.0, 1.0);
    let b = seg(1.0, 1.0, 3.0, -1.0);
    let pt = a.intersects(b).unwrap();
    check_all_intersects(a, b);
    assert!((pt - vec2d(1.0, 1.0)).length() < 0.01);
}

#[test]
fn distant_short_segments_do_not_intersect() {
    let a = seg(-341.0, -223.0, -292.0, -194.0);
    let b = seg(
        445.8586189801885,
        246.7999999999996,
        447.3242977416373,
        243.5499999999996,
    );
    check_all_not_intersects(a, b);
}

#[test]
fn perpendicular_through_midpoint_always_intersects() {
    let mut rng = StdRng::seed_from_u64(577215);

    for _ in 0..=100 {
        let start = vec2d(
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
        );
        let extent = vec2d(
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
        );
        let a = LineSegment2D::new(start, start + extent);

        let mid = midpoint(a.start, a.end);
        let normal = a.vector().perp().unit();
        let b = LineSegment2D::new(mid - normal.scale(20.0), mid + normal.scale(20.0));

        check_all_intersects(a, b);
    }
}

#[test]
fn random_crossing_segments_always_intersect() {
    let mut rng = StdRng::seed_from_u64(662607);

    for _ in 0..=100 {
        let start = vec2d(
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
        );
        let extent = vec2d(
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
        );
        let a = LineSegment2D::new(start, start + extent);

        // end points on opposite sides of the segment, feet within the span
        let normal = a.vector().perp().unit();
        let side = rand_sign(&mut rng);
        let b = LineSegment2D::new(
            point_from_parametric(a.start, a.end, rng.gen_range(0.1..0.9))
                + normal.scale(side * rng.gen_range(0.5..50.0)),
            point_from_parametric(a.start, a.end, rng.gen_range(0.1..0.9))
                - normal.scale(side * rng.gen_range(0.5..50.0)),
        );

        check_all_intersects(a, b);
    }
}

#[test]
fn parallel_offset_segments_never_intersect() {
    let mut rng = StdRng::seed_from_u64(602214);

    for _ in 0..=100 {
        let start = vec2d(
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
        );
        let extent = vec2d(
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
            (rng.gen::<f64>() + 0.1) * 10.0 * rand_sign(&mut rng),
        );
        let a = LineSegment2D::new(start, start + extent);

        // translate the whole segment well off its own line
        let offset = a.vector().perp().unit().scale(rng.gen_range(1.0..100.0))
            + a.vector().scale(rng.gen_range(0.1..100.0));
        let b = LineSegment2D::new(a.start + offset, a.end + offset);

        check_all_not_intersects(a, b);
    }
}

#[test]
fn intersection_point_is_symmetric() {
    let a = seg(-1.0, -1.0, 1.0, 1.0);
    let b = seg(-1.0, 1.0, 1.0, -1.0);
    for (sa, sb) in [
        (a, b),
        (a.swap(), b),
        (a, b.swap()),
        (a.swap(), b.swap()),
    ] {
        let pt = sa.intersects(sb).unwrap();
        assert!((pt - Vec2D::zero()).length() < 0.01);
    }
}
