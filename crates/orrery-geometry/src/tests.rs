use crate::grassmann::*;
use crate::linear_map::LinearMap;
use crate::permutation::{CoordinatePermutation, Permutation};
use crate::rotation::Rotation;
use crate::sign::Sign;
use nalgebra::Vector3;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct World;
impl crate::frames::Frame for World {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mirror;
impl crate::frames::Frame for Mirror {}

fn v(x: f64, y: f64, z: f64) -> Vector<World> {
    Vector::new(Vector3::new(x, y, z))
}

fn b(x: f64, y: f64, z: f64) -> Bivector<World> {
    Bivector::new(Vector3::new(x, y, z))
}

fn assert_close(left: Vector3<f64>, right: Vector3<f64>, tolerance: f64) {
    assert!(
        (left - right).norm() <= tolerance,
        "{left:?} != {right:?} (tolerance {tolerance})"
    );
}

#[test]
fn test_wedge_antisymmetry() {
    let a = v(3.0, -42.0, 0.0);
    let c = v(-PI, -std::f64::consts::E, -1.0);

    let ac = a.wedge(c);
    let ca = c.wedge(a);
    assert_eq!(ac, -ca);
    assert_eq!(a.wedge(a), Bivector::zero());
}

#[test]
fn test_wedge_grades() {
    let a = v(1.0, 2.0, 3.0);
    let c = v(4.0, 5.0, 6.0);
    let beta = b(2.0, 2.0, 2.0);

    // vector ∧ vector has the cross product's coordinates.
    assert_eq!(
        a.wedge(c).coordinates(),
        Vector3::new(1.0, 2.0, 3.0).cross(&Vector3::new(4.0, 5.0, 6.0))
    );

    // vector ∧ bivector is symmetric under swapping the operands.
    assert_eq!(a.wedge(beta), beta.wedge(a));
    assert_eq!(a.wedge(beta).value(), 2.0 + 4.0 + 6.0);
}

#[test]
fn test_lagrange_identity() {
    // The strongly typed version of a × (b × c) = b (a·c) - c (a·b).
    let vectors = [
        v(3.0, -42.0, 0.0),
        v(-PI, -std::f64::consts::E, -1.0),
        v(2.0, 2.0, 2.0),
        v(0.02, 0.6, 5.4),
    ];
    let beta = b(-PI, -std::f64::consts::E, -1.0);
    let gamma = b(2.0, 2.0, 2.0);

    for a in vectors {
        let left = a * commutator(&beta, &gamma);
        let right = beta * a.wedge(gamma) - gamma * a.wedge(beta);
        let scale = left.norm().max(right.norm()).max(1.0);
        assert_close(left.coordinates(), right.coordinates(), 1e-12 * scale);
    }
}

#[test]
fn test_inner_product() {
    let a = v(1.0, 2.0, 3.0);
    let c = v(4.0, -5.0, 6.0);
    assert_eq!(a.dot(&c), 4.0 - 10.0 + 18.0);
    assert_eq!(a.dot(&a), 14.0);

    let t = Trivector::<World>::new(-3.0);
    let u = Trivector::<World>::new(0.5);
    assert_eq!(t.dot(&u), -1.5);
}

#[test]
fn test_permutation_group_laws() {
    type P = Permutation<World, World>;
    let identity = P::identity();

    for p in CoordinatePermutation::ALL {
        let p = P::new(p);
        assert_eq!(identity, p * p.inverse());
        assert_eq!(identity, p.inverse() * p);
    }

    // Associativity, exhaustively: the group has only 216 triples.
    for p in CoordinatePermutation::ALL {
        for q in CoordinatePermutation::ALL {
            for r in CoordinatePermutation::ALL {
                let (p, q, r) = (P::new(p), P::new(q), P::new(r));
                assert_eq!((p * q) * r, p * (q * r));
            }
        }
    }
}

#[test]
fn test_permutation_identity_action() {
    let identity = Permutation::<World, World>::identity();
    let a = v(5.0, -7.0, 11.0);
    assert_eq!(a, identity.apply_vector(&a));
}

#[test]
fn test_permutation_determinants() {
    type P = Permutation<World, World>;
    for p in CoordinatePermutation::ALL {
        for q in CoordinatePermutation::ALL {
            let (p, q) = (P::new(p), P::new(q));
            assert_eq!((p * q).determinant(), p.determinant() * q.determinant());
        }
    }
}

#[test]
fn test_permutation_action() {
    let yzx = Permutation::<World, Mirror>::new(CoordinatePermutation::Yzx);
    let a = Vector::<World>::new(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(
        yzx.apply_vector(&a).coordinates(),
        Vector3::new(2.0, 3.0, 1.0)
    );

    // An improper permutation flips pseudo-vectors relative to vectors.
    let xzy = Permutation::<World, Mirror>::new(CoordinatePermutation::Xzy);
    assert!(xzy.determinant().is_negative());
    let beta = Bivector::<World>::new(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(
        xzy.apply_bivector(&beta).coordinates(),
        Vector3::new(-1.0, -3.0, -2.0)
    );
    let t = Trivector::<World>::new(4.0);
    assert_eq!(xzy.apply_trivector(&t).value(), -4.0);
}

#[test]
fn test_forget_matches_permutation() {
    let a = Vector::<World>::new(Vector3::new(0.3, -2.7, 41.0));
    let beta = Bivector::<World>::new(Vector3::new(-5.0, 0.1, 7.5));
    let t = Trivector::<World>::new(-1.25);

    for p in CoordinatePermutation::ALL {
        let permutation = Permutation::<World, Mirror>::new(p);
        let map = permutation.forget();
        assert_eq!(map.determinant(), permutation.determinant());
        assert_close(
            map.apply_vector(&a).coordinates(),
            permutation.apply_vector(&a).coordinates(),
            1e-13 * a.norm(),
        );
        assert_close(
            map.apply_bivector(&beta).coordinates(),
            permutation.apply_bivector(&beta).coordinates(),
            1e-13 * beta.norm(),
        );
        let mapped = map.apply_trivector(&t).value();
        let expected = permutation.apply_trivector(&t).value();
        assert!((mapped - expected).abs() <= 1e-13 * t.value().abs());
    }
}

#[test]
fn test_rotation_round_trip() {
    let rotation = Rotation::<World, Mirror>::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 1.2);
    let a = v(4.0, -2.0, 9.0);
    let there = rotation.apply_vector(&a);
    let back = rotation.inverse().apply_vector(&there);
    assert_close(back.coordinates(), a.coordinates(), 1e-12 * a.norm());
    // Rotations preserve the inner product.
    assert!((there.norm() - a.norm()).abs() <= 1e-12 * a.norm());
}

#[test]
fn test_rotation_composition() {
    let quarter = Rotation::<World, World>::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), PI / 2.0);
    let half = quarter * quarter;
    let a = v(1.0, 0.0, 0.0);
    assert_close(
        half.apply_vector(&a).coordinates(),
        Vector3::new(-1.0, 0.0, 0.0),
        1e-12,
    );
}

#[test]
fn test_sign_scaling_of_multivectors() {
    let a = v(1.0, -2.0, 3.0);
    assert_eq!((a * 2.0).coordinates(), Vector3::new(2.0, -4.0, 6.0));
    assert_eq!((2.0 * a).coordinates(), (a * 2.0).coordinates());
    assert_eq!((a / 2.0).coordinates(), Vector3::new(0.5, -1.0, 1.5));
    assert_eq!((-a).coordinates(), Vector3::new(-1.0, 2.0, -3.0));
    assert_eq!(Sign::NEGATIVE * a.coordinates(), (-a).coordinates());
}
