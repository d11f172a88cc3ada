use crate::*;

#[test]
fn test_magnitude_pythagorean_triple() {
    let v = Vector { x: 3.0, y: 4.0, z: 0.0 };
    assert!(libm::fabsf(v.magnitude() - 5.0) < 1e-6);
}

#[test]
fn test_magnitude_zero_vector() {
    assert!(Vector::zero().magnitude() == 0.0);
}

#[test]
fn test_scale_by_scalar() {
    let v = Vector { x: 1.0, y: -2.0, z: 0.5 };
    let result = v * 2.0;
    let expected = Vector { x: 2.0, y: -4.0, z: 1.0 };
    assert!(result.approx_eq(&expected, 1e-6));
}

#[test]
fn test_add_and_sub_are_inverse() {
    let v1 = Vector { x: 1.0, y: 2.0, z: 3.0 };
    let v2 = Vector { x: -0.5, y: 4.0, z: 9.5 };
    let result = (v1 + v2) - v2;
    assert!(result.approx_eq(&v1, 1e-6));
}

#[test]
fn test_from_array_ordering() {
    let v = Vector::from([1.0, 2.0, 3.0]);
    assert!(v.x == 1.0 && v.y == 2.0 && v.z == 3.0);
}
