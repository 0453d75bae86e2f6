//! Immutable 2-D vectors and the operations the flight model needs.

use std::ops::{Add, Mul, Sub};

/// A pair of real components. Used for positions, velocities, directions
/// and forces alike.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// The zero vector, also the direction of anything without one.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Vector {
        Vector { x, y }
    }
}

/// Componentwise sum `a + b`.
pub fn add(a: Vector, b: Vector) -> Vector {
    Vector::new(a.x + b.x, a.y + b.y)
}

/// `a - b`, componentwise.
pub fn subtract(a: Vector, b: Vector) -> Vector {
    Vector::new(a.x - b.x, a.y - b.y)
}

/// Multiplies both components of `v` by `k`.
pub fn scale(v: Vector, k: f64) -> Vector {
    Vector::new(v.x * k, v.y * k)
}

/// Euclidean length of `v`. Never negative.
pub fn magnitude(v: Vector) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector in the direction of `v`. The zero vector has no direction
/// and normalizes to itself.
pub fn normalize(v: Vector) -> Vector {
    let mag = magnitude(v);
    if mag == 0.0 {
        return Vector::ZERO;
    }
    Vector::new(v.x / mag, v.y / mag)
}

/// Applies the standard rotation matrix. Positive angles turn
/// counter-clockwise with y pointing up, clockwise on a y-down screen.
pub fn rotate(v: Vector, angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Angle of `v` from the positive x axis, `atan2(y, x)`.
pub fn heading(v: Vector) -> f64 {
    v.y.atan2(v.x)
}

/// True when neither component is NaN or infinite.
pub fn is_finite(v: Vector) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector { add(self, rhs) }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector { subtract(self, rhs) }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector { scale(self, k) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn close(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn magnitude_of_3_4() {
        assert!((magnitude(Vector::new(3.0, 4.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn normalize_has_unit_length() {
        for v in [
            Vector::new(3.0, 4.0),
            Vector::new(-0.001, 0.0),
            Vector::new(1e6, -2e6),
            Vector::new(-7.5, -0.25),
        ] {
            assert!((magnitude(normalize(v)) - 1.0).abs() < EPS, "{:?}", v);
        }
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(normalize(Vector::ZERO), Vector::ZERO);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector::new(10.0, 0.0);
        assert!(close(rotate(v, FRAC_PI_2), Vector::new(0.0, 10.0)));
        assert!(close(rotate(v, -FRAC_PI_2), Vector::new(0.0, -10.0)));
        assert!(close(rotate(v, PI), Vector::new(-10.0, 0.0)));
    }

    #[test]
    fn operators_match_functions() {
        let a = Vector::new(1.5, -2.0);
        let b = Vector::new(0.5, 4.0);
        assert_eq!(a + b, add(a, b));
        assert_eq!(a - b, subtract(a, b));
        assert_eq!(a * 3.0, scale(a, 3.0));
    }

    #[test]
    fn heading_of_axes() {
        assert_eq!(heading(Vector::new(1.0, 0.0)), 0.0);
        assert!((heading(Vector::new(0.0, 1.0)) - FRAC_PI_2).abs() < EPS);
        assert_eq!(heading(Vector::ZERO), 0.0);
    }

    #[test]
    fn non_finite_detected() {
        assert!(is_finite(Vector::new(1.0, 2.0)));
        assert!(!is_finite(Vector::new(f64::NAN, 0.0)));
        assert!(!is_finite(Vector::new(0.0, f64::INFINITY)));
    }
}
