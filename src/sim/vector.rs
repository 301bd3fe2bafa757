//! Immutable 2D point/displacement
//!
//! Grid units: x grows to the right, y grows downward (row index).

use std::ops::{Add, Mul};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D vector value. Never mutated after creation; every operation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec2);

impl Vector {
    pub const ZERO: Vector = Vector(Vec2::ZERO);
    pub const ONE: Vector = Vector(Vec2::ONE);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Componentwise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        Self(self.0 + other.0)
    }

    /// Componentwise scale
    #[inline]
    pub fn times(self, k: f32) -> Vector {
        Self(self.0 * k)
    }

    /// Both components are finite (no NaN, no infinity)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        self.0
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, k: f32) -> Vector {
        self.times(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plus_and_times() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -5.0);
        assert_eq!(a.plus(b), Vector::new(4.0, -3.0));
        assert_eq!(a.times(2.0), Vector::new(2.0, 4.0));
        assert_eq!(a.times(1.0), a);
        assert_eq!(a + b, a.plus(b));
        assert_eq!(a * -1.0, Vector::new(-1.0, -2.0));
    }

    #[test]
    fn test_operands_untouched() {
        let a = Vector::new(1.0, 1.0);
        let _ = a.plus(Vector::ONE).times(3.0);
        assert_eq!(a, Vector::new(1.0, 1.0));
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Vector::default(), Vector::ZERO);
    }

    #[test]
    fn test_finite() {
        assert!(Vector::new(0.5, -2.0).is_finite());
        assert!(!Vector::new(f32::NAN, 0.0).is_finite());
        assert!(!Vector::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Vector::new(1.5, 2.0)).unwrap();
        assert_eq!(json, "[1.5,2.0]");
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Vector::new(1.5, 2.0));
    }

    proptest! {
        #[test]
        fn prop_plus_is_componentwise(
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let sum = Vector::new(ax, ay).plus(Vector::new(bx, by));
            prop_assert_eq!(sum, Vector::new(ax + bx, ay + by));
        }

        #[test]
        fn prop_times_is_componentwise(x in -1e3f32..1e3, y in -1e3f32..1e3, k in -10f32..10.0) {
            prop_assert_eq!(Vector::new(x, y).times(k), Vector::new(x * k, y * k));
        }
    }
}
