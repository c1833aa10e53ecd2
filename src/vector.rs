/*
 * Vector Module
 *
 * This module defines the Vector2 value type used for boid position,
 * velocity and acceleration. All arithmetic returns new values except the
 * compound assignment operators, which update in place.
 */

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Magnitudes below this normalize to the zero vector
pub const NORMALIZE_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    // Squared length, for comparisons that can skip the square root
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is at or below [`NORMALIZE_EPSILON`].
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag > NORMALIZE_EPSILON {
            Self::new(self.x / mag, self.y / mag)
        } else {
            Self::ZERO
        }
    }

    /// Rescale to `max` if longer than `max`, otherwise return unchanged.
    pub fn limit(self, max: f32) -> Self {
        if self.magnitude_sq() > max * max {
            self.normalize() * max
        } else {
            self
        }
    }

    pub fn distance(self, other: Vector2) -> f32 {
        (self - other).magnitude()
    }

    pub fn distance_sq(self, other: Vector2) -> f32 {
        (self - other).magnitude_sq()
    }
}

pub fn dot(a: Vector2, b: Vector2) -> f32 {
    a.dot(b)
}

pub fn distance(a: Vector2, b: Vector2) -> f32 {
    a.distance(b)
}

pub fn distance_sq(a: Vector2, b: Vector2) -> f32 {
    a.distance_sq(b)
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

// Divisor must be non-zero
impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
    }
}
