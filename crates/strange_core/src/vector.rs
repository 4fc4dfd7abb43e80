use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::traits::Scalar;

/// A three-component vector over any `Scalar`.
///
/// Every operation returns a new value; the `*Assign` operators are the
/// only in-place variants. Trajectory points are plain `Vec3` values, so a
/// simulation step never aliases the point it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn is_zero(self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn mag_sq(self) -> T {
        self.dot(self)
    }

    pub fn mag(self) -> T {
        self.mag_sq().sqrt()
    }

    /// Returns the unit vector with this vector's direction.
    ///
    /// Zero and unit vectors are returned unchanged, so this never divides
    /// by zero (and skips the square root when the length is already 1).
    pub fn normalized(self) -> Self {
        let m_sq = self.mag_sq();
        if m_sq == T::zero() || m_sq == T::one() {
            return self;
        }
        self / m_sq.sqrt()
    }

    /// Linear interpolation from `self` towards `end` by `amt` in [0, 1].
    pub fn lerp(self, end: Self, amt: T) -> Self {
        Self::new(
            self.x + (end.x - self.x) * amt,
            self.y + (end.y - self.y) * amt,
            self.z + (end.z - self.z) * amt,
        )
    }

    /// Rotates the x/y components by `theta` radians; z is preserved.
    pub fn rotate_2d(self, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    pub fn dist_sq(self, other: Self) -> T {
        (self - other).mag_sq()
    }

    pub fn dist(self, other: Self) -> T {
        self.dist_sq(other).sqrt()
    }

    /// Angle in radians between two vectors, in [0, π].
    ///
    /// Zero for a zero operand (the acos argument would be NaN otherwise).
    /// The cosine is clamped before acos: rounding in the dot product can
    /// push it just outside [-1, 1] for (anti-)parallel vectors.
    pub fn angle_between(self, other: Self) -> T {
        if self.is_zero() || other.is_zero() {
            return T::zero();
        }

        let cos = self.dot(other) / (self.mag() * other.mag());
        if cos >= T::one() {
            T::zero()
        } else if cos <= -T::one() {
            T::from_f64(std::f64::consts::PI).unwrap()
        } else {
            cos.acos()
        }
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn v(x: f64, y: f64, z: f64) -> Vec3<f64> {
        Vec3::new(x, y, z)
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-4.0, 0.5, 2.0);
        assert_eq!(a + b, v(-3.0, 2.5, 5.0));
        assert_eq!(a - b, v(5.0, 1.5, 1.0));
        assert_eq!(-a, v(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, v(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, v(0.5, 1.0, 1.5));
    }

    #[test]
    fn dot_and_cross_follow_the_right_hand_rule() {
        let x = v(1.0, 0.0, 0.0);
        let y = v(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), v(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), v(0.0, 0.0, -1.0));

        let a = v(1.0, 2.0, 3.0);
        let b = v(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-12);
        assert!(c.dot(b).abs() < 1e-12);
    }

    #[test]
    fn normalized_zero_vector_is_zero() {
        let z = Vec3::<f64>::zero();
        assert_eq!(z.normalized(), z);
    }

    #[test]
    fn normalized_unit_vector_is_returned_unchanged() {
        let u = v(0.0, 1.0, 0.0);
        assert_eq!(u.normalized(), u);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = v(3.0, -4.0, 12.0).normalized();
        assert!((n.mag() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = v(0.0, 2.0, -4.0);
        let b = v(10.0, 4.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), v(5.0, 3.0, 0.0));
    }

    #[test]
    fn rotate_2d_preserves_magnitude_and_z() {
        let a = v(3.0, 4.0, 7.0);
        let r = a.rotate_2d(1.234);
        assert!((r.mag() - a.mag()).abs() < 1e-12);
        assert_eq!(r.z, 7.0);

        let quarter = v(1.0, 0.0, 0.0).rotate_2d(FRAC_PI_2);
        assert!(quarter.x.abs() < 1e-12);
        assert!((quarter.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_matches_pythagoras() {
        let a = v(1.0, 1.0, 1.0);
        let b = v(4.0, 5.0, 1.0);
        assert_eq!(a.dist_sq(b), 25.0);
        assert_eq!(a.dist(b), 5.0);
    }

    #[test]
    fn angle_between_self_is_zero() {
        let a = v(0.3, -0.7, 1.1);
        assert_eq!(a.angle_between(a), 0.0);
    }

    #[test]
    fn angle_between_opposite_is_pi() {
        let a = v(2.0, -1.0, 0.5);
        assert!((a.angle_between(-a) - PI).abs() < 1e-12);
    }

    #[test]
    fn angle_between_zero_operand_is_zero() {
        let a = v(1.0, 2.0, 3.0);
        assert_eq!(a.angle_between(Vec3::zero()), 0.0);
        assert_eq!(Vec3::zero().angle_between(a), 0.0);
    }

    #[test]
    fn angle_between_orthogonal_vectors() {
        let a = v(1.0, 0.0, 0.0);
        let b = v(0.0, 0.0, 3.0);
        assert!((a.angle_between(b) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn angle_between_parallel_vectors_never_goes_nan() {
        // Parallel vectors of wildly different scale; rounding can leave
        // the cosine on either side of ±1, and acos(±1±ε) must not be NaN.
        let a = v(0.1, 0.2, 0.3);
        let b = a * 1e20;
        let near = a.angle_between(b);
        assert!(near.is_finite());
        assert!(near < 1e-6);
        let far = a.angle_between(-b);
        assert!(far.is_finite());
        assert!((far - PI).abs() < 1e-6);
    }
}
