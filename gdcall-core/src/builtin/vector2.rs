/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::builtin::real_mod::RVec2;
use crate::builtin::{real, Vector3};

/// Vector used for 2D math, with [`real`] components.
///
/// Field order and padding match the engine's `Vector2`, so values pass through pointer calls
/// unchanged. Math goes through `glam` internally.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector2 {
    pub x: real,
    pub y: real,
}

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const UP: Self = Self::new(0.0, -1.0);

    pub const fn new(x: real, y: real) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: real) -> Self {
        Self::new(v, v)
    }

    pub fn length(self) -> real {
        self.to_glam().length()
    }

    pub fn length_squared(self) -> real {
        self.to_glam().length_squared()
    }

    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }

    pub fn dot(self, with: Self) -> real {
        self.to_glam().dot(with.to_glam())
    }

    pub fn distance_to(self, to: Self) -> real {
        (to - self).length()
    }

    pub fn lerp(self, to: Self, weight: real) -> Self {
        Self::from_glam(self.to_glam().lerp(to.to_glam(), weight))
    }

    /// Angle in radians from the positive X axis, in `(-PI, PI]`.
    pub fn angle(self) -> real {
        self.y.atan2(self.x)
    }

    pub fn rotated(self, angle: real) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Widens to a [`Vector3`] with `z` set to zero.
    pub fn extend(self, z: real) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    fn to_glam(self) -> RVec2 {
        RVec2::new(self.x, self.y)
    }

    fn from_glam(v: RVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<real> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: real) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<real> for Vector2 {
    fn mul_assign(&mut self, rhs: real) {
        *self = *self * rhs;
    }
}

impl Div<real> for Vector2 {
    type Output = Self;
    fn div(self, rhs: real) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

gdcall_sys::ffi_self_repr!(Vector2);
gdcall_sys::static_assert_eq_size!(Vector2, [real; 2]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -1.0);

        assert_eq!(a + b, Vector2::new(4.0, 3.0));
        assert_eq!(a - b, Vector2::new(2.0, 5.0));
        assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
        assert_eq!(-b, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn length_and_dot() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.dot(Vector2::RIGHT), 3.0);
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    }

    #[test]
    fn layout_matches_components() {
        assert_eq!(
            std::mem::size_of::<Vector2>(),
            2 * std::mem::size_of::<real>()
        );
    }
}
