/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::builtin::real;
use crate::builtin::real_mod::RVec3;

/// Vector used for 3D math, with [`real`] components.
///
/// Field order and padding match the engine's `Vector3`.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector3 {
    pub x: real,
    pub y: real,
    pub z: real,
}

impl Vector3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);

    pub const fn new(x: real, y: real, z: real) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: real) -> Self {
        Self::new(v, v, v)
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

    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }

    pub fn distance_to(self, to: Self) -> real {
        (to - self).length()
    }

    pub fn lerp(self, to: Self, weight: real) -> Self {
        Self::from_glam(self.to_glam().lerp(to.to_glam(), weight))
    }

    fn to_glam(self) -> RVec3 {
        RVec3::new(self.x, self.y, self.z)
    }

    fn from_glam(v: RVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<real> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: real) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<real> for Vector3 {
    fn mul_assign(&mut self, rhs: real) {
        *self = *self * rhs;
    }
}

impl Div<real> for Vector3 {
    type Output = Self;
    fn div(self, rhs: real) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

gdcall_sys::ffi_self_repr!(Vector3);
gdcall_sys::static_assert_eq_size!(Vector3, [real; 3]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vector3::ZERO;
        let b = Vector3::new(2.0, 4.0, -6.0);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(1.0, 2.0, -3.0));
    }
}
