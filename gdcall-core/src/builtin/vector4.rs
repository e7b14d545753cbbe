/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::builtin::real;
use crate::builtin::real_mod::RVec4;

/// Vector with four [`real`] components, layout-compatible with the engine's `Vector4`.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector4 {
    pub x: real,
    pub y: real,
    pub z: real,
    pub w: real,
}

impl Vector4 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: real, y: real, z: real, w: real) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(v: real) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn length(self) -> real {
        self.to_glam().length()
    }

    pub fn dot(self, with: Self) -> real {
        self.to_glam().dot(with.to_glam())
    }

    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }

    fn to_glam(self) -> RVec4 {
        RVec4::new(self.x, self.y, self.z, self.w)
    }

    fn from_glam(v: RVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Add for Vector4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vector4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<real> for Vector4 {
    type Output = Self;
    fn mul(self, rhs: real) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Neg for Vector4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

gdcall_sys::ffi_self_repr!(Vector4);
gdcall_sys::static_assert_eq_size!(Vector4, [real; 4]);
