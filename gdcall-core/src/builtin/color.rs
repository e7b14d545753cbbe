/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// RGBA color with `f32` channels, layout-compatible with the engine's `Color`.
///
/// Channels are not clamped; values outside `0.0..=1.0` are legal (HDR).
/// Unlike vectors, color channels stay `f32` even on double-precision engine builds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::from_rgba(1.0, 1.0, 1.0, 0.0);

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let f = |c: u8| c as f32 / 255.0;
        Self::from_rgba(f(r), f(g), f(b), f(a))
    }

    pub fn lerp(self, to: Self, weight: f32) -> Self {
        let f = |from: f32, to: f32| from + (to - from) * weight;
        Self::from_rgba(
            f(self.r, to.r),
            f(self.g, to.g),
            f(self.b, to.b),
            f(self.a, to.a),
        )
    }

    /// Relative luminance, assuming linear channel values.
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

gdcall_sys::ffi_self_repr!(Color);
gdcall_sys::static_assert_eq_size!(Color, [f32; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_conversion() {
        let c = Color::from_rgba8(255, 0, 127, 255);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 127.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
    }
}
