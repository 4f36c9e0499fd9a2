use core::ops::{Add, Mul};

/// A color with `f32` channels, nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);
    pub const WHITE: Self = Self::new(1., 1., 1., 1.);
    pub const RED: Self = Self::new(1., 0., 0., 1.);
    pub const GREEN: Self = Self::new(0., 1., 0., 1.);
    pub const BLUE: Self = Self::new(0., 0., 1., 1.);
    pub const YELLOW: Self = Self::new(1., 1., 0., 1.);

    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for [f32; 4] {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Add for Rgba {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Mul<Rgba> for f32 {
    type Output = Rgba;

    #[inline]
    fn mul(self, rhs: Rgba) -> Self::Output {
        scale(rhs, self)
    }
}

/// Multiplies every channel of `color`, alpha included, by `s`.
#[inline]
#[must_use]
pub fn scale(color: Rgba, s: f32) -> Rgba {
    Rgba {
        r: color.r * s,
        g: color.g * s,
        b: color.b * s,
        a: color.a * s,
    }
}

/// Linear interpolation between `start` and `end`.
///
/// `alpha` is clamped to `[0, 1]`: values below return `start`, values above return `end`.
#[inline]
#[must_use]
pub fn lerp(start: Rgba, end: Rgba, alpha: f32) -> Rgba {
    if alpha < 0. {
        return start;
    }

    if alpha > 1. {
        return end;
    }

    (1. - alpha) * start + alpha * end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_touches_alpha() {
        let c = scale(Rgba::new(1., 0.5, 0.25, 1.), 0.5);
        assert_eq!(c, Rgba::new(0.5, 0.25, 0.125, 0.5));
        assert_eq!(0.5 * Rgba::WHITE, Rgba::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(Rgba::RED, Rgba::BLUE, 0.), Rgba::RED);
        assert_eq!(lerp(Rgba::RED, Rgba::BLUE, 1.), Rgba::BLUE);
        assert_eq!(
            lerp(Rgba::BLACK, Rgba::WHITE, 0.5),
            Rgba::new(0.5, 0.5, 0.5, 1.)
        );
    }

    #[test]
    fn lerp_clamps_alpha() {
        assert_eq!(lerp(Rgba::RED, Rgba::GREEN, -3.), Rgba::RED);
        assert_eq!(lerp(Rgba::RED, Rgba::GREEN, 1.5), Rgba::GREEN);
    }

    #[test]
    fn array_conversion() {
        let arr: [f32; 4] = Rgba::YELLOW.into();
        assert_eq!(arr, [1., 1., 0., 1.]);
        assert_eq!(Rgba::from(arr), Rgba::YELLOW);
    }
}
