use std::ops::{Add, Div, Mul, Sub};

/// English Metric Units, the native length unit of OOXML drawing geometry.
/// 914,400 EMU per inch, 360,000 per centimetre, 12,700 per point.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    pub const PER_INCH: i64 = 914_400;
    pub const PER_CM: i64 = 360_000;
    pub const PER_PT: i64 = 12_700;

    pub const ZERO: Emu = Emu(0);

    pub fn from_inches(v: f64) -> Self {
        Emu((v * Self::PER_INCH as f64).round() as i64)
    }

    pub fn from_cm(v: f64) -> Self {
        Emu((v * Self::PER_CM as f64).round() as i64)
    }

    pub fn from_pt(v: f64) -> Self {
        Emu((v * Self::PER_PT as f64).round() as i64)
    }

    /// Scales by a real factor, rounding to the nearest unit.
    pub fn scale(self, factor: f64) -> Self {
        Emu((self.0 as f64 * factor).round() as i64)
    }

    pub fn max(self, other: Emu) -> Emu {
        Emu(self.0.max(other.0))
    }

    pub fn min(self, other: Emu) -> Emu {
        Emu(self.0.min(other.0))
    }
}

impl Add for Emu {
    type Output = Emu;
    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Sub for Emu {
    type Output = Emu;
    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;
    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

impl Div<i64> for Emu {
    type Output = Emu;
    fn div(self, rhs: i64) -> Emu {
        Emu(self.0 / rhs)
    }
}

/// Axis-aligned rectangle in EMU space, origin at the slide's top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: Emu,
    pub y: Emu,
    pub w: Emu,
    pub h: Emu,
}

impl Rect {
    pub fn new(x: Emu, y: Emu, w: Emu, h: Emu) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> Emu {
        self.x + self.w
    }

    pub fn bottom(&self) -> Emu {
        self.y + self.h
    }
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }

    /// Uppercase hex without a leading '#', as DrawingML `srgbClr` wants it.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// CSS form with a leading '#'.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emu_conversions() {
        assert_eq!(Emu::from_inches(1.0), Emu(914_400));
        assert_eq!(Emu::from_cm(2.0), Emu(720_000));
        assert_eq!(Emu::from_pt(10.0), Emu(127_000));
    }

    #[test]
    fn emu_arithmetic_and_scale() {
        let a = Emu(1_000_000);
        assert_eq!(a + Emu(500_000), Emu(1_500_000));
        assert_eq!(a - Emu(400_000), Emu(600_000));
        assert_eq!(a * 3, Emu(3_000_000));
        assert_eq!(a / 4, Emu(250_000));
        assert_eq!(a.scale(1.5), Emu(1_500_000));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(Emu(10), Emu(20), Emu(30), Emu(40));
        assert_eq!(r.right(), Emu(40));
        assert_eq!(r.bottom(), Emu(60));
    }

    #[test]
    fn color_formatting() {
        let c = Color::rgb(0xC5, 0x1F, 0x2A);
        assert_eq!(c.hex(), "C51F2A");
        assert_eq!(c.css(), "#c51f2a");
    }
}
