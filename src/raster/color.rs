use serde::{Deserialize, Serialize};

/// RGB source color, components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Opaque ABGR (`0xAABBGGRR`, bytes `[R, G, B, A]` in memory)
    pub fn to_packed(&self) -> u32 {
        let r = channel(self.r);
        let g = channel(self.g);
        let b = channel(self.b);
        (0xFF << 24) | (b << 16) | (g << 8) | r
    }
}

#[inline]
fn channel(v: f32) -> u32 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}

#[inline]
fn unpack(px: u32, shift: u32) -> f32 {
    ((px >> shift) & 0xFF) as f32 / 255.0
}

#[inline]
fn pack(v: f32, shift: u32) -> u32 {
    ((v * 255.0).round().clamp(0.0, 255.0) as u32) << shift
}

/// Source-over blend of packed `src` onto packed `dst` at `coverage`
///
/// Non-premultiplied: coverage scales the source alpha, and the colour is
/// re-normalised by the resulting alpha so a transparent destination takes the
/// source colour unchanged.
#[inline]
pub fn blend_packed(dst: u32, src: u32, coverage: f32) -> u32 {
    let cov = coverage.clamp(0.0, 1.0);
    let a_src = unpack(src, 24) * cov;
    let a_dst = unpack(dst, 24);
    let keep = a_dst * (1.0 - a_src);
    let a_out = a_src + keep;
    if a_out <= 0.0 {
        return 0;
    }

    let mut out = pack(a_out, 24);
    for shift in [0u32, 8, 16] {
        let c = (unpack(src, shift) * a_src + unpack(dst, shift) * keep) / a_out;
        out |= pack(c, shift);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_abgr() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_packed(), 0xFF00_00FF);
        assert_eq!(Rgb::new(0.0, 0.0, 1.0).to_packed(), 0xFFFF_0000);
        assert_eq!(Rgb::from_u8(100, 80, 80).to_packed(), 0xFF50_5064);
        assert_eq!(Rgb::new(2.0, -1.0, f32::NAN).to_packed(), 0xFF00_00FF);
    }

    #[test]
    fn blend_endpoints() {
        let dst = 0xFF00_0000;
        let src = Rgb::WHITE.to_packed();
        assert_eq!(blend_packed(dst, src, 0.0), dst);
        assert_eq!(blend_packed(dst, src, 1.0), src);
        assert_eq!(blend_packed(dst, src, 0.5), 0xFF80_8080);
    }

    #[test]
    fn blend_onto_transparent_keeps_source_color() {
        let src = Rgb::new(1.0, 0.0, 0.0).to_packed();
        assert_eq!(blend_packed(0, src, 0.5), 0x8000_00FF);
        assert_eq!(blend_packed(0, src, 1.0), src);
        assert_eq!(blend_packed(0, src, 0.0), 0);
    }

    #[test]
    fn blend_over_translucent_accumulates_alpha() {
        let white = Rgb::WHITE.to_packed();
        let once = blend_packed(0, white, 0.5);
        let twice = blend_packed(once, white, 0.5);
        // 0.5 + 0.5 * 0.5, give or take the 8-bit rounding of the first pass
        assert!((191..=192).contains(&(twice >> 24)));
        assert_eq!(twice & 0x00FF_FFFF, 0x00FF_FFFF);
    }
}
