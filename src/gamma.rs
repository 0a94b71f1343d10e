// Table lookups for gamma-correct compositing.
// Anti-aliased stroke edges are mixed in linear light so a half-covered
// pixel looks half as bright, not visibly darker than the stroke body.

use crate::types::{argb, channels};

#[derive(Clone)]
pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1) as f32
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255) via 4096-step quantization
    // (index = (linear * 4095).round())
    linear_to_srgb: [u8; 4096],
}

impl GammaLut {
    /// Build both tables once per canvas.
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, slot) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, slot) in l2s.iter_mut().enumerate() {
            let l = (i as f32) / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// Source-over `src` onto `dst` with extra coverage `coverage` (0..1).
    /// Colour channels mix in linear light; alpha mixes linearly.
    pub fn src_over(&self, dst: u32, src: u32, coverage: f32) -> u32 {
        let (sa8, sr, sg, sb) = channels(src);
        let sa = (sa8 as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return dst;
        }
        if sa >= 1.0 {
            return src;
        }

        let (da8, dr, dg, db) = channels(dst);
        let da = da8 as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let mix = |s: u8, d: u8| {
            let s = self.srgb_u8_to_linear(s);
            let d = self.srgb_u8_to_linear(d);
            self.linear_to_srgb_u8((s * sa + d * da * (1.0 - sa)) / out_a)
        };

        argb(
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
            mix(sr, dr),
            mix(sg, dg),
            mix(sb, db),
        )
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}
