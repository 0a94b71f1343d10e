// Converts the canvas raster into an `image` crate buffer.
// This is the form a drawing takes when it leaves the canvas for a
// classifier: straight (non-premultiplied) RGBA, 8 bits per channel.

use crate::error::{Error, Result};
use crate::types::{Raster, channels};

use image::{ImageBuffer, Rgba, RgbaImage};

impl Raster {
    /// Copy the pixels out as an RGBA image of the same size.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let w = u32::try_from(self.width)
            .map_err(|_| Error::Snapshot(format!("width {} does not fit u32", self.width)))?;
        let h = u32::try_from(self.height)
            .map_err(|_| Error::Snapshot(format!("height {} does not fit u32", self.height)))?;

        // 0xAARRGGBB -> [R, G, B, A]
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &px in &self.pixels {
            let (a, r, g, b) = channels(px);
            bytes.extend_from_slice(&[r, g, b, a]);
        }

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(w, h, bytes)
            .ok_or_else(|| Error::Snapshot(format!("buffer does not match {w}x{h}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{WHITE, argb};

    #[test]
    fn rgba_image_keeps_size_and_channel_order() {
        let mut r = Raster::new(3, 2, WHITE);
        r.pixels[4] = argb(0xFF, 0x10, 0x20, 0x30); // (1, 1)
        let img = r.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 1).0, [0x10, 0x20, 0x30, 0xFF]);
        assert_eq!(img.get_pixel(0, 0).0, [0xFF; 4]);
    }

    #[test]
    fn mismatched_buffer_is_an_error() {
        let r = Raster { width: 4, height: 4, pixels: vec![WHITE; 3] };
        assert!(matches!(r.to_rgba_image(), Err(Error::Snapshot(_))));
    }
}
