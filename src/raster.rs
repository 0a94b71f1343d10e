// Path stroking and compositing onto a raster.
// Each segment of a path is inked as a capsule (a rectangle with half-disc
// ends), which gives round caps and round joins without special cases.
use crate::gamma::GammaLut;
use crate::stroke::StrokePath;
use crate::types::{Mask, Point, Raster, StrokeStyle};

/// Refill the whole raster with `color`.
pub fn fill_raster(raster: &mut Raster, color: u32) {
    raster.fill(color);
}

/// Distance from `p` to the segment a-b.
#[inline]
fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (apx, apy) = (p.x - a.x, p.y - a.y);
    let len2 = abx * abx + aby * aby;
    // Degenerate segment: a dot
    let t = if len2 > 0.0 { ((apx * abx + apy * aby) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    (dx * dx + dy * dy).sqrt()
}

#[inline]
fn coverage(distance: f32, radius: f32, anti_alias: bool) -> f32 {
    if anti_alias {
        (radius + 0.5 - distance).clamp(0.0, 1.0)
    } else if distance <= radius {
        1.0
    } else {
        0.0
    }
}

/// Rasterize the stroke of `path` into a coverage mask clipped to a
/// `width` x `height` raster. `None` when nothing would be inked.
pub fn stroke_coverage(
    path: &StrokePath,
    style: &StrokeStyle,
    width: usize,
    height: usize,
) -> Option<Mask> {
    if width == 0 || height == 0 || style.width <= 0.0 {
        return None;
    }
    let radius = style.width * 0.5;
    let pad = radius + 1.0; // one extra pixel for the anti-aliased fringe

    // 1) Window of the raster the stroke can touch.
    let (lo, hi) = path.bounds()?;
    let x0 = (lo.x - pad).floor().max(0.0);
    let y0 = (lo.y - pad).floor().max(0.0);
    let x1 = (hi.x + pad).ceil().min(width as f32);
    let y1 = (hi.y + pad).ceil().min(height as f32);
    if x0 >= x1 || y0 >= y1 {
        return None; // entirely off-surface
    }
    let mut mask = Mask::new(x0 as usize, y0 as usize, (x1 - x0) as usize, (y1 - y0) as usize);

    // 2) Dab every segment's capsule into the mask, keeping the max so that
    //    overlapping joins never ink a pixel twice.
    let mut any = false;
    for (a, b) in path.segments() {
        any = true;
        let sx0 = ((a.x.min(b.x) - pad).floor() as isize).max(mask.x as isize);
        let sy0 = ((a.y.min(b.y) - pad).floor() as isize).max(mask.y as isize);
        let sx1 = ((a.x.max(b.x) + pad).ceil() as isize).min((mask.x + mask.width) as isize);
        let sy1 = ((a.y.max(b.y) + pad).ceil() as isize).min((mask.y + mask.height) as isize);

        for py in sy0..sy1 {
            for px in sx0..sx1 {
                let center = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                let c = coverage(distance_to_segment(center, a, b), radius, style.anti_alias);
                if c <= 0.0 {
                    continue;
                }
                let idx = (py as usize - mask.y) * mask.width + (px as usize - mask.x);
                if c > mask.alpha[idx] {
                    mask.alpha[idx] = c;
                }
            }
        }
    }

    // A path made only of MoveTo inks nothing.
    any.then_some(mask)
}

/// Blend `color` into `raster` wherever the mask has coverage.
pub fn composite(raster: &mut Raster, mask: &Mask, color: u32, lut: &GammaLut) {
    for my in 0..mask.height {
        let y = mask.y + my;
        if y >= raster.height {
            break;
        }
        for mx in 0..mask.width {
            let x = mask.x + mx;
            if x >= raster.width {
                break;
            }
            let a = mask.alpha[my * mask.width + mx];
            if a <= 0.0 {
                continue;
            }
            let idx = y * raster.width + x;
            raster.pixels[idx] = lut.src_over(raster.pixels[idx], color, a);
        }
    }
}

/// Stroke `path` with `style` straight onto `raster`.
/// Returns whether any pixel was touched.
pub fn stroke_path(raster: &mut Raster, path: &StrokePath, style: &StrokeStyle, lut: &GammaLut) -> bool {
    match stroke_coverage(path, style, raster.width, raster.height) {
        Some(mask) => {
            composite(raster, &mask, style.color, lut);
            true
        }
        None => false,
    }
}

/// Copy `src` onto `dst` with both origins aligned, clipped to the smaller size.
pub fn blit(src: &Raster, dst: &mut Raster) {
    let w = src.width.min(dst.width);
    let h = src.height.min(dst.height);
    for y in 0..h {
        let s = y * src.width;
        let d = y * dst.width;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}
