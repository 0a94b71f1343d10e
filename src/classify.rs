// The boundary to whatever turns a drawing into a label.
//
// The shell only needs "raster in, label out", so any closure works and the
// way a real classifier is reached (native library, model file, service)
// stays outside this crate.

use crate::types::Raster;

pub trait Classifier {
    fn classify(&mut self, raster: &Raster) -> String;
}

impl<F> Classifier for F
where
    F: FnMut(&Raster) -> String,
{
    fn classify(&mut self, raster: &Raster) -> String {
        self(raster)
    }
}

/// Stand-in classifier for the desktop host: describes how much was drawn
/// and where, e.g. `"ink 4.2% in 120x64"`, or `"blank"`.
#[derive(Clone, Copy, Debug)]
pub struct InkSummary {
    pub background: u32,
}

impl Classifier for InkSummary {
    fn classify(&mut self, raster: &Raster) -> String {
        let mut inked = 0usize;
        let (mut x0, mut y0, mut x1, mut y1) = (usize::MAX, usize::MAX, 0, 0);
        for (i, &px) in raster.pixels.iter().enumerate() {
            if px == self.background {
                continue;
            }
            inked += 1;
            let (x, y) = (i % raster.width, i / raster.width);
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }
        if inked == 0 {
            return "blank".to_string();
        }
        let pct = 100.0 * inked as f32 / raster.pixels.len() as f32;
        format!("ink {pct:.1}% in {}x{}", x1 - x0 + 1, y1 - y0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, WHITE};

    #[test]
    fn closures_are_classifiers() {
        let mut calls = 0;
        let mut c = |r: &Raster| {
            calls += 1;
            format!("{}x{}", r.width, r.height)
        };
        assert_eq!(c.classify(&Raster::new(4, 3, WHITE)), "4x3");
        assert_eq!(calls, 1);
    }

    #[test]
    fn ink_summary_reports_blank_and_extent() {
        let mut s = InkSummary { background: WHITE };
        let mut r = Raster::new(10, 10, WHITE);
        assert_eq!(s.classify(&r), "blank");

        r.pixels[2 * 10 + 3] = BLACK; // (3, 2)
        r.pixels[6 * 10 + 7] = BLACK; // (7, 6)
        assert_eq!(s.classify(&r), "ink 2.0% in 5x5");
    }
}
