// The UI shell: wires pointer input, the clear/classify commands and the
// status line to a canvas and a classifier. No window code lives here, so
// the whole flow can run headless.

use tracing::{info, warn};

use crate::canvas::StrokeCanvas;
use crate::classify::Classifier;
use crate::stroke::PointerEvent;
use crate::types::{Point, StrokeStyle};

pub const STATUS_READY: &str = "Draw a shape";
pub const STATUS_CLEARED: &str = "Canvas cleared";
pub const STATUS_EMPTY: &str = "Error: canvas is empty";

pub struct DrawingShell<C> {
    canvas: StrokeCanvas,
    classifier: C,
    status: String, // what the HUD shows
}

impl<C: Classifier> DrawingShell<C> {
    pub fn new(style: StrokeStyle, classifier: C) -> Self {
        Self {
            canvas: StrokeCanvas::new(style),
            classifier,
            status: STATUS_READY.to_string(),
        }
    }

    /// Make sure the canvas matches the view size; a new size starts a
    /// fresh, empty surface. Returns true when the surface was (re)built.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if self.canvas.size() == Some((width, height)) {
            return false;
        }
        if width == 0 || height == 0 {
            warn!(width, height, "ignoring degenerate view size");
            return false;
        }
        self.canvas.initialize(width, height);
        true
    }

    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        self.canvas.handle(event)
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
        self.status = STATUS_CLEARED.to_string();
    }

    /// Hand the current drawing to the classifier and show its answer.
    pub fn classify(&mut self) -> &str {
        self.status = match self.canvas.export_raster() {
            Some(raster) => {
                let label = self.classifier.classify(raster);
                info!(%label, "classified drawing");
                format!("Result: {label}")
            }
            None => {
                warn!("classify requested before the canvas has a size");
                STATUS_EMPTY.to_string()
            }
        };
        &self.status
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut StrokeCanvas {
        &mut self.canvas
    }
}

/// Turns per-frame samples of (button down, cursor position) into gesture
/// events. Hosts that poll input instead of receiving events use this.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    down: bool,
    last: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample; returns the event it implies, if any.
    pub fn sample(&mut self, down: bool, pos: Option<(f32, f32)>) -> Option<PointerEvent> {
        let pos = pos.map(|(x, y)| Point::new(x, y));
        let (event, active) = match (self.down, down, pos) {
            // button goes down over the canvas
            (false, true, Some(p)) => (Some(PointerEvent::Press(p)), true),
            // dragging: only report actual movement
            (true, true, Some(p)) if self.last != Some(p) => (Some(PointerEvent::Move(p)), true),
            (true, true, Some(_)) => (None, true),
            // no position this frame: keep the gesture, wait for the next sample
            (true, true, None) => (None, true),
            (true, false, _) => (Some(PointerEvent::Release), false),
            (false, _, _) => (None, false),
        };
        self.down = active;
        if pos.is_some() {
            self.last = pos;
        }
        event
    }

    /// Input went away entirely (e.g. the window lost focus): a gesture in
    /// progress is cancelled, not committed.
    pub fn input_lost(&mut self) -> Option<PointerEvent> {
        let was_down = std::mem::take(&mut self.down);
        self.last = None;
        was_down.then_some(PointerEvent::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::InkSummary;
    use crate::types::{Raster, WHITE};

    fn shell() -> DrawingShell<InkSummary> {
        DrawingShell::new(StrokeStyle::default(), InkSummary { background: WHITE })
    }

    #[test]
    fn classify_without_surface_reports_empty() {
        let mut s = shell();
        assert_eq!(s.classify(), STATUS_EMPTY);
    }

    #[test]
    fn classify_passes_the_raster_to_the_classifier() {
        let mut seen = None;
        let mut s = DrawingShell::new(StrokeStyle::default(), |r: &Raster| {
            seen = Some(r.size());
            "circle".to_string()
        });
        s.resize(40, 30);
        assert_eq!(s.classify(), "Result: circle");
        drop(s);
        assert_eq!(seen, Some((40, 30)));
    }

    #[test]
    fn draw_classify_clear_flow() {
        let mut s = shell();
        assert_eq!(s.status(), STATUS_READY);
        assert!(s.resize(50, 50));
        assert!(!s.resize(50, 50));
        assert_eq!(s.classify(), "Result: blank");

        s.pointer(PointerEvent::Press(Point::new(10.0, 25.0)));
        s.pointer(PointerEvent::Move(Point::new(40.0, 25.0)));
        s.pointer(PointerEvent::Release);
        assert!(s.classify().starts_with("Result: ink "));

        s.clear();
        assert_eq!(s.status(), STATUS_CLEARED);
        assert_eq!(s.classify(), "Result: blank");
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut s = shell();
        assert!(!s.resize(0, 10));
        assert!(s.canvas().export_raster().is_none());
    }

    #[test]
    fn tracker_emits_a_full_gesture() {
        let mut t = PointerTracker::new();
        assert_eq!(t.sample(false, Some((1.0, 1.0))), None);
        assert_eq!(t.sample(true, Some((2.0, 3.0))), Some(PointerEvent::Press(Point::new(2.0, 3.0))));
        assert_eq!(t.sample(true, Some((2.0, 3.0))), None);
        assert_eq!(t.sample(true, Some((5.0, 3.0))), Some(PointerEvent::Move(Point::new(5.0, 3.0))));
        assert_eq!(t.sample(false, Some((5.0, 3.0))), Some(PointerEvent::Release));
        assert_eq!(t.sample(false, Some((6.0, 3.0))), None);
    }

    #[test]
    fn drag_past_the_edge_still_commits_the_stroke() {
        let mut s = shell();
        s.resize(100, 100);
        let mut t = PointerTracker::new();
        let samples = [
            (true, Some((10.0, 50.0))),
            (true, Some((90.0, 50.0))),
            (true, Some((140.0, 50.0))), // outside the window
            (true, None),                // no position reported
            (false, None),
        ];
        let events: Vec<_> = samples.iter().filter_map(|&(down, pos)| t.sample(down, pos)).collect();
        assert_eq!(
            events,
            vec![
                PointerEvent::Press(Point::new(10.0, 50.0)),
                PointerEvent::Move(Point::new(90.0, 50.0)),
                PointerEvent::Move(Point::new(140.0, 50.0)),
                PointerEvent::Release,
            ]
        );
        for e in events {
            s.pointer(e);
        }
        let r = s.canvas().export_raster().unwrap();
        assert_eq!(r.pixel(50, 50), Some(crate::types::BLACK));
        assert_eq!(r.pixel(99, 50), Some(crate::types::BLACK));
    }

    #[test]
    fn losing_input_cancels_the_gesture() {
        let mut t = PointerTracker::new();
        assert_eq!(t.input_lost(), None);
        t.sample(true, Some((2.0, 3.0)));
        assert_eq!(t.input_lost(), Some(PointerEvent::Cancel));
        // still held after focus returns: nothing until a new press
        assert_eq!(t.sample(false, Some((2.0, 3.0))), None);
        assert_eq!(t.sample(true, Some((4.0, 4.0))), Some(PointerEvent::Press(Point::new(4.0, 4.0))));
    }
}
