// The stroke canvas: one persistent raster plus the stroke being drawn.
//
// Pointer gestures build a `StrokePath`; releasing the pointer composites
// the path into the raster with the session's `StrokeStyle` and empties the
// path again. `StrokeCanvas::render` shows the committed raster with the
// live path over it.

use std::cell::Cell;
use std::marker::PhantomData;

use image::RgbaImage;
use tracing::{debug, trace};

use crate::error::Result;
use crate::gamma::GammaLut;
use crate::raster::{blit, fill_raster, stroke_path};
use crate::stroke::{Gesture, PointerEvent, StrokePath};
use crate::types::{Point, Raster, StrokeStyle};

pub struct StrokeCanvas {
    surface: Option<Raster>, // None until the first initialize()
    path: StrokePath,
    gesture: Gesture,
    style: StrokeStyle,
    lut: GammaLut,
    redraw: bool,
    // Owned by one thread at a time: movable, never shared.
    _not_sync: PhantomData<Cell<()>>,
}

static_assertions::assert_impl_all!(StrokeCanvas: Send);
static_assertions::assert_not_impl_any!(StrokeCanvas: Sync);

impl StrokeCanvas {
    /// A canvas with no surface yet. Call [`initialize`](Self::initialize)
    /// once the size is known.
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            surface: None,
            path: StrokePath::new(),
            gesture: Gesture::Idle,
            style,
            lut: GammaLut::new(),
            redraw: false,
            _not_sync: PhantomData,
        }
    }

    /// Allocate a `width` x `height` surface filled with the background.
    /// Any previous surface and its drawing are discarded.
    pub fn initialize(&mut self, width: usize, height: usize) {
        debug!(width, height, "allocating canvas surface");
        self.surface = Some(Raster::new(width, height, self.style.background));
        self.redraw = true;
    }

    /// Start a stroke at (x, y). If a stroke is already live it is dropped
    /// and a fresh one starts here.
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        if self.gesture == Gesture::Drawing {
            trace!("press during a live stroke; restarting path");
        }
        self.path.reset();
        self.path.move_to(Point::new(x, y));
        self.gesture = Gesture::Drawing;
        self.redraw = true;
    }

    /// Extend the live stroke with a straight segment to (x, y).
    /// Does nothing when no stroke is live.
    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        if self.gesture != Gesture::Drawing {
            trace!("move without a live stroke ignored");
            return;
        }
        self.path.line_to(Point::new(x, y));
        self.redraw = true;
    }

    /// Commit the live stroke into the surface and return to idle.
    /// Does nothing when no stroke is live.
    pub fn end_stroke(&mut self) {
        if self.gesture != Gesture::Drawing {
            trace!("release without a live stroke ignored");
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            let inked = stroke_path(surface, &self.path, &self.style, &self.lut);
            debug!(commands = self.path.commands().len(), inked, "stroke committed");
        }
        self.path.reset();
        self.gesture = Gesture::Idle;
        self.redraw = true;
    }

    /// Drop the live stroke without committing it.
    pub fn cancel_stroke(&mut self) {
        if self.gesture != Gesture::Drawing {
            return;
        }
        debug!("stroke cancelled");
        self.path.reset();
        self.gesture = Gesture::Idle;
        self.redraw = true;
    }

    /// Route one pointer event through the gesture state machine.
    /// Returns false for events that had no effect.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let was_drawing = self.gesture == Gesture::Drawing;
        match event {
            PointerEvent::Press(p) => {
                self.begin_stroke(p.x, p.y);
                true
            }
            PointerEvent::Move(p) => {
                self.extend_stroke(p.x, p.y);
                was_drawing
            }
            PointerEvent::Release => {
                self.end_stroke();
                was_drawing
            }
            PointerEvent::Cancel => {
                self.cancel_stroke();
                was_drawing
            }
        }
    }

    /// Refill the surface with the background. A live stroke stays live.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            fill_raster(surface, self.style.background);
            debug!("canvas cleared");
        }
        self.redraw = true;
    }

    /// The committed drawing, or `None` before the first `initialize`.
    pub fn export_raster(&self) -> Option<&Raster> {
        self.surface.as_ref()
    }

    /// The committed drawing as an RGBA image, or `None` before the first
    /// `initialize`.
    pub fn export_image(&self) -> Option<Result<RgbaImage>> {
        self.surface.as_ref().map(Raster::to_rgba_image)
    }

    /// Draw the committed surface, then the live stroke on top, into `target`.
    /// Parts of `target` the surface does not cover show the background.
    pub fn render(&self, target: &mut Raster) {
        match self.surface.as_ref() {
            Some(surface) if surface.size() == target.size() => blit(surface, target),
            Some(surface) => {
                fill_raster(target, self.style.background);
                blit(surface, target);
            }
            None => fill_raster(target, self.style.background),
        }
        if !self.path.is_empty() {
            stroke_path(target, &self.path, &self.style, &self.lut);
        }
    }

    /// True once after any change that affects what `render` draws.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn size(&self) -> Option<(usize, usize)> {
        self.surface.as_ref().map(Raster::size)
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn path(&self) -> &StrokePath {
        &self.path
    }
}

impl Default for StrokeCanvas {
    fn default() -> Self {
        Self::new(StrokeStyle::default())
    }
}
