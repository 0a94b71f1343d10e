// Freehand drawing surface.
//
// Pointer gestures are captured as vector strokes, composited into a
// persistent ARGB raster, and the raster is handed to a `Classifier` whose
// label is shown back to the user.

pub mod canvas;
pub mod classify;
pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod raster;
pub mod shell;
pub mod snapshot;
pub mod stroke;
pub mod types;

pub use canvas::StrokeCanvas;
pub use classify::{Classifier, InkSummary};
pub use error::{Error, Result};
pub use shell::{DrawingShell, PointerTracker};
pub use stroke::{Gesture, PathCommand, PointerEvent, StrokePath};
pub use types::{Point, Raster, StrokeStyle};
