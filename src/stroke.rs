// The in-progress stroke and the gesture state machine that feeds it.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

/// Vector path for the gesture currently in progress.
/// Empty at rest; non-empty only between press and release/cancel.
#[derive(Clone, Debug, Default)]
pub struct StrokePath {
    commands: Vec<PathCommand>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    /// Straight segment from the current end to `p`.
    /// Ignored when there is no current point.
    pub fn line_to(&mut self, p: Point) {
        if self.commands.is_empty() {
            return;
        }
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every straight segment of the path as (from, to).
    /// A lone `MoveTo` contributes nothing.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let mut current: Option<Point> = None;
        self.commands.iter().filter_map(move |cmd| match *cmd {
            PathCommand::MoveTo(p) => {
                current = Some(p);
                None
            }
            PathCommand::LineTo(p) => {
                let from = current.replace(p)?;
                Some((from, p))
            }
        })
    }

    /// Axis-aligned bounds of every point in the path.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut pts = self.commands.iter().map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        });
        let first = pts.next()?;
        Some(pts.fold((first, first), |(lo, hi), p| {
            (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y)))
        }))
    }
}

/// Whether a finger/button is currently down on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing,
}

/// Pointer input delivered by the host, one gesture at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_follow_commands() {
        let mut path = StrokePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 0.0));
        path.line_to(Point::new(10.0, 5.0));
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(
            segs,
            vec![
                (Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
                (Point::new(10.0, 0.0), Point::new(10.0, 5.0)),
            ]
        );
    }

    #[test]
    fn lone_move_to_has_no_segments() {
        let mut path = StrokePath::new();
        path.move_to(Point::new(3.0, 4.0));
        assert!(!path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn line_to_without_current_point_is_ignored() {
        let mut path = StrokePath::new();
        path.line_to(Point::new(3.0, 4.0));
        assert!(path.is_empty());
    }

    #[test]
    fn bounds_cover_all_points() {
        let mut path = StrokePath::new();
        assert_eq!(path.bounds(), None);
        path.move_to(Point::new(5.0, 8.0));
        path.line_to(Point::new(-2.0, 9.0));
        path.line_to(Point::new(4.0, 1.0));
        assert_eq!(path.bounds(), Some((Point::new(-2.0, 1.0), Point::new(5.0, 9.0))));
    }
}
