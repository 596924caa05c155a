//! Path values
//!
//! A `Path` is the finished, device-space form of what a surface built from
//! `move_to`/`line_to`/`arc`/`curve_to` calls. Arcs have already been turned
//! into cubic Bézier segments, so only four command kinds remain.

use crate::geometry::Point;

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// The point this command leaves the pen at, if it moves the pen explicitly
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.push(PathCommand::Close);
        self
    }

    /// Append a command in place
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every command, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// End points of every pen-moving command, in order
    pub fn end_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(PathCommand::end_point)
    }

    /// Axis-aligned bounds of every point in the path, control points included.
    ///
    /// Returns `(min, max)`, or `None` for an empty path or one with
    /// non-finite coordinates.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .line_to(100.0, 100.0)
            .line_to(0.0, 100.0)
            .close();

        assert_eq!(path.len(), 5);
        assert_eq!(path.end_points().count(), 4);
    }

    #[test]
    fn test_bounds_include_control_points() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .cubic_to(0.0, -10.0, 20.0, 30.0, 10.0, 0.0);
        assert_eq!(
            path.bounds(),
            Some((Point::new(0.0, -10.0), Point::new(20.0, 30.0)))
        );
        assert_eq!(Path::new().bounds(), None);
        assert_eq!(Path::new().close().bounds(), None);
    }

    #[test]
    fn test_clear_keeps_path_usable() {
        let mut path = Path::new().move_to(1.0, 1.0).line_to(2.0, 2.0);
        path.clear();
        assert!(path.is_empty());
        path.push(PathCommand::MoveTo(Point::new(3.0, 3.0)));
        assert_eq!(path.commands(), &[PathCommand::MoveTo(Point::new(3.0, 3.0))]);
    }

    #[test]
    fn test_from_commands_matches_builder() {
        let built = Path::new().move_to(1.0, 2.0).line_to(3.0, 4.0).close();
        let from = Path::from_commands(vec![
            PathCommand::MoveTo(Point::new(1.0, 2.0)),
            PathCommand::LineTo(Point::new(3.0, 4.0)),
            PathCommand::Close,
        ]);
        assert_eq!(from.commands(), built.commands());
        assert_eq!(from.bounds(), Some((Point::new(1.0, 2.0), Point::new(3.0, 4.0))));
        assert!(Path::from_commands(Vec::new()).is_empty());
    }
}
