//! Paint context - an in-memory `Surface`
//!
//! `PaintContext` turns surface calls into device-space [`Path`]s and
//! records a [`DrawCommand`] every time a path is stroked or filled. It is
//! the hand-off point to a rasterizer: everything shape-related has already
//! happened, arcs are cubic segments, and every coordinate has been pushed
//! through the transform in effect when it was issued.

use quill_core::{
    arc_end_angle, Affine2D, Path, PathCommand, Point, Surface, SurfaceError, SurfaceResult,
    TWO_PI,
};
use smallvec::SmallVec;

use crate::config::PaintConfig;
use crate::error::Result;

/// A paint operation recorded by [`PaintContext`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillPath {
        path: Path,
    },
    StrokePath {
        path: Path,
        /// Line width in user units
        width: f64,
        /// Transform in effect when the stroke was issued; the pen is
        /// shaped by it
        transform: Affine2D,
    },
}

impl DrawCommand {
    pub fn path(&self) -> &Path {
        match self {
            DrawCommand::FillPath { path } | DrawCommand::StrokePath { path, .. } => path,
        }
    }
}

/// The paint context used for in-memory drawing
pub struct PaintContext {
    config: PaintConfig,
    commands: Vec<DrawCommand>,
    path: Path,
    transform: Affine2D,
    transform_stack: SmallVec<[Affine2D; 8]>,
    /// Current point and subpath start, in device space
    current: Option<Point>,
    subpath_start: Option<Point>,
}

impl PaintContext {
    /// Create a paint context with the default configuration
    pub fn new() -> Self {
        Self::build(PaintConfig::default())
    }

    /// Create a paint context from a validated configuration
    pub fn with_config(config: PaintConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PaintConfig) -> Self {
        Self {
            config,
            commands: Vec::new(),
            path: Path::new(),
            transform: Affine2D::IDENTITY,
            transform_stack: SmallVec::new(),
            current: None,
            subpath_start: None,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The path built since the last paint, in device space
    pub fn current_path(&self) -> &Path {
        &self.path
    }

    pub fn transform(&self) -> Affine2D {
        self.transform
    }

    /// Number of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.transform_stack.len()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Path state
    // ═══════════════════════════════════════════════════════════════════════════

    fn device(&self, x: f64, y: f64) -> Point {
        self.transform.transform_point(Point::new(x, y))
    }

    fn push_move(&mut self, device: Point) {
        self.path.push(PathCommand::MoveTo(device));
        self.current = Some(device);
        self.subpath_start = Some(device);
    }

    /// Line to `device`, or start a subpath there if there is no current point
    fn push_line(&mut self, device: Point) {
        if self.current.is_none() {
            self.push_move(device);
        } else {
            self.path.push(PathCommand::LineTo(device));
            self.current = Some(device);
        }
    }

    fn take_path(&mut self) -> Path {
        self.current = None;
        self.subpath_start = None;
        std::mem::take(&mut self.path)
    }

    fn paint(&mut self, make: impl FnOnce(Path, &Self) -> DrawCommand) {
        if self.path.is_empty() && !self.config.record_empty_paints {
            tracing::debug!("painting an empty path, nothing recorded");
            self.take_path();
            return;
        }
        let path = self.take_path();
        let command = make(path, self);
        self.commands.push(command);
    }

    fn push_transform(&mut self, step: Affine2D) {
        self.transform = self.transform.then(&step);
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Sweeps beyond one full turn keep a single extra turn plus the remainder,
/// so the end point stays put and the segment count stays bounded
fn fold_sweep(sweep: f64) -> f64 {
    if sweep > TWO_PI {
        (sweep - TWO_PI) % TWO_PI + TWO_PI
    } else {
        sweep
    }
}

/// Cubic segments approximating the unit-circle arc from `start` over
/// `sweep` radians, each covering at most `max_segment`.
///
/// Yields `(control1, control2, end)` on the unit circle.
fn unit_arc_segments(
    start: f64,
    sweep: f64,
    max_segment: f64,
) -> impl Iterator<Item = (Point, Point, Point)> {
    // sweeps within rounding error of a segment multiple get no extra segment
    let count = if sweep > 0.0 {
        (sweep / max_segment - 1e-9).ceil().max(1.0) as usize
    } else {
        0
    };
    let step = if count > 0 { sweep / count as f64 } else { 0.0 };
    // handle length for a cubic matching a circular arc of `step` radians
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    (0..count).map(move |i| {
        let a0 = start + step * i as f64;
        let a1 = a0 + step;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();
        (
            Point::new(c0 - k * s0, s0 + k * c0),
            Point::new(c1 + k * s1, s1 - k * c1),
            Point::new(c1, s1),
        )
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// Surface Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Surface for PaintContext {
    fn move_to(&mut self, x: f64, y: f64) -> SurfaceResult<()> {
        let p = self.device(x, y);
        self.push_move(p);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> SurfaceResult<()> {
        let p = self.device(x, y);
        self.push_line(p);
        Ok(())
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> SurfaceResult<()> {
        let end_angle = arc_end_angle(angle1, angle2);
        let sweep = end_angle - angle1;
        if !sweep.is_finite() || !radius.is_finite() {
            return Err(SurfaceError::InvalidArgument(format!(
                "arc needs finite radius and angles, got r={radius} from {angle1} to {angle2}"
            )));
        }
        let sweep = fold_sweep(sweep);

        let start = Point::polar(angle1, radius);
        let start = self.device(cx + start.x, cy + start.y);
        self.push_line(start);

        let to_device = |p: Point| {
            self.transform
                .transform_point(Point::new(cx + p.x * radius, cy + p.y * radius))
        };
        let segments: SmallVec<[(Point, Point, Point); 4]> =
            unit_arc_segments(angle1, sweep, self.config.max_arc_segment)
                .map(|(c1, c2, end)| (to_device(c1), to_device(c2), to_device(end)))
                .collect();

        for (control1, control2, end) in segments {
            self.path.push(PathCommand::CubicTo {
                control1,
                control2,
                end,
            });
            self.current = Some(end);
        }
        Ok(())
    }

    fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> SurfaceResult<()> {
        let control1 = self.device(x1, y1);
        let control2 = self.device(x2, y2);
        let end = self.device(x3, y3);
        if self.current.is_none() {
            self.push_move(control1);
        }
        self.path.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self.current = Some(end);
        Ok(())
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> SurfaceResult<()> {
        let origin = self.device(x, y);
        self.push_move(origin);
        for (px, py) in [(x + width, y), (x + width, y + height), (x, y + height)] {
            let p = self.device(px, py);
            self.path.push(PathCommand::LineTo(p));
        }
        self.path.push(PathCommand::Close);
        self.current = Some(origin);
        Ok(())
    }

    fn close_path(&mut self) -> SurfaceResult<()> {
        if self.current.is_some() {
            self.path.push(PathCommand::Close);
            self.current = self.subpath_start;
        }
        Ok(())
    }

    fn current_point(&self) -> Option<Point> {
        let device = self.current?;
        Some(self.transform.invert()?.transform_point(device))
    }

    fn stroke(&mut self) -> SurfaceResult<()> {
        let width = self.config.line_width;
        self.paint(|path, ctx| DrawCommand::StrokePath {
            path,
            width,
            transform: ctx.transform,
        });
        Ok(())
    }

    fn fill(&mut self) -> SurfaceResult<()> {
        self.paint(|path, _| DrawCommand::FillPath { path });
        Ok(())
    }

    fn save(&mut self) -> SurfaceResult<()> {
        self.transform_stack.push(self.transform);
        Ok(())
    }

    fn restore(&mut self) -> SurfaceResult<()> {
        match self.transform_stack.pop() {
            Some(saved) => {
                self.transform = saved;
                Ok(())
            }
            None => {
                tracing::warn!("restore without matching save");
                Err(SurfaceError::RestoreWithoutSave)
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) -> SurfaceResult<()> {
        self.push_transform(Affine2D::translation(dx, dy));
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> SurfaceResult<()> {
        self.push_transform(Affine2D::rotation(angle));
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64) -> SurfaceResult<()> {
        self.push_transform(Affine2D::scale(sx, sy));
        Ok(())
    }
}
