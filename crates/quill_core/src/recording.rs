//! Recording surface
//!
//! `RecordingSurface` keeps a trace of every surface call it receives, in
//! user-space coordinates exactly as issued. It also tracks enough state
//! (transform stack, current point) to answer `current_point` the way a
//! real backend would, which is what the quadratic-curve helpers need.

use smallvec::SmallVec;

use crate::geometry::{Affine2D, Point};
use crate::surface::{arc_end_angle, Result, Surface, SurfaceError};

/// A surface call, as issued by the caller
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceCall {
    // Path construction
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        angle1: f64,
        angle2: f64,
    },
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    ClosePath,

    // Painting
    Stroke,
    Fill,

    // Transform
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate(f64),
    Scale {
        sx: f64,
        sy: f64,
    },
}

impl SurfaceCall {
    /// Whether this call adds to the current path
    pub fn is_path_op(&self) -> bool {
        matches!(
            self,
            SurfaceCall::MoveTo(_)
                | SurfaceCall::LineTo(_)
                | SurfaceCall::Arc { .. }
                | SurfaceCall::CurveTo { .. }
                | SurfaceCall::Rectangle { .. }
                | SurfaceCall::ClosePath
        )
    }
}

/// A surface that records calls for later inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    transform: Affine2D,
    transform_stack: SmallVec<[Affine2D; 8]>,
    /// Current point and subpath start, in device space
    current: Option<Point>,
    subpath_start: Option<Point>,
    attempts: usize,
    fail_on: Option<usize>,
}

impl RecordingSurface {
    /// Create a new recording surface with an identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `index`-th call (zero-based, counting every attempted call)
    /// fail with [`SurfaceError::Backend`] without taking effect.
    pub fn fail_on_call(mut self, index: usize) -> Self {
        self.fail_on = Some(index);
        self
    }

    /// Get the recorded calls
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving surface state untouched
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Recorded calls that build paths, skipping paint and transform calls
    pub fn path_calls(&self) -> impl Iterator<Item = &SurfaceCall> + '_ {
        self.calls.iter().filter(|c| c.is_path_op())
    }

    /// Clear all recorded calls and reset state
    pub fn clear(&mut self) {
        let fail_on = self.fail_on;
        *self = Self::default();
        self.fail_on = fail_on;
    }

    /// The current transformation matrix
    pub fn transform(&self) -> Affine2D {
        self.transform
    }

    /// Number of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.transform_stack.len()
    }

    pub fn stroke_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == SurfaceCall::Stroke).count()
    }

    pub fn fill_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == SurfaceCall::Fill).count()
    }

    fn attempt(&mut self) -> Result<()> {
        let index = self.attempts;
        self.attempts += 1;
        if self.fail_on == Some(index) {
            return Err(SurfaceError::Backend(format!("injected failure at call {index}")));
        }
        Ok(())
    }

    fn device(&self, x: f64, y: f64) -> Point {
        self.transform.transform_point(Point::new(x, y))
    }

    fn start_subpath(&mut self, device: Point) {
        self.current = Some(device);
        self.subpath_start = Some(device);
    }

    fn extend_to(&mut self, device: Point) {
        if self.current.is_none() {
            self.subpath_start = Some(device);
        }
        self.current = Some(device);
    }

    fn clear_path(&mut self) {
        self.current = None;
        self.subpath_start = None;
    }
}

impl Surface for RecordingSurface {
    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::MoveTo(Point::new(x, y)));
        let p = self.device(x, y);
        self.start_subpath(p);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::LineTo(Point::new(x, y)));
        let p = self.device(x, y);
        self.extend_to(p);
        Ok(())
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, angle1: f64, angle2: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Arc {
            center: Point::new(cx, cy),
            radius,
            angle1,
            angle2,
        });

        let end_angle = arc_end_angle(angle1, angle2);
        let start = Point::polar(angle1, radius);
        let end = Point::polar(end_angle, radius);
        let start = self.device(cx + start.x, cy + start.y);
        let end = self.device(cx + end.x, cy + end.y);
        if self.current.is_none() {
            self.subpath_start = Some(start);
        }
        self.current = Some(end);
        Ok(())
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::CurveTo {
            control1: Point::new(x1, y1),
            control2: Point::new(x2, y2),
            end: Point::new(x3, y3),
        });
        if self.current.is_none() {
            let start = self.device(x1, y1);
            self.start_subpath(start);
        }
        let end = self.device(x3, y3);
        self.current = Some(end);
        Ok(())
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Rectangle {
            x,
            y,
            width,
            height,
        });
        let origin = self.device(x, y);
        self.start_subpath(origin);
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::ClosePath);
        self.current = self.subpath_start;
        Ok(())
    }

    fn current_point(&self) -> Option<Point> {
        let device = self.current?;
        let inverse = self.transform.invert()?;
        Some(inverse.transform_point(device))
    }

    fn stroke(&mut self) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Stroke);
        self.clear_path();
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Fill);
        self.clear_path();
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Save);
        self.transform_stack.push(self.transform);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.attempt()?;
        let Some(saved) = self.transform_stack.pop() else {
            return Err(SurfaceError::RestoreWithoutSave);
        };
        self.calls.push(SurfaceCall::Restore);
        self.transform = saved;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Translate { dx, dy });
        self.transform = self.transform.then(&Affine2D::translation(dx, dy));
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Rotate(angle));
        self.transform = self.transform.then(&Affine2D::rotation(angle));
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64) -> Result<()> {
        self.attempt()?;
        self.calls.push(SurfaceCall::Scale { sx, sy });
        self.transform = self.transform.then(&Affine2D::scale(sx, sy));
        Ok(())
    }
}
