//! Drawing surface
//!
//! The `Surface` trait is the capability set the shape library draws
//! through: path construction, painting, and a save/restore transform
//! stack. Implementations decide what paths turn into; Quill ships
//! [`RecordingSurface`](crate::RecordingSurface) and `quill_paint`'s
//! `PaintContext`, and a rasterizer binding only needs to implement this
//! trait.
//!
//! # Example
//!
//! ```
//! use quill_core::{RecordingSurface, Surface, TransformScope};
//!
//! fn tick(surface: &mut impl Surface) -> quill_core::SurfaceResult<()> {
//!     let mut scoped = TransformScope::enter(surface)?;
//!     scoped.translate(10.0, 20.0)?;
//!     scoped.move_to(0.0, 0.0)?;
//!     scoped.line_to(5.0, 0.0)?;
//!     scoped.stroke()?;
//!     scoped.restore()
//! }
//!
//! let mut surface = RecordingSurface::new();
//! tick(&mut surface).unwrap();
//! assert_eq!(surface.save_depth(), 0);
//! ```

use std::ops::{Deref, DerefMut};

use thiserror::Error;

use crate::geometry::Point;
use crate::math::TWO_PI;

/// Errors raised by a drawing surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// `restore` without a matching `save`
    #[error("restore called without a matching save")]
    RestoreWithoutSave,

    /// The current transform cannot be inverted
    #[error("current transform is singular")]
    SingularTransform,

    /// An argument the surface cannot represent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by the underlying backend
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// A stateful 2D drawing target.
///
/// A surface owns a current point, a current path, and a current transform.
/// Coordinates passed to path methods are in user space, i.e. relative to
/// the transform in effect at the time of the call.
pub trait Surface {
    // ─────────────────────────────────────────────────────────────────────────
    // Path Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Begin a new subpath at `(x, y)`
    fn move_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Straight segment from the current point to `(x, y)`
    fn line_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Circular arc around `(cx, cy)` from `angle1` to `angle2`.
    ///
    /// The arc always sweeps in the direction of increasing angle; an end
    /// angle below the start angle is advanced by full turns until it is not.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, angle1: f64, angle2: f64) -> Result<()>;

    /// Cubic Bézier from the current point to `(x3, y3)`
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Result<()>;

    /// Closed axis-aligned rectangle subpath
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()>;

    /// Close the current subpath
    fn close_path(&mut self) -> Result<()>;

    /// Current point in user space, if the path has one
    fn current_point(&self) -> Option<Point>;

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    /// Stroke the current path and clear it
    fn stroke(&mut self) -> Result<()>;

    /// Fill the current path and clear it
    fn fill(&mut self) -> Result<()>;

    // ─────────────────────────────────────────────────────────────────────────
    // Transform Stack
    // ─────────────────────────────────────────────────────────────────────────

    /// Push the current transform
    fn save(&mut self) -> Result<()>;

    /// Pop back to the most recently saved transform
    fn restore(&mut self) -> Result<()>;

    fn translate(&mut self, dx: f64, dy: f64) -> Result<()>;

    /// Rotate the user space by `angle` radians
    fn rotate(&mut self, angle: f64) -> Result<()>;

    fn scale(&mut self, sx: f64, sy: f64) -> Result<()>;
}

/// End angle of an arc once it is made to sweep forward from `angle1`.
///
/// `angle2` is advanced by whole turns until it is no smaller than `angle1`.
/// Non-finite angles are returned unchanged.
pub fn arc_end_angle(angle1: f64, angle2: f64) -> f64 {
    if !(angle1.is_finite() && angle2.is_finite()) || angle2 >= angle1 {
        return angle2;
    }
    let mut end = angle2 + ((angle1 - angle2) / TWO_PI).ceil() * TWO_PI;
    while end < angle1 {
        end += TWO_PI;
    }
    end
}

// ─────────────────────────────────────────────────────────────────────────────
// Scoped Transform
// ─────────────────────────────────────────────────────────────────────────────

/// A `save` that is guaranteed a matching `restore`.
///
/// Entering the scope calls `save`. Call [`TransformScope::restore`] on the
/// success path so a failing restore is reported; if the scope is dropped
/// instead (an early `?` return), it restores on the way out.
pub struct TransformScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    active: bool,
}

impl<'a, S: Surface + ?Sized> TransformScope<'a, S> {
    /// Save the surface state and borrow it for the lifetime of the scope
    pub fn enter(surface: &'a mut S) -> Result<Self> {
        surface.save()?;
        Ok(Self {
            surface,
            active: true,
        })
    }

    /// Close the scope, restoring the transform saved on entry
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        self.surface.restore()
    }
}

impl<S: Surface + ?Sized> Deref for TransformScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for TransformScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for TransformScope<'_, S> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        tracing::debug!("transform scope dropped early, restoring");
        if let Err(err) = self.surface.restore() {
            tracing::warn!(%err, "restore failed while unwinding transform scope");
        }
    }
}
