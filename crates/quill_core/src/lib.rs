//! Quill Core
//!
//! The foundation the Quill shape library is built on:
//!
//! - **Math**: range mapping, clamping, wrapping, and trig helpers
//! - **Geometry**: `Point` and the `Affine2D` transform
//! - **Surface**: the path/paint/transform capability shapes draw through
//! - **Recording**: a surface that records its call trace
//! - **Random**: the uniform sampler stochastic shapes consume
//!
//! # Example
//!
//! ```rust
//! use quill_core::{math, Point, RecordingSurface, Surface, SurfaceCall};
//!
//! let mut surface = RecordingSurface::new();
//! surface.move_to(0.0, 0.0).unwrap();
//! surface.line_to(math::map_to(0.5, 0.0, 1.0, 0.0, 10.0), 0.0).unwrap();
//! surface.stroke().unwrap();
//!
//! assert_eq!(surface.calls()[1], SurfaceCall::LineTo(Point::new(5.0, 0.0)));
//! ```

pub mod geometry;
pub mod math;
pub mod path;
pub mod random;
pub mod recording;
pub mod surface;

pub use geometry::{Affine2D, Point};
pub use math::{HALF_PI, TWO_PI};
pub use path::{Path, PathCommand};
pub use random::{Constant, RngSource, Sequence, UnitSource};
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::{
    arc_end_angle, Result as SurfaceResult, Surface, SurfaceError, TransformScope,
};
