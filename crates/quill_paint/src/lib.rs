//! Quill Paint
//!
//! A library of 2D vector shapes drawn through the [`Surface`] trait from
//! `quill_core`, plus [`PaintContext`], an in-memory surface that turns
//! them into device-space paths ready for a rasterizer.
//!
//! # Features
//!
//! - Lines, rays, grids, and polylines
//! - Rectangles (square and rounded), circles, ellipses
//! - Regular polygons, stars, and a parametric heart
//! - Quadratic helpers and smooth curves through point lists
//! - Randomized splats and fractal lines driven by a caller-supplied source
//!
//! # Example
//!
//! ```rust
//! use quill_paint::{shapes, DrawCommand, PaintContext, RngSource, Shapes};
//!
//! let mut ctx = PaintContext::new();
//! let mut rng = RngSource::seeded(7);
//!
//! ctx.stroke_circle(100.0, 100.0, 40.0).unwrap();
//! shapes::fill_splat(&mut ctx, 100.0, 100.0, 8, 30.0, 10.0, 0.4, &mut rng).unwrap();
//!
//! let commands = ctx.take_commands();
//! assert!(matches!(commands[0], DrawCommand::StrokePath { .. }));
//! assert!(matches!(commands[1], DrawCommand::FillPath { .. }));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod shapes;

pub use config::PaintConfig;
pub use context::{DrawCommand, PaintContext};
pub use error::{Result, ShapeError};
pub use shapes::Shapes;

// ─────────────────────────────────────────────────────────────────────────────
// Core re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use quill_core::{
    math, Affine2D, Constant, Path, PathCommand, Point, RecordingSurface, RngSource, Sequence,
    Surface, SurfaceCall, SurfaceError, TransformScope, UnitSource, HALF_PI, TWO_PI,
};
