//! Shape library
//!
//! Every shape is a free function generic over the [`Surface`] it draws
//! on. Plain shapes only build a path; their `stroke_*` and `fill_*`
//! variants build the same path and then paint it once. Shapes that move
//! the user space do so inside a [`TransformScope`](quill_core::TransformScope),
//! so the surface transform is the same on exit as on entry, whether the
//! shape succeeds or fails part-way.
//!
//! The [`Shapes`] extension trait exposes the same operations as methods on
//! any surface:
//!
//! ```
//! use quill_paint::{PaintContext, Shapes};
//!
//! let mut ctx = PaintContext::new();
//! ctx.stroke_polygon(50.0, 50.0, 20.0, 6, 0.0).unwrap();
//! ctx.fill_circle(50.0, 50.0, 4.0).unwrap();
//! assert_eq!(ctx.commands().len(), 2);
//! ```

mod curves;
mod ellipses;
mod figures;
mod lines;
mod organic;
mod rects;

#[cfg(test)]
mod testing;

pub use curves::{
    fill_multi_loop, multi_curve, multi_loop, quadratic_curve_to, stroke_curve_to,
    stroke_multi_curve, stroke_multi_loop, stroke_quadratic_curve_to,
};
pub use ellipses::{circle, ellipse, fill_circle, fill_ellipse, stroke_circle, stroke_ellipse};
pub use figures::{
    fill_heart, fill_polygon, fill_star, heart, polygon, star, stroke_heart, stroke_polygon,
    stroke_star,
};
pub use lines::{fill_path, grid, line, line_through, path, points, ray, stroke_path};
pub use organic::{fill_splat, fractal_line, splat, stroke_fractal_line, stroke_splat};
pub use rects::{
    fill_rectangle, fill_round_rectangle, rectangle, round_rectangle, stroke_rectangle,
    stroke_round_rectangle,
};

use quill_core::{Point, Surface, UnitSource};

use crate::error::Result;

/// Method-call access to the shape library.
///
/// Implemented for every [`Surface`], including `dyn Surface`. Plain
/// `rectangle` is left to [`Surface::rectangle`].
#[allow(clippy::too_many_arguments)]
pub trait Shapes: Surface {
    // ─────────────────────────────────────────────────────────────────────────
    // Lines
    // ─────────────────────────────────────────────────────────────────────────

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<()> {
        lines::line(self, x0, y0, x1, y1)
    }

    fn line_through(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, overlap: f64) -> Result<()> {
        lines::line_through(self, x0, y0, x1, y1, overlap)
    }

    fn ray(&mut self, x: f64, y: f64, angle: f64, offset: f64, length: f64) -> Result<()> {
        lines::ray(self, x, y, angle, offset, length)
    }

    fn path(&mut self, points: &[Point]) -> Result<()> {
        lines::path(self, points)
    }

    fn fill_path(&mut self, points: &[Point]) -> Result<()> {
        lines::fill_path(self, points)
    }

    fn stroke_path(&mut self, points: &[Point], close: bool) -> Result<()> {
        lines::stroke_path(self, points, close)
    }

    fn points(&mut self, points: &[Point], radius: f64) -> Result<()> {
        lines::points(self, points, radius)
    }

    fn grid(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        x_res: f64,
        y_res: f64,
    ) -> Result<()> {
        lines::grid(self, x, y, width, height, x_res, y_res)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rectangles
    // ─────────────────────────────────────────────────────────────────────────

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        rects::fill_rectangle(self, x, y, width, height)
    }

    fn stroke_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        rects::stroke_rectangle(self, x, y, width, height)
    }

    fn round_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    ) -> Result<()> {
        rects::round_rectangle(self, x, y, width, height, radius)
    }

    fn stroke_round_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    ) -> Result<()> {
        rects::stroke_round_rectangle(self, x, y, width, height, radius)
    }

    fn fill_round_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    ) -> Result<()> {
        rects::fill_round_rectangle(self, x, y, width, height, radius)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Circles and Ellipses
    // ─────────────────────────────────────────────────────────────────────────

    fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        ellipses::circle(self, x, y, radius)
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        ellipses::fill_circle(self, x, y, radius)
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        ellipses::stroke_circle(self, x, y, radius)
    }

    fn ellipse(&mut self, x: f64, y: f64, x_radius: f64, y_radius: f64) -> Result<()> {
        ellipses::ellipse(self, x, y, x_radius, y_radius)
    }

    fn fill_ellipse(&mut self, x: f64, y: f64, x_radius: f64, y_radius: f64) -> Result<()> {
        ellipses::fill_ellipse(self, x, y, x_radius, y_radius)
    }

    fn stroke_ellipse(&mut self, x: f64, y: f64, x_radius: f64, y_radius: f64) -> Result<()> {
        ellipses::stroke_ellipse(self, x, y, x_radius, y_radius)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Figures
    // ─────────────────────────────────────────────────────────────────────────

    fn polygon(&mut self, x: f64, y: f64, radius: f64, sides: usize, rotation: f64) -> Result<()> {
        figures::polygon(self, x, y, radius, sides, rotation)
    }

    fn stroke_polygon(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        sides: usize,
        rotation: f64,
    ) -> Result<()> {
        figures::stroke_polygon(self, x, y, radius, sides, rotation)
    }

    fn fill_polygon(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        sides: usize,
        rotation: f64,
    ) -> Result<()> {
        figures::fill_polygon(self, x, y, radius, sides, rotation)
    }

    fn star(
        &mut self,
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        points: usize,
        rotation: f64,
    ) -> Result<()> {
        figures::star(self, x, y, inner_radius, outer_radius, points, rotation)
    }

    fn stroke_star(
        &mut self,
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        points: usize,
        rotation: f64,
    ) -> Result<()> {
        figures::stroke_star(self, x, y, inner_radius, outer_radius, points, rotation)
    }

    fn fill_star(
        &mut self,
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        points: usize,
        rotation: f64,
    ) -> Result<()> {
        figures::fill_star(self, x, y, inner_radius, outer_radius, points, rotation)
    }

    fn heart(&mut self, x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Result<()> {
        figures::heart(self, x, y, width, height, rotation)
    }

    fn fill_heart(&mut self, x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Result<()> {
        figures::fill_heart(self, x, y, width, height, rotation)
    }

    fn stroke_heart(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    ) -> Result<()> {
        figures::stroke_heart(self, x, y, width, height, rotation)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Curves
    // ─────────────────────────────────────────────────────────────────────────

    fn stroke_curve_to(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<()> {
        curves::stroke_curve_to(self, x0, y0, x1, y1, x2, y2)
    }

    fn quadratic_curve_to(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<()> {
        curves::quadratic_curve_to(self, x0, y0, x1, y1)
    }

    fn stroke_quadratic_curve_to(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<()> {
        curves::stroke_quadratic_curve_to(self, x0, y0, x1, y1)
    }

    fn multi_curve(&mut self, points: &[Point]) -> Result<()> {
        curves::multi_curve(self, points)
    }

    fn stroke_multi_curve(&mut self, points: &[Point]) -> Result<()> {
        curves::stroke_multi_curve(self, points)
    }

    fn multi_loop(&mut self, points: &[Point]) -> Result<()> {
        curves::multi_loop(self, points)
    }

    fn fill_multi_loop(&mut self, points: &[Point]) -> Result<()> {
        curves::fill_multi_loop(self, points)
    }

    fn stroke_multi_loop(&mut self, points: &[Point]) -> Result<()> {
        curves::stroke_multi_loop(self, points)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Randomized
    // ─────────────────────────────────────────────────────────────────────────

    fn splat<R: UnitSource + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        num_nodes: usize,
        radius: f64,
        inner_radius: f64,
        variation: f64,
        rng: &mut R,
    ) -> Result<()> {
        organic::splat(self, x, y, num_nodes, radius, inner_radius, variation, rng)
    }

    fn stroke_splat<R: UnitSource + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        num_nodes: usize,
        radius: f64,
        inner_radius: f64,
        variation: f64,
        rng: &mut R,
    ) -> Result<()> {
        organic::stroke_splat(self, x, y, num_nodes, radius, inner_radius, variation, rng)
    }

    fn fill_splat<R: UnitSource + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        num_nodes: usize,
        radius: f64,
        inner_radius: f64,
        variation: f64,
        rng: &mut R,
    ) -> Result<()> {
        organic::fill_splat(self, x, y, num_nodes, radius, inner_radius, variation, rng)
    }

    fn fractal_line<R: UnitSource + ?Sized>(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        roughness: f64,
        iterations: usize,
        rng: &mut R,
    ) -> Result<()> {
        organic::fractal_line(self, x1, y1, x2, y2, roughness, iterations, rng)
    }

    fn stroke_fractal_line<R: UnitSource + ?Sized>(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        roughness: f64,
        iterations: usize,
        rng: &mut R,
    ) -> Result<()> {
        organic::stroke_fractal_line(self, x1, y1, x2, y2, roughness, iterations, rng)
    }
}

impl<S: Surface + ?Sized> Shapes for S {}
