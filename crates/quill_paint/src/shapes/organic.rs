//! Randomized shapes
//!
//! Both shapes sample a caller-supplied [`UnitSource`], so seeding (or
//! scripting) the source makes the output reproducible.

use quill_core::{math::clamp, Point, Surface, TransformScope, UnitSource, TWO_PI};

use super::curves::multi_loop;
use super::lines::path;
use crate::error::{Result, ShapeError};

/// How far the inner control points of a splat lobe swing past its slice
const SPLAT_CURVE: f64 = 0.3;

/// Share of a lobe's length at which its shoulder points sit
const SPLAT_SHOULDER: f64 = 0.8;

/// Outline points of a splat centered on the origin, five per node
fn splat_points<R: UnitSource + ?Sized>(
    num_nodes: usize,
    radius: f64,
    inner_radius: f64,
    variation: f64,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if num_nodes < 1 {
        return Err(ShapeError::precondition("splat", "needs at least one node"));
    }

    let slice = TWO_PI / (num_nodes * 2) as f64;
    let variation = clamp(variation, 0.0, 1.0);
    let radius_range = radius - inner_radius;

    let mut angle = 0.0;
    let mut points = Vec::with_capacity(num_nodes * 5);
    for _ in 0..num_nodes {
        let node_radius =
            radius + variation * (rng.next_unit() * radius_range * 2.0 - radius_range);
        let node_range = node_radius - inner_radius;
        let shoulder = inner_radius + node_range * SPLAT_SHOULDER;

        points.push(Point::polar(angle - slice * (1.0 + SPLAT_CURVE), inner_radius));
        points.push(Point::polar(angle + slice * SPLAT_CURVE, inner_radius));
        points.push(Point::polar(angle - slice * SPLAT_CURVE, shoulder));
        points.push(Point::polar(angle + slice / 2.0, node_radius));
        points.push(Point::polar(angle + slice * (1.0 + SPLAT_CURVE), shoulder));

        angle += slice * 2.0;
    }
    Ok(points)
}

/// Blob with `num_nodes` lobes reaching out to about `radius` from a core of
/// `inner_radius`.
///
/// Each lobe's length is perturbed by up to `variation` (clamped to
/// `[0, 1]`) times the lobe length, drawing one sample from `rng` per lobe.
#[allow(clippy::too_many_arguments)]
pub fn splat<S, R>(
    surface: &mut S,
    x: f64,
    y: f64,
    num_nodes: usize,
    radius: f64,
    inner_radius: f64,
    variation: f64,
    rng: &mut R,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: UnitSource + ?Sized,
{
    let points = splat_points(num_nodes, radius, inner_radius, variation, rng)?;
    tracing::trace!(x, y, num_nodes, radius, inner_radius, variation, "splat");

    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x, y)?;
    multi_loop(&mut *scope, &points)?;
    scope.restore()?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn stroke_splat<S, R>(
    surface: &mut S,
    x: f64,
    y: f64,
    num_nodes: usize,
    radius: f64,
    inner_radius: f64,
    variation: f64,
    rng: &mut R,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: UnitSource + ?Sized,
{
    splat(surface, x, y, num_nodes, radius, inner_radius, variation, rng)?;
    surface.stroke()?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn fill_splat<S, R>(
    surface: &mut S,
    x: f64,
    y: f64,
    num_nodes: usize,
    radius: f64,
    inner_radius: f64,
    variation: f64,
    rng: &mut R,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: UnitSource + ?Sized,
{
    splat(surface, x, y, num_nodes, radius, inner_radius, variation, rng)?;
    surface.fill()?;
    Ok(())
}

/// Midpoint-displacement polyline from `from` to `to`.
///
/// Returns `2^iterations + 1` points. Each pass inserts a displaced midpoint
/// between every pair of neighbours, then scales the displacement range by
/// `roughness`.
fn fractal_points<R: UnitSource + ?Sized>(
    from: Point,
    to: Point,
    roughness: f64,
    iterations: usize,
    rng: &mut R,
) -> Vec<Point> {
    let mut offset = from.distance(to) * 0.15;
    let mut points = vec![from, to];

    for _ in 0..iterations {
        let mut next = Vec::with_capacity(points.len() * 2 - 1);
        for pair in points.windows(2) {
            let mid = pair[0].midpoint(pair[1]);
            let dx = rng.next_unit() * offset * 2.0 - offset;
            let dy = rng.next_unit() * offset * 2.0 - offset;
            next.push(pair[0]);
            next.push(Point::new(mid.x + dx, mid.y + dy));
        }
        next.extend(points.last().copied());

        offset *= roughness;
        points = next;
    }
    points
}

/// Jagged line from `(x1, y1)` to `(x2, y2)`, emitted through [`path`].
///
/// Displacement starts at 15% of the line's length; `roughness` below 1
/// smooths later passes. `iterations` doubles the segment count each time.
#[allow(clippy::too_many_arguments)]
pub fn fractal_line<S, R>(
    surface: &mut S,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    roughness: f64,
    iterations: usize,
    rng: &mut R,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: UnitSource + ?Sized,
{
    let points = fractal_points(
        Point::new(x1, y1),
        Point::new(x2, y2),
        roughness,
        iterations,
        rng,
    );
    tracing::trace!(roughness, iterations, count = points.len(), "fractal_line");
    path(surface, &points)
}

#[allow(clippy::too_many_arguments)]
pub fn stroke_fractal_line<S, R>(
    surface: &mut S,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    roughness: f64,
    iterations: usize,
    rng: &mut R,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: UnitSource + ?Sized,
{
    fractal_line(surface, x1, y1, x2, y2, roughness, iterations, rng)?;
    surface.stroke()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PaintContext;
    use crate::shapes::testing::{assert_balanced, assert_point_near, line_targets};
    use quill_core::{math::equalish, Constant, RecordingSurface, RngSource, Sequence, SurfaceCall};

    #[test]
    fn test_fractal_line_constant_source_stays_straight() {
        let mut surface = RecordingSurface::new();
        fractal_line(&mut surface, 0.0, 0.0, 100.0, 0.0, 0.5, 2, &mut Constant(0.5)).unwrap();

        let xs: Vec<f64> = line_targets(&surface).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(line_targets(&surface).iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_fractal_line_point_count() {
        let mut source = RngSource::seeded(3);
        for k in 0..7 {
            let points = fractal_points(Point::ZERO, Point::new(10.0, 10.0), 0.6, k, &mut source);
            assert_eq!(points.len(), (1 << k) + 1);
            assert_eq!(points[0], Point::ZERO);
            assert_eq!(points[points.len() - 1], Point::new(10.0, 10.0));
        }
    }

    #[test]
    fn test_fractal_line_zero_iterations() {
        let mut surface = RecordingSurface::new();
        stroke_fractal_line(&mut surface, 1.0, 2.0, 3.0, 4.0, 0.5, 0, &mut Constant(0.9)).unwrap();

        assert_eq!(
            line_targets(&surface),
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_fractal_line_samples_x_before_y() {
        // length 100, offset 15: sample 1 -> +15 on x, sample 0 -> -15 on y
        let mut source = Sequence::new([1.0, 0.0]);
        let points = fractal_points(Point::ZERO, Point::new(100.0, 0.0), 0.5, 1, &mut source);

        assert_point_near(points[1], 65.0, -15.0);
        assert_eq!(source.drawn(), 2);
    }

    #[test]
    fn test_fractal_line_roughness_shrinks_offset() {
        let mut source = Sequence::new([1.0]);
        let points = fractal_points(Point::ZERO, Point::new(100.0, 0.0), 0.5, 2, &mut source);

        // second pass displaces by 7.5 instead of 15
        assert_point_near(points[2], 65.0, 15.0);
        assert_point_near(points[1], 32.5 + 7.5, 7.5 + 7.5);
    }

    #[test]
    fn test_fractal_line_seeded_is_reproducible() {
        let draw = |seed| {
            let mut surface = RecordingSurface::new();
            fractal_line(&mut surface, 0.0, 0.0, 50.0, 50.0, 0.7, 4, &mut RngSource::seeded(seed))
                .unwrap();
            line_targets(&surface)
        };
        assert_eq!(draw(11), draw(11));
    }

    #[test]
    fn test_splat_points_without_variation() {
        let points = splat_points(4, 10.0, 2.0, 0.0, &mut Constant(0.9)).unwrap();
        assert_eq!(points.len(), 20);

        for lobe in points.chunks(5) {
            assert!(equalish(lobe[0].distance(Point::ZERO), 2.0, 1e-9));
            assert!(equalish(lobe[1].distance(Point::ZERO), 2.0, 1e-9));
            assert!(equalish(lobe[2].distance(Point::ZERO), 2.0 + 8.0 * 0.8, 1e-9));
            assert!(equalish(lobe[3].distance(Point::ZERO), 10.0, 1e-9));
            assert!(equalish(lobe[4].distance(Point::ZERO), 2.0 + 8.0 * 0.8, 1e-9));
        }

        // tip of the first lobe sits half a slice past angle 0
        let slice = TWO_PI / 8.0;
        assert_point_near(points[3], (slice / 2.0).cos() * 10.0, (slice / 2.0).sin() * 10.0);
    }

    #[test]
    fn test_splat_variation_perturbs_each_lobe() {
        // U = 1 pushes a lobe out by the full range, U = 0 pulls it to the core
        let mut source = Sequence::new([1.0, 0.0]);
        let points = splat_points(2, 10.0, 4.0, 1.0, &mut source).unwrap();

        assert!(equalish(points[3].distance(Point::ZERO), 16.0, 1e-9));
        assert!(equalish(points[8].distance(Point::ZERO), 4.0, 1e-9));
        assert!(equalish(points[7].distance(Point::ZERO), 4.0, 1e-9));
        assert_eq!(source.drawn(), 2);
    }

    #[test]
    fn test_splat_variation_is_clamped() {
        let a = splat_points(3, 10.0, 4.0, 5.0, &mut Constant(1.0)).unwrap();
        let b = splat_points(3, 10.0, 4.0, 1.0, &mut Constant(1.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_splat_trace() {
        let mut surface = RecordingSurface::new();
        fill_splat(&mut surface, 20.0, 30.0, 5, 10.0, 3.0, 0.5, &mut RngSource::seeded(1)).unwrap();

        let calls = surface.calls();
        assert_eq!(calls[0], SurfaceCall::Save);
        assert_eq!(calls[1], SurfaceCall::Translate { dx: 20.0, dy: 30.0 });
        assert!(matches!(calls[2], SurfaceCall::MoveTo(_)));
        let curves = calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::CurveTo { .. }))
            .count();
        assert_eq!(curves, 25);
        assert_eq!(surface.fill_count(), 1);
        assert_balanced(&surface);
    }

    #[test]
    fn test_splat_without_nodes() {
        let mut surface = RecordingSurface::new();
        let err = stroke_splat(&mut surface, 0.0, 0.0, 0, 10.0, 2.0, 0.5, &mut Constant(0.5))
            .unwrap_err();

        assert!(matches!(
            err,
            ShapeError::PreconditionViolated { operation: "splat", .. }
        ));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_splat_with_dyn_source() {
        let mut ctx = PaintContext::new();
        let mut seeded = RngSource::seeded(9);
        let source: &mut dyn UnitSource = &mut seeded;
        stroke_splat(&mut ctx, 0.0, 0.0, 6, 20.0, 5.0, 0.3, source).unwrap();

        assert_eq!(ctx.commands().len(), 1);
        assert_eq!(ctx.save_depth(), 0);
    }

    #[test]
    fn test_splat_restores_when_surface_fails() {
        // save, translate, move_to, curve (fails)
        let mut surface = RecordingSurface::new().fail_on_call(3);
        let err = splat(&mut surface, 1.0, 1.0, 3, 5.0, 1.0, 0.0, &mut Constant(0.0)).unwrap_err();

        assert!(matches!(err, ShapeError::Surface(_)));
        assert_balanced(&surface);
    }
}
