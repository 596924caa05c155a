//! Bézier helpers: quadratic segments and smooth curves through point lists

use quill_core::{Point, Surface};

use crate::error::{Result, ShapeError};

/// Stroke a cubic from the current point
pub fn stroke_curve_to<S: Surface + ?Sized>(
    surface: &mut S,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> Result<()> {
    surface.curve_to(x0, y0, x1, y1, x2, y2)?;
    surface.stroke()?;
    Ok(())
}

/// Quadratic Bézier from the current point through control `(x0, y0)` to
/// `(x1, y1)`, emitted as the equivalent cubic.
///
/// Without a current point the curve is elevated from the origin; the
/// surface then starts a subpath at the first control point as it would for
/// any `curve_to`.
pub fn quadratic_curve_to<S: Surface + ?Sized>(
    surface: &mut S,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> Result<()> {
    let p = surface.current_point().unwrap_or(Point::ZERO);
    surface.curve_to(
        2.0 / 3.0 * x0 + 1.0 / 3.0 * p.x,
        2.0 / 3.0 * y0 + 1.0 / 3.0 * p.y,
        2.0 / 3.0 * x0 + 1.0 / 3.0 * x1,
        2.0 / 3.0 * y0 + 1.0 / 3.0 * y1,
        x1,
        y1,
    )?;
    Ok(())
}

pub fn stroke_quadratic_curve_to<S: Surface + ?Sized>(
    surface: &mut S,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> Result<()> {
    quadratic_curve_to(surface, x0, y0, x1, y1)?;
    surface.stroke()?;
    Ok(())
}

fn require_two(operation: &'static str, points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(ShapeError::precondition(
            operation,
            format!("needs at least 2 points, got {}", points.len()),
        ));
    }
    Ok(())
}

/// Smooth open curve from the first point to the last.
///
/// Interior points act as quadratic control points, with the curve passing
/// through the midpoints between neighbours. The two end segments are
/// straight, from each end to its neighbouring midpoint.
pub fn multi_curve<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    require_two("multi_curve", points)?;
    tracing::trace!(count = points.len(), "multi_curve");

    let first = points[0];
    let last = points[points.len() - 1];
    let mid = first.midpoint(points[1]);
    surface.move_to(first.x, first.y)?;
    surface.line_to(mid.x, mid.y)?;

    for pair in points[1..].windows(2) {
        let (control, next) = (pair[0], pair[1]);
        let mid = control.midpoint(next);
        quadratic_curve_to(surface, control.x, control.y, mid.x, mid.y)?;
    }

    surface.line_to(last.x, last.y)?;
    Ok(())
}

pub fn stroke_multi_curve<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    multi_curve(surface, points)?;
    surface.stroke()?;
    Ok(())
}

/// Smooth closed curve with every point as a quadratic control point.
///
/// The curve passes through the midpoint of each pair of neighbours,
/// wrapping from the last point back to the first, and starts and ends on
/// the midpoint between the last and first points.
pub fn multi_loop<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    require_two("multi_loop", points)?;
    tracing::trace!(count = points.len(), "multi_loop");

    let last = points[points.len() - 1];
    let start = last.midpoint(points[0]);
    surface.move_to(start.x, start.y)?;

    for pair in points.windows(2) {
        let (control, next) = (pair[0], pair[1]);
        let mid = control.midpoint(next);
        quadratic_curve_to(surface, control.x, control.y, mid.x, mid.y)?;
    }

    quadratic_curve_to(surface, last.x, last.y, start.x, start.y)?;
    Ok(())
}

pub fn fill_multi_loop<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    multi_loop(surface, points)?;
    surface.fill()?;
    Ok(())
}

pub fn stroke_multi_loop<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    multi_loop(surface, points)?;
    surface.stroke()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PaintContext;
    use crate::shapes::testing::{assert_point_near, line_targets};
    use quill_core::{PathCommand, RecordingSurface, SurfaceCall};

    fn curves(surface: &RecordingSurface) -> Vec<(Point, Point, Point)> {
        surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::CurveTo {
                    control1,
                    control2,
                    end,
                } => Some((*control1, *control2, *end)),
                _ => None,
            })
            .collect()
    }

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_quadratic_from_origin() {
        let mut surface = RecordingSurface::new();
        surface.move_to(0.0, 0.0).unwrap();
        quadratic_curve_to(&mut surface, 4.0, 0.0, 8.0, 0.0).unwrap();

        let (c1, c2, end) = curves(&surface)[0];
        assert_point_near(c1, 8.0 / 3.0, 0.0);
        assert_point_near(c2, 16.0 / 3.0, 0.0);
        assert_eq!(end, Point::new(8.0, 0.0));
    }

    #[test]
    fn test_quadratic_degree_elevation() {
        let cases = [
            (Point::new(1.0, 1.0), Point::new(5.0, 9.0), Point::new(9.0, 1.0)),
            (Point::new(-3.0, 2.0), Point::new(0.0, 0.0), Point::new(7.5, -4.0)),
            (Point::new(2.0, 2.0), Point::new(2.0, 2.0), Point::new(2.0, 2.0)),
        ];
        for (start, control, end) in cases {
            let mut surface = RecordingSurface::new();
            surface.move_to(start.x, start.y).unwrap();
            quadratic_curve_to(&mut surface, control.x, control.y, end.x, end.y).unwrap();

            let (c1, c2, _) = curves(&surface)[0];
            let expect1 = start.lerp(control, 2.0 / 3.0);
            let expect2 = end.lerp(control, 2.0 / 3.0);
            assert_point_near(c1, expect1.x, expect1.y);
            assert_point_near(c2, expect2.x, expect2.y);
        }
    }

    #[test]
    fn test_quadratic_without_current_point() {
        let mut surface = RecordingSurface::new();
        quadratic_curve_to(&mut surface, 3.0, 3.0, 6.0, 0.0).unwrap();

        let (c1, _, _) = curves(&surface)[0];
        assert_point_near(c1, 2.0, 2.0);
    }

    #[test]
    fn test_quadratic_in_transformed_space() {
        let mut surface = RecordingSurface::new();
        surface.translate(100.0, 100.0).unwrap();
        surface.move_to(3.0, 0.0).unwrap();
        quadratic_curve_to(&mut surface, 6.0, 3.0, 9.0, 0.0).unwrap();

        // current point is reported in user space
        let (c1, _, _) = curves(&surface)[0];
        assert_point_near(c1, 5.0, 2.0);
    }

    #[test]
    fn test_stroke_curve_variants() {
        let mut surface = RecordingSurface::new();
        surface.move_to(0.0, 0.0).unwrap();
        stroke_curve_to(&mut surface, 1.0, 1.0, 2.0, 1.0, 3.0, 0.0).unwrap();
        surface.move_to(0.0, 0.0).unwrap();
        stroke_quadratic_curve_to(&mut surface, 1.0, 1.0, 2.0, 0.0).unwrap();

        assert_eq!(surface.stroke_count(), 2);
        assert_eq!(curves(&surface).len(), 2);
    }

    #[test]
    fn test_multi_curve_shape() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        let mut surface = RecordingSurface::new();
        stroke_multi_curve(&mut surface, &points).unwrap();

        assert_eq!(surface.calls()[0], SurfaceCall::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            line_targets(&surface),
            vec![Point::new(5.0, 5.0), Point::new(30.0, 10.0)]
        );
        let ends: Vec<_> = curves(&surface).into_iter().map(|(_, _, e)| e).collect();
        assert_eq!(ends, vec![Point::new(15.0, 5.0), Point::new(25.0, 5.0)]);
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_multi_curve_two_points_is_straight() {
        let mut surface = RecordingSurface::new();
        multi_curve(&mut surface, &[Point::new(0.0, 0.0), Point::new(4.0, 2.0)]).unwrap();

        assert!(curves(&surface).is_empty());
        assert_eq!(
            line_targets(&surface),
            vec![Point::new(2.0, 1.0), Point::new(4.0, 2.0)]
        );
    }

    #[test]
    fn test_multi_loop_square() {
        let mut surface = RecordingSurface::new();
        multi_loop(&mut surface, &square()).unwrap();

        assert_eq!(surface.calls()[0], SurfaceCall::MoveTo(Point::new(0.0, 5.0)));
        let ends: Vec<_> = curves(&surface).into_iter().map(|(_, _, e)| e).collect();
        assert_eq!(
            ends,
            vec![
                Point::new(5.0, 0.0),
                Point::new(10.0, 5.0),
                Point::new(5.0, 10.0),
                Point::new(0.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_multi_loop_is_closed_in_device_space() {
        let mut ctx = PaintContext::new();
        ctx.translate(5.0, 5.0).unwrap();
        fill_multi_loop(&mut ctx, &square()).unwrap();

        let path = ctx.commands()[0].path();
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        let ends: Vec<_> = path.end_points().collect();
        assert_eq!(ends.first(), ends.last());
        assert_point_near(ends[0], 5.0, 10.0);
    }

    #[test]
    fn test_too_few_points() {
        let one = [Point::new(1.0, 1.0)];
        let none: [Point; 0] = [];
        let cases: [(&str, fn(&mut RecordingSurface, &[Point]) -> Result<()>); 5] = [
            ("multi_curve", multi_curve),
            ("multi_curve", stroke_multi_curve),
            ("multi_loop", multi_loop),
            ("multi_loop", fill_multi_loop),
            ("multi_loop", stroke_multi_loop),
        ];
        for (name, shape) in cases {
            for points in [&one[..], &none[..]] {
                let mut surface = RecordingSurface::new();
                match shape(&mut surface, points) {
                    Err(ShapeError::PreconditionViolated { operation, .. }) => {
                        assert_eq!(operation, name)
                    }
                    other => panic!("expected precondition error, got {other:?}"),
                }
                assert!(surface.calls().is_empty());
            }
        }
    }
}
