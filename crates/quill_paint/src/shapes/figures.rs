//! Regular polygons, stars, and the parametric heart

use std::f64::consts::PI;

use quill_core::{Point, Surface, TransformScope, TWO_PI};

use super::lines::path;
use crate::error::{Result, ShapeError};

/// Regular polygon with `sides` vertices on a circle of `radius`, the first
/// vertex at angle `rotation`.
///
/// Vertices are emitted starting from the first one and then back to it,
/// so the outline is closed by its last segment rather than `close_path`.
pub fn polygon<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    radius: f64,
    sides: usize,
    rotation: f64,
) -> Result<()> {
    tracing::trace!(x, y, radius, sides, rotation, "polygon");
    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x, y)?;
    scope.rotate(rotation)?;
    scope.move_to(radius, 0.0)?;
    for i in 0..sides {
        let vertex = Point::polar(TWO_PI / sides as f64 * i as f64, radius);
        scope.line_to(vertex.x, vertex.y)?;
    }
    scope.line_to(radius, 0.0)?;
    scope.restore()?;
    Ok(())
}

pub fn stroke_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    radius: f64,
    sides: usize,
    rotation: f64,
) -> Result<()> {
    polygon(surface, x, y, radius, sides, rotation)?;
    surface.stroke()?;
    Ok(())
}

pub fn fill_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    radius: f64,
    sides: usize,
    rotation: f64,
) -> Result<()> {
    polygon(surface, x, y, radius, sides, rotation)?;
    surface.fill()?;
    Ok(())
}

/// Star with `points` tips.
///
/// Vertices alternate between `outer_radius` (tips, even indices) and
/// `inner_radius`, `PI / points` apart. The first vertex opens the subpath.
pub fn star<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    inner_radius: f64,
    outer_radius: f64,
    points: usize,
    rotation: f64,
) -> Result<()> {
    tracing::trace!(x, y, inner_radius, outer_radius, points, "star");
    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x, y)?;
    scope.rotate(rotation)?;
    for i in 0..points * 2 {
        let radius = if i % 2 == 1 { inner_radius } else { outer_radius };
        let vertex = Point::polar(PI / points as f64 * i as f64, radius);
        scope.line_to(vertex.x, vertex.y)?;
    }
    scope.close_path()?;
    scope.restore()?;
    Ok(())
}

pub fn stroke_star<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    inner_radius: f64,
    outer_radius: f64,
    points: usize,
    rotation: f64,
) -> Result<()> {
    star(surface, x, y, inner_radius, outer_radius, points, rotation)?;
    surface.stroke()?;
    Ok(())
}

pub fn fill_star<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    inner_radius: f64,
    outer_radius: f64,
    points: usize,
    rotation: f64,
) -> Result<()> {
    star(surface, x, y, inner_radius, outer_radius, points, rotation)?;
    surface.fill()?;
    Ok(())
}

/// Vertices of the heart curve at `floor(sqrt(width * height))` samples.
///
/// The tip of the heart faces +y. Only the first cosine term is scaled by
/// `height`; the cleft terms are absolute, so the cleft does not grow with
/// the heart.
fn heart_points(width: f64, height: f64) -> Result<Vec<Point>> {
    let area = width * height;
    if area < 0.0 {
        return Err(ShapeError::precondition(
            "heart",
            format!("width * height must not be negative, got {area}"),
        ));
    }

    let samples = area.sqrt().floor();
    // NaN and zero both land here
    if !(samples >= 1.0) {
        return Ok(Vec::new());
    }

    let count = samples as usize;
    let points = (0..count)
        .map(|i| {
            let a = TWO_PI * i as f64 / samples;
            let px = width * a.sin().powi(3);
            let py = height * (0.8125 * a.cos())
                - 0.3125 * (2.0 * a).cos()
                - 0.125 * (3.0 * a).cos()
                - 0.0625 * (4.0 * a).cos();
            Point::new(px, -py)
        })
        .collect();
    Ok(points)
}

/// Heart centered on `(x, y)`, rotated by `rotation`
pub fn heart<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
) -> Result<()> {
    let points = heart_points(width, height)?;
    tracing::trace!(x, y, width, height, samples = points.len(), "heart");

    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x, y)?;
    scope.rotate(rotation)?;
    path(&mut *scope, &points)?;
    scope.restore()?;
    Ok(())
}

pub fn fill_heart<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
) -> Result<()> {
    heart(surface, x, y, width, height, rotation)?;
    surface.fill()?;
    Ok(())
}

pub fn stroke_heart<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
) -> Result<()> {
    heart(surface, x, y, width, height, rotation)?;
    surface.stroke()?;
    Ok(())
}
