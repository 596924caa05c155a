//! Circles and ellipses

use quill_core::{Surface, TransformScope, TWO_PI};

use crate::error::Result;

/// Full-turn arc of `radius` around `(x, y)`
pub fn circle<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, radius: f64) -> Result<()> {
    surface.arc(x, y, radius, 0.0, TWO_PI)?;
    Ok(())
}

pub fn fill_circle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    radius: f64,
) -> Result<()> {
    circle(surface, x, y, radius)?;
    surface.fill()?;
    Ok(())
}

pub fn stroke_circle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    radius: f64,
) -> Result<()> {
    circle(surface, x, y, radius)?;
    surface.stroke()?;
    Ok(())
}

/// Axis-aligned ellipse with radii `x_radius` and `y_radius`.
///
/// Built as a unit circle under a scale, so the path is only elliptical on
/// surfaces that transform arcs (every [`Surface`] is expected to).
pub fn ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    x_radius: f64,
    y_radius: f64,
) -> Result<()> {
    tracing::trace!(x, y, x_radius, y_radius, "ellipse");
    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x, y)?;
    scope.scale(x_radius, y_radius)?;
    circle(&mut *scope, 0.0, 0.0, 1.0)?;
    scope.restore()?;
    Ok(())
}

pub fn fill_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    x_radius: f64,
    y_radius: f64,
) -> Result<()> {
    ellipse(surface, x, y, x_radius, y_radius)?;
    surface.fill()?;
    Ok(())
}

/// Stroke an ellipse; the pen follows the transform in effect on entry,
/// not the ellipse's own scale
pub fn stroke_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    x_radius: f64,
    y_radius: f64,
) -> Result<()> {
    ellipse(surface, x, y, x_radius, y_radius)?;
    surface.stroke()?;
    Ok(())
}
