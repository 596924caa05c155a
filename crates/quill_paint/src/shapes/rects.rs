//! Rectangles, square and rounded

use std::f64::consts::PI;

use quill_core::{Surface, HALF_PI};

use crate::error::Result;

/// Add an axis-aligned rectangle subpath
pub fn rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<()> {
    surface.rectangle(x, y, width, height)?;
    Ok(())
}

pub fn fill_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<()> {
    rectangle(surface, x, y, width, height)?;
    surface.fill()?;
    Ok(())
}

pub fn stroke_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<()> {
    rectangle(surface, x, y, width, height)?;
    surface.stroke()?;
    Ok(())
}

/// Rectangle with quarter-circle corners of `radius`.
///
/// Traced clockwise (in y-down space) from the top edge. The subpath is
/// left open; the last corner arc ends on the starting point.
pub fn round_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<()> {
    let right = x + width;
    let bottom = y + height;
    tracing::trace!(x, y, width, height, radius, "round_rectangle");

    surface.move_to(x + radius, y)?;
    surface.line_to(right - radius, y)?;
    surface.arc(right - radius, y + radius, radius, -HALF_PI, 0.0)?;
    surface.line_to(right, bottom - radius)?;
    surface.arc(right - radius, bottom - radius, radius, 0.0, HALF_PI)?;
    surface.line_to(x + radius, bottom)?;
    surface.arc(x + radius, bottom - radius, radius, HALF_PI, PI)?;
    surface.line_to(x, y + radius)?;
    surface.arc(x + radius, y + radius, radius, PI, -HALF_PI)?;
    Ok(())
}

pub fn stroke_round_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<()> {
    round_rectangle(surface, x, y, width, height, radius)?;
    surface.stroke()?;
    Ok(())
}

pub fn fill_round_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<()> {
    round_rectangle(surface, x, y, width, height, radius)?;
    surface.fill()?;
    Ok(())
}
