//! Straight-line shapes: segments, polylines, point sets, and grids

use quill_core::{Point, Surface, TransformScope};

use super::ellipses::fill_circle;
use crate::error::{Result, ShapeError};

/// Stroke a single segment from `(x0, y0)` to `(x1, y1)`
pub fn line<S: Surface + ?Sized>(
    surface: &mut S,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> Result<()> {
    surface.move_to(x0, y0)?;
    surface.line_to(x1, y1)?;
    surface.stroke()?;
    Ok(())
}

/// Stroke the segment through `(x0, y0)` and `(x1, y1)`, extended by
/// `overlap` past both ends.
///
/// The segment is drawn along the x axis of a rotated user space, so the
/// stroke is shaped by the surface transform as usual.
pub fn line_through<S: Surface + ?Sized>(
    surface: &mut S,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    overlap: f64,
) -> Result<()> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let angle = dy.atan2(dx);
    let length = dx.hypot(dy);
    tracing::trace!(angle, length, overlap, "line_through");

    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x0, y0)?;
    scope.rotate(angle)?;
    scope.move_to(-overlap, 0.0)?;
    scope.line_to(length + overlap, 0.0)?;
    scope.stroke()?;
    scope.restore()?;
    Ok(())
}

/// Stroke a segment of `length` heading `angle` from `(x, y)`, starting
/// `offset` units out
pub fn ray<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    angle: f64,
    offset: f64,
    length: f64,
) -> Result<()> {
    let mut scope = TransformScope::enter(surface)?;
    scope.translate(x, y)?;
    scope.rotate(angle)?;
    scope.move_to(offset, 0.0)?;
    scope.line_to(offset + length, 0.0)?;
    scope.stroke()?;
    scope.restore()?;
    Ok(())
}

/// Append a `line_to` for each point, in order.
///
/// No `move_to` is issued: the first point joins whatever subpath is open
/// (or starts one if there is none).
pub fn path<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    for p in points {
        surface.line_to(p.x, p.y)?;
    }
    Ok(())
}

pub fn fill_path<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<()> {
    path(surface, points)?;
    surface.fill()?;
    Ok(())
}

/// Stroke the polyline through `points`, closing it first when `close` is set
pub fn stroke_path<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    close: bool,
) -> Result<()> {
    path(surface, points)?;
    if close {
        surface.close_path()?;
    }
    surface.stroke()?;
    Ok(())
}

/// Fill a dot of `radius` at every point
pub fn points<S: Surface + ?Sized>(surface: &mut S, points: &[Point], radius: f64) -> Result<()> {
    tracing::trace!(count = points.len(), radius, "points");
    for p in points {
        fill_circle(surface, p.x, p.y, radius)?;
    }
    Ok(())
}

/// Lines from `start` to `end` every `step` must be finitely many, and every
/// step must move the coordinate at both ends of the range
fn check_grid_axis(axis: &str, start: f64, end: f64, step: f64) -> Result<()> {
    if !(start.is_finite() && end.is_finite()) {
        return Err(ShapeError::precondition(
            "grid",
            format!("{axis} span from {start} to {end} is not finite"),
        ));
    }
    if start + step == start || end + step == end {
        return Err(ShapeError::precondition(
            "grid",
            format!("{axis} step {step} is below the precision of {start}..{end}"),
        ));
    }
    Ok(())
}

/// Stroke a lattice of vertical lines every `x_res` and horizontal lines
/// every `y_res` over the rectangle at `(x, y)`.
///
/// Lines fall on `x + k * x_res` for every `k >= 0` with the coordinate not
/// past `x + width` (likewise for rows). All lines go into one path and are
/// stroked once. A non-finite extent, or a step too small to move the
/// coordinate, is rejected before anything is drawn.
pub fn grid<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    x_res: f64,
    y_res: f64,
) -> Result<()> {
    if !(x_res > 0.0 && y_res > 0.0) {
        return Err(ShapeError::precondition(
            "grid",
            format!("resolution must be positive, got ({x_res}, {y_res})"),
        ));
    }

    let right = x + width;
    let bottom = y + height;
    check_grid_axis("columns", x, right, x_res)?;
    check_grid_axis("rows", y, bottom, y_res)?;

    let mut column = x;
    while column <= right {
        surface.move_to(column, y)?;
        surface.line_to(column, bottom)?;
        column += x_res;
    }

    let mut row = y;
    while row <= bottom {
        surface.move_to(x, row)?;
        surface.line_to(right, row)?;
        row += y_res;
    }

    surface.stroke()?;
    Ok(())
}
