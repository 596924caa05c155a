//! Helpers shared by the shape tests

use quill_core::{math::equalish, Affine2D, Point, RecordingSurface, SurfaceCall};

pub(crate) const EPS: f64 = 1e-9;

pub(crate) fn assert_point_near(actual: Point, x: f64, y: f64) {
    assert!(
        equalish(actual.x, x, EPS) && equalish(actual.y, y, EPS),
        "expected ({x}, {y}), got {actual:?}"
    );
}

/// Targets of every recorded `line_to`, in order
pub(crate) fn line_targets(surface: &RecordingSurface) -> Vec<Point> {
    surface
        .calls()
        .iter()
        .filter_map(|c| match c {
            SurfaceCall::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

/// Every save matched by a restore, and the transform back at identity
pub(crate) fn assert_balanced(surface: &RecordingSurface) {
    assert_eq!(surface.save_depth(), 0, "unbalanced save/restore");
    assert_eq!(surface.transform(), Affine2D::IDENTITY);
    let saves = surface
        .calls()
        .iter()
        .filter(|c| **c == SurfaceCall::Save)
        .count();
    let restores = surface
        .calls()
        .iter()
        .filter(|c| **c == SurfaceCall::Restore)
        .count();
    assert_eq!(saves, restores);
}
