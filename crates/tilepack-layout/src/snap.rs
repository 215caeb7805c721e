//! Coordinate snapping.
//!
//! Converts a raw pointer/target coordinate into the nearest valid
//! grid-aligned coordinate along one axis. The grid's growing axis gets a
//! generous containment bound (content is allowed to extend it); the other
//! axis is held inside the container. Callers may additionally lift the
//! bound entirely for the axis they let grow during a drag.

use tilepack_core::{Axis, GridGeometry, TileSize};

/// Snap a raw coordinate along one axis of the grid.
///
/// With a fixed segment (column width on X, row height on Y) the
/// coordinate is rounded to the nearest whole segment, counting one gutter
/// per cell, then contained to the outermost start segment that keeps a
/// tile of `size` inside the grid. Without a fixed segment the axis is
/// continuous and the coordinate is clamped against `container - tile`.
///
/// `max_open` lifts the containment clamp; rounding still applies. The
/// result is never negative, so a tile wider than a bounded container
/// lands at 0.
pub fn snap_coord(
    coord: f64,
    axis: Axis,
    max_open: bool,
    grid: &GridGeometry,
    size: TileSize,
) -> f64 {
    let outer = size.along(axis);
    let mut parent = grid.inner(axis);

    if axis == Axis::Y {
        // Content may already extend past the nominal container height.
        parent = parent.max(grid.max_y);
        // A continuous vertical axis carries a trailing gutter that would
        // otherwise inflate the measured height.
        if grid.row_height.is_none() {
            parent -= grid.gutter;
        }
    }

    let (steps, max, scale) = match grid.segment(axis) {
        Some(len) => {
            // Each cell consumes its segment plus one gutter.
            let len = len + grid.gutter;
            if axis == Axis::X {
                // Let the last column reach the true edge.
                parent += grid.gutter;
            }
            let steps = (coord / len).round();
            // Generous ceil bound on the growing axis, conservative floor
            // on the bounded one.
            let max_segments = if grid.growth.is_open(axis) {
                (parent / len).ceil()
            } else {
                (parent / len).floor()
            };
            let max = max_segments - (outer / len).ceil();
            (steps, max, len)
        }
        None => (coord, parent - outer, 1.0),
    };

    let contained = if max_open { steps } else { steps.min(max) };
    (contained * scale).max(0.0)
}
