//! Grid geometry and orientation.
//!
//! [`GridGeometry`] is the read-only view of the layout that the snapper
//! consumes: segment lengths, gutter, usable container size, and the
//! current occupied extent. The layout owns these numbers; this crate only
//! carries them.

use crate::errors::GeometryError;
use crate::rect::Rect;

/// One coordinate axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

/// Which way the grid gains new space as tiles are placed.
///
/// The growing axis is allowed a generous containment bound during
/// placement; the other axis must stay inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthAxis {
    /// Grid grows downward; columns are the bounded axis.
    #[default]
    Vertical,
    /// Grid grows rightward; rows are the bounded axis.
    Horizontal,
}

impl GrowthAxis {
    /// Whether `axis` is the growing (open) axis for this orientation.
    pub fn is_open(self, axis: Axis) -> bool {
        match self {
            GrowthAxis::Vertical => axis == Axis::Y,
            GrowthAxis::Horizontal => axis == Axis::X,
        }
    }
}

/// A tile's measured outer footprint, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSize {
    pub outer_width: f64,
    pub outer_height: f64,
}

impl TileSize {
    /// Create a tile size from outer dimensions.
    pub fn new(outer_width: f64, outer_height: f64) -> Self {
        Self { outer_width, outer_height }
    }

    /// Outer extent along one axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.outer_width,
            Axis::Y => self.outer_height,
        }
    }
}

/// Grid measurements consumed by the coordinate snapper.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    /// Fixed column width; None means the horizontal axis is continuous
    pub column_width: Option<f64>,
    /// Fixed row height; None means the vertical axis is continuous
    pub row_height: Option<f64>,
    /// Spacing between adjacent columns/rows
    pub gutter: f64,
    /// Maximum occupied extent of current content on the vertical axis
    pub max_y: f64,
    /// Usable container width after insets
    pub inner_width: f64,
    /// Usable container height after insets
    pub inner_height: f64,
    /// Which axis grows as tiles are placed
    pub growth: GrowthAxis,
}

impl GridGeometry {
    /// Create geometry for a vertically-growing grid.
    pub fn vertical(inner_width: f64, inner_height: f64) -> Self {
        Self {
            column_width: None,
            row_height: None,
            gutter: 0.0,
            max_y: 0.0,
            inner_width,
            inner_height,
            growth: GrowthAxis::Vertical,
        }
    }

    /// Create geometry for a horizontally-growing grid.
    pub fn horizontal(inner_width: f64, inner_height: f64) -> Self {
        Self {
            growth: GrowthAxis::Horizontal,
            ..Self::vertical(inner_width, inner_height)
        }
    }

    /// Set a fixed column width.
    pub fn with_column_width(mut self, width: f64) -> Self {
        self.column_width = Some(width);
        self
    }

    /// Set a fixed row height.
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = Some(height);
        self
    }

    /// Set the gutter between columns/rows.
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the current maximum occupied vertical extent.
    pub fn with_max_y(mut self, max_y: f64) -> Self {
        self.max_y = max_y;
        self
    }

    /// Segment length along one axis; None when the axis is continuous.
    pub fn segment(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.column_width,
            Axis::Y => self.row_height,
        }
    }

    /// Usable container extent along one axis.
    pub fn inner(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.inner_width,
            Axis::Y => self.inner_height,
        }
    }

    /// Check that all measurements are finite and usable.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("gutter", self.gutter),
            ("max_y", self.max_y),
            ("inner_width", self.inner_width),
            ("inner_height", self.inner_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }
        if self.gutter < 0.0 {
            return Err(GeometryError::NegativeGutter { gutter: self.gutter });
        }
        for axis in [Axis::X, Axis::Y] {
            if let Some(value) = self.segment(axis) {
                if !(value.is_finite() && value > 0.0) {
                    return Err(GeometryError::NonPositiveSegment { axis, value });
                }
            }
        }
        Ok(())
    }

    /// Write a tile's measured size into a rect, gutter included, so the
    /// packed rect keeps its spacing from neighbors.
    pub fn set_rect_size(&self, size: TileSize, rect: &mut Rect) {
        rect.width = size.outer_width + self.gutter;
        rect.height = size.outer_height + self.gutter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_axis_by_orientation() {
        assert!(GrowthAxis::Vertical.is_open(Axis::Y));
        assert!(!GrowthAxis::Vertical.is_open(Axis::X));
        assert!(GrowthAxis::Horizontal.is_open(Axis::X));
        assert!(!GrowthAxis::Horizontal.is_open(Axis::Y));
    }

    #[test]
    fn test_axis_selection() {
        let grid = GridGeometry::vertical(320.0, 240.0)
            .with_column_width(100.0)
            .with_gutter(10.0);
        assert_eq!(grid.segment(Axis::X), Some(100.0));
        assert_eq!(grid.segment(Axis::Y), None);
        assert!((grid.inner(Axis::X) - 320.0).abs() < 0.001);
        assert!((grid.inner(Axis::Y) - 240.0).abs() < 0.001);

        let size = TileSize::new(80.0, 60.0);
        assert!((size.along(Axis::X) - 80.0).abs() < 0.001);
        assert!((size.along(Axis::Y) - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_set_rect_size_includes_gutter() {
        let grid = GridGeometry::vertical(320.0, 240.0).with_gutter(10.0);
        let mut rect = Rect::new(5.0, 7.0, 0.0, 0.0);
        grid.set_rect_size(TileSize::new(100.0, 50.0), &mut rect);
        assert!((rect.width - 110.0).abs() < 0.001);
        assert!((rect.height - 60.0).abs() < 0.001);
        // Position is untouched
        assert!((rect.x - 5.0).abs() < 0.001);
        assert!((rect.y - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_validate_accepts_sane_geometry() {
        let grid = GridGeometry::horizontal(640.0, 480.0)
            .with_row_height(120.0)
            .with_gutter(8.0)
            .with_max_y(360.0);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let grid = GridGeometry::vertical(f64::NAN, 240.0);
        assert!(matches!(
            grid.validate(),
            Err(GeometryError::NonFinite { field: "inner_width", .. })
        ));

        let grid = GridGeometry::vertical(320.0, 240.0).with_gutter(-1.0);
        assert!(matches!(
            grid.validate(),
            Err(GeometryError::NegativeGutter { .. })
        ));

        let grid = GridGeometry::vertical(320.0, 240.0).with_column_width(0.0);
        assert!(matches!(
            grid.validate(),
            Err(GeometryError::NonPositiveSegment { axis: Axis::X, .. })
        ));
    }
}
