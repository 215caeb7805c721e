//! Core geometry types for tilepack packing layouts.
//!
//! This crate holds the value types shared by the placement pipeline:
//!
//! - [`Rect`] - axis-aligned rectangle, the unit of placed space
//! - [`TileSize`] - a tile's measured outer footprint
//! - [`GridGeometry`] - the grid's segment lengths, gutter, and extents
//! - [`GrowthAxis`] / [`Axis`] - orientation and per-axis selection
//!
//! The snapping and placement logic lives in `tilepack-layout`; this crate
//! is pure data plus validation.

mod errors;
mod grid;
mod rect;

pub use errors::GeometryError;
pub use grid::{Axis, GridGeometry, GrowthAxis, TileSize};
pub use rect::Rect;
