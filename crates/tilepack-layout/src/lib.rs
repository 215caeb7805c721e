//! Tile placement behavior for packing grids.
//!
//! This crate answers one question for a draggable tile: given a raw
//! pointer/target coordinate, a tile size, and the grid's geometry, where
//! should the tile snap? Around that core it keeps the per-tile placement
//! lifecycle: a settled rectangle (committed position), a candidate
//! rectangle (tentative position while dragging), and space release on
//! removal.
//!
//! # Architecture
//!
//! 1. **Snapping**: [`snap_coord`] rounds a coordinate to the nearest grid
//!    segment and contains it on the bounded axis
//! 2. **Placement**: [`Tile`] drives the candidate rect through
//!    [`Tile::position_candidate`] and commits it on drop
//! 3. **Capabilities**: the host item and the free-space packer are
//!    reached through [`ItemHandle`] and [`SpacePool`]
//!
//! # Example
//!
//! ```ignore
//! use tilepack_layout::{GridGeometry, Tile};
//!
//! let grid = GridGeometry::vertical(960.0, 600.0)
//!     .with_column_width(120.0)
//!     .with_gutter(10.0);
//!
//! let mut tile = Tile::new(handle);
//! tile.enable_placing(&grid);
//! tile.position_candidate(pointer_x, pointer_y, true, &grid);
//! tile.commit_placement();
//! ```

mod snap;
mod tile;

pub use snap::snap_coord;
pub use tile::{ItemHandle, SpacePool, Tile, TileEvent};

pub use tilepack_core::{Axis, GeometryError, GridGeometry, GrowthAxis, Rect, TileSize};
