//! Tile placement lifecycle.
//!
//! A [`Tile`] pairs a settled rectangle (its authoritative, committed
//! position) with a candidate rectangle (the tentative position while
//! dragging or being auto-fit), and drives both through the capabilities
//! its host provides. The tile never talks to the element or the packer
//! directly; it goes through [`ItemHandle`] and [`SpacePool`].

use log::{debug, trace};
use tilepack_core::{Axis, GridGeometry, Rect, TileSize};

use crate::snap::snap_coord;

/// Lifecycle notification delivered through [`ItemHandle::emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// The tile's element was detached and its space released.
    Removed,
}

/// Host-side item capabilities: size measurement, transition control,
/// element detachment, and event delivery.
///
/// The host owns the visual element and its animation state; the tile
/// only sequences calls against it.
pub trait ItemHandle {
    /// Re-measure the element's outer footprint, margins included.
    fn measure(&mut self) -> TileSize;

    /// True while a position/size transition is still animating.
    fn is_transitioning(&self) -> bool;

    /// Remove transition styling so direct positioning is not animated.
    fn remove_transition_styles(&mut self);

    /// Strip a mid-flight transform and mark the transition finished.
    fn clear_transform(&mut self);

    /// Detach the element from its parent node. A missing parent is a
    /// contract violation on the host's side, not a recoverable state.
    fn detach(&mut self);

    /// Deliver a lifecycle event to listeners.
    fn emit(&mut self, event: TileEvent);
}

/// Free-space pool seam.
///
/// A region is released by exactly one tile, at removal time; the pool
/// never sees concurrent writers for the same region.
pub trait SpacePool {
    /// Return a region to the pool so later placements may occupy it.
    fn release(&mut self, region: Rect);
}

/// A draggable tile in a packing grid.
#[derive(Debug)]
pub struct Tile<H: ItemHandle> {
    handle: H,
    settled: Rect,
    candidate: Rect,
    size: TileSize,
    placing: bool,
}

impl<H: ItemHandle> Tile<H> {
    /// Create a tile around a host capability handle. Both rects start at
    /// the origin and live for the tile's lifetime.
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            settled: Rect::default(),
            candidate: Rect::default(),
            size: TileSize::default(),
            placing: false,
        }
    }

    /// The committed position and packed size.
    pub fn settled(&self) -> Rect {
        self.settled
    }

    /// The tentative position from the latest [`Self::position_candidate`].
    pub fn candidate(&self) -> Rect {
        self.candidate
    }

    /// Whether the tile is currently in placement mode.
    pub fn is_placing(&self) -> bool {
        self.placing
    }

    /// Access the host capability handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Enter placement mode.
    ///
    /// Cancels any in-flight transition (stripping a stale transform that
    /// would fight direct positioning), re-measures the tile, and
    /// refreshes the settled rect's dimensions. Layout styling stays
    /// suppressed until [`Self::disable_placing`]. Idempotent.
    pub fn enable_placing(&mut self, grid: &GridGeometry) {
        self.handle.remove_transition_styles();
        if self.handle.is_transitioning() {
            self.handle.clear_transform();
        }
        self.size = self.handle.measure();
        grid.set_rect_size(self.size, &mut self.settled);
        self.placing = true;
        debug!(
            "tile entered placement mode, outer size {} x {}",
            self.size.outer_width, self.size.outer_height
        );
    }

    /// Leave placement mode. No other side effects.
    pub fn disable_placing(&mut self) {
        self.placing = false;
    }

    /// Move the candidate rect to the snapped position nearest the raw
    /// target point, both axes independently. `max_open` lifts the
    /// containment bound on both axes; pass true while dragging along the
    /// grid's growth axis.
    pub fn position_candidate(&mut self, x: f64, y: f64, max_open: bool, grid: &GridGeometry) {
        self.candidate.x = snap_coord(x, Axis::X, max_open, grid, self.size);
        self.candidate.y = snap_coord(y, Axis::Y, max_open, grid, self.size);
        trace!(
            "candidate snapped to ({}, {})",
            self.candidate.x, self.candidate.y
        );
    }

    /// Make the candidate position authoritative. Only x/y move; the
    /// settled dimensions stay as measurement set them. A drag abandoned
    /// before this call leaves the settled rect untouched.
    pub fn commit_placement(&mut self) {
        self.settled.x = self.candidate.x;
        self.settled.y = self.candidate.y;
        debug!(
            "placement committed at ({}, {})",
            self.settled.x, self.settled.y
        );
    }

    /// Remove the tile: detach its element, return the settled region to
    /// the free-space pool, and notify listeners. Irreversible.
    pub fn remove(&mut self, pool: &mut impl SpacePool) {
        self.handle.detach();
        pool.release(self.settled);
        self.handle.emit(TileEvent::Removed);
        debug!(
            "tile removed, released {} x {} at ({}, {})",
            self.settled.width, self.settled.height, self.settled.x, self.settled.y
        );
    }
}
