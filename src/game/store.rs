//! Shared grid store.
//!
//! [`GridStore`] owns the two tile layouts: the original layout holds terrain
//! only (Wall/Floor/Item), the rendered layout overlays the transient
//! occupants (Player, Projectile) on top of it. Both live behind one mutex
//! together with the player's current cell, so the store can re-assert the
//! player marker on behalf of projectile tasks.
//!
//! Consistency contract: every operation on this store is one critical
//! section, so single-cell reads and writes are atomic. A logical move
//! (vacate + occupy) spans at most one operation here, but a full player or
//! projectile step issues several independent operations; readers between
//! them can observe a transient mid-step state. End states are what the
//! rules guarantee, not intermediate exclusion.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::game::grid::generate_grid;
use crate::game::observe::{LockObserver, NoopObserver};
use crate::game::types::{Position, Tile};

struct Layouts {
    original: Vec<Vec<Tile>>,
    rendered: Vec<Vec<Tile>>,
    player_cell: Position,
}

pub struct GridStore {
    width: usize,
    height: usize,
    maps: Mutex<Layouts>,
    observer: Box<dyn LockObserver>,
}

/// Mutex guard wrapper that reports the release event when dropped.
struct StoreGuard<'a> {
    inner: MutexGuard<'a, Layouts>,
    observer: &'a dyn LockObserver,
    op: &'static str,
}

impl Deref for StoreGuard<'_> {
    type Target = Layouts;

    fn deref(&self) -> &Layouts {
        &self.inner
    }
}

impl DerefMut for StoreGuard<'_> {
    fn deref_mut(&mut self) -> &mut Layouts {
        &mut self.inner
    }
}

impl Drop for StoreGuard<'_> {
    fn drop(&mut self) {
        self.observer.lock_released(self.op);
    }
}

impl GridStore {
    /// Create a store with a freshly generated layout. The spawn cell is
    /// forced to Floor in the original layout and marked Player in the
    /// rendered one.
    ///
    /// Panics if the grid has no interior or the spawn cell is off-grid;
    /// both are caller contract violations.
    pub fn new(width: usize, height: usize, spawn: Position) -> Self {
        assert!(width >= 3 && height >= 3, "grid has no interior cells");
        Self::from_layout(generate_grid(width, height), spawn)
    }

    /// Create a store from a fixed original layout (tests, embedders).
    /// The layout must be rectangular and contain terrain tiles only.
    pub fn from_layout(original: Vec<Vec<Tile>>, spawn: Position) -> Self {
        let width = original.len();
        let height = original.first().map_or(0, Vec::len);
        assert!(width > 0 && height > 0, "empty layout");
        assert!(
            original.iter().all(|col| col.len() == height),
            "layout is not rectangular"
        );
        assert!(
            original.iter().flatten().all(|t| t.is_terrain()),
            "original layout may only hold terrain tiles"
        );

        let store = GridStore {
            width,
            height,
            maps: Mutex::new(Layouts {
                original,
                rendered: Vec::new(),
                player_cell: spawn,
            }),
            observer: Box::new(NoopObserver),
        };
        assert!(store.in_bounds(spawn), "spawn cell is off-grid");

        {
            let mut maps = store.lock("init");
            let (sx, sy) = index_of(spawn);
            maps.original[sx][sy] = Tile::Floor;
            maps.rendered = maps.original.clone();
            maps.rendered[sx][sy] = Tile::Player;
        }
        store
    }

    /// Replace the default no-op lock observer.
    pub fn with_observer(mut self, observer: Box<dyn LockObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn lock(&self, op: &'static str) -> StoreGuard<'_> {
        // A panicked projectile task must not wedge the grid, so poisoning
        // is recovered rather than propagated.
        let inner = self.maps.lock().unwrap_or_else(PoisonError::into_inner);
        self.observer.lock_acquired(op);
        StoreGuard {
            inner,
            observer: self.observer.as_ref(),
            op,
        }
    }

    /// Pure bounds check, no lock.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Rendered tile at `pos`, or None off-grid.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        let (x, y) = index_of(pos);
        Some(self.lock("tile").rendered[x][y])
    }

    /// Terrain (original layout) tile at `pos`, or None off-grid.
    pub fn terrain(&self, pos: Position) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        let (x, y) = index_of(pos);
        Some(self.lock("terrain").original[x][y])
    }

    /// Off-grid counts as a wall: anything outside the grid is impassable.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.tile(pos).is_none_or(|t| t == Tile::Wall)
    }

    pub fn is_item(&self, pos: Position) -> bool {
        self.tile(pos) == Some(Tile::Item)
    }

    pub fn is_floor(&self, pos: Position) -> bool {
        self.tile(pos) == Some(Tile::Floor)
    }

    /// Commit a player move: the vacated cell reverts to its terrain, the
    /// target cell becomes Player. Also used with `from == to` to re-assert
    /// the marker after a rejected move.
    pub fn commit_player_move(&self, from: Position, to: Position) {
        debug_assert!(self.in_bounds(from) && self.in_bounds(to));
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return;
        }
        let mut maps = self.lock("commit_player_move");
        let (fx, fy) = index_of(from);
        let (tx, ty) = index_of(to);
        maps.rendered[fx][fy] = maps.original[fx][fy];
        maps.rendered[tx][ty] = Tile::Player;
        maps.player_cell = to;
    }

    /// Consume the item at `pos`: the terrain itself becomes Floor, so the
    /// item never reappears.
    pub fn consume_item(&self, pos: Position) {
        if !self.in_bounds(pos) {
            return;
        }
        let mut maps = self.lock("consume_item");
        let (x, y) = index_of(pos);
        maps.original[x][y] = Tile::Floor;
    }

    /// Destroy the wall at `pos` in both layouts. Off-grid is a no-op: a
    /// projectile leaving through a breached border dies against the
    /// off-grid "wall" without writing anywhere.
    pub fn destroy_wall(&self, pos: Position) {
        if !self.in_bounds(pos) {
            return;
        }
        let mut maps = self.lock("destroy_wall");
        let (x, y) = index_of(pos);
        maps.original[x][y] = Tile::Floor;
        maps.rendered[x][y] = Tile::Floor;
    }

    /// Overlay a projectile marker at `pos`.
    pub fn mark_projectile(&self, pos: Position) {
        if !self.in_bounds(pos) {
            return;
        }
        let mut maps = self.lock("mark_projectile");
        let (x, y) = index_of(pos);
        maps.rendered[x][y] = Tile::Projectile;
    }

    /// Restore the cell a projectile just left to its terrain value, then
    /// re-assert the player marker in the same critical section (the trail
    /// may have crossed the player's cell).
    pub fn erase_trail(&self, pos: Position) {
        if !self.in_bounds(pos) {
            return;
        }
        let mut maps = self.lock("erase_trail");
        let (x, y) = index_of(pos);
        maps.rendered[x][y] = maps.original[x][y];
        let (px, py) = index_of(maps.player_cell);
        maps.rendered[px][py] = Tile::Player;
    }

    /// Throw away both layouts and regenerate the terrain in place, keeping
    /// the player where it stands. Not coordinated with live projectile
    /// tasks: a stale task may still write trailing cells into the new grid.
    pub fn regenerate(&self) {
        let mut maps = self.lock("regenerate");
        maps.original = generate_grid(self.width, self.height);
        let (px, py) = index_of(maps.player_cell);
        maps.original[px][py] = Tile::Floor;
        maps.rendered = maps.original.clone();
        maps.rendered[px][py] = Tile::Player;
        log::info!("[GridStore] regenerated {}x{} grid", self.width, self.height);
    }
}

fn index_of(pos: Position) -> (usize, usize) {
    (pos.x as usize, pos.y as usize)
}
