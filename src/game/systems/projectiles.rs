//! Projectile lifecycle system.
//!
//! Each fired projectile gets its own tokio task running a timed simulation
//! loop against the shared grid store. Tasks exit autonomously on wall
//! impact or energy exhaustion; there is no external cancellation. The
//! manager retains the join handles so a caller can drain them (tests,
//! shutdown), but firing is otherwise fire-and-forget.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;

use crate::game::entities::Projectile;
use crate::game::store::GridStore;

#[derive(Debug, Default)]
pub struct ProjectileManager {
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ProjectileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch the simulation task for `projectile`. Must be called from
    /// within a tokio runtime.
    pub fn fire(&self, store: Arc<GridStore>, projectile: Projectile) {
        log::info!(
            "[Projectiles] fired {} from ({}, {})",
            projectile.id(),
            projectile.position().x,
            projectile.position().y
        );
        let handle = tokio::spawn(projectile_task(store, projectile));
        let mut tasks = self.lock_tasks();
        tasks.retain(|h| !h.is_finished());
        tasks.push(handle);
    }

    /// Number of projectile tasks still running.
    pub fn live_count(&self) -> usize {
        let mut tasks = self.lock_tasks();
        tasks.retain(|h| !h.is_finished());
        tasks.len()
    }

    /// Wait for every outstanding projectile to die naturally.
    pub async fn join_all(&self) {
        let drained: Vec<JoinHandle<()>> = self.lock_tasks().drain(..).collect();
        for handle in drained {
            let _ = handle.await;
        }
    }

    fn lock_tasks(&self) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Simulation loop for one projectile.
///
/// Every iteration advances one step, classifies the target cell, then
/// unconditionally erases the trail behind it. Each store call is its own
/// critical section; interleaving with player moves is expected. The lock is
/// never held across the inter-step sleep.
async fn projectile_task(store: Arc<GridStore>, mut projectile: Projectile) {
    loop {
        let old = projectile.position();
        projectile.advance();
        let pos = projectile.position();

        if projectile.is_alive() {
            if store.is_wall(pos) {
                // Walls are destructible: the impact carves both layouts
                // down to floor, then the projectile dies.
                projectile.kill();
                store.destroy_wall(pos);
                log::debug!(
                    "[Projectiles] {} hit wall at ({}, {})",
                    projectile.id(),
                    pos.x,
                    pos.y
                );
            } else if store.is_item(pos) || store.is_floor(pos) {
                // Items are not consumed by projectiles; only the overlay
                // marker changes.
                store.mark_projectile(pos);
            }
            // A player-occupied cell matches no branch: pass through.
        }

        store.erase_trail(old);

        if !projectile.is_alive() {
            log::debug!("[Projectiles] {} expired", projectile.id());
            break;
        }
        tokio::time::sleep(projectile.step_delay()).await;
    }
}
