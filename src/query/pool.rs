//! Checkout/return pool of scratch contexts.
//!
//! Each search checks a context out and gets a [`PooledContext`] guard. The
//! guard resets the context and hands it back when dropped, which also
//! happens while unwinding from a panic. An empty pool allocates a fresh
//! context instead of waiting, so checkout never blocks on other searches.

use crate::query::context::ScratchContext;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use tracing::trace;

pub struct ContextPool {
    idle: Mutex<Vec<ScratchContext<'static>>>,
    max_idle: usize,
}

impl ContextPool {
    /// Create a pool that retains at most `max_idle` returned contexts.
    pub const fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Take an idle context, or allocate one if none is available.
    pub fn checkout<'a>(&self) -> PooledContext<'_, 'a> {
        let ctx = self.idle.lock().pop().unwrap_or_else(|| {
            trace!(target: "memsearch::pool", "Allocating scratch context");
            ScratchContext::new()
        });

        PooledContext {
            pool: self,
            ctx,
        }
    }

    fn give_back(&self, ctx: ScratchContext<'static>) {
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(ctx);
        }
    }

    /// Number of contexts waiting for reuse
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    pub fn max_idle(&self) -> usize {
        self.max_idle
    }
}

impl std::fmt::Debug for ContextPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextPool")
            .field("idle", &self.idle_count())
            .field("max_idle", &self.max_idle)
            .finish()
    }
}

/// A checked-out context; returned to its pool on drop.
pub struct PooledContext<'p, 'a> {
    pool: &'p ContextPool,
    ctx: ScratchContext<'a>,
}

impl<'a> Deref for PooledContext<'_, 'a> {
    type Target = ScratchContext<'a>;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl DerefMut for PooledContext<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ctx
    }
}

impl Drop for PooledContext<'_, '_> {
    fn drop(&mut self) {
        self.pool.give_back(self.ctx.detach());
    }
}
