// src/strategy/traits.rs

use crate::model::orders::PendingOrder;
use rand::RngCore;
use std::fmt::Debug;

/// What a policy gets to see at the end of each simulated day.
#[derive(Debug, Clone, Copy)]
pub struct ReorderContext {
    /// 0-indexed simulation day.
    pub day: i64,
    /// On-hand stock after today's demand.
    pub inventory: f64,
}

/// Decides whether a simulation run places a replenishment order today.
///
/// Policies are stateful per run (e.g. cooldown tracking), so every run gets
/// its own instance. `Send` lets runs be spread across worker threads.
pub trait ReorderPolicy: Debug + Send {
    /// Returns the order to enqueue, if any. The lead time draw consumes
    /// randomness from `rng` only when an order is actually placed.
    fn place_order(&mut self, context: &ReorderContext, rng: &mut dyn RngCore)
        -> Option<PendingOrder>;
}
