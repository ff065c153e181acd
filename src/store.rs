//! Session store: owns the live tournament state, applies actions one at a time, and notifies listeners.

use crate::logic::apply;
use crate::models::{Action, TournamentError, TournamentState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Arc<TournamentState>) + Send + Sync>;

struct Inner {
    state: Arc<TournamentState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Owner of the current state. Dispatch is serialized: one action is applied and
/// published to every listener before the next one starts.
///
/// Listeners run while the store is locked and must not call back into it.
pub struct Store {
    inner: Mutex<Inner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Store holding the empty state.
    pub fn new() -> Self {
        Self::with_state(TournamentState::new())
    }

    pub fn with_state(state: TournamentState) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: Arc::new(state),
                listeners: Vec::new(),
                next_id: 0,
            }),
        }
    }

    // Poisoning can only come from a listener, which runs after the state swap.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current snapshot. Later dispatches never change a snapshot already handed out.
    pub fn get_state(&self) -> Arc<TournamentState> {
        Arc::clone(&self.lock().state)
    }

    /// Apply `action`, publish the new snapshot to every listener, and return it.
    ///
    /// A rejected action leaves the state as it was and notifies nobody.
    pub fn dispatch(&self, action: &Action) -> Result<Arc<TournamentState>, TournamentError> {
        let mut g = self.lock();
        let mut next = TournamentState::clone(&g.state);
        if let Err(e) = apply(&mut next, action) {
            log::warn!("Rejected {} action: {}", action.kind(), e);
            return Err(e);
        }
        log::debug!("Applied {} action", action.kind());
        if g.state.winner.is_none() {
            if let Some(winner) = &next.winner {
                log::info!("Tournament won by '{}'", winner);
            }
        }

        let next = Arc::new(next);
        g.state = Arc::clone(&next);
        for (_, listener) in &g.listeners {
            listener(&next);
        }
        Ok(next)
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<TournamentState>) + Send + Sync + 'static,
    {
        let mut g = self.lock();
        let id = SubscriptionId(g.next_id);
        g.next_id += 1;
        g.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut g = self.lock();
        let before = g.listeners.len();
        g.listeners.retain(|(lid, _)| *lid != id);
        g.listeners.len() != before
    }
}
