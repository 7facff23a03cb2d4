//! Reactive binding over a [`UrlStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The store notifies plain callbacks; components need signals. A binding
//! owns the store plus two signals (snapshot and liveness) and keeps them in
//! step through one subscription.
//!
//! Server rendering and the first hydration pass both see the fallback
//! snapshot with `live == false`. The URL is read in an effect after mount,
//! so the hydrated DOM matches the server HTML before the real state arrives.

use std::sync::Arc;

use dhek::{Location, StorePhase, Subscription, UrlState, UrlStore};
use leptos::prelude::*;

use crate::util::history::BrowserLocation;

/// Store handle plus the signals that mirror it.
pub struct StoreBinding<S: UrlState> {
    store: Arc<UrlStore<S>>,
    snapshot: RwSignal<Arc<S>>,
    live: RwSignal<bool>,
}

impl<S: UrlState> Clone for StoreBinding<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), snapshot: self.snapshot, live: self.live }
    }
}

impl<S: UrlState> StoreBinding<S> {
    /// Build an uninitialized store over `location` with unconnected signals.
    pub fn new(location: impl Location + 'static) -> Self {
        let store = Arc::new(UrlStore::new(location));
        let snapshot = RwSignal::new(store.server_snapshot());
        Self { store, snapshot, live: RwSignal::new(false) }
    }

    /// Mirror every store notification into the signals.
    pub fn connect(&self) -> Subscription {
        let store = Arc::downgrade(&self.store);
        let (snapshot, live) = (self.snapshot, self.live);
        self.store.subscribe(move || {
            if let Some(store) = store.upgrade() {
                snapshot.set(store.server_snapshot());
                live.set(store.phase() == StorePhase::Live);
            }
        })
    }

    /// Tracked read of the current snapshot.
    pub fn get(&self) -> Arc<S> {
        self.snapshot.get()
    }

    pub fn get_untracked(&self) -> Arc<S> {
        self.snapshot.get_untracked()
    }

    /// Tracked read of the current snapshot, projected through `f`.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.snapshot.with(|state| f(state))
    }

    /// Whether the URL has been read yet (tracked).
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Underlying store for writes.
    pub fn store(&self) -> &UrlStore<S> {
        &self.store
    }

    pub fn replace(&self, next: S) {
        self.store.replace(next);
    }

    pub fn update(&self, f: impl FnOnce(&S) -> S) {
        self.store.update(f);
    }

    /// Current href, including the encoded state.
    pub fn share_url(&self) -> String {
        self.store.share_url()
    }
}

/// Create the page's store, load it from the URL after mount, and provide it
/// as context. Listeners are cleared when the owning page unmounts.
pub fn provide_store<S: UrlState>() -> StoreBinding<S> {
    let binding = StoreBinding::<S>::new(BrowserLocation);

    let subscription = binding.connect();
    let store = Arc::clone(&binding.store);
    on_cleanup(move || {
        subscription.unsubscribe();
        store.clear_listeners();
    });

    let store = Arc::clone(&binding.store);
    Effect::new(move || {
        if store.hydrate() == StorePhase::Live {
            if let Some(outcome) = store.load_outcome() {
                log_outcome(S::PARAM, &outcome);
            }
        }
    });

    provide_context(binding.clone());
    binding
}

fn log_outcome(param: &str, outcome: &dhek::LoadOutcome) {
    #[cfg(feature = "hydrate")]
    {
        match outcome {
            dhek::LoadOutcome::Decoded => log::debug!("{param}: state restored from link"),
            dhek::LoadOutcome::Absent => log::debug!("{param}: no shared state, starting fresh"),
            dhek::LoadOutcome::Malformed(e) => {
                log::warn!("{param}: unreadable share link ({}), starting fresh", e.kind());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (param, outcome);
    }
}
