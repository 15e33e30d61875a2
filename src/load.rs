//! Per-view data loading.
//!
//! Every page view owns one [`LoadSlot`]. Starting a load bumps the slot's generation and hands
//! the request a [`Ticket`]; a response is only applied while its ticket is still current, so a
//! late answer to a superseded request never overwrites newer state.

use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::error::ApiError;

#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(Rc<ApiError>),
}

impl<T: Clone> Clone for LoadState<T> {
    fn clone(&self) -> Self {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(value) => LoadState::Ready(value.clone()),
            LoadState::Failed(err) => LoadState::Failed(err.clone()),
        }
    }
}

/// Identity of one load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct LoadSlot<T> {
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for LoadSlot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LoadState::Loading,
        }
    }
}

impl<T> LoadSlot<T> {
    /// Start a new load: reset to loading and invalidate every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    /// Apply a response. Returns `false`, leaving the slot untouched, when `ticket` has been
    /// superseded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(Rc::new(err)),
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }
}

/// Handle returned by [`use_page_load`].
pub struct PageLoad<T: 'static> {
    slot: Signal<LoadSlot<T>>,
    attempt: Signal<u32>,
}

impl<T: 'static> Clone for PageLoad<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PageLoad<T> {}

impl<T: Clone + 'static> PageLoad<T> {
    /// Snapshot of the current state. Subscribes the calling component.
    pub fn state(&self) -> LoadState<T> {
        self.slot.read().state().clone()
    }
}

impl<T: 'static> PageLoad<T> {
    /// Issue the request again with the same key.
    pub fn retry(&mut self) {
        *self.attempt.write() += 1;
    }
}

/// Load a view's data when it first appears, and again whenever `key` changes.
///
/// `fetch` receives the current key. Responses belonging to an older key or an older retry are
/// discarded.
pub fn use_page_load<K, T, F, Fut>(key: K, mut fetch: F) -> PageLoad<T>
where
    K: Clone + PartialEq + std::fmt::Debug + 'static,
    T: 'static,
    F: FnMut(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut slot = use_signal(LoadSlot::<T>::default);
    let attempt = use_signal(|| 0u32);

    use_effect(use_reactive((&key,), move |(key,)| {
        // subscribe so that `retry` reruns the effect
        let attempt = attempt();
        let ticket = slot.write().begin();
        tracing::debug!(?key, attempt, "loading page data");
        let request = fetch(key.clone());

        spawn(async move {
            let result = request.await;
            if let Err(err) = &result {
                tracing::error!(?key, %err, "failed to load page data");
            }
            if !slot.write().settle(ticket, result) {
                tracing::debug!(?key, "discarding response from a superseded load");
            }
        });
    }));

    PageLoad { slot, attempt }
}
