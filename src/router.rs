//! The app shell's single source of truth for which page is on screen.
//!
//! [`Router`] is plain state over a [`History`]: it derives the page from the current path,
//! pushes canonical paths on navigation and re-derives the page after back/forward. The Dioxus
//! side wraps it in a signal shared through context, see [`use_router_provider`] and
//! [`use_navigator`].

use std::rc::Rc;
use std::sync::Arc;

use dioxus::history::History;
use dioxus::prelude::*;
use futures::StreamExt;

use crate::route::{self, Page};

pub struct Router {
    history: Rc<dyn History>,
    page: Page,
}

impl Router {
    /// Derive the initial page from the history's current path.
    ///
    /// A path no route accepts leaves the page at [`Page::Home`].
    pub fn new(history: Rc<dyn History>) -> Self {
        let mut router = Self {
            history,
            page: Page::Home,
        };
        router.sync_from_history();
        router
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn history(&self) -> &Rc<dyn History> {
        &self.history
    }

    /// Switch to `page` and push its canonical path. The document is never reloaded.
    pub fn navigate_to(&mut self, page: Page) {
        let path = page.path();
        tracing::debug!(from = %self.page, to = %path, "navigating");

        self.page = page;
        if self.history.current_route() != path {
            self.history.push(path);
        }
    }

    /// Switch to `page`, replacing the current history entry instead of adding one.
    pub fn redirect(&mut self, page: Page) {
        tracing::debug!(from = %self.page, to = %page, "redirecting");

        self.history.replace(page.path());
        self.page = page;
    }

    /// Re-derive the page from the history's current path, e.g. after back/forward.
    ///
    /// Query and fragment are ignored. When no route accepts the path the current page is kept and
    /// the URL is rewritten in place to that page's canonical path. Returns whether the page
    /// changed.
    pub fn sync_from_history(&mut self) -> bool {
        let route = self.history.current_route();
        let path = route.split(['?', '#']).next().unwrap_or_default();

        match route::resolve(path) {
            Some(page) => {
                let changed = page != self.page;
                self.page = page;
                changed
            }
            None => {
                tracing::warn!(path = %path, kept = %self.page, "no route matches path, keeping current page");
                self.history.replace(self.page.path());
                false
            }
        }
    }
}

/// Shared handle on the router, available to every component below the app shell.
#[derive(Clone, Copy)]
pub struct Navigator {
    router: Signal<Router>,
}

impl Navigator {
    /// The current page. Subscribes the calling component.
    pub fn page(&self) -> Page {
        self.router.read().page().clone()
    }

    pub fn navigate_to(&mut self, page: Page) {
        self.router.write().navigate_to(page);
    }

    pub fn redirect(&mut self, page: Page) {
        self.router.write().redirect(page);
    }
}

/// Create the router over `history`, provide it to the component tree and keep it in sync with
/// back/forward.
pub fn use_router_provider(history: impl FnOnce() -> Rc<dyn History>) -> Navigator {
    let navigator = use_context_provider(|| Navigator {
        router: Signal::new(Router::new(history())),
    });

    use_hook(|| {
        let mut router = navigator.router;

        // popstate fires outside of the runtime, so hand the update over to a task
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<()>();
        router
            .peek()
            .history()
            .updater(Arc::new(move || {
                let _ = tx.unbounded_send(());
            }));

        spawn(async move {
            while rx.next().await.is_some() {
                if router.write().sync_from_history() {
                    tracing::debug!(page = %router.peek().page(), "page restored from history");
                }
            }
        });
    });

    navigator
}

pub fn use_navigator() -> Navigator {
    use_context()
}
