//! Networking modules for the outreach backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints; `dispatch` runs a request future on the
//! browser event loop.

pub mod api;

use std::future::Future;

/// Spawn a request future in the browser. Server rendering never issues
/// backend calls, so the future is dropped unpolled there.
pub fn dispatch<F>(request: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(request);
    #[cfg(not(feature = "hydrate"))]
    drop(request);
}
