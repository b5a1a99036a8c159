//! HTTP helpers for the puzzle backend's two snapshot endpoints.
//!
//! Client-side (hydrate): real GETs via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning `Err` since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures both come back as [`RequestFailure`] so the
//! caller has a single catch path; neither is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RequestFailure, Snapshot};

/// Fixed address of the puzzle backend.
const BASE_URL: &str = "http://localhost:5000";

fn start_endpoint() -> String {
    format!("{BASE_URL}/start")
}

fn next_endpoint() -> String {
    format!("{BASE_URL}/next")
}

/// Ask the backend to initialize a new puzzle via `GET /start` and return
/// its initial snapshot.
///
/// # Errors
///
/// Returns [`RequestFailure`] if the request cannot be sent, the server
/// responds with a non-OK status, or the body does not decode as a snapshot.
pub async fn fetch_start() -> Result<Snapshot, RequestFailure> {
    fetch_snapshot(&start_endpoint()).await
}

/// Ask the backend to advance the held puzzle one step via `GET /next` and
/// return the resulting snapshot.
///
/// # Errors
///
/// Same contract as [`fetch_start`].
pub async fn fetch_next() -> Result<Snapshot, RequestFailure> {
    fetch_snapshot(&next_endpoint()).await
}

async fn fetch_snapshot(url: &str) -> Result<Snapshot, RequestFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| RequestFailure::new(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestFailure::from_status(resp.status()));
        }
        resp.json::<Snapshot>()
            .await
            .map_err(|e| RequestFailure::new(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(RequestFailure::new("not available outside the browser"))
    }
}
