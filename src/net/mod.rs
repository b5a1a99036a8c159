//! Networking modules for the puzzle backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the snapshot GETs and `types` defines the wire schema the
//! backend returns.

pub mod api;
pub mod types;
