//! Shared reactive state records provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold plain records wrapped in `RwSignal` by the root `App`;
//! pages and components read them through `expect_context`.

pub mod game;
