//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentation details; route-level request orchestration
//! stays in `pages`.

pub mod puzzle_grid;
