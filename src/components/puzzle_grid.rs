//! Grid renderer for a puzzle board snapshot.
//!
//! DESIGN
//! ======
//! Renders exactly what the backend sent: one row element per board row, one
//! cell per value, with no dimension checks and no client-side reordering.
//! The zero tile renders as an empty-styled cell with no numeric content.

#[cfg(test)]
#[path = "puzzle_grid_test.rs"]
mod puzzle_grid_test;

use leptos::prelude::*;

use crate::net::types::Board;

/// The current board, row by row.
#[component]
pub fn PuzzleGrid(#[prop(into)] board: Signal<Board>) -> impl IntoView {
    view! {
        <div class="puzzle-grid">
            {move || {
                board
                    .get()
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="puzzle-grid__row">
                                {row
                                    .into_iter()
                                    .map(|value| {
                                        view! {
                                            <div class=cell_class(value)>{cell_label(value)}</div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// CSS class for one cell; the empty tile gets a distinguishing modifier.
fn cell_class(value: u8) -> &'static str {
    if value == 0 {
        "puzzle-grid__cell puzzle-grid__cell--empty"
    } else {
        "puzzle-grid__cell"
    }
}

/// Text content for one cell; the empty tile renders no number.
fn cell_label(value: u8) -> Option<String> {
    (value != 0).then(|| value.to_string())
}
