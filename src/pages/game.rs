//! Puzzle page orchestrating start/advance requests against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It owns the request lifecycle (loading gate,
//! fetch, settle) and the controls; the grid itself renders in
//! `components::puzzle_grid`.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use leptos::prelude::*;

use crate::components::puzzle_grid::PuzzleGrid;
use crate::net::types::{RequestFailure, Snapshot};
use crate::state::game::GameState;

/// Which backend operation a control triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RequestKind {
    /// `GET /start` — new puzzle instance.
    Start,
    /// `GET /next` — advance the held puzzle one step.
    Advance,
}

impl RequestKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Advance => "advance",
        }
    }
}

/// Fold a completed request into the game state.
///
/// Success replaces the snapshot wholesale; failure leaves the rendered
/// board and finished flag untouched. Both paths clear the loading gate.
fn settle_request(state: &mut GameState, outcome: Result<Snapshot, RequestFailure>) {
    if let Ok(snapshot) = outcome {
        state.apply_snapshot(snapshot);
    }
    state.loading = false;
}

fn run_request(game: RwSignal<GameState>, kind: RequestKind) {
    game.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = match kind {
            RequestKind::Start => crate::net::api::fetch_start().await,
            RequestKind::Advance => crate::net::api::fetch_next().await,
        };
        if let Err(failure) = &outcome {
            log::error!("{} request failed: {failure}", kind.as_str());
        }
        game.update(|s| settle_request(s, outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        game.update(|s| s.loading = false);
    }
}

/// Puzzle page — renders the latest board snapshot with start/next controls.
#[component]
pub fn GamePage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();

    let on_start = move |_| run_request(game, RequestKind::Start);
    let on_advance = move |_| run_request(game, RequestKind::Advance);

    view! {
        <div class="game-page">
            <h1>"Eight Puzzle"</h1>

            <Show when=move || game.get().board.is_some()>
                <PuzzleGrid board=Signal::derive(move || {
                    game.get().board.unwrap_or_default()
                })/>
            </Show>

            <div class="game-page__controls">
                <button
                    class="btn"
                    disabled=move || game.get().start_disabled()
                    on:click=on_start
                >
                    "Start"
                </button>
                <button
                    class="btn"
                    disabled=move || game.get().advance_disabled()
                    on:click=on_advance
                >
                    "Next"
                </button>
            </div>

            <Show when=move || game.get().finished>
                <p class="game-page__finished">"Puzzle solved!"</p>
            </Show>
        </div>
    }
}
