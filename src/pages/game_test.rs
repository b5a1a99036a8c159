use super::*;

fn mid_game_state() -> GameState {
    GameState {
        board: Some(vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]),
        finished: false,
        loading: true,
    }
}

#[test]
fn request_kind_labels() {
    assert_eq!(RequestKind::Start.as_str(), "start");
    assert_eq!(RequestKind::Advance.as_str(), "advance");
}

// =============================================================
// settle_request
// =============================================================

#[test]
fn settle_success_applies_snapshot_and_clears_loading() {
    let mut state = GameState {
        board: None,
        finished: false,
        loading: true,
    };

    settle_request(
        &mut state,
        Ok(Snapshot {
            board: vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]],
            finished: false,
        }),
    );

    assert_eq!(
        state.board,
        Some(vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]])
    );
    assert!(!state.finished);
    assert!(!state.loading);
}

#[test]
fn settle_failure_leaves_snapshot_untouched() {
    let mut state = mid_game_state();
    let before = state.clone();

    settle_request(&mut state, Err(RequestFailure::new("connection refused")));

    assert_eq!(state.board, before.board);
    assert_eq!(state.finished, before.finished);
    assert!(!state.loading);
}

#[test]
fn settle_failure_on_fresh_state_stays_fresh() {
    let mut state = GameState {
        board: None,
        finished: false,
        loading: true,
    };

    settle_request(&mut state, Err(RequestFailure::new("timeout")));

    assert!(state.board.is_none());
    assert!(!state.finished);
    assert!(!state.loading);
}

// =============================================================
// Scenario walkthroughs
// =============================================================

#[test]
fn start_scenario_enables_advance_and_disables_start() {
    let mut state = GameState {
        loading: true,
        ..GameState::default()
    };

    settle_request(
        &mut state,
        Ok(Snapshot {
            board: vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]],
            finished: false,
        }),
    );

    assert!(state.start_disabled());
    assert!(!state.advance_disabled());
}

#[test]
fn advance_scenario_keeps_advance_enabled_mid_game() {
    let mut state = mid_game_state();

    settle_request(
        &mut state,
        Ok(Snapshot {
            board: vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]],
            finished: false,
        }),
    );

    assert_eq!(
        state.board,
        Some(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]])
    );
    assert!(!state.advance_disabled());
}

#[test]
fn finishing_scenario_flips_both_controls() {
    let mut state = mid_game_state();

    settle_request(
        &mut state,
        Ok(Snapshot {
            board: vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]],
            finished: true,
        }),
    );

    assert!(state.finished);
    assert!(!state.start_disabled());
    assert!(state.advance_disabled());
}
