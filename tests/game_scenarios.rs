mod common;

use common::{board, config, pairs, seeded_machine};
use memory_match::game::{
    deck, time_limit, ConfigPatch, GameEffect, GameNotification, LossReason, RunStatus,
    ThemeRegistry, MAX_GRID_SIZE, MIN_GRID_SIZE, MISMATCH_DELAY,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

#[test]
fn two_by_two_single_pair_is_won_in_one_move() {
    let mut machine = seeded_machine(config(2, 10));
    machine
        .reset_with_board(config(2, 10), board(&["1", "1"]))
        .unwrap();
    let run = machine.state().run();

    machine.select_tile(0);
    let effects = machine.select_tile(1);

    let snapshot = machine.snapshot();
    assert_eq!(snapshot.solved, BTreeSet::from([0, 1]));
    assert_eq!(snapshot.moves, 1);
    assert_eq!(snapshot.status, RunStatus::Won);
    assert_eq!(snapshot.score, 30 * 10 + 9 * 20);
    assert!(effects.contains(&GameEffect::CancelScheduled { run }));
    assert!(effects.contains(&GameEffect::Notify(GameNotification::Win { score: 480 })));
}

#[test]
fn single_move_budget_is_lost_on_second_attempt() {
    let mut machine = seeded_machine(config(2, 1));
    machine
        .reset_with_board(config(2, 1), board(&["A", "B", "A", "B"]))
        .unwrap();
    let run = machine.state().run();

    machine.select_tile(0);
    let effects = machine.select_tile(1);
    assert_eq!(machine.state().moves(), 1);
    assert_eq!(machine.state().status(), RunStatus::Playing);
    assert!(machine.state().input_locked());
    assert!(effects.contains(&GameEffect::ScheduleMismatchClear {
        run,
        after: MISMATCH_DELAY,
    }));

    machine.mismatch_elapsed(run);
    assert!(machine.state().selection().flipped().is_empty());
    assert!(!machine.state().input_locked());

    machine.select_tile(0);
    let effects = machine.select_tile(1);
    assert_eq!(machine.state().moves(), 2);
    assert_eq!(
        machine.state().status(),
        RunStatus::Lost(LossReason::MovesExceeded)
    );
    assert!(effects.contains(&GameEffect::Notify(GameNotification::Lose {
        reason: LossReason::MovesExceeded,
    })));
}

#[test]
fn moves_exceeded_beats_completing_the_board() {
    let mut machine = seeded_machine(config(2, 1));
    machine
        .reset_with_board(config(2, 1), board(&["A", "B", "A", "B"]))
        .unwrap();

    machine.select_tile(0);
    machine.select_tile(2);
    assert_eq!(machine.state().status(), RunStatus::Playing);

    machine.select_tile(1);
    machine.select_tile(3);

    assert_eq!(machine.state().selection().solved().len(), 4);
    assert_eq!(
        machine.state().status(),
        RunStatus::Lost(LossReason::MovesExceeded)
    );
    assert_eq!(machine.state().score(), 0);
}

#[test]
fn clock_runs_out_and_stays_at_zero() {
    let mut machine = seeded_machine(config(2, 10));
    machine.reset(config(2, 10)).unwrap();
    let run = machine.state().run();

    for _ in 1..time_limit(2) {
        machine.tick(run);
        assert_eq!(machine.state().status(), RunStatus::Playing);
    }
    let effects = machine.tick(run);

    assert_eq!(machine.state().time_left(), 0);
    assert_eq!(machine.state().status(), RunStatus::Lost(LossReason::Timeout));
    assert!(!machine.state().clock().is_running());
    assert!(effects.contains(&GameEffect::Notify(GameNotification::Lose {
        reason: LossReason::Timeout,
    })));

    assert!(machine.tick(run).is_empty());
    assert_eq!(machine.state().time_left(), 0);
}

#[test]
fn solved_tiles_ignore_selection() {
    let mut machine = seeded_machine(config(4, 20));
    machine.reset(config(4, 20)).unwrap();
    let (first, second) = pairs(machine.state().board())[0];
    machine.select_tile(first);
    machine.select_tile(second);
    let before = machine.snapshot();

    assert!(machine.select_tile(first).is_empty());
    assert_eq!(machine.snapshot(), before);
}

#[test]
fn reselecting_the_flipped_tile_turns_it_back() {
    let mut machine = seeded_machine(config(3, 10));
    machine.reset(config(3, 10)).unwrap();

    machine.select_tile(4);
    assert_eq!(machine.state().selection().flipped(), &[4]);

    machine.select_tile(4);
    assert!(machine.state().selection().flipped().is_empty());
    assert_eq!(machine.state().moves(), 0);
}

#[test]
fn locked_input_and_bad_ids_are_ignored() {
    let mut machine = seeded_machine(config(2, 10));
    machine
        .reset_with_board(config(2, 10), board(&["A", "B", "A", "B"]))
        .unwrap();

    assert!(machine.select_tile(99).is_empty());
    machine.select_tile(0);
    machine.select_tile(1);
    assert!(machine.state().input_locked());

    assert!(machine.select_tile(2).is_empty());
    assert_eq!(machine.state().selection().flipped(), &[0, 1]);
    assert_eq!(machine.state().moves(), 1);
}

#[test]
fn stale_events_from_previous_run_are_ignored() {
    let mut machine = seeded_machine(config(2, 10));
    machine
        .reset_with_board(config(2, 10), board(&["A", "B", "A", "B"]))
        .unwrap();
    let old_run = machine.state().run();
    machine.select_tile(0);
    machine.select_tile(1);

    machine
        .reset_with_board(config(2, 10), board(&["A", "B", "A", "B"]))
        .unwrap();
    machine.select_tile(3);
    let before = machine.snapshot();

    assert!(machine.tick(old_run).is_empty());
    assert!(machine.mismatch_elapsed(old_run).is_empty());
    assert_eq!(machine.snapshot(), before);
    assert_eq!(before.time_left, time_limit(2));
}

#[test]
fn config_changes_wait_for_the_next_run() {
    let mut machine = seeded_machine(config(4, 10));
    machine.reset(config(4, 10)).unwrap();

    machine
        .set_config(&ConfigPatch {
            grid_size: Some(6),
            theme: Some("fruits".to_string()),
            ..ConfigPatch::default()
        })
        .unwrap();
    assert_eq!(machine.state().board().len(), 16);
    assert_eq!(machine.snapshot().config.grid_size, 6);

    machine.restart().unwrap();
    assert_eq!(machine.state().board().len(), 36);
    assert_eq!(machine.state().run_config().theme, "fruits");
    assert_eq!(machine.state().time_left(), time_limit(6));
}

#[test]
fn every_grid_size_builds_full_pairs() {
    let registry = ThemeRegistry::builtin();
    let theme = registry.get("numbers").unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let board = deck::build(grid_size, theme, &mut rng).unwrap();
        let cells = usize::from(grid_size) * usize::from(grid_size);
        assert_eq!(board.len(), 2 * (cells / 2));
        assert_eq!(pairs(&board).len(), cells / 2);
    }
}
