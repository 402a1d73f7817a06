//! End-to-end gameplay scenarios driven through the public engine API.

use blockfall::core::{
    DropOutcome, EngineConfig, Field, GameState, Piece, PieceSequence, PuzzleEngine, Rules,
};
use blockfall::types::{PieceKind, Rotation};

fn engine(kinds: &[PieceKind]) -> PuzzleEngine<PieceSequence> {
    let source = PieceSequence::new(kinds.to_vec()).unwrap();
    PuzzleEngine::new(EngineConfig::default(), source).unwrap()
}

fn engine_on(field: Field, rules: Rules, kinds: &[PieceKind]) -> PuzzleEngine<PieceSequence> {
    let source = PieceSequence::new(kinds.to_vec()).unwrap();
    PuzzleEngine::with_field(rules, source, field).unwrap()
}

/// Tick until the active piece locks; returns the number of `Moved` ticks.
fn drop_until_locked<S: blockfall::core::PieceSource>(
    engine: &mut PuzzleEngine<S>,
) -> (usize, DropOutcome) {
    let mut moved = 0;
    loop {
        match engine.tick() {
            DropOutcome::Moved => moved += 1,
            other => return (moved, other),
        }
    }
}

#[test]
fn piece_falls_to_the_floor_and_locks() {
    let mut engine = engine(&[PieceKind::O, PieceKind::T]);

    let (moved, outcome) = drop_until_locked(&mut engine);
    assert_eq!(moved, 18);
    assert_eq!(outcome, DropOutcome::Locked { lines_cleared: 0 });

    // O occupies columns 4-5 of the two bottom rows.
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        let tile = engine.field().get(x, y).unwrap().expect("locked tile");
        assert_eq!(tile.color, PieceKind::O.color());
        assert_eq!((tile.x, tile.y), (x as usize, y as usize));
    }
    assert_eq!(engine.field().locked_count(), 4);
    assert_eq!(engine.active(), Piece::new(PieceKind::T, 3, 0));
    assert_eq!(engine.score(), 0);
}

#[test]
fn single_line_clear_scores_and_collapses() {
    let field = Field::from_bottom_rows(20, 10, &["#.........", "###....###"]).unwrap();
    let mut engine = engine_on(field, Rules::default(), &[PieceKind::I, PieceKind::T]);

    let (moved, outcome) = drop_until_locked(&mut engine);
    assert_eq!(moved, 18);
    assert_eq!(outcome, DropOutcome::Locked { lines_cleared: 1 });

    assert_eq!(engine.score(), 10);
    assert_eq!(engine.lines_cleared_this_level(), 1);
    assert_eq!(engine.progress().total_lines, 1);

    // The marker above the cleared row moved down and kept consistent coordinates.
    let marker = engine.field().get(0, 19).unwrap().expect("marker moved down");
    assert_eq!((marker.x, marker.y), (0, 19));
    assert_eq!(engine.field().get(0, 18), Some(None));
    assert_eq!(engine.field().locked_count(), 1);
}

#[test]
fn vertical_i_clears_four_rows() {
    let well = ".#########";
    let field = Field::from_bottom_rows(20, 10, &[well, well, well, well]).unwrap();
    let mut engine = engine_on(field, Rules::default(), &[PieceKind::I, PieceKind::O]);

    assert!(engine.rotate());
    assert_eq!(engine.active().rotation, Rotation::East);
    for _ in 0..5 {
        assert!(engine.move_left());
    }
    assert!(!engine.move_left());
    assert_eq!(engine.active_tiles().map(|t| t.x), [0, 0, 0, 0]);

    let (moved, outcome) = drop_until_locked(&mut engine);
    assert_eq!(moved, 16);
    assert_eq!(outcome, DropOutcome::Locked { lines_cleared: 4 });
    assert_eq!(engine.score(), 150);
    assert!(engine.field().is_empty());
}

#[test]
fn rotation_out_of_bounds_is_rejected() {
    let mut engine = engine(&[PieceKind::I]);
    assert!(engine.rotate());
    for _ in 0..5 {
        assert!(engine.move_left());
    }

    let before = engine.snapshot();
    // South orientation spans x -2..1 at this anchor.
    assert!(!engine.rotate());
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.active().rotation, Rotation::East);
}

#[test]
fn rotation_into_locked_tiles_is_rejected() {
    // T at spawn rotates East into column 4, rows 0-2; block (4, 2).
    let mut pattern = vec![".........."; 20];
    pattern[2] = "....#.....";
    let field = Field::from_bottom_rows(20, 10, &pattern).unwrap();
    let mut engine = engine_on(field, Rules::default(), &[PieceKind::T]);

    assert!(!engine.rotate());
    assert_eq!(engine.active().rotation, Rotation::North);
}

#[test]
fn level_up_wipes_field_and_awards_empty_row_bonus() {
    let rules = Rules {
        initial_lines_to_level_up: 1,
        ..Rules::default()
    };
    let field = Field::from_bottom_rows(20, 10, &["#.........", "###....###"]).unwrap();
    let mut engine = engine_on(field, rules, &[PieceKind::I, PieceKind::T]);

    let (_, outcome) = drop_until_locked(&mut engine);
    assert_eq!(outcome, DropOutcome::Locked { lines_cleared: 1 });

    // 10 for the line, 19 empty rows * 10 before the wipe.
    assert_eq!(engine.score(), 200);
    assert_eq!(engine.level(), 2);
    assert_eq!(engine.drop_interval_ms(), 900);
    assert_eq!(engine.lines_to_level_up(), 11);
    assert_eq!(engine.lines_cleared_this_level(), 0);
    assert!(engine.field().is_empty());
    assert_eq!(engine.active().kind, PieceKind::T);
}

#[test]
fn drop_interval_never_goes_below_floor() {
    for initial in [300, 250, 200] {
        let rules = Rules {
            initial_lines_to_level_up: 1,
            initial_drop_interval_ms: initial,
            ..Rules::default()
        };
        let field = Field::from_bottom_rows(20, 10, &["###....###"]).unwrap();
        let mut engine = engine_on(field, rules, &[PieceKind::I]);

        drop_until_locked(&mut engine);
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.drop_interval_ms(), 200, "initial {}", initial);
    }
}

#[test]
fn stacking_ends_the_game_until_restart() {
    let mut engine = engine(&[PieceKind::O]);

    let mut locks = 0;
    let mut outcome = DropOutcome::Moved;
    for _ in 0..1000 {
        outcome = engine.tick();
        match outcome {
            DropOutcome::Locked { .. } => locks += 1,
            DropOutcome::GameOver => break,
            _ => {}
        }
    }
    assert_eq!(outcome, DropOutcome::GameOver);
    // Nine locks fill rows 2-19; the tenth lands at the top.
    assert_eq!(locks, 9);
    assert_eq!(engine.state(), GameState::GameOver);

    let before = engine.snapshot();
    assert!(!engine.move_left());
    assert!(!engine.move_right());
    assert!(!engine.rotate());
    assert_eq!(engine.tick(), DropOutcome::Ignored);
    assert_eq!(engine.soft_drop(), DropOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);

    engine.restart();
    assert_eq!(engine.state(), GameState::Playing);
    assert!(engine.field().is_empty());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.drop_interval_ms(), 1000);
}

#[test]
fn seeded_games_are_reproducible() {
    use blockfall::core::RandomPieces;

    let play = |seed: u64| {
        let mut engine =
            PuzzleEngine::new(EngineConfig::default(), RandomPieces::seeded(seed)).unwrap();
        let mut kinds = Vec::new();
        for _ in 0..400 {
            if engine.is_game_over() {
                break;
            }
            kinds.push(engine.active().kind);
            engine.tick();
        }
        (kinds, engine.snapshot())
    };

    assert_eq!(play(7), play(7));
}

#[test]
fn narrow_field_spawns_at_column_zero() {
    let mut engine =
        PuzzleEngine::new(EngineConfig::new(4, 4), PieceSequence::repeat(PieceKind::I)).unwrap();
    assert_eq!(engine.active(), Piece::new(PieceKind::I, 0, 0));

    // A horizontal I fills the whole row of a 4-wide field.
    let (_, outcome) = drop_until_locked(&mut engine);
    assert_eq!(outcome, DropOutcome::Locked { lines_cleared: 1 });
    assert_eq!(engine.score(), 10);
}
