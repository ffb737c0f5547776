use lane_score::{score_frames, GameSession, ScoreError, MAX_PLAYERS};

fn seat_with_rolls(session: &mut GameSession, name: &str, rolls: &[u8]) {
    session.add_player(name).unwrap();
    let seat = session.len() - 1;
    for &pins in rolls {
        session.submit_roll_for(seat, pins).unwrap();
    }
}

/// Ten open frames adding up to `total`, as 20 rolls.
fn open_game(total: u8) -> Vec<u8> {
    let mut rolls = vec![0u8; 20];
    let mut left = total;
    for slot in rolls.iter_mut().step_by(2) {
        let pins = left.min(9);
        *slot = pins;
        left -= pins;
    }
    assert_eq!(left, 0, "open game cannot reach {}", total);
    rolls
}

#[test]
fn test_reference_games() {
    assert_eq!(score_frames(&[0; 20]).unwrap().final_score(), 0);
    assert_eq!(score_frames(&[10; 12]).unwrap().final_score(), 300);
    assert_eq!(score_frames(&[5; 21]).unwrap().final_score(), 150);
}

#[test]
fn test_regression_vector() {
    let mut session = GameSession::new();
    seat_with_rolls(
        &mut session,
        "Ann",
        &[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1],
    );

    let rows = session.score_snapshot().unwrap();
    assert_eq!(
        rows[0].frames.as_slice(),
        &[20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
    );
}

#[test]
fn test_ranking_ties_keep_seating_order() {
    let mut session = GameSession::new();
    // Four strikes then gutters score 90; a fifth strike makes 120.
    let mut one_twenty = vec![10, 10, 10, 10];
    one_twenty.extend([0; 12]);
    one_twenty.extend([0, 0, 0, 0]);
    assert_eq!(score_frames(&one_twenty).unwrap().final_score(), 90);
    one_twenty[4] = 10;
    assert_eq!(score_frames(&one_twenty).unwrap().final_score(), 120);

    seat_with_rolls(&mut session, "First", &one_twenty);
    seat_with_rolls(&mut session, "Second", &[5; 21]);
    seat_with_rolls(&mut session, "Third", &[5; 21]);
    seat_with_rolls(&mut session, "Fourth", &open_game(90));

    let ranking = session.ranking().unwrap();
    let order: Vec<(&str, u32)> = ranking
        .iter()
        .map(|e| (e.name.as_str(), e.score))
        .collect();
    assert_eq!(
        order,
        vec![("Second", 150), ("Third", 150), ("First", 120), ("Fourth", 90)]
    );
}

#[test]
fn test_roster_limit() {
    let mut session = GameSession::new();
    for i in 0..MAX_PLAYERS {
        session.add_player(format!("Bowler {}", i)).unwrap();
    }
    assert!(session.is_full());
    assert!(matches!(
        session.add_player("Late"),
        Err(ScoreError::RosterFull { .. })
    ));
    assert_eq!(session.len(), MAX_PLAYERS);
}

#[test]
fn test_incomplete_game_is_reported_not_guessed() {
    let mut session = GameSession::new();
    seat_with_rolls(&mut session, "Done", &[10; 12]);
    seat_with_rolls(&mut session, "Halfway", &[1, 2, 3, 4, 5]);

    let err = session.score_snapshot().unwrap_err();
    match &err {
        ScoreError::IncompleteGame { player, .. } => assert_eq!(player, "Halfway"),
        other => panic!("expected IncompleteGame, got {:?}", other),
    }
    assert!(err.is_recoverable());
    assert!(session.ranking().is_err());
}

#[test]
fn test_shared_rolls_score_identically() {
    let mut session = GameSession::new();
    session.add_player("A").unwrap();
    session.add_player("B").unwrap();
    for _ in 0..12 {
        session.submit_roll(10);
    }

    let rows = session.score_snapshot().unwrap();
    assert_eq!(rows[0].frames, rows[1].frames);
    assert_eq!(session.score_snapshot().unwrap(), rows);
}
