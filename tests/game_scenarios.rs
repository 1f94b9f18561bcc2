use serde::Deserialize;

use mailbox_chess::board::{Color, GameStatus, Position};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<Game>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Checkmate,
    Stalemate,
    Ongoing,
}

#[derive(Deserialize)]
struct Game {
    name: String,
    moves: Vec<String>,
    #[serde(default)]
    notation: Vec<String>,
    status: Outcome,
    winner: Option<String>,
    legal_moves: Option<usize>,
    fen: Option<String>,
}

fn load_games() -> Vec<Game> {
    let data = include_str!("data/games.json");
    let set: GameSet = serde_json::from_str(data).expect("invalid games.json");
    set.games
}

fn winner_color(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("unknown winner {other}"),
    }
}

#[test]
fn scripted_games_reach_expected_state() {
    for game in load_games() {
        let mut position = Position::new();
        let mut played = Vec::new();
        for text in &game.moves {
            let mv = position
                .parse_move(text)
                .unwrap_or_else(|e| panic!("{}: {text} rejected: {e}", game.name));
            played.push(mv.to_string());
            position.apply_move(mv);
        }

        if !game.notation.is_empty() {
            assert_eq!(played, game.notation, "{}: notation", game.name);
        }

        let moves = position.legal_moves();
        if let Some(expected) = game.legal_moves {
            assert_eq!(moves.len(), expected, "{}: legal move count", game.name);
        }

        let expected_status = match game.status {
            Outcome::Checkmate => GameStatus::Checkmate {
                winner: winner_color(game.winner.as_deref().expect("checkmate needs a winner")),
            },
            Outcome::Stalemate => GameStatus::Stalemate,
            Outcome::Ongoing => GameStatus::Ongoing,
        };
        assert_eq!(position.status(), expected_status, "{}: status", game.name);
        assert_eq!(position.in_checkmate(), game.status == Outcome::Checkmate);
        assert_eq!(position.in_stalemate(), game.status == Outcome::Stalemate);

        if let Some(fen) = &game.fen {
            assert_eq!(&position.to_fen(), fen, "{}: fen", game.name);
        }
    }
}

#[test]
fn scripted_games_unwind_to_start() {
    let start = Position::new().to_fen();
    for game in load_games() {
        let mut position = Position::new();
        for text in &game.moves {
            let mv = position.parse_move(text).unwrap();
            position.apply_move(mv);
        }
        position.legal_moves();
        while position.undo_last_move().is_some() {}
        assert_eq!(position.to_fen(), start, "{}", game.name);
        assert!(!position.in_checkmate());
        assert!(!position.in_stalemate());
        assert_eq!(position.legal_moves().len(), 20);
    }
}

#[test]
fn fen_reload_continues_the_game() {
    for game in load_games() {
        let Some(fen) = &game.fen else {
            continue;
        };
        let mut replayed = Position::new();
        for text in &game.moves {
            let mv = replayed.parse_move(text).unwrap();
            replayed.apply_move(mv);
        }
        let mut loaded = Position::from_fen(fen).unwrap();
        assert_eq!(loaded.legal_moves(), replayed.legal_moves(), "{}", game.name);
        assert_eq!(loaded.en_passant_target(), replayed.en_passant_target());
        assert_eq!(loaded.castle_rights(), replayed.castle_rights());
    }
}

#[test]
fn illegal_input_is_rejected_without_side_effects() {
    let mut position = Position::new();
    let before = position.to_fen();
    for text in ["e2e5", "e7e5", "a1a2", "zz11", "e2", "e2e4e5"] {
        assert!(position.parse_move(text).is_err(), "{text} accepted");
    }
    assert_eq!(position.to_fen(), before);
    assert!(position.move_log().is_empty());
}
