//! Perft node counts for move generation correctness.
//!
//! Depths are limited to trees without underpromotions, since only queen
//! promotions are generated.

use std::time::Instant;

use crate::board::Position;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568)],
    },
    TestPosition {
        name: "En passant",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707)],
    },
];

#[test]
fn perft_standard_positions() {
    for test_pos in TEST_POSITIONS {
        let mut position = Position::from_fen(test_pos.fen).unwrap();
        let fen_before = position.to_fen();
        for &(depth, expected) in test_pos.depths {
            let start = Instant::now();
            let nodes = position.perft(depth);
            assert_eq!(
                nodes, expected,
                "{} depth {}: expected {}, got {} ({:?})",
                test_pos.name,
                depth,
                expected,
                nodes,
                start.elapsed()
            );
        }
        assert_eq!(position.to_fen(), fen_before, "{} not restored", test_pos.name);
    }
}

#[test]
fn perft_zero_is_one() {
    assert_eq!(Position::new().perft(0), 1);
}

#[test]
#[ignore = "slow in debug builds"]
fn perft_initial_depth_four() {
    assert_eq!(Position::new().perft(4), 197_281);
}
