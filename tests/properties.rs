//! Properties that must hold for every syntactically valid position.

mod common;

use common::{random_board, rng};
use xiangqi_eval::eval::{hce, pst, red_score};
use xiangqi_eval::types::{
    piece_value, SCORE_MATED_IN_MAX_PLY, SCORE_MATE_IN_MAX_PLY, SQUARE_NB,
};
use xiangqi_eval::{evaluate, Color, PieceType, Position, Square};

const ITERATIONS: usize = 2000;

#[test]
fn mirrored_board_negates_red_view_and_keeps_mover_view() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let board = random_board(&mut rng, 40);
        let mirrored = board.mirrored();

        assert_eq!(red_score(&mirrored), -red_score(&board), "{:?}", board);
        assert_eq!(evaluate(&mirrored), evaluate(&board), "{:?}", board);
        assert_eq!(hce::positional(&mirrored), -hce::positional(&board));
        assert_eq!(hce::king_safety(&mirrored), -hce::king_safety(&board));
        assert_eq!(hce::tactics(&mirrored), -hce::tactics(&board));
    }
}

#[test]
fn removing_a_piece_changes_material_by_its_value() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let board = random_board(&mut rng, 30);
        for sq in board.occupied() {
            let Some((color, pt)) = board.piece_on(sq) else {
                unreachable!();
            };
            if pt == PieceType::King {
                continue;
            }
            let mut removed = board;
            removed.remove(sq);

            let sign = match color {
                Color::Red => 1,
                Color::Black => -1,
            };
            let table_sq = match color {
                Color::Red => sq,
                Color::Black => pst::mirror_square(sq),
            };
            let pst_value = pst::table(pt).unwrap()[table_sq.index()];

            assert_eq!(
                hce::material(&board) - hce::material(&removed),
                sign * piece_value(pt)
            );
            assert_eq!(
                hce::positional(&board) - hce::positional(&removed),
                sign * pst_value
            );
        }
    }
}

#[test]
fn output_stays_inside_mate_bounds() {
    let mut rng = rng();
    for max_extra in [0, 4, 30, 88, 400] {
        for _ in 0..ITERATIONS / 4 {
            let board = random_board(&mut rng, max_extra);
            let score = evaluate(&board).raw();
            assert!(score > SCORE_MATED_IN_MAX_PLY, "{:?}", board);
            assert!(score < SCORE_MATE_IN_MAX_PLY, "{:?}", board);
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let mut rng = rng();
    for _ in 0..ITERATIONS / 10 {
        let board = random_board(&mut rng, 32);
        let first = evaluate(&board);
        for _ in 0..5 {
            assert_eq!(evaluate(&board), first);
        }
    }
}

#[test]
fn mirror_square_is_an_involution() {
    for i in 0..SQUARE_NB {
        let sq = Square::from_index(i).unwrap();
        assert_eq!(pst::mirror_square(pst::mirror_square(sq)), sq);
    }
}

#[test]
fn kings_only_positions_are_bounded_and_symmetric() {
    let board = xiangqi_eval::Board::from_fen("3k5/9/9/9/9/9/9/9/9/5K3 w").unwrap();
    let score = evaluate(&board);
    assert!(!score.is_mate_score());
    assert_eq!(evaluate(&board.mirrored()), score);
    assert_eq!(board.pieces(Color::Red, PieceType::King).count(), 1);
}
