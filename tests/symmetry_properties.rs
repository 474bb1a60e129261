//! Property tests for the symmetry-equivalence relation

use gato::{BoardState, D4Transform};

/// A spread of boards at different depths, built by fixed move sequences
fn sample_boards() -> Vec<BoardState> {
    let sequences: [&[usize]; 6] = [
        &[],
        &[0],
        &[4, 0],
        &[0, 4, 8],
        &[1, 3, 5, 7],
        &[0, 1, 4, 2, 6, 8],
    ];

    sequences
        .iter()
        .map(|seq| {
            let mut board = BoardState::new();
            for &pos in seq.iter() {
                board = board.make_move(pos).unwrap();
            }
            board
        })
        .collect()
}

#[test]
fn equivalence_is_reflexive() {
    for board in sample_boards() {
        assert!(board.symmetric_to(&board), "board not equivalent to itself");
    }
}

#[test]
fn equivalence_is_symmetric() {
    let boards = sample_boards();
    for a in &boards {
        for b in &boards {
            assert_eq!(
                a.symmetric_to(b),
                b.symmetric_to(a),
                "relation must be symmetric for\n{a}\nand\n{b}"
            );
        }
    }
}

#[test]
fn every_transform_of_a_board_is_equivalent_to_it() {
    for board in sample_boards() {
        for t in D4Transform::ALL {
            assert!(board.symmetric_to(&board.transform(t)));
        }
    }
}

#[test]
fn four_quarter_turns_are_the_identity() {
    for board in sample_boards() {
        let rotated = board
            .transform(D4Transform::Rotate90)
            .transform(D4Transform::Rotate90)
            .transform(D4Transform::Rotate90)
            .transform(D4Transform::Rotate90);
        assert_eq!(rotated, board);
    }
}

#[test]
fn rotations_compose_from_the_quarter_turn() {
    for board in sample_boards() {
        let twice = board
            .transform(D4Transform::Rotate90)
            .transform(D4Transform::Rotate90);
        assert_eq!(twice, board.transform(D4Transform::Rotate180));

        let thrice = board.transform(D4Transform::Rotate180).transform(D4Transform::Rotate90);
        assert_eq!(thrice, board.transform(D4Transform::Rotate270));
    }
}

#[test]
fn canonical_form_is_invariant_under_all_transforms() {
    for board in sample_boards() {
        let canonical = board.canonical();
        for t in D4Transform::ALL {
            assert_eq!(
                board.transform(t).canonical(),
                canonical,
                "canonical form must not depend on the input's orientation"
            );
        }
    }
}

#[test]
fn structural_equality_is_stricter_than_equivalence() {
    let corner = BoardState::new().make_move(0).unwrap();
    let other_corner = BoardState::new().make_move(2).unwrap();

    assert!(corner.symmetric_to(&other_corner));
    assert_ne!(corner, other_corner, "distinct cells, so not structurally equal");
    assert_eq!(corner.canonical(), other_corner.canonical());
}
