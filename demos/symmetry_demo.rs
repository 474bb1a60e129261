//! Demonstration of the D4 symmetry operations on Tic-tac-toe boards
//!
//! This example shows:
//! - All 8 transformations of a sample board
//! - Canonicalization of equivalent openings
//! - Symmetric-sibling pruning during successor generation

use gato::{BoardState, D4Transform, GameTree};

fn main() {
    println!("PART 1: THE 8 ELEMENTS OF D4");
    println!("----------------------------");
    demonstrate_d4_elements();
    println!();

    println!("PART 2: BOARD CANONICALIZATION");
    println!("------------------------------");
    demonstrate_canonicalization();
    println!();

    println!("PART 3: SYMMETRY PRUNING");
    println!("------------------------");
    demonstrate_pruning();
}

fn demonstrate_d4_elements() {
    let mut board = BoardState::new();
    board = board.make_move(0).unwrap(); // X at top-left
    board = board.make_move(4).unwrap(); // O at center
    board = board.make_move(8).unwrap(); // X at bottom-right

    println!("Original board:");
    println!("{board}");

    for t in D4Transform::ALL {
        let transformed = board.transform(t);
        println!("\n{t:?}:");
        println!("{transformed}");

        let back = transformed.transform(t.inverse());
        assert_eq!(back, board, "inverse must undo the transform");
    }
}

fn demonstrate_canonicalization() {
    println!("The four corner openings share one canonical form:");
    for pos in [0, 2, 6, 8] {
        let board = BoardState::new().make_move(pos).unwrap();
        println!(
            "  corner {pos} -> canonical label {}",
            board.canonical().encode()
        );
    }

    let center = BoardState::new().make_move(4).unwrap();
    println!(
        "  center 4 -> canonical label {} (not equivalent)",
        center.canonical().encode()
    );
}

fn demonstrate_pruning() {
    let openings = BoardState::new().successors().unwrap();
    println!(
        "Empty board: 9 legal moves collapse to {} distinct openings:",
        openings.len()
    );
    for opening in &openings {
        println!("{opening}");
        println!();
    }

    let mut tree = GameTree::new();
    tree.expand_to_depth(2);
    println!("Nodes per depth after expanding two plies: {:?}", tree.nodes_per_depth());
}
