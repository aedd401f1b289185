//! The quantum board: a 64-cell value table of branch lists plus the
//! entanglement registry.
//!
//! Each cell holds the branches currently occupying that square in
//! insertion order; an empty cell means the square is vacant, so removing
//! the last branch of a cell is equivalent to deleting a mapping entry.
//! The first branch of a cell is the primary one: it decides the square's
//! color for path blocking and capture checks.
//!
//! Cloning a board is the snapshot operation: every branch is value-copied
//! and the registry duplicated, so a board and its clone never share
//! mutable memory.

use std::collections::HashMap;

use crate::types::{Amplitude, Branch, Piece, PieceColor, PieceId, PieceKind, Square};

#[derive(Debug, Clone)]
pub struct QuantumBoard {
    cells: [Vec<Branch>; 64],
    entanglements: HashMap<PieceId, String>,
}

impl QuantumBoard {
    /// Standard starting arrangement: 16 pawns on ranks 2 and 7, back
    /// ranks R N B Q K B N R, every amplitude 1+0i. Branch ids are
    /// assigned positionally as `rank * 8 + file` and never reused.
    pub fn new() -> QuantumBoard {
        let mut board = QuantumBoard {
            cells: std::array::from_fn(|_| Vec::new()),
            entanglements: HashMap::new(),
        };

        use PieceKind::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for col in 0..8 {
            board.place(col, 1, Piece::new(Pawn, PieceColor::White));
            board.place(col, 6, Piece::new(Pawn, PieceColor::Black));
            board.place(col, 0, Piece::new(back_rank[col as usize], PieceColor::White));
            board.place(col, 7, Piece::new(back_rank[col as usize], PieceColor::Black));
        }

        board
    }

    fn place(&mut self, col: i8, row: i8, piece: Piece) {
        // id = rank * 8 + file with a 1-based rank, matching the setup
        // numbering the rest of the system relies on.
        let id = ((row + 1) * 8 + col) as PieceId;
        self.cells[(row * 8 + col) as usize].push(Branch {
            piece,
            amp: Amplitude::ONE,
            id,
        });
    }

    /// Branches at a square, in insertion order.
    pub fn branches(&self, sq: Square) -> &[Branch] {
        &self.cells[sq.index()]
    }

    /// The square's primary (first-inserted) branch.
    pub fn primary(&self, sq: Square) -> Option<&Branch> {
        self.cells[sq.index()].first()
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.cells[sq.index()].is_empty()
    }

    /// Occupied squares in index order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|sq| self.is_occupied(*sq))
    }

    /// Every branch on the board with its square, in index order.
    pub fn branches_iter(&self) -> impl Iterator<Item = (Square, &Branch)> {
        Square::all().flat_map(|sq| self.cells[sq.index()].iter().map(move |b| (sq, b)))
    }

    /// Summed occupancy probability of a color's king branches.
    pub fn king_probability(&self, color: PieceColor) -> f64 {
        self.branches_iter()
            .filter(|(_, b)| b.piece.kind == PieceKind::King && b.piece.color == color)
            .map(|(_, b)| b.probability())
            .sum()
    }

    pub(crate) fn push_branch(&mut self, sq: Square, branch: Branch) {
        self.cells[sq.index()].push(branch);
    }

    /// Remove and return the primary branch.
    pub(crate) fn take_primary(&mut self, sq: Square) -> Option<Branch> {
        let cell = &mut self.cells[sq.index()];
        if cell.is_empty() {
            None
        } else {
            Some(cell.remove(0))
        }
    }

    /// Remove every branch at a square (a resolved capture).
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.cells[sq.index()].clear();
    }

    pub(crate) fn has_branch_with_id(&self, sq: Square, id: PieceId) -> bool {
        self.cells[sq.index()].iter().any(|b| b.id == id)
    }

    pub(crate) fn branch_with_id_mut(&mut self, sq: Square, id: PieceId) -> Option<&mut Branch> {
        self.cells[sq.index()].iter_mut().find(|b| b.id == id)
    }

    /// Display color tag for an id, present once the id has split.
    pub fn entangle_tag(&self, id: PieceId) -> Option<&str> {
        self.entanglements.get(&id).map(String::as_str)
    }

    pub fn is_entangled(&self, id: PieceId) -> bool {
        self.entanglements.contains_key(&id)
    }

    pub(crate) fn register_entanglement(&mut self, id: PieceId, tag: String) {
        self.entanglements.entry(id).or_insert(tag);
    }

    /// Structurally independent deep copy of the board and its registry.
    pub fn snapshot(&self) -> QuantumBoard {
        self.clone()
    }
}

impl Default for QuantumBoard {
    fn default() -> QuantumBoard {
        QuantumBoard::new()
    }
}
