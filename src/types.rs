//! Core types for the quantum chess engine.
//!
//! The board holds probabilistic piece instances ("branches"): a piece may
//! occupy several squares at once, each occurrence carrying a complex
//! amplitude whose squared magnitude is its occupancy probability. These
//! types keep color as an explicit enum and amplitudes as plain value
//! types so that cloning a board can never alias state with the original.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Stable branch identifier, assigned at setup as `rank * 8 + file`
/// (rank 1-based, file 0-based) and preserved across splits and merges.
pub type PieceId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A concrete piece: kind plus an explicit color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Piece {
        Piece { kind, color }
    }

    /// Wire form: uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A board square: file a..h (col 0..8) and rank 1..8 (row 0..8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    col: i8,
    row: i8,
}

impl Square {
    /// Build a square from 0-based coordinates, `None` when off the board.
    pub fn from_coords(col: i8, row: i8) -> Option<Square> {
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Some(Square { col, row })
        } else {
            None
        }
    }

    pub fn col(self) -> i8 {
        self.col
    }

    pub fn row(self) -> i8 {
        self.row
    }

    /// Linear cell index 0..64 (row-major).
    pub fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }

    /// Offset by (col, row) deltas, `None` when the result leaves the board.
    pub fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        Square::from_coords(self.col + dc, self.row + dr)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { col, row }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Square, EngineError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::MalformedMove(s.to_string()));
        }
        let col = bytes[0].wrapping_sub(b'a') as i8;
        let row = bytes[1].wrapping_sub(b'1') as i8;
        Square::from_coords(col, row).ok_or_else(|| EngineError::MalformedMove(s.to_string()))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Complex amplitude stored as two floats. The squared magnitude is the
/// branch's occupancy probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitude {
    pub re: f64,
    pub im: f64,
}

impl Amplitude {
    pub const ONE: Amplitude = Amplitude { re: 1.0, im: 0.0 };

    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn abs(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Argument of the amplitude in degrees.
    pub fn phase_degrees(self) -> f64 {
        self.im.atan2(self.re).to_degrees()
    }

    pub fn scaled(self, factor: f64) -> Amplitude {
        Amplitude {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    /// Multiplication by i (a 90 degree phase rotation).
    pub fn times_i(self) -> Amplitude {
        Amplitude {
            re: -self.im,
            im: self.re,
        }
    }

    /// Rescale to unit magnitude.
    pub fn normalized(self) -> Amplitude {
        self.scaled(1.0 / self.abs())
    }
}

impl std::ops::Add for Amplitude {
    type Output = Amplitude;

    fn add(self, rhs: Amplitude) -> Amplitude {
        Amplitude {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

/// One probabilistic instance of a piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub piece: Piece,
    pub amp: Amplitude,
    pub id: PieceId,
}

impl Branch {
    pub fn probability(&self) -> f64 {
        self.amp.norm_sqr()
    }
}

/// A parsed move string.
///
/// Standard moves are four characters (`e2e4`); split moves are two
/// standard moves joined by `^` that share the same source (`b1a3^b1c3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Standard { src: Square, tgt: Square },
    Split { src: Square, t1: Square, t2: Square },
}

impl Move {
    pub fn parse(s: &str) -> Result<Move, EngineError> {
        if let Some((left, right)) = s.split_once('^') {
            let (src1, t1) = parse_standard(left)?;
            let (src2, t2) = parse_standard(right)?;
            if src1 != src2 {
                return Err(EngineError::MalformedMove(s.to_string()));
            }
            Ok(Move::Split { src: src1, t1, t2 })
        } else {
            let (src, tgt) = parse_standard(s)?;
            Ok(Move::Standard { src, tgt })
        }
    }
}

fn parse_standard(s: &str) -> Result<(Square, Square), EngineError> {
    if s.len() != 4 || !s.is_ascii() {
        return Err(EngineError::MalformedMove(s.to_string()));
    }
    let src = s[..2].parse::<Square>()?;
    let tgt = s[2..].parse::<Square>()?;
    Ok((src, tgt))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Standard { src, tgt } => write!(f, "{src}{tgt}"),
            Move::Split { src, t1, t2 } => write!(f, "{src}{t1}^{src}{t2}"),
        }
    }
}

/// Opponent search strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Difficulty, EngineError> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(EngineError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Result of the king-survival check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PieceColor>,
}

impl GameStatus {
    pub fn playing() -> GameStatus {
        GameStatus {
            game_over: false,
            winner: None,
        }
    }

    pub fn won_by(color: PieceColor) -> GameStatus {
        GameStatus {
            game_over: true,
            winner: Some(color),
        }
    }

    /// Both kings fell below the survival threshold on the same move.
    pub fn draw() -> GameStatus {
        GameStatus {
            game_over: true,
            winner: None,
        }
    }
}
