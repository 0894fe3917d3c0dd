use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Square};

/// Everything `make_move` destroys, so `unmake_move` can put it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<(Square, Color, Piece)>,
    pub(crate) moved: Option<(Color, Piece)>,
    pub(crate) castled_rook: Option<(Square, Square)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UnmakeInfo {
    /// The piece removed by the move and the square it stood on.
    #[must_use]
    pub fn captured(&self) -> Option<(Square, Color, Piece)> {
        self.captured
    }
}

/// A chess position: placement, side to move, castling rights, en passant
/// target and the two move counters.
///
/// Plain value. Clone it to get an independent position; nothing is shared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::at(0, i), Color::White, *piece);
            board.set_piece(Square::at(7, i), Color::Black, *piece);
            board.set_piece(Square::at(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square::at(6, i), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move, no rights, counters 0 and 1.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Put a piece on a square, replacing whatever was there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    /// Empty a square, returning what stood on it.
    #[inline]
    pub fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].take()
    }

    /// All 64 squares in board order (a1, b1, ..., h8).
    #[must_use]
    pub fn squares(&self) -> &[Option<(Color, Piece)>; 64] {
        &self.squares
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn set_counters(&mut self, halfmove_clock: u32, fullmove_number: u32) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Read-only view for display: layout, side to move, check flag.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            squares: self.squares.to_vec(),
            side_to_move: self.side_to_move,
            in_check: self.is_in_check(self.side_to_move),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// ASCII diagram, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square::at(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// What a display needs to draw a position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    /// 64 entries in board order (a1, b1, ..., h8).
    pub squares: Vec<Option<(Color, Piece)>>,
    pub side_to_move: Color,
    pub in_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_matches_start_fen() {
        let decoded = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(Board::new(), decoded);
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Color::Black, Piece::Queen);
        assert_eq!(board.piece_at(sq("d4")), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_on(sq("d4")), Some(Piece::Queen));
        assert_eq!(board.color_on(sq("d4")), Some(Color::Black));
        assert_eq!(board.clear_square(sq("d4")), Some((Color::Black, Piece::Queen)));
        assert!(board.is_empty(sq("d4")));
        assert_eq!(board.clear_square(sq("d4")), None);
    }

    #[test]
    fn test_squares_are_board_order() {
        let board = Board::new();
        let squares = board.squares();
        assert_eq!(squares[0], Some((Color::White, Piece::Rook)));
        assert_eq!(squares[4], Some((Color::White, Piece::King)));
        assert_eq!(squares[8], Some((Color::White, Piece::Pawn)));
        assert_eq!(squares[60], Some((Color::Black, Piece::King)));
        assert!(squares[16..48].iter().all(Option::is_none));
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        copy.clear_square(sq("e2"));
        copy.set_side_to_move(Color::Black);
        assert_eq!(board.piece_on(sq("e2")), Some(Piece::Pawn));
        assert!(board.white_to_move());
    }

    #[test]
    fn test_snapshot_reports_check() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1").unwrap();
        let snap = board.snapshot();
        assert!(snap.in_check);
        assert_eq!(snap.side_to_move, Color::White);
        assert_eq!(snap.squares[7], Some((Color::Black, Piece::Rook)));
        assert!(!Board::new().snapshot().in_check);
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::new().to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "8  r n b q k b n r");
        assert!(text.ends_with("a b c d e f g h"));
    }
}
