use super::tables::{king_targets, knight_targets, DIAGONAL, ORTHOGONAL};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Whether any piece of `attacker` attacks `square`.
    ///
    /// Looks outward from the target square, so turn and pins play no part.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let holds = |sq: Square, piece: Piece| self.piece_at(sq) == Some((attacker, piece));

        if knight_targets(square).iter().any(|&sq| holds(sq, Piece::Knight)) {
            return true;
        }
        if king_targets(square).iter().any(|&sq| holds(sq, Piece::King)) {
            return true;
        }

        if ORTHOGONAL
            .iter()
            .any(|&dir| self.first_piece_on_ray(square, dir, attacker, Piece::attacks_straight))
        {
            return true;
        }
        if DIAGONAL
            .iter()
            .any(|&dir| self.first_piece_on_ray(square, dir, attacker, Piece::attacks_diagonally))
        {
            return true;
        }

        // An attacking pawn sits one rank behind the target from its own side.
        let behind = -attacker.pawn_direction();
        [-1, 1]
            .iter()
            .filter_map(|&df| square.offset(behind, df))
            .any(|sq| holds(sq, Piece::Pawn))
    }

    /// Walk from `from` along `dir` and test the first occupied square.
    fn first_piece_on_ray(
        &self,
        from: Square,
        (dr, df): (isize, isize),
        attacker: Color,
        slides: fn(Piece) -> bool,
    ) -> bool {
        let mut current = from.offset(dr, df);
        while let Some(sq) = current {
            if let Some((color, piece)) = self.piece_at(sq) {
                return color == attacker && slides(piece);
            }
            current = sq.offset(dr, df);
        }
        false
    }

    /// First square holding `color`'s king, scanning a1 to h8.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// False when `color` has no king on the board.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
