use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Pushes, double pushes, diagonal captures and en passant for the pawn on `from`.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            push_pawn_move(moves, from, forward, promotion_rank);
            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::new(from, double));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.color_on(target) {
                Some(target_color) if target_color != color => {
                    push_pawn_move(moves, from, target, promotion_rank);
                }
                Some(_) => {}
                None if self.en_passant_victim(from, target, color).is_some() => {
                    moves.push(Move::new(from, target));
                }
                None => {}
            }
        }
    }

    /// Square of the enemy pawn an en passant capture from `from` to `to` removes.
    ///
    /// `None` unless `to` is the en passant target and an enemy pawn stands
    /// beside `from` on the target's file.
    pub(crate) fn en_passant_victim(
        &self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Option<Square> {
        if self.en_passant_target != Some(to) || from.file() == to.file() || !self.is_empty(to) {
            return None;
        }
        let victim = Square::at(from.rank(), to.file());
        (self.piece_at(victim) == Some((color.opponent(), Piece::Pawn))).then_some(victim)
    }
}

/// Expands to the four promotions (Queen, Rook, Bishop, Knight) on the last rank.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, promotion_rank: usize) {
    if to.rank() == promotion_rank {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
