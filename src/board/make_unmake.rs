use super::{Board, CastleSide, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Apply a move, assuming it is legal, and return what is needed to take it back.
    ///
    /// An empty origin square changes nothing; the returned record still
    /// restores cleanly.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let mut info = UnmakeInfo {
            captured: None,
            moved: None,
            castled_rook: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let Some((color, piece)) = self.piece_at(mv.from()) else {
            return info;
        };
        info.moved = Some((color, piece));
        let (from, to) = (mv.from(), mv.to());

        // En passant: the captured pawn sits beside the origin, behind the target.
        if piece == Piece::Pawn {
            if let Some(victim_sq) = self.en_passant_victim(from, to, color) {
                info.captured = self
                    .clear_square(victim_sq)
                    .map(|(c, p)| (victim_sq, c, p));
            }
        }

        if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            if let Some(side) = CastleSide::from_king_target_file(to.file()) {
                let rook_from = Square::at(from.rank(), side.rook_home_file());
                let rook_to = Square::at(from.rank(), side.rook_castled_file());
                if let Some((rook_color, rook)) = self.clear_square(rook_from) {
                    self.set_piece(rook_to, rook_color, rook);
                    info.castled_rook = Some((rook_from, rook_to));
                }
            }
        }

        let placed = mv.promotion().unwrap_or(piece);
        if let Some((c, p)) = self.clear_square(to) {
            info.captured = Some((to, c, p));
        }
        self.clear_square(from);
        self.set_piece(to, color, placed);

        self.side_to_move = color.opponent();

        self.en_passant_target = if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square::at(usize::midpoint(from.rank(), to.rank()), from.file()))
        } else {
            None
        };

        self.revoke_castling_rights(color, piece, from, info.captured);

        if piece == Piece::Pawn || info.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        info
    }

    fn revoke_castling_rights(
        &mut self,
        color: Color,
        piece: Piece,
        from: Square,
        captured: Option<(Square, Color, Piece)>,
    ) {
        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        if let Some(side) = rook_home_side(from, color) {
            self.castling_rights.remove(color, side);
        }
        if let Some((sq, victim, _)) = captured {
            if let Some(side) = rook_home_side(sq, victim) {
                self.castling_rights.remove(victim, side);
            }
        }
    }

    /// Take back a move made with [`Board::make_move`], restoring the exact prior position.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let Some((color, piece)) = info.moved else {
            return;
        };
        self.side_to_move = color;

        self.clear_square(mv.to());
        self.set_piece(mv.from(), color, piece);

        if let Some((rook_home, rook_castled)) = info.castled_rook {
            if let Some((rook_color, rook)) = self.clear_square(rook_castled) {
                self.set_piece(rook_home, rook_color, rook);
            }
        }
        if let Some((sq, c, p)) = info.captured {
            self.set_piece(sq, c, p);
        }
    }

    /// The position after `mv`, leaving `self` untouched.
    #[must_use]
    pub fn after_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

/// Which castling right a rook standing on `sq` at the start belongs to.
fn rook_home_side(sq: Square, color: Color) -> Option<CastleSide> {
    if sq.rank() != color.back_rank() {
        return None;
    }
    CastleSide::from_rook_file(sq.file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let mut board = Board::new();
        board.make_move(mv("e2e4"));
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
        board.make_move(mv("g8f6"));
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn test_unmake_restores_after_capture() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        let mut board = Board::try_from_fen(fen).unwrap();
        let info = board.make_move(mv("e4d5"));
        assert_eq!(info.captured(), Some((sq("d5"), Color::Black, Piece::Pawn)));
        assert_eq!(board.halfmove_clock(), 0);
        board.unmake_move(mv("e4d5"), info);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_empty_origin_is_a_no_op() {
        let mut board = Board::new();
        let info = board.make_move(mv("e4e5"));
        assert_eq!(board, Board::new());
        board.unmake_move(mv("e4e5"), info);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_after_move_leaves_original() {
        let board = Board::new();
        let next = board.after_move(mv("g1f3"));
        assert_eq!(board, Board::new());
        assert_eq!(next.piece_at(sq("f3")), Some((Color::White, Piece::Knight)));
        assert_eq!(next.halfmove_clock(), 1);
    }

    #[test]
    fn test_en_passant_requires_enemy_pawn_behind_target() {
        let fen = "4k3/8/8/3PN3/8/8/8/4K3 w - e6 0 1";
        let mut board = Board::try_from_fen(fen).unwrap();
        assert!(!board.generate_legal_moves().contains(mv("d5e6")));

        let info = board.make_move(mv("d5e6"));
        assert_eq!(info.captured(), None);
        assert_eq!(board.piece_at(sq("e5")), Some((Color::White, Piece::Knight)));
        board.unmake_move(mv("d5e6"), info);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fullmove_advances_after_black() {
        let mut board = Board::new();
        board.make_move(mv("e2e4"));
        assert_eq!(board.fullmove_number(), 1);
        board.make_move(mv("e7e5"));
        assert_eq!(board.fullmove_number(), 2);
    }
}
