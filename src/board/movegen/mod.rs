mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Every move the side to move's pieces can make by their movement rules,
    /// ignoring whether the mover's own king is left in check.
    ///
    /// Castling is the exception: it is only produced when the king's origin,
    /// transit and destination squares are not attacked.
    #[must_use]
    pub fn generate_pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in Square::all() {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                Piece::King => self.generate_king_moves(from, color, &mut moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    if let Some(slider) = SliderType::from_piece(piece) {
                        self.generate_slider_moves(from, color, slider, &mut moves);
                    }
                }
            }
        }
        moves
    }

    /// The legal moves for the side to move.
    ///
    /// Each candidate is tried on a private scratch copy; `self` is never touched.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// assert_eq!(board.generate_legal_moves().len(), 20);
    /// ```
    #[must_use]
    pub fn generate_legal_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let mut scratch = self.clone();
        let mut legal = MoveList::new();

        for &mv in &self.generate_pseudo_legal_moves() {
            let info = scratch.make_move(mv);
            if !scratch.is_in_check(mover) {
                legal.push(mv);
            }
            scratch.unmake_move(mv, info);
        }
        legal
    }

    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.generate_legal_moves().is_empty()
    }

    /// Side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Number of leaf nodes of the legal move tree at `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        let mut scratch = self.clone();
        scratch.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let info = self.make_move(mv);
            nodes += self.perft_inner(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }

    /// Per-root-move node counts, the usual tool for locating a perft mismatch.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        let mut scratch = self.clone();
        let moves = scratch.generate_legal_moves();
        moves
            .into_iter()
            .map(|mv| {
                let info = scratch.make_move(mv);
                let nodes = scratch.perft_inner(depth.saturating_sub(1));
                scratch.unmake_move(mv, info);
                (mv, nodes)
            })
            .collect()
    }
}
