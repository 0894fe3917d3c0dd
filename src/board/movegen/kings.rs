use super::super::tables::king_targets;
use super::super::{Board, CastleSide, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in king_targets(from) {
            if self.color_on(to) != Some(color) {
                moves.push(Move::new(from, to));
            }
        }

        for side in CastleSide::BOTH {
            if self.can_castle(from, color, side) {
                let to = Square::at(from.rank(), side.king_target_file());
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Right held, king and rook at home, path clear, and the king neither starts,
    /// passes through nor lands on an attacked square.
    fn can_castle(&self, king_sq: Square, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        if !self.castling_rights.has(color, side) || king_sq != Square::at(rank, 4) {
            return false;
        }

        let rook_file = side.rook_home_file();
        if self.piece_at(Square::at(rank, rook_file)) != Some((color, Piece::Rook)) {
            return false;
        }

        let (low, high) = if rook_file < 4 { (rook_file + 1, 4) } else { (5, rook_file) };
        if (low..high).any(|file| !self.is_empty(Square::at(rank, file))) {
            return false;
        }

        let enemy = color.opponent();
        let target_file = side.king_target_file();
        let transit_file = usize::midpoint(4, target_file);
        [4, transit_file, target_file]
            .iter()
            .all(|&file| !self.is_square_attacked(Square::at(rank, file), enemy))
    }
}
