use super::super::tables::knight_targets;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in knight_targets(from) {
            if self.color_on(to) != Some(color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
