use super::super::tables::{DIAGONAL, ORTHOGONAL};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn from_piece(piece: Piece) -> Option<Self> {
        match piece {
            Piece::Bishop => Some(SliderType::Bishop),
            Piece::Rook => Some(SliderType::Rook),
            Piece::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN: [(isize, isize); 8] = [
            ORTHOGONAL[0],
            ORTHOGONAL[1],
            ORTHOGONAL[2],
            ORTHOGONAL[3],
            DIAGONAL[0],
            DIAGONAL[1],
            DIAGONAL[2],
            DIAGONAL[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    /// Rays stop at the first occupied square, which is included when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &(dr, df) in slider.directions() {
            let mut current = from.offset(dr, df);
            while let Some(to) = current {
                match self.color_on(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(occupant) => {
                        if occupant != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to.offset(dr, df);
            }
        }
    }
}
