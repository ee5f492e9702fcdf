use crate::entities::Piece;
use crate::util::FPA;

/// A piece placed on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    pub length: f32,
    pub id: String,
    /// Distance from the start of the board to the start of this piece
    pub offset: f32,
}

impl Cut {
    pub fn end(&self) -> f32 {
        self.offset + self.length
    }
}

/// A standard-length board with the pieces assigned to it.
///
/// The first piece on a fresh board consumes exactly its length,
/// every following piece consumes its length plus one kerf.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    stock_length: f32,
    kerf: f32,
    cuts: Vec<Cut>,
    used_length: f32,
}

impl Board {
    pub fn new(stock_length: f32, kerf: f32) -> Self {
        assert!(stock_length > 0.0, "stock length must be positive");
        assert!(kerf >= 0.0, "kerf cannot be negative");
        Self {
            stock_length,
            kerf,
            cuts: vec![],
            used_length: 0.0,
        }
    }

    /// Length a piece of `length` would consume if it were added next
    fn consumption_of(&self, length: f32) -> f32 {
        match self.cuts.is_empty() {
            true => length,
            false => length + self.kerf,
        }
    }

    /// Whether a piece of `length` still fits on this board.
    pub fn fits(&self, length: f32) -> bool {
        FPA(self.used_length + self.consumption_of(length)).fits_in(self.stock_length)
    }

    /// Remaining length after adding a piece of `length`, `None` if it does not fit.
    pub fn leftover_after(&self, length: f32) -> Option<f32> {
        match self.fits(length) {
            true => Some((self.remaining() - self.consumption_of(length)).max(0.0)),
            false => None,
        }
    }

    /// Appends a piece to the board. The piece must fit.
    pub fn push(&mut self, piece: Piece) {
        assert!(
            self.fits(piece.length),
            "piece {} ({}) does not fit on board with {} remaining",
            piece.id,
            piece.length,
            self.remaining()
        );
        let offset = match self.cuts.last() {
            Some(last) => last.end() + self.kerf,
            None => 0.0,
        };
        self.used_length += self.consumption_of(piece.length);
        self.cuts.push(Cut {
            length: piece.length,
            id: piece.id,
            offset,
        });
    }

    pub fn stock_length(&self) -> f32 {
        self.stock_length
    }

    pub fn kerf(&self) -> f32 {
        self.kerf
    }

    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// Total length consumed by pieces and the kerfs separating them
    pub fn used_length(&self) -> f32 {
        self.used_length
    }

    pub fn remaining(&self) -> f32 {
        (self.stock_length - self.used_length).max(0.0)
    }

    /// Offcut left at the end of the board
    pub fn waste(&self) -> f32 {
        self.remaining()
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}

/// Assignment of every required linear piece to a specific stock board.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutlist {
    stock_length: f32,
    kerf: f32,
    strategy: String,
    boards: Vec<Board>,
}

impl Cutlist {
    pub fn new(
        stock_length: f32,
        kerf: f32,
        strategy: impl Into<String>,
        boards: Vec<Board>,
    ) -> Self {
        Self {
            stock_length,
            kerf,
            strategy: strategy.into(),
            boards,
        }
    }

    pub fn stock_length(&self) -> f32 {
        self.stock_length
    }

    pub fn kerf(&self) -> f32 {
        self.kerf
    }

    /// Name of the strategy that produced this cutlist
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of boards to purchase
    pub fn n_boards(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// All cuts over all boards, board by board
    pub fn pieces(&self) -> impl Iterator<Item = &Cut> {
        self.boards.iter().flat_map(|b| b.cuts())
    }

    pub fn total_waste(&self) -> f32 {
        self.boards.iter().map(|b| b.waste()).sum()
    }

    /// Fraction of the purchased length that ends up in pieces
    pub fn usage(&self) -> f32 {
        let purchased = self.stock_length * self.n_boards() as f32;
        match purchased > 0.0 {
            true => self.pieces().map(|c| c.length).sum::<f32>() / purchased,
            false => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(length: f32, id: &str) -> Piece {
        Piece {
            length,
            id: id.to_string(),
        }
    }

    #[test]
    fn first_cut_is_charged_no_kerf() {
        let mut board = Board::new(96.0, 0.125);
        assert!(board.fits(96.0));
        board.push(piece(48.0, "x"));
        assert_eq!(board.used_length(), 48.0);
        assert!(!board.fits(48.0));
        assert!(board.fits(47.875));
        board.push(piece(47.875, "y"));
        assert_eq!(board.cuts()[1].offset, 48.125);
        assert_eq!(board.remaining(), 0.0);
    }

    #[test]
    fn leftover_accounts_for_join_kerf() {
        let mut board = Board::new(96.0, 0.125);
        assert_eq!(board.leftover_after(90.0), Some(6.0));
        board.push(piece(90.0, "a"));
        assert_eq!(board.leftover_after(10.0), None);
        assert_eq!(board.leftover_after(5.0), Some(0.875));
    }
}
