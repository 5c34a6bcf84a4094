use super::bitboard::BitBoardError;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 6;
pub const PIECE_COUNT: usize = 12;
pub const CELLS_PER_PIECE: usize = 5;
pub const MAX_ORIENTATIONS: usize = 8;

/// Largest board the packed `u128` occupancy grid can hold.
pub const MAX_BOARD_CELLS: usize = 128;

/// Board dimensions for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl GameConfig {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check that the board fits the occupancy grid.
    pub fn validate(&self) -> Result<(), BitBoardError> {
        let too_large = self
            .width
            .checked_mul(self.height)
            .map_or(true, |cells| cells > MAX_BOARD_CELLS);
        if self.width == 0 || self.height == 0 || too_large {
            return Err(BitBoardError::SizeTooLarge {
                width: self.width,
                height: self.height,
                capacity: MAX_BOARD_CELLS,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
