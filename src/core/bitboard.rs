//! A rectangular bitboard packed into a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. Cells are
//! addressed as `(x, y)` with `x` the column and `y` the row, and stored
//! row-major at bit `y * width + x` of the backing integer `T`.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested `width * height` exceeds the capacity of `T::BITS`, or a
    /// dimension is zero.
    SizeTooLarge {
        width: usize,
        height: usize,
        capacity: usize,
    },
    /// Column or row is outside `[0..width) x [0..height)`.
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge {
                width,
                height,
                capacity,
            } => write!(
                f,
                "SizeTooLarge: {}x{} does not fit T::BITS={}",
                width, height, capacity
            ),
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A `width × height` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    width: usize,
    height: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Create an empty board, returning `Err(SizeTooLarge)` if the cells do
    /// not fit in `T` or either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, BitBoardError> {
        let too_large = width
            .checked_mul(height)
            .map_or(true, |cells| cells > Self::CAPACITY);
        if width == 0 || height == 0 || too_large {
            return Err(BitBoardError::SizeTooLarge {
                width,
                height,
                capacity: Self::CAPACITY,
            });
        }
        Ok(BitBoard {
            bits: T::zero(),
            width,
            height,
        })
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the bit at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(x, y)?;
        Ok(self.bit(idx))
    }

    /// Sets the bit at (x, y) to 1.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        let idx = self.index(x, y)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (x, y) to 0.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        let idx = self.index(x, y)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BitBoardError> {
        if x >= self.width || y >= self.height {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(y * self.width + x)
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }

    /// Iterator over the set bits of the board as `(x, y)`, row by row.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitBoard<{}> {}x{}:",
            any::type_name::<T>(),
            self.width,
            self.height
        )?;
        for y in 0..self.height {
            for x in 0..self.width {
                let bit = if self.bit(y * self.width + x) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let w = self.board.width;
        while self.idx < w * self.board.height {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit(idx) {
                return Some((idx % w, idx / w));
            }
        }
        None
    }
}
