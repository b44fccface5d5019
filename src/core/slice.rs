use anyhow::{bail, Result};

use crate::core::{array::Array, errors::IndexError, shape::Shape};

/// One axis selector. Python's `a[1:4, 0, 2:5]` becomes
/// `a.slice(&[Sel::Rng(1, 4), Sel::Idx(0), Sel::Rng(2, 5)])`.
#[derive(Clone, Copy, Debug)]
pub enum Sel {
    Idx(isize),
    Rng(isize, isize),
}

impl From<isize> for Sel {
    fn from(index: isize) -> Sel {
        Sel::Idx(index)
    }
}

impl From<(isize, isize)> for Sel {
    fn from((start, end): (isize, isize)) -> Sel {
        Sel::Rng(start, end)
    }
}

impl<T> Array<T> {
    /// Python-style resolution on axis 0: negative indices count from the
    /// end. Bounds are enforced only when `verify` is set; range endpoints
    /// are clamped by the caller instead.
    fn resolve_index(&self, index: isize, verify: bool) -> Result<isize> {
        if self.ndim() == 0 {
            bail!(IndexError::Scalar);
        }

        let size = self.shape.sizes[0] as isize;

        if verify && (index < -size || index >= size) {
            bail!(IndexError::OutOfBounds {
                index,
                size: size as usize,
            });
        }

        Ok(if index < 0 { index + size } else { index })
    }

    /// Single integer index on axis 0: a view dropping the leading axis,
    /// aliasing the contiguous block of cells at that position.
    pub fn index(&self, index: isize) -> Result<Array<T>> {
        let index = self.resolve_index(index, true)? as usize;

        let sizes = &self.shape.sizes[1..];
        let block = sizes.iter().product::<usize>();
        let offset = index * block;

        Ok(Array::init(
            Shape::new(sizes),
            self.cells[offset..offset + block].to_vec(),
        ))
    }

    /// Apply selectors left-to-right to successive axes. Fewer selectors
    /// than axes leaves the trailing axes whole; the result is a view over
    /// this array's cells.
    pub fn slice(&self, sels: &[Sel]) -> Result<Array<T>> {
        if sels.len() > self.ndim() {
            bail!(IndexError::TooManyIndices {
                given: sels.len(),
                rank: self.ndim(),
            });
        }

        self.slice_impl(sels)
    }

    fn slice_impl(&self, sels: &[Sel]) -> Result<Array<T>> {
        let (sel, rest) = match sels.split_first() {
            Some(split) => split,
            None => return Ok(Array::init(self.shape.clone(), self.cells.clone())),
        };

        match *sel {
            Sel::Idx(index) => self.index(index)?.slice_impl(rest),
            Sel::Rng(start, end) => {
                let start = self.resolve_index(start, false)?.max(0);
                let end = self
                    .resolve_index(end, false)?
                    .min(self.shape.sizes[0] as isize);

                let mut subs = Vec::new();
                for position in start..end {
                    subs.push(self.index(position)?.slice_impl(rest)?);
                }

                Ok(Array::stack(&subs))
            }
        }
    }
}
