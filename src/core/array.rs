use anyhow::{bail, Result};
use log::warn;
use num_traits::{AsPrimitive, One, Zero};
use std::{iter::successors, ops::Add};

use crate::core::{
    cell::{self, Cell},
    errors::*,
    shape::Shape,
};

/// An N-dimensional array: a shape plus a flat, row-major sequence of
/// shared element cells. Indexing, slicing and reshaping produce views
/// that hold handles to the same cells, so writes through a view are
/// visible through the source array and every overlapping view.
pub struct Array<T> {
    pub(crate) shape: Shape,
    pub(crate) cells: Vec<Cell<T>>,
}

impl<T> Array<T> {
    pub(crate) fn init(shape: Shape, cells: Vec<Cell<T>>) -> Array<T> {
        Array { shape, cells }
    }

    /// The empty array: shape `[0]`, no cells.
    pub fn empty() -> Array<T> {
        Array::init(Shape::new(&[0]), Vec::new())
    }

    /// Stack equally-shaped sub-arrays along a new leading axis. The result
    /// aliases the sub-arrays' cells. Shape disagreement among the
    /// sub-arrays yields the empty array with a diagnostic.
    pub fn stack(subarrays: &[Array<T>]) -> Array<T> {
        let first = match subarrays.first() {
            Some(first) => first,
            None => return Array::empty(),
        };

        if subarrays.iter().any(|sub| sub.shape != first.shape) {
            warn!("stack: sub-array shapes do not match");
            return Array::empty();
        }

        let mut sizes = Vec::with_capacity(first.shape.rank() + 1);
        sizes.push(subarrays.len());
        sizes.extend_from_slice(&first.shape.sizes);

        let cells = subarrays
            .iter()
            .flat_map(|sub| sub.cells.iter().cloned())
            .collect();

        Array::init(Shape::new(&sizes), cells)
    }

    // --- Shape attributes ---

    pub fn size(&self) -> usize {
        self.shape.numel()
    }

    pub fn ndim(&self) -> usize {
        self.shape.rank()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape.sizes
    }

    /// Length of axis 0.
    pub fn len(&self) -> Result<usize> {
        if self.ndim() == 0 {
            bail!(TypeError::ScalarLen);
        }

        Ok(self.shape.sizes[0])
    }

    // --- Same cells, new shape ---

    pub fn reshape(&self, sizes: &[usize]) -> Result<Array<T>> {
        self.shape.valid_reshape(sizes)?;

        Ok(Array::init(Shape::new(sizes), self.cells.clone()))
    }

    pub fn ravel(&self) -> Array<T> {
        Array::init(Shape::new(&[self.size()]), self.cells.clone())
    }
}

impl<T: Copy> Array<T> {
    // --- Construction ---

    pub fn new(data: &[T], sizes: &[usize]) -> Result<Array<T>> {
        let data_length = data.len();
        let array_size = sizes.iter().product();

        if data_length != array_size {
            bail!(InvalidDataLengthError {
                data_length,
                array_size
            });
        }

        let cells = data.iter().map(|&value| Cell::new(value)).collect();
        Ok(Array::init(Shape::new(sizes), cells))
    }

    pub fn new_1d(data: &[T]) -> Array<T> {
        let cells = data.iter().map(|&value| Cell::new(value)).collect();
        Array::init(Shape::new(&[data.len()]), cells)
    }

    pub fn scalar(value: T) -> Array<T> {
        Array::init(Shape::scalar(), vec![Cell::new(value)])
    }

    pub fn full(sizes: &[usize], value: T) -> Array<T> {
        let size = sizes.iter().product::<usize>();
        let cells = (0..size).map(|_| Cell::new(value)).collect();

        Array::init(Shape::new(sizes), cells)
    }

    pub fn zeros(sizes: &[usize]) -> Array<T>
    where
        T: Zero,
    {
        Array::full(sizes, T::zero())
    }

    pub fn ones(sizes: &[usize]) -> Array<T>
    where
        T: One,
    {
        Array::full(sizes, T::one())
    }

    pub fn arange(n: usize, start: T) -> Array<T>
    where
        T: Add<Output = T> + One,
    {
        let cells = successors(Some(start), |&prev| Some(prev + T::one()))
            .take(n)
            .map(Cell::new)
            .collect();

        Array::init(Shape::new(&[n]), cells)
    }

    // --- Values ---

    /// Flat row-major copy of the element values.
    pub fn values(&self) -> Vec<T> {
        self.cells.iter().map(Cell::get).collect()
    }

    /// Scalar coercion: the sole element of a size-1 array.
    pub fn item(&self) -> Result<T> {
        if self.size() != 1 {
            bail!(TypeError::ScalarConversion);
        }

        Ok(self.cells[0].get())
    }

    // --- Conversion ---

    /// Convert the element type. Always a copy into brand-new cells,
    /// never a view.
    pub fn astype<U>(&self) -> Array<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        let cells = self
            .cells
            .iter()
            .map(|cell| Cell::new(cell.get().as_()))
            .collect();

        Array::init(self.shape.clone(), cells)
    }

    // --- Elementwise ---

    /// Broadcast-align both operands, then apply `f` per position into
    /// brand-new cells. Either operand may grow along size-1 axes.
    pub fn zip<R: Copy>(&self, rhs: &Array<T>, f: impl Fn(T, T) -> R) -> Result<Array<R>> {
        let alignment = Shape::align(&self.shape.sizes, &rhs.shape.sizes, true)?;

        let lhs_cells = cell::expand_all(&self.cells, &alignment.lhs_steps);
        let rhs_cells = cell::expand_all(&rhs.cells, &alignment.rhs_steps);

        let cells = lhs_cells
            .iter()
            .zip(&rhs_cells)
            .map(|(l, r)| Cell::new(f(l.get(), r.get())))
            .collect();

        Ok(Array::init(Shape::new(&alignment.sizes), cells))
    }

    // --- Assignment ---

    /// Write `rhs` through this array's cells, broadcasting `rhs` into
    /// this array's shape. The shape here is fixed: only the right side
    /// may grow, and the cell containers are never rebound, so the writes
    /// land in every view sharing these cells.
    pub fn assign(&self, rhs: &Array<T>) -> Result<()> {
        let alignment =
            Shape::align(&self.shape.sizes, &rhs.shape.sizes, false).map_err(|_| {
                BroadcastError::Assign {
                    from: rhs.shape.sizes.clone(),
                    into: self.shape.sizes.clone(),
                }
            })?;

        let rhs_cells = cell::expand_all(&rhs.cells, &alignment.rhs_steps);

        for (target, value) in self.cells.iter().zip(&rhs_cells) {
            target.set(value.get());
        }

        Ok(())
    }

    pub fn assign_value(&self, value: T) -> Result<()> {
        self.assign(&Array::scalar(value))
    }
}

impl<T: Copy + PartialEq> PartialEq for Array<T> {
    fn eq(&self, rhs: &Array<T>) -> bool {
        self.shape == rhs.shape && self.values() == rhs.values()
    }
}
