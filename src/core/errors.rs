use thiserror::Error;

// --- Index ---

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("index {index} is out of bounds for axis 0 with size {size}")]
    OutOfBounds { index: isize, size: usize },

    #[error("too many indices for array: {given} were given, rank is {rank}")]
    TooManyIndices { given: usize, rank: usize },

    #[error("invalid index to scalar variable")]
    Scalar,
}

// --- Type ---

#[derive(Error, Debug)]
pub enum TypeError {
    #[error("only size-1 arrays can be converted to scalars")]
    ScalarConversion,

    #[error("scalar type has no len()")]
    ScalarLen,
}

// --- Shape / value ---

#[derive(Error, Debug)]
#[error("cannot reshape array of size {size} into shape {new_shape:?}")]
pub struct ReshapeError {
    pub size: usize,
    pub new_shape: Vec<usize>,
}

#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("operands could not be broadcast together with shapes {lhs:?} {rhs:?}")]
    Operands { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("could not broadcast input array from shape {from:?} into shape {into:?}")]
    Assign { from: Vec<usize>, into: Vec<usize> },
}

#[derive(Error, Debug)]
#[error("data length ({data_length}) does not match size of array ({array_size})")]
pub struct InvalidDataLengthError {
    pub data_length: usize,
    pub array_size: usize,
}
