use std::cmp::max;

use crate::core::errors::{BroadcastError, ReshapeError};

#[derive(Clone, PartialEq)]
pub(crate) struct Shape {
    pub sizes: Vec<usize>,
}

/// One data-duplication step of a broadcast: repeat runs of `block` cell
/// handles `times` times. Steps must be applied in the order recorded.
pub(crate) struct ExpandStep {
    pub block: usize,
    pub times: usize,
}

/// Result of aligning two shapes: the broadcast shape plus the duplication
/// plan for each operand's cell sequence.
pub(crate) struct Alignment {
    pub sizes: Vec<usize>,
    pub lhs_steps: Vec<ExpandStep>,
    pub rhs_steps: Vec<ExpandStep>,
}

impl Shape {
    pub(crate) fn new(sizes: &[usize]) -> Shape {
        Shape {
            sizes: sizes.to_vec(),
        }
    }

    pub(crate) fn scalar() -> Shape {
        Shape { sizes: Vec::new() }
    }

    pub(crate) fn rank(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn numel(&self) -> usize {
        self.sizes.iter().product()
    }

    // --- Broadcast ---

    /// Walk both shapes from the trailing axis backward, treating missing
    /// leading axes as size 1. A size-1 axis on the right side may always
    /// grow to match; the left side may grow only if `lhs_expandable`
    /// (binary arithmetic yes, assignment no).
    pub(crate) fn align(
        lhs: &[usize],
        rhs: &[usize],
        lhs_expandable: bool,
    ) -> Result<Alignment, BroadcastError> {
        let mut lhs_iter = lhs.iter();
        let mut rhs_iter = rhs.iter();

        let mut sizes = Vec::with_capacity(max(lhs.len(), rhs.len()));
        let mut lhs_steps = Vec::new();
        let mut rhs_steps = Vec::new();

        // Running element counts of the processed (trailing) part of each
        // operand, post-expansion; the block size of the next step.
        let mut lhs_run = 1;
        let mut rhs_run = 1;

        loop {
            let (l, r) = match (lhs_iter.next_back(), rhs_iter.next_back()) {
                (None, None) => break,
                (l, r) => (l.copied().unwrap_or(1), r.copied().unwrap_or(1)),
            };

            let (mut ldim, mut rdim) = (l, r);
            if ldim != rdim {
                if rdim == 1 {
                    rdim = ldim;
                    rhs_steps.push(ExpandStep {
                        block: rhs_run,
                        times: rdim,
                    });
                } else if lhs_expandable && ldim == 1 {
                    ldim = rdim;
                    lhs_steps.push(ExpandStep {
                        block: lhs_run,
                        times: ldim,
                    });
                } else {
                    return Err(BroadcastError::Operands {
                        lhs: lhs.to_vec(),
                        rhs: rhs.to_vec(),
                    });
                }
            }

            lhs_run *= ldim;
            rhs_run *= rdim;
            sizes.push(ldim);
        }

        sizes.reverse();

        Ok(Alignment {
            sizes,
            lhs_steps,
            rhs_steps,
        })
    }

    // --- Validation ---

    pub(crate) fn valid_reshape(&self, sizes: &[usize]) -> Result<(), ReshapeError> {
        if self.numel() != sizes.iter().product::<usize>() {
            return Err(ReshapeError {
                size: self.numel(),
                new_shape: sizes.to_vec(),
            });
        }

        Ok(())
    }
}
