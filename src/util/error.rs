use derive_more::{Display, Error, From};

use crate::util::panic::Panic;

#[derive(Debug, Display, Error)]
#[display("Range {start}..{end} out of bounds for sequence with {len} elements!")]
pub struct RangeOutOfBounds {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error)]
#[display("Index {index} does not fall on a char boundary!")]
pub struct NotCharBoundary {
    pub index: usize,
}

#[derive(Debug, Display, Error, From)]
pub enum BadRange {
    OutOfBounds(RangeOutOfBounds),
    NotCharBoundary(NotCharBoundary),
}

impl Panic for BadRange {}
