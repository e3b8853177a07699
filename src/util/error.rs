use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A 1-based position outside of the window accepted by the operation. For insertion the window is
/// `1..=len + 1`, for removal it is `1..=len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Position {pos} is invalid for collection with {len} elements!")]
pub struct InvalidPosition {
    pub pos: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to locate the node preceding position {pos}!")]
pub struct PredecessorNotFound {
    pub pos: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Out of memory while allocating {bytes} bytes!")]
pub struct OutOfMemory {
    pub bytes: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Stack is full at capacity {cap}!")]
pub struct StackFull {
    pub cap: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Stack is empty!")]
pub struct StackEmpty;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Queue is full at capacity {cap}!")]
pub struct QueueFull {
    pub cap: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Queue is empty!")]
pub struct QueueEmpty;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq)]
#[display("Load factor {load_factor} is outside of the range accepted by this table!")]
pub struct InvalidLoadFactor {
    pub load_factor: f64,
}

/// Failure to produce a new allocation, either because the requested layout can't be represented
/// or because the allocator refused it.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    CapacityOverflow(CapacityOverflow),
    OutOfMemory(OutOfMemory),
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    InvalidPosition(InvalidPosition),
    Alloc(AllocError),
}

impl From<CapacityOverflow> for InsertError {
    fn from(value: CapacityOverflow) -> Self {
        InsertError::Alloc(value.into())
    }
}

impl From<OutOfMemory> for InsertError {
    fn from(value: OutOfMemory) -> Self {
        InsertError::Alloc(value.into())
    }
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    InvalidPosition(InvalidPosition),
    PredecessorNotFound(PredecessorNotFound),
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq)]
pub enum TableError {
    InvalidLoadFactor(InvalidLoadFactor),
    Alloc(AllocError),
}

impl From<CapacityOverflow> for TableError {
    fn from(value: CapacityOverflow) -> Self {
        TableError::Alloc(value.into())
    }
}

impl From<OutOfMemory> for TableError {
    fn from(value: OutOfMemory) -> Self {
        TableError::Alloc(value.into())
    }
}
