use thiserror::Error;

/// Error types for `UStack` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum UStackError {
    /// A zero element size or a zero tunable value was supplied
    #[error("Invalid argument: {parameter} must be greater than zero, got {value}")]
    InvalidArgument {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Value that was rejected
        value: usize,
    },
    /// Reserving storage for the requested capacity failed
    #[error("Allocation failure: could not reserve storage for {requested} elements")]
    AllocationFailure {
        /// Logical capacity that could not be reserved
        requested: usize,
    },
    /// Checked pop, peek or discard on a stack without elements
    #[error("Operation on empty stack")]
    EmptyStack,
}
