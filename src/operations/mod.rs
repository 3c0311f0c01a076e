pub mod cartesian_offsets;
pub mod transect_offsets;

pub use cartesian_offsets::{
    default_directions, CartesianOffsets, CartesianOffsetsOutput, DEFAULT_DISTANCES,
};
pub use transect_offsets::{
    MarkerStatus, OffsetOutcome, TransectOffsets, TransectOffsetsOutput, DEFAULT_OFFSET,
};
