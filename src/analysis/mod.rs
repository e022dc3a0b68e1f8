//! Pipeline stages and result types
//!
//! - RAO characterization from calibration measurements
//! - Wave spectrum estimation from at-sea heave acceleration
//! - Result types and metadata

pub mod estimate;
pub mod metadata;
pub mod rao;
pub mod result;
