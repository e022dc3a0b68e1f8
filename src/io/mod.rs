//! Sample I/O modules
//!
//! The owned sample buffer used throughout the pipeline, and a reader for
//! comma/whitespace separated measurement files.

pub mod csv_reader;
pub mod sample_buffer;
