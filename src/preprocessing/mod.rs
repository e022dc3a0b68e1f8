//! Time-series preprocessing modules
//!
//! This module contains utilities for preparing measurements for spectral analysis:
//! - Measurement uncertainty injection (uniform distribution)
//! - Double integration (acceleration to displacement)
//! - Mean removal

pub mod integration;
pub mod normalization;
pub mod uncertainty;
