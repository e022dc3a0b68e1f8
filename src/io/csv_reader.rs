//! Measurement file reader
//!
//! Reads a flat sequence of floats separated by commas and/or whitespace.
//! One value per line, many values per line, and trailing commas are all
//! accepted. Order in the file is time order.

use super::sample_buffer::SampleBuffer;
use crate::error::SpectrumError;
use std::fs;
use std::path::Path;

/// Read all samples from a measurement file
///
/// # Arguments
///
/// * `path` - Path to a comma/whitespace separated file of floats
///
/// # Errors
///
/// Returns `SpectrumError::Io` if the file cannot be read,
/// `SpectrumError::Parse` if any value is not a float, or
/// `SpectrumError::InvalidInput` if the file holds no values.
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<SampleBuffer, SpectrumError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    log::debug!("Reading samples from {}", display);

    let text = fs::read_to_string(path).map_err(|e| SpectrumError::Io {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let samples = parse_samples_from(&text, &display)?;
    log::debug!("Read {} samples from {}", samples.len(), display);
    Ok(samples)
}

/// Parse samples from in-memory text
///
/// Same format and errors as [`read_samples`]; errors name the source as `<memory>`.
pub fn parse_samples(text: &str) -> Result<SampleBuffer, SpectrumError> {
    parse_samples_from(text, "<memory>")
}

fn parse_samples_from(text: &str, source: &str) -> Result<SampleBuffer, SpectrumError> {
    let samples = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f32>().map_err(|_| SpectrumError::Parse {
                path: source.to_string(),
                index,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f32>, _>>()?;

    if samples.is_empty() {
        return Err(SpectrumError::InvalidInput(format!(
            "No data found in '{}'",
            source
        )));
    }

    Ok(SampleBuffer::from_vec(samples))
}
