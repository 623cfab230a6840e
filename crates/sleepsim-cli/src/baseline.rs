//! Historical sensor readings loaded from disk.
//!
//! The file is a JSON object with one minute -> value map per metric:
//!
//! ```json
//! { "light": { "1": 3.2, "2": 3.0 }, "sound": { ... }, "temperature": { ... }, "movement": { ... } }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use sleepsim_core::{BaselineReadings, ReadingSeries};

#[derive(Debug, Deserialize)]
struct RawReadings {
    light: BTreeMap<u32, f64>,
    sound: BTreeMap<u32, f64>,
    temperature: BTreeMap<u32, f64>,
    movement: BTreeMap<u32, f64>,
}

/// Parse historical readings from JSON text.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, a metric is missing, or a
/// series is not minute-contiguous from 1.
pub fn parse(content: &str) -> Result<BaselineReadings, Box<dyn std::error::Error>> {
    let raw: RawReadings = serde_json::from_str(content)?;
    Ok(BaselineReadings {
        light: ReadingSeries::from_minutes(&raw.light)?,
        sound: ReadingSeries::from_minutes(&raw.sound)?,
        temperature: ReadingSeries::from_minutes(&raw.temperature)?,
        movement: ReadingSeries::from_minutes(&raw.movement)?,
    })
}

/// Load historical readings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<BaselineReadings, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read baseline {}: {e}", path.display()))?;
    let readings = parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        minutes = readings.light.len(),
        "loaded historical readings"
    );
    Ok(readings)
}
