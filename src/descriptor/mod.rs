//! Asset descriptor (`config.json`) loading.
//!
//! `read_descriptor` returns the raw JSON object; `build_record` turns it into a
//! fully defaulted record for the folder's kind. Shape problems inside the
//! object never fail the read, they just leave defaults in place.

pub mod build;
pub mod model;
pub mod overlay;

pub use build::build_record;
pub use model::{
    AssetKind, AssetRecord, Axis, AxisComponent, ButtonComponent, Camera, Component, Config2d,
    Config3dField, Config3dRobot, ConfigJoystick, DefaultOrigin, GamePiece, JoystickAnchor,
    JoystickComponent, Pov, Rotation, StickComponent,
};
pub use overlay::Fields;

use crate::DESCRIPTOR_FILE;
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read `<dir>/config.json` and require a JSON object at the top level.
pub fn read_descriptor(dir: &Path) -> Result<Map<String, Value>> {
    let path = dir.join(DESCRIPTOR_FILE);
    if !path.exists() {
        bail!("missing descriptor {}", path.display());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading descriptor {}", path.display()))?;
    let value: Value = serde_json::from_str(raw.trim_start_matches('\u{feff}'))
        .with_context(|| format!("parsing descriptor {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!(
            "descriptor {} must be a JSON object, found {}",
            path.display(),
            json_type_name(&other)
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
