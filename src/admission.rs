//! Admission gate: record invariants plus on-disk existence of every file the
//! record implies.
//!
//! A record is either admitted whole or rejected whole; the error carries the
//! first violated invariant for logging.

use crate::descriptor::{
    AssetRecord, Config2d, Config3dField, Config3dRobot, ConfigJoystick, JoystickComponent,
};
use crate::{IMAGE_FILE, MODEL_FILE};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

// Length of ".glb" stripped from the primary model before adding `_<index>`.
const MODEL_EXTENSION_LEN: usize = 4;

/// Check every acceptance invariant for `record`, whose files live in `dir`.
pub fn check(record: &AssetRecord, dir: &Path) -> Result<()> {
    match record {
        AssetRecord::Field2d(config) => check_field2d(config, dir),
        AssetRecord::Field3d(config) => check_field3d(config, dir),
        AssetRecord::Robot(config) => check_robot(config, dir),
        AssetRecord::Joystick(config) => check_joystick(config, dir),
    }
}

/// Path of the `index`-th auxiliary model next to `primary`.
///
/// `model.glb` with index 2 becomes `model_2.glb`.
pub fn auxiliary_model_path(primary: &Path, index: usize) -> PathBuf {
    let file_name = primary
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name
        .get(..file_name.len().saturating_sub(MODEL_EXTENSION_LEN))
        .unwrap_or_default();
    primary.with_file_name(format!("{stem}_{index}.glb"))
}

fn check_field2d(config: &Config2d, dir: &Path) -> Result<()> {
    require_name(&config.name)?;
    if config
        .top_left
        .iter()
        .chain(&config.bottom_right)
        .any(|coord| *coord < 0.0)
    {
        bail!(
            "field corners must be non-negative, got topLeft {:?} bottomRight {:?}",
            config.top_left,
            config.bottom_right
        );
    }
    require_dimensions(config.width_inches, config.height_inches)?;
    require_file(&dir.join(IMAGE_FILE))
}

fn check_field3d(config: &Config3dField, dir: &Path) -> Result<()> {
    require_name(&config.name)?;
    require_dimensions(config.width_inches, config.height_inches)?;
    require_models(&dir.join(MODEL_FILE), config.game_pieces.len())
}

fn check_robot(config: &Config3dRobot, dir: &Path) -> Result<()> {
    require_name(&config.name)?;
    if let Some(idx) = config.cameras.iter().position(|camera| camera.name.is_empty()) {
        bail!("camera {idx} has no name");
    }
    require_models(&dir.join(MODEL_FILE), config.components.len())
}

fn check_joystick(config: &ConfigJoystick, dir: &Path) -> Result<()> {
    require_name(&config.name)?;
    for (idx, component) in config.components.iter().enumerate() {
        match component {
            JoystickComponent::Button(button) => {
                require_size(idx, button.size_px)?;
                require_source(idx, "sourceIndex", button.source_index)?;
            }
            JoystickComponent::Axis(axis) => {
                require_size(idx, axis.size_px)?;
                require_source(idx, "sourceIndex", axis.source_index)?;
            }
            JoystickComponent::Joystick(stick) => {
                if stick.radius_px <= 0.0 {
                    bail!("component {idx} radiusPx must be positive, got {}", stick.radius_px);
                }
                require_source(idx, "xSourceIndex", stick.x_source_index)?;
                require_source(idx, "ySourceIndex", stick.y_source_index)?;
            }
        }
    }
    require_file(&dir.join(IMAGE_FILE))
}

fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("name must not be empty");
    }
    Ok(())
}

fn require_dimensions(width: f64, height: f64) -> Result<()> {
    if width <= 0.0 || height <= 0.0 {
        bail!("widthInches and heightInches must be positive, got {width} x {height}");
    }
    Ok(())
}

fn require_size(idx: usize, size: [f64; 2]) -> Result<()> {
    if size[0] <= 0.0 || size[1] <= 0.0 {
        bail!("component {idx} sizePx must be positive, got {size:?}");
    }
    Ok(())
}

fn require_source(idx: usize, field: &str, value: i64) -> Result<()> {
    if value < 0 {
        bail!("component {idx} {field} must be non-negative, got {value}");
    }
    Ok(())
}

fn require_models(primary: &Path, auxiliary_count: usize) -> Result<()> {
    require_file(primary)?;
    for index in 0..auxiliary_count {
        require_file(&auxiliary_model_path(primary, index))?;
    }
    Ok(())
}

fn require_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("missing asset file {}", path.display());
    }
    Ok(())
}
