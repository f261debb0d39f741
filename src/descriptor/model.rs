//! Validated asset records.
//!
//! Field names serialize in the camelCase form used by `config.json` so a
//! loaded collection can be handed to consumers that speak the descriptor
//! format. Defaults here are the base every descriptor is overlaid onto.

use serde::Serialize;

/// Asset kind, derived from the folder-name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Field2d,
    Field3d,
    Robot,
    Joystick,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Field2d,
        AssetKind::Field3d,
        AssetKind::Robot,
        AssetKind::Joystick,
    ];

    /// Folder-name prefix that selects this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            AssetKind::Field2d => "Field2d_",
            AssetKind::Field3d => "Field3d_",
            AssetKind::Robot => "Robot_",
            AssetKind::Joystick => "Joystick_",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Field2d => "field2d",
            AssetKind::Field3d => "field3d",
            AssetKind::Robot => "robot",
            AssetKind::Joystick => "joystick",
        }
    }

    /// Classify a folder name; `None` means the folder is not an asset.
    pub fn classify(folder: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| folder.starts_with(kind.prefix()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rotation {
    pub axis: Axis,
    pub degrees: f64,
}

/// Which alliance the field origin defaults to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultOrigin {
    #[default]
    Auto,
    Red,
    Blue,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config2d {
    pub name: String,
    pub path: String,
    pub top_left: [f64; 2],
    pub bottom_right: [f64; 2],
    pub width_inches: f64,
    pub height_inches: f64,
    pub default_origin: DefaultOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Default for Config2d {
    // Negative corners mark "unset" and never pass admission.
    fn default() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            top_left: [-1.0, -1.0],
            bottom_right: [-1.0, -1.0],
            width_inches: 0.0,
            height_inches: 0.0,
            default_origin: DefaultOrigin::Auto,
            source_url: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config3dField {
    pub name: String,
    pub path: String,
    pub rotations: Vec<Rotation>,
    pub width_inches: f64,
    pub height_inches: f64,
    pub default_origin: DefaultOrigin,
    /// Six `[x, y]` positions; `None` leaves placement to the consumer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_stations: Option<[[f64; 2]; 6]>,
    pub game_pieces: Vec<GamePiece>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePiece {
    pub name: String,
    pub rotations: Vec<Rotation>,
    pub position: [f64; 3],
    pub staged_objects: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config3dRobot {
    pub name: String,
    pub path: String,
    pub rotations: Vec<Rotation>,
    pub position: [f64; 3],
    pub cameras: Vec<Camera>,
    pub components: Vec<Component>,
    pub disable_simplification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub name: String,
    pub rotations: Vec<Rotation>,
    pub position: [f64; 3],
    pub resolution: [f64; 2],
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            name: String::new(),
            rotations: Vec::new(),
            position: [0.0; 3],
            resolution: [200.0, 100.0],
            fov: 90.0,
        }
    }
}

/// Articulated sub-part of a robot; its model is `model_<index>.glb`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub zeroed_rotations: Vec<Rotation>,
    pub zeroed_position: [f64; 3],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigJoystick {
    pub name: String,
    pub path: String,
    pub components: Vec<JoystickComponent>,
}

/// Fields shared by every joystick overlay component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoystickAnchor {
    pub is_yellow: bool,
    pub center_px: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JoystickComponent {
    Button(ButtonComponent),
    Joystick(StickComponent),
    Axis(AxisComponent),
}

impl JoystickComponent {
    pub fn anchor(&self) -> &JoystickAnchor {
        match self {
            JoystickComponent::Button(button) => &button.anchor,
            JoystickComponent::Joystick(stick) => &stick.anchor,
            JoystickComponent::Axis(axis) => &axis.anchor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pov {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonComponent {
    #[serde(flatten)]
    pub anchor: JoystickAnchor,
    pub is_ellipse: bool,
    pub size_px: [f64; 2],
    pub source_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_pov: Option<Pov>,
}

/// Analog stick.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickComponent {
    #[serde(flatten)]
    pub anchor: JoystickAnchor,
    pub radius_px: f64,
    pub x_source_index: i64,
    pub x_source_inverted: bool,
    pub y_source_index: i64,
    pub y_source_inverted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_source_index: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisComponent {
    #[serde(flatten)]
    pub anchor: JoystickAnchor,
    pub size_px: [f64; 2],
    pub source_index: i64,
    pub source_range: [f64; 2],
}

impl Default for AxisComponent {
    fn default() -> Self {
        Self {
            anchor: JoystickAnchor::default(),
            size_px: [0.0, 0.0],
            source_index: 0,
            source_range: [-1.0, 1.0],
        }
    }
}

/// A fully built record of any kind, before or after admission.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetRecord {
    Field2d(Config2d),
    Field3d(Config3dField),
    Robot(Config3dRobot),
    Joystick(ConfigJoystick),
}

impl AssetRecord {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetRecord::Field2d(_) => AssetKind::Field2d,
            AssetRecord::Field3d(_) => AssetKind::Field3d,
            AssetRecord::Robot(_) => AssetKind::Robot,
            AssetRecord::Joystick(_) => AssetKind::Joystick,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AssetRecord::Field2d(config) => &config.name,
            AssetRecord::Field3d(config) => &config.name,
            AssetRecord::Robot(config) => &config.name,
            AssetRecord::Joystick(config) => &config.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_uses_folder_prefix() {
        assert_eq!(AssetKind::classify("Field2d_2024 Crescendo"), Some(AssetKind::Field2d));
        assert_eq!(AssetKind::classify("Field3d_Evergreen"), Some(AssetKind::Field3d));
        assert_eq!(AssetKind::classify("Robot_KitBot"), Some(AssetKind::Robot));
        assert_eq!(AssetKind::classify("Joystick_Xbox"), Some(AssetKind::Joystick));
        assert_eq!(AssetKind::classify("field2d_lowercase"), None);
        assert_eq!(AssetKind::classify("Robot"), None);
    }

    #[test]
    fn joystick_components_serialize_with_type_tag() {
        let button = JoystickComponent::Button(ButtonComponent {
            anchor: JoystickAnchor {
                is_yellow: true,
                center_px: [10.0, 20.0],
            },
            size_px: [4.0, 5.0],
            source_index: 3,
            source_pov: Some(Pov::Left),
            ..ButtonComponent::default()
        });
        let value = serde_json::to_value(&button).expect("serialize");
        assert_eq!(
            value,
            json!({
                "type": "button",
                "isYellow": true,
                "centerPx": [10.0, 20.0],
                "isEllipse": false,
                "sizePx": [4.0, 5.0],
                "sourceIndex": 3,
                "sourcePov": "left"
            })
        );
    }
}
