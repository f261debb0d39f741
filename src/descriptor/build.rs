//! Per-kind record builders.
//!
//! Each builder starts from the record's defaults and overlays recognized
//! fields one at a time. Unknown keys are ignored.

use super::model::{
    AssetKind, AssetRecord, AxisComponent, ButtonComponent, Camera, Component, Config2d,
    Config3dField, Config3dRobot, ConfigJoystick, GamePiece, JoystickAnchor, JoystickComponent,
    StickComponent,
};
use super::overlay::{self as read, Fields};
use crate::paths::encode_path;
use crate::{IMAGE_FILE, MODEL_FILE};
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Build the record for a candidate folder of the given kind.
///
/// `dir` only feeds the encoded `path` field; existence is checked later by
/// the admission gate.
pub fn build_record(kind: AssetKind, fields: Fields<'_>, dir: &Path) -> AssetRecord {
    match kind {
        AssetKind::Field2d => {
            AssetRecord::Field2d(field2d(fields, encode_path(&dir.join(IMAGE_FILE))))
        }
        AssetKind::Field3d => {
            AssetRecord::Field3d(field3d(fields, encode_path(&dir.join(MODEL_FILE))))
        }
        AssetKind::Robot => AssetRecord::Robot(robot(fields, encode_path(&dir.join(MODEL_FILE)))),
        AssetKind::Joystick => {
            AssetRecord::Joystick(joystick(fields, encode_path(&dir.join(IMAGE_FILE))))
        }
    }
}

pub fn field2d(fields: Fields<'_>, path: String) -> Config2d {
    let mut config = Config2d {
        path,
        ..Config2d::default()
    };
    fields.overlay("name", &mut config.name, read::string);
    fields.overlay("sourceUrl", &mut config.source_url, |v| read::string(v).map(Some));
    fields.overlay("topLeft", &mut config.top_left, read::pair);
    fields.overlay("bottomRight", &mut config.bottom_right, read::pair);
    fields.overlay("widthInches", &mut config.width_inches, read::number);
    fields.overlay("heightInches", &mut config.height_inches, read::number);
    fields.overlay("defaultOrigin", &mut config.default_origin, read::default_origin);
    config
}

pub fn field3d(fields: Fields<'_>, path: String) -> Config3dField {
    let mut config = Config3dField {
        path,
        ..Config3dField::default()
    };
    fields.overlay("name", &mut config.name, read::string);
    fields.overlay("sourceUrl", &mut config.source_url, |v| read::string(v).map(Some));
    fields.overlay("rotations", &mut config.rotations, read::rotations);
    fields.overlay("widthInches", &mut config.width_inches, read::number);
    fields.overlay("heightInches", &mut config.height_inches, read::number);
    fields.overlay("defaultOrigin", &mut config.default_origin, read::default_origin);
    fields.overlay("driverStations", &mut config.driver_stations, |v| {
        read::driver_stations(v).map(Some)
    });
    fields.overlay("gamePieces", &mut config.game_pieces, |v| {
        read::records(v, game_piece)
    });
    config
}

// Non-object entries still occupy their index so `model_<i>.glb` lines up.
fn game_piece(value: &Value) -> GamePiece {
    let mut piece = GamePiece::default();
    let Some(fields) = Fields::of(value) else {
        return piece;
    };
    fields.overlay("name", &mut piece.name, read::string);
    fields.overlay("rotations", &mut piece.rotations, read::rotations);
    fields.overlay("position", &mut piece.position, read::triple);
    fields.overlay("stagedObjects", &mut piece.staged_objects, read::strings);
    piece
}

pub fn robot(fields: Fields<'_>, path: String) -> Config3dRobot {
    let mut config = Config3dRobot {
        path,
        ..Config3dRobot::default()
    };
    fields.overlay("name", &mut config.name, read::string);
    fields.overlay("sourceUrl", &mut config.source_url, |v| read::string(v).map(Some));
    fields.overlay("disableSimplification", &mut config.disable_simplification, read::boolean);
    fields.overlay("rotations", &mut config.rotations, read::rotations);
    fields.overlay("position", &mut config.position, read::triple);
    fields.overlay("cameras", &mut config.cameras, |v| read::records(v, camera));
    fields.overlay("components", &mut config.components, |v| {
        read::records(v, component)
    });
    config
}

fn camera(value: &Value) -> Camera {
    let mut camera = Camera::default();
    let Some(fields) = Fields::of(value) else {
        return camera;
    };
    fields.overlay("name", &mut camera.name, read::string);
    fields.overlay("rotations", &mut camera.rotations, read::rotations);
    fields.overlay("position", &mut camera.position, read::triple);
    fields.overlay("resolution", &mut camera.resolution, read::pair);
    fields.overlay("fov", &mut camera.fov, read::number);
    camera
}

fn component(value: &Value) -> Component {
    let mut component = Component::default();
    let Some(fields) = Fields::of(value) else {
        return component;
    };
    fields.overlay("zeroedRotations", &mut component.zeroed_rotations, read::rotations);
    fields.overlay("zeroedPosition", &mut component.zeroed_position, read::triple);
    component
}

pub fn joystick(fields: Fields<'_>, path: String) -> ConfigJoystick {
    let mut config = ConfigJoystick {
        path,
        ..ConfigJoystick::default()
    };
    fields.overlay("name", &mut config.name, read::string);
    fields.overlay("components", &mut config.components, |v| {
        read::filtered_records(v, joystick_component)
    });
    config
}

fn joystick_component(value: &Value) -> Option<JoystickComponent> {
    let fields = Fields::of(value)?;
    let mut anchor = JoystickAnchor::default();
    fields.overlay("isYellow", &mut anchor.is_yellow, read::boolean);
    fields.overlay("centerPx", &mut anchor.center_px, read::pair);

    let Some(kind) = fields.get("type").and_then(Value::as_str) else {
        debug!("dropping joystick component without a string 'type'");
        return None;
    };
    match kind {
        "button" => {
            let mut button = ButtonComponent {
                anchor,
                ..ButtonComponent::default()
            };
            fields.overlay("isEllipse", &mut button.is_ellipse, read::boolean);
            fields.overlay("sizePx", &mut button.size_px, read::pair);
            fields.overlay("sourceIndex", &mut button.source_index, read::index);
            fields.overlay("sourcePov", &mut button.source_pov, |v| read::pov(v).map(Some));
            Some(JoystickComponent::Button(button))
        }
        "joystick" => {
            let mut stick = StickComponent {
                anchor,
                ..StickComponent::default()
            };
            fields.overlay("radiusPx", &mut stick.radius_px, read::number);
            fields.overlay("xSourceIndex", &mut stick.x_source_index, read::index);
            fields.overlay("xSourceInverted", &mut stick.x_source_inverted, read::boolean);
            fields.overlay("ySourceIndex", &mut stick.y_source_index, read::index);
            fields.overlay("ySourceInverted", &mut stick.y_source_inverted, read::boolean);
            fields.overlay("buttonSourceIndex", &mut stick.button_source_index, |v| {
                read::index(v).map(Some)
            });
            Some(JoystickComponent::Joystick(stick))
        }
        "axis" => {
            let mut axis = AxisComponent {
                anchor,
                ..AxisComponent::default()
            };
            fields.overlay("sizePx", &mut axis.size_px, read::pair);
            fields.overlay("sourceIndex", &mut axis.source_index, read::index);
            fields.overlay("sourceRange", &mut axis.source_range, read::pair);
            Some(JoystickComponent::Axis(axis))
        }
        other => {
            debug!("dropping joystick component with unknown type '{other}'");
            None
        }
    }
}
