//! Layered asset discovery for field, robot, and joystick descriptors.
//!
//! `load_assets` walks an ordered list of source roots, parses each
//! `<Kind>_<Title>/config.json` leniently, admits records whose files exist,
//! and returns one merged, sorted `AssetCollection`. Roots come from
//! `AssetRoots::resolve`, which layers the stored preference, env overrides,
//! and platform defaults.

pub mod admission;
pub mod collection;
pub mod descriptor;
pub mod ordering;
pub mod paths;
pub mod scanner;

pub use collection::{AssetCollection, AssetCollector, FailureTicket};
pub use descriptor::{
    AssetKind, AssetRecord, Axis, AxisComponent, ButtonComponent, Camera, Component, Config2d,
    Config3dField, Config3dRobot, ConfigJoystick, DefaultOrigin, GamePiece, JoystickAnchor,
    JoystickComponent, Pov, Rotation, StickComponent,
};
pub use paths::{AssetRoots, encode_path, encode_path_with, resolve_user_assets_dir};
pub use scanner::{Candidate, list_candidates, load_assets};

/// Descriptor file expected in every asset folder.
pub const DESCRIPTOR_FILE: &str = "config.json";
/// Image for 2D fields and joystick overlays.
pub const IMAGE_FILE: &str = "image.png";
/// Primary model for 3D fields and robots; auxiliaries are `model_<i>.glb`.
pub const MODEL_FILE: &str = "model.glb";
