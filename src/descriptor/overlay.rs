//! "Apply if present and well-typed" overlay over an all-defaults record.
//!
//! Every reader returns `None` for a value of the wrong shape; `Fields::overlay`
//! then leaves the destination untouched. Nothing in here rejects a record.

use super::model::{Axis, DefaultOrigin, Pov, Rotation};
use log::debug;
use serde_json::{Map, Value};

/// Borrowed view of one JSON object from a descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// View `value` as fields; `None` when it is not a JSON object.
    pub fn of(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Overwrite `slot` when `key` is present and `read` accepts its value.
    pub fn overlay<T>(&self, key: &str, slot: &mut T, read: impl FnOnce(&'a Value) -> Option<T>) {
        if let Some(value) = self.map.get(key).and_then(read) {
            *slot = value;
        }
    }
}

pub fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

pub fn number(value: &Value) -> Option<f64> {
    value.as_f64()
}

pub fn boolean(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// Integral JSON number (`3` or `3.0`); fractional values are rejected.
pub fn index(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    let float = value.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        debug!("ignoring non-integral index {float}");
        None
    }
}

/// Fixed-arity numeric tuple such as `[x, y]` or `[x, y, z]`.
pub fn tuple<const N: usize>(value: &Value) -> Option<[f64; N]> {
    let items = value.as_array()?;
    if items.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_f64()?;
    }
    Some(out)
}

pub fn pair(value: &Value) -> Option<[f64; 2]> {
    tuple::<2>(value)
}

pub fn triple(value: &Value) -> Option<[f64; 3]> {
    tuple::<3>(value)
}

pub fn rotation(value: &Value) -> Option<Rotation> {
    let fields = Fields::of(value)?;
    let axis = match fields.get("axis")?.as_str()? {
        "x" => Axis::X,
        "y" => Axis::Y,
        "z" => Axis::Z,
        _ => return None,
    };
    let degrees = fields.get("degrees")?.as_f64()?;
    Some(Rotation { axis, degrees })
}

/// Rotation list; a single malformed entry discards the whole list.
pub fn rotations(value: &Value) -> Option<Vec<Rotation>> {
    value.as_array()?.iter().map(rotation).collect()
}

pub fn strings(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(string).collect()
}

pub fn default_origin(value: &Value) -> Option<DefaultOrigin> {
    match value.as_str()? {
        "auto" => Some(DefaultOrigin::Auto),
        "red" => Some(DefaultOrigin::Red),
        "blue" => Some(DefaultOrigin::Blue),
        _ => None,
    }
}

pub fn pov(value: &Value) -> Option<Pov> {
    match value.as_str()? {
        "up" => Some(Pov::Up),
        "right" => Some(Pov::Right),
        "down" => Some(Pov::Down),
        "left" => Some(Pov::Left),
        _ => None,
    }
}

/// Exactly six `[x, y]` driver-station positions.
pub fn driver_stations(value: &Value) -> Option<[[f64; 2]; 6]> {
    let items = value.as_array()?;
    if items.len() != 6 {
        return None;
    }
    let mut out = [[0.0; 2]; 6];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = pair(item)?;
    }
    Some(out)
}

/// One entry per array element, each built independently.
pub fn records<T>(value: &Value, build: impl Fn(&Value) -> T) -> Option<Vec<T>> {
    value.as_array().map(|items| items.iter().map(build).collect())
}

/// Like [`records`], but elements the builder declines are dropped.
pub fn filtered_records<T>(value: &Value, build: impl Fn(&Value) -> Option<T>) -> Option<Vec<T>> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(build).collect())
}
