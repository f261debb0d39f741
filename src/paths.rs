//! Source-root resolution and URI-safe path encoding.
//!
//! Roots are scanned highest priority first: the user directory (explicit
//! preference, then env, then the data-dir default), the auto-managed
//! directory, and the bundled read-only directory. Env overrides mirror the
//! preference so installed binaries can be pointed elsewhere without a rebuild.

use anyhow::{Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::env;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

pub const ENV_USER_ASSETS: &str = "FIELDASSETS_USER_DIR";
pub const ENV_AUTO_ASSETS: &str = "FIELDASSETS_AUTO_DIR";
pub const ENV_BUNDLED_ASSETS: &str = "FIELDASSETS_BUNDLED_DIR";
pub const ENV_DATA_DIR: &str = "FIELDASSETS_DATA_DIR";

const APP_DIR_NAME: &str = "fieldassets";
const USER_ASSETS_DIR_NAME: &str = "userAssets";
const AUTO_ASSETS_DIR_NAME: &str = "autoAssets";
const BUNDLED_ASSETS_DIR_NAME: &str = "bundledAssets";

// encodeURIComponent leaves these unescaped; everything else non-alphanumeric
// is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The three source roots, in the order they are scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRoots {
    pub user: PathBuf,
    pub auto: PathBuf,
    pub bundled: PathBuf,
}

impl AssetRoots {
    pub fn new(user: impl Into<PathBuf>, auto: impl Into<PathBuf>, bundled: impl Into<PathBuf>) -> Self {
        Self {
            user: user.into(),
            auto: auto.into(),
            bundled: bundled.into(),
        }
    }

    /// Resolve all roots from the stored user preference and the environment.
    ///
    /// Fails only when no data directory can be determined for the user and
    /// auto roots.
    pub fn resolve(preference: Option<&Path>) -> Result<Self> {
        resolve_from(preference, &env_path, dirs::data_dir(), exe_dir())
    }

    /// Roots in descending priority: user, auto, bundled.
    pub fn ordered(&self) -> Vec<PathBuf> {
        vec![self.user.clone(), self.auto.clone(), self.bundled.clone()]
    }
}

/// The user asset directory: the stored preference when set, else `default`.
pub fn resolve_user_assets_dir(preference: Option<&Path>, default: &Path) -> PathBuf {
    match preference {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => default.to_path_buf(),
    }
}

fn resolve_from(
    preference: Option<&Path>,
    lookup: &dyn Fn(&str) -> Option<PathBuf>,
    platform_data_dir: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
) -> Result<AssetRoots> {
    let data_dir = match lookup(ENV_DATA_DIR) {
        Some(dir) => dir,
        None => match platform_data_dir {
            Some(dir) => dir.join(APP_DIR_NAME),
            None => bail!(
                "Unable to determine a data directory for assets. Set {ENV_DATA_DIR} or {ENV_USER_ASSETS}/{ENV_AUTO_ASSETS}."
            ),
        },
    };

    let user_default = lookup(ENV_USER_ASSETS)
        .unwrap_or_else(|| data_dir.join(USER_ASSETS_DIR_NAME));
    let user = resolve_user_assets_dir(preference, &user_default);

    let auto = lookup(ENV_AUTO_ASSETS)
        .unwrap_or_else(|| data_dir.join(AUTO_ASSETS_DIR_NAME));

    let bundled = lookup(ENV_BUNDLED_ASSETS)
        .or_else(bundled_hint)
        .unwrap_or_else(|| {
            exe_dir
                .unwrap_or_else(|| PathBuf::from("."))
                .join(BUNDLED_ASSETS_DIR_NAME)
        });

    Ok(AssetRoots { user, auto, bundled })
}

fn bundled_hint() -> Option<PathBuf> {
    option_env!("FIELDASSETS_BUNDLED_HINT")
        .filter(|hint| !hint.is_empty())
        .map(PathBuf::from)
}

fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

// Paths are taken byte-for-byte; an empty value counts as unset.
fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Encode a filesystem path so it can be embedded in a URI path.
///
/// Segments are escaped one by one and re-joined with the platform separator,
/// so `C:` on Windows keeps its colon.
pub fn encode_path(path: &Path) -> String {
    encode_path_with(&path.to_string_lossy(), MAIN_SEPARATOR, cfg!(windows))
}

/// Platform-independent core of [`encode_path`].
pub fn encode_path_with(raw: &str, separator: char, drive_letters: bool) -> String {
    raw.split(separator)
        .enumerate()
        .map(|(idx, segment)| {
            if drive_letters && idx == 0 && is_drive_segment(segment) {
                segment.to_string()
            } else {
                utf8_percent_encode(segment, URI_COMPONENT).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

fn is_drive_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> Box<dyn Fn(&str) -> Option<PathBuf>> {
        let map: BTreeMap<String, PathBuf> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), PathBuf::from(v)))
            .collect();
        Box::new(move |key: &str| map.get(key).cloned())
    }

    #[test]
    fn encodes_space_and_hash_per_segment() {
        let encoded = encode_path_with("/home/me/My Assets/Field2d_#1/image.png", '/', false);
        assert_eq!(encoded, "/home/me/My%20Assets/Field2d_%231/image.png");

        let decoded: Vec<String> = encoded
            .split('/')
            .map(|seg| percent_decode_str(seg).decode_utf8_lossy().into_owned())
            .collect();
        assert_eq!(decoded.join("/"), "/home/me/My Assets/Field2d_#1/image.png");
    }

    #[test]
    fn keeps_drive_letter_on_volume_paths() {
        let encoded = encode_path_with(r"C:\Users\a b\model.glb", '\\', true);
        assert_eq!(encoded, r"C:\Users\a%20b\model.glb");

        let without_drive_rule = encode_path_with(r"C:\x", '\\', false);
        assert_eq!(without_drive_rule, r"C%3A\x");
    }

    #[test]
    fn leaves_uri_component_marks_alone() {
        assert_eq!(
            encode_path_with("a-b_c.d!e~f*g'h(i)%", '/', false),
            "a-b_c.d!e~f*g'h(i)%25"
        );
    }

    #[test]
    fn preference_wins_over_default_unless_empty() {
        let default = Path::new("/data/userAssets");
        assert_eq!(
            resolve_user_assets_dir(Some(Path::new("/custom")), default),
            PathBuf::from("/custom")
        );
        assert_eq!(
            resolve_user_assets_dir(Some(Path::new("")), default),
            PathBuf::from("/data/userAssets")
        );
        assert_eq!(resolve_user_assets_dir(None, default), default.to_path_buf());
    }

    #[test]
    fn roots_default_under_data_dir() {
        let roots = resolve_from(
            None,
            &lookup_from(&[(ENV_BUNDLED_ASSETS, "/opt/bundled")]),
            Some(PathBuf::from("/data")),
            None,
        )
        .expect("roots resolve");
        assert_eq!(roots.user, PathBuf::from("/data/fieldassets/userAssets"));
        assert_eq!(roots.auto, PathBuf::from("/data/fieldassets/autoAssets"));
        assert_eq!(roots.bundled, PathBuf::from("/opt/bundled"));
        assert_eq!(
            roots.ordered(),
            vec![
                PathBuf::from("/data/fieldassets/userAssets"),
                PathBuf::from("/data/fieldassets/autoAssets"),
                PathBuf::from("/opt/bundled"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn env_paths_keep_non_utf8_bytes_and_ignore_empty_values() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/srv/\xffassets");
        // SAFETY: these variable names are used by this test only.
        unsafe {
            env::set_var("FIELDASSETS_TEST_RAW_DIR", raw);
            env::set_var("FIELDASSETS_TEST_EMPTY_DIR", "");
        }
        assert_eq!(env_path("FIELDASSETS_TEST_RAW_DIR"), Some(PathBuf::from(raw)));
        assert_eq!(env_path("FIELDASSETS_TEST_EMPTY_DIR"), None);
        assert_eq!(env_path("FIELDASSETS_TEST_UNSET_DIR"), None);
    }

    #[test]
    fn env_overrides_and_preference_layering() {
        let lookup = lookup_from(&[
            (ENV_USER_ASSETS, "/env/user"),
            (ENV_AUTO_ASSETS, "/env/auto"),
            (ENV_BUNDLED_ASSETS, "/env/bundled"),
        ]);
        let from_env = resolve_from(None, &lookup, None, None).err();
        assert!(from_env.is_some(), "no data dir and no ENV_DATA_DIR should fail");

        let lookup = lookup_from(&[
            (ENV_DATA_DIR, "/state"),
            (ENV_USER_ASSETS, "/env/user"),
            (ENV_BUNDLED_ASSETS, "/env/bundled"),
        ]);
        let roots = resolve_from(None, &lookup, None, None).expect("roots resolve");
        assert_eq!(roots.user, PathBuf::from("/env/user"));
        assert_eq!(roots.auto, PathBuf::from("/state/autoAssets"));

        let roots = resolve_from(Some(Path::new("/pref")), &lookup, None, None)
            .expect("roots resolve");
        assert_eq!(roots.user, PathBuf::from("/pref"));
    }
}
