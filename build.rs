use std::env;
use std::path::{Path, PathBuf};

const HINT_VAR: &str = "FIELDASSETS_BUNDLED_HINT";
const BUNDLED_DIR_NAME: &str = "bundledAssets";

// Bakes a bundled-assets directory into the binaries: the explicit hint when
// it names a directory, else a `bundledAssets/` checked in next to Cargo.toml.
fn main() {
    println!("cargo:rerun-if-env-changed={HINT_VAR}");

    let bundled = match env::var_os(HINT_VAR).filter(|raw| !raw.is_empty()) {
        Some(raw) => {
            let hint = PathBuf::from(raw);
            if !hint.is_dir() {
                println!(
                    "cargo:warning={HINT_VAR}={} is not a directory; ignoring it",
                    hint.display()
                );
                return;
            }
            hint
        }
        None => match checkout_bundled_dir() {
            Some(dir) => dir,
            None => return,
        },
    };

    let canonical = bundled.canonicalize().unwrap_or(bundled);
    match canonical.to_str() {
        Some(path) => println!("cargo:rustc-env={HINT_VAR}={path}"),
        None => println!(
            "cargo:warning=bundled assets path {} is not valid UTF-8; ignoring it",
            canonical.display()
        ),
    }
}

fn checkout_bundled_dir() -> Option<PathBuf> {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")?;
    let dir = Path::new(&manifest_dir).join(BUNDLED_DIR_NAME);
    if dir.is_dir() {
        println!("cargo:rerun-if-changed={}", dir.display());
        Some(dir)
    } else {
        None
    }
}
