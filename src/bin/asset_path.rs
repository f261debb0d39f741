//! Print the URI-safe encoding of filesystem paths, one per line.
//!
//! Matches the `path` field stored in loaded asset records, so scripts can
//! compute the same reference for a file they place on disk.

use fieldassets::encode_path;
use std::env;
use std::path::PathBuf;

fn main() {
    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        usage_and_exit();
    }
    if paths
        .iter()
        .any(|p| matches!(p.to_str(), Some("-h") | Some("--help")))
    {
        usage_and_exit();
    }
    for path in paths {
        println!("{}", encode_path(&path));
    }
}

fn usage_and_exit() -> ! {
    eprintln!("Usage: asset-path PATH...");
    std::process::exit(1);
}
