//! Directory scanning and the load driver.
//!
//! Roots are visited in the order given (highest priority first). Inside a root,
//! candidate folders are visited in descending name order so a later version
//! suffix (`Robot_KitBot_v2`) is seen before an earlier one.

use crate::admission;
use crate::collection::{AssetCollection, AssetCollector};
use crate::descriptor::{AssetKind, AssetRecord, Fields, build_record, read_descriptor};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const HIDDEN_PREFIX: char = '.';

/// One classified asset folder inside a source root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Bare folder name, e.g. `Robot_KitBot`.
    pub folder: String,
    pub kind: AssetKind,
    pub dir: PathBuf,
}

/// List the asset folders directly under `root`, in visiting order.
///
/// Hidden entries, non-directories (including symlinks), and names without a
/// known kind prefix are skipped silently.
pub fn list_candidates(root: &Path) -> Result<Vec<Candidate>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("listing asset root {}", root.display()))?;

    let mut folders: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false))
        .map(|entry| (folder_name(&entry.file_name()), entry.path()))
        .filter(|(name, _)| !name.starts_with(HIDDEN_PREFIX))
        .collect();
    folders.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(folders
        .into_iter()
        .filter_map(|(folder, dir)| {
            let kind = AssetKind::classify(&folder)?;
            Some(Candidate { folder, kind, dir })
        })
        .collect())
}

// Non-UTF-8 names are classified on their lossy form; `dir` keeps the real path.
fn folder_name(raw: &OsStr) -> String {
    match raw.to_str() {
        Some(name) => name.to_string(),
        None => {
            let lossy = raw.to_string_lossy().into_owned();
            debug!("asset folder name {lossy:?} is not valid UTF-8");
            lossy
        }
    }
}

/// Scan `roots` (highest priority first) and return the merged collection.
///
/// Never fails: unreadable roots are skipped with a warning and broken asset
/// folders end up in `load_failures`. Each call rescans from scratch.
pub fn load_assets<P: AsRef<Path>>(roots: &[P]) -> AssetCollection {
    let mut collector = AssetCollector::new();
    for root in roots {
        let root: &Path = root.as_ref();
        let candidates = match list_candidates(root) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!("skipping asset root: {err:#}");
                continue;
            }
        };
        for candidate in candidates {
            let ticket = collector.assume_failed(&candidate.folder);
            match load_candidate(&candidate) {
                Ok(record) => {
                    debug!(
                        "loaded {} '{}' from {}",
                        candidate.kind.as_str(),
                        record.name(),
                        candidate.dir.display()
                    );
                    collector.admit(ticket, record);
                }
                Err(err) => debug!("asset folder {} not loaded: {err:#}", candidate.dir.display()),
            }
        }
    }

    let assets = collector.finish();
    info!(
        "loaded {} field2d, {} field3d, {} robot, {} joystick asset(s); {} load failure(s)",
        assets.field2ds.len(),
        assets.field3ds.len(),
        assets.robots.len(),
        assets.joysticks.len(),
        assets.load_failures.len()
    );
    assets
}

/// Read, build, and admit one candidate.
pub fn load_candidate(candidate: &Candidate) -> Result<AssetRecord> {
    let descriptor = read_descriptor(&candidate.dir)?;
    let record = build_record(candidate.kind, Fields::new(&descriptor), &candidate.dir);
    admission::check(&record, &candidate.dir)?;
    Ok(record)
}
