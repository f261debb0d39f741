#![allow(dead_code)]

// Builds throwaway source roots populated with asset folders.

use anyhow::{Context, Result};
use fieldassets::{DESCRIPTOR_FILE, IMAGE_FILE, MODEL_FILE};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct AssetTree {
    temp: TempDir,
}

impl AssetTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new().context("creating temp asset tree")?,
        })
    }

    /// Source root `name`, created on first use.
    pub fn root(&self, name: &str) -> PathBuf {
        let root = self.temp.path().join(name);
        fs::create_dir_all(&root).expect("failed to create asset root");
        root
    }

    /// Asset folder with a `config.json` and the listed (empty) binary files.
    pub fn folder(&self, root: &str, folder: &str, config: &Value, files: &[&str]) -> Result<PathBuf> {
        let dir = self.root(root).join(folder);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        fs::write(dir.join(DESCRIPTOR_FILE), serde_json::to_vec_pretty(config)?)
            .with_context(|| format!("writing descriptor in {}", dir.display()))?;
        for file in files {
            touch(&dir.join(file))?;
        }
        Ok(dir)
    }

    /// Asset folder whose `config.json` holds `raw` verbatim.
    pub fn raw_folder(&self, root: &str, folder: &str, raw: &str, files: &[&str]) -> Result<PathBuf> {
        let dir = self.root(root).join(folder);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(DESCRIPTOR_FILE), raw)?;
        for file in files {
            touch(&dir.join(file))?;
        }
        Ok(dir)
    }

    pub fn field2d(&self, root: &str, folder: &str, name: &str) -> Result<PathBuf> {
        self.folder(root, folder, &field2d_config(name), &[IMAGE_FILE])
    }

    pub fn robot(&self, root: &str, folder: &str, name: &str, components: usize) -> Result<PathBuf> {
        let config = json!({
            "name": name,
            "components": vec![json!({}); components],
        });
        let files = model_files(components);
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        self.folder(root, folder, &config, &refs)
    }

    pub fn field3d(&self, root: &str, folder: &str, name: &str, pieces: usize) -> Result<PathBuf> {
        let config = json!({
            "name": name,
            "widthInches": 651.25,
            "heightInches": 323.25,
            "gamePieces": vec![json!({"name": "piece"}); pieces],
        });
        let files = model_files(pieces);
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        self.folder(root, folder, &config, &refs)
    }

    pub fn joystick(&self, root: &str, folder: &str, config: &Value) -> Result<PathBuf> {
        self.folder(root, folder, config, &[IMAGE_FILE])
    }
}

pub fn field2d_config(name: &str) -> Value {
    json!({
        "name": name,
        "topLeft": [0, 0],
        "bottomRight": [3000, 1500],
        "widthInches": 651.25,
        "heightInches": 323.25
    })
}

pub fn model_files(auxiliary: usize) -> Vec<String> {
    let mut files = vec![MODEL_FILE.to_string()];
    files.extend((0..auxiliary).map(|idx| format!("model_{idx}.glb")));
    files
}

pub fn touch(path: &Path) -> Result<()> {
    fs::write(path, b"").with_context(|| format!("writing {}", path.display()))
}
