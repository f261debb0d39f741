//! Scan asset roots and print the validated collection.
//!
//! Usage:
//!   asset-scan
//!   asset-scan --user-dir ~/frc/assets --format summary
//!   asset-scan --root ./userAssets --root ./bundledAssets --strict
//!
//! Without `--root`, the user/auto/bundled roots come from flags, then the
//! `FIELDASSETS_*` environment variables, then platform defaults.

use anyhow::{Context, Result, bail};
use clap::Parser;
use fieldassets::{AssetCollection, AssetRoots, load_assets};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asset-scan")]
#[command(about = "Load field, robot, and joystick assets from the source roots")]
struct Cli {
    /// User asset directory; takes the place of the stored preference.
    #[arg(long)]
    user_dir: Option<PathBuf>,
    /// Auto-managed asset directory.
    #[arg(long)]
    auto_dir: Option<PathBuf>,
    /// Bundled read-only asset directory.
    #[arg(long)]
    bundled_dir: Option<PathBuf>,
    /// Explicit source roots, highest priority first. Replaces the default three.
    #[arg(long = "root")]
    roots: Vec<PathBuf>,
    /// Output format: json or summary.
    #[arg(long, value_parser = ["json", "summary"], default_value = "json")]
    format: String,
    /// Exit non-zero when any asset folder failed to load.
    #[arg(long)]
    strict: bool,
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let roots = resolve_roots(&cli)?;
    let assets = load_assets(&roots);

    match cli.format.as_str() {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&assets).context("serializing asset collection")?
        ),
        "summary" => print_summary(&roots, &assets),
        other => bail!("unknown format '{}'", other),
    }

    if cli.strict && !assets.load_failures.is_empty() {
        bail!(
            "{} asset folder(s) failed to load:\n{}",
            assets.load_failures.len(),
            assets.load_failures.join("\n")
        );
    }
    Ok(())
}

fn resolve_roots(cli: &Cli) -> Result<Vec<PathBuf>> {
    if !cli.roots.is_empty() {
        return Ok(cli.roots.clone());
    }
    let mut roots =
        AssetRoots::resolve(cli.user_dir.as_deref()).context("resolving asset roots")?;
    if let Some(auto) = &cli.auto_dir {
        roots.auto = auto.clone();
    }
    if let Some(bundled) = &cli.bundled_dir {
        roots.bundled = bundled.clone();
    }
    Ok(roots.ordered())
}

fn print_summary(roots: &[PathBuf], assets: &AssetCollection) {
    println!("roots:");
    for root in roots {
        println!("  {}", root.display());
    }
    print_names("field2d", assets.field2ds.iter().map(|c| c.name.as_str()));
    print_names("field3d", assets.field3ds.iter().map(|c| c.name.as_str()));
    print_names("robot", assets.robots.iter().map(|c| c.name.as_str()));
    print_names("joystick", assets.joysticks.iter().map(|c| c.name.as_str()));
    print_names("failed", assets.load_failures.iter().map(String::as_str));
}

fn print_names<'a>(label: &str, names: impl Iterator<Item = &'a str>) {
    let names: Vec<&str> = names.collect();
    println!("{label} ({}):", names.len());
    for name in names {
        println!("  {name}");
    }
}
