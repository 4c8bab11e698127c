use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tc_library::config::ScanConfig;
use tc_library::library::{scan_default_repository, scan_repository_with_config};
use tc_library::{Library, LibraryReference, PathRegistry, find_latest};

#[derive(Parser)]
#[command(name = "tc-library")]
#[command(version, about = "Inspect TwinCAT PLC libraries and library repositories")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with scan settings (repositoryPath, followLinks)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every library installed in the repository
    Scan {
        /// Repository root (defaults to the Managed Libraries folder)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the newest installed library matching a reference
    Latest {
        /// Reference such as "Tc2_Standard, * (Beckhoff Automation GmbH)"
        reference: String,

        /// Repository root (defaults to the Managed Libraries folder)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Read a single .plcproj file or repository folder
    Show {
        path: PathBuf,
    },
}

#[derive(Serialize)]
struct LibraryEntry<'a> {
    reference: &'a LibraryReference,
    path: &'a Path,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, root: Option<PathBuf>) -> anyhow::Result<ScanConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ScanConfig::default(),
    };
    if let Some(root) = root {
        config.repository_path = root;
    }
    Ok(config)
}

/// Scan the repository named by `--root`/`--config`, or the default one
fn scan(
    config: Option<&Path>,
    root: Option<PathBuf>,
    registry: &PathRegistry,
) -> anyhow::Result<Vec<Library>> {
    if config.is_none() && root.is_none() {
        return Ok(scan_default_repository(registry)?);
    }
    let config = load_config(config, root)?;
    Ok(scan_repository_with_config(&config, registry)?)
}

fn run(cli: Cli, registry: &PathRegistry, out: &mut impl Write) -> anyhow::Result<()> {
    match cli.command {
        Command::Scan { root, json } => {
            let libraries = scan(cli.config.as_deref(), root, registry)?;

            if json {
                let entries: Vec<LibraryEntry> = libraries
                    .iter()
                    .map(|library| LibraryEntry {
                        reference: library.reference(),
                        path: library.path(),
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else {
                for library in &libraries {
                    writeln!(out, "{}\t{}", library, library.path().display())?;
                }
            }
        }
        Command::Latest { reference, root } => {
            let wanted: LibraryReference = reference.parse()?;
            let libraries = scan(cli.config.as_deref(), root, registry)?;

            let Some(latest) = find_latest(&libraries, &wanted) else {
                bail!("no installed library matches \"{wanted}\"");
            };
            writeln!(out, "{}\t{}", latest, latest.path().display())?;
        }
        Command::Show { path } => {
            let library = Library::open(&path, registry)?;
            writeln!(out, "{}\t{}", library, library.path().display())?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = PathRegistry::new();
    run(cli, &registry, &mut std::io::stdout().lock())
}
