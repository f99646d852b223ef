use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use testit_core::{
    CONFIG_FILE_NAMES, Configuration, FileMetadata, KotlinTypeClassifier, Mocker, SkippedEntry,
    scaffold::{FileScaffold, generate_file_scaffold},
};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scaffolds generated from one metadata file
#[derive(Debug, Serialize)]
pub struct ScaffoldReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub scaffold: FileScaffold,
    /// Classes and functions left out because their metadata did not load
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}

pub fn scaffold_command(path: &str, mocker: Option<Mocker>, config_path: Option<&str>) -> Result<()> {
    let path = Path::new(path);
    if !path.exists() {
        bail!("Path not found: {}", path.display());
    }

    let mut config = load_config(path, config_path)?;
    if let Some(mocker) = mocker {
        config.mocker = mocker;
    }
    debug!("Using {} with {:?}", config.mocker, config);

    let files = collect_metadata_files(path);
    if files.is_empty() {
        bail!("No metadata files found in {}", path.display());
    }

    let mut reports = Vec::new();
    let mut failures = 0;
    for file in &files {
        match scaffold_file(&config, file) {
            Ok(report) => {
                for entry in &report.skipped {
                    eprintln!("⚠️  {}: skipped {}: {}", file.display(), entry.entry, entry.reason);
                }
                reports.push(report);
            }
            Err(e) => {
                // One broken file does not stop the others.
                warn!("Skipping {}: {:#}", file.display(), e);
                eprintln!("❌ {}: {:#}", file.display(), e);
                failures += 1;
            }
        }
    }

    if reports.is_empty() {
        bail!("All {failures} metadata file(s) failed");
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

/// Scaffold one metadata file. Classes and functions whose signatures do not parse
/// are reported in `skipped`; the rest of the file is still generated.
pub fn scaffold_file(config: &Configuration, file: &Path) -> Result<ScaffoldReport> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let loaded = FileMetadata::load_lenient(&contents)
        .with_context(|| format!("Invalid metadata in {}", file.display()))?;

    Ok(ScaffoldReport {
        path: file.to_path_buf(),
        scaffold: generate_file_scaffold(config, &KotlinTypeClassifier, &loaded.metadata),
        skipped: loaded.skipped,
    })
}

fn load_config(path: &Path, explicit: Option<&str>) -> Result<Configuration> {
    if let Some(explicit) = explicit {
        return Configuration::load_from_file(Path::new(explicit))
            .with_context(|| format!("Failed to load config from {explicit}"));
    }

    let start = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(path)
    };
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    Ok(Configuration::discover(&start)?)
}

/// The file itself, or every `*.json` below a directory except config files
pub fn collect_metadata_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|file| file.extension().is_some_and(|ext| ext == "json"))
        .filter(|file| {
            file.file_name()
                .and_then(|name| name.to_str())
                .is_none_or(|name| !CONFIG_FILE_NAMES.contains(&name))
        })
        .collect();
    files.sort();
    files
}
