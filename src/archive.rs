//! Zip packaging of the build output directory.
//!
//! Any path containing the literal marker `DoNotShip` is excluded; Unity
//! writes debug-symbol payloads into `*_BurstDebugInformation_DoNotShip`
//! directories that must never reach players. Entries are stored relative to
//! the build output root with deflate compression.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ArchiveError, Result};

/// Marker substring excluding debug payloads from the shipped artifact
pub const DO_NOT_SHIP_MARKER: &str = "DoNotShip";

/// Zip the build output directory into a single archive.
///
/// In dry-run mode nothing on disk is touched: the files that would be
/// included are logged and any pre-existing archive at `zip_file` is left
/// byte-for-byte unchanged.
pub fn zip_build_output(dry_run: bool, dist_dir: &Path, zip_file: &Path) -> Result<()> {
    log::info!(
        "Zipping files from {} to {}",
        dist_dir.display(),
        zip_file.display()
    );

    if dry_run {
        // The directory may only have been "created" by the simulated setup.
        if !dist_dir.is_dir() {
            log::info!(
                "Dry run: build output directory {} does not exist yet",
                dist_dir.display()
            );
            return Ok(());
        }
        for (path, _) in shippable_files(dist_dir)? {
            log::info!("Dry run: would add file to zip: {}", path.display());
        }
        return Ok(());
    }

    let entries = shippable_files(dist_dir)?;

    let file = File::create(zip_file).map_err(|source| ArchiveError::Io {
        path: zip_file.to_path_buf(),
        source,
    })?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, name) in entries {
        writer.start_file(name, options).map_err(ArchiveError::Zip)?;
        let mut source = File::open(&path).map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;
        io::copy(&mut source, &mut writer).map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("Added file to zip: {}", path.display());
    }

    writer.finish().map_err(ArchiveError::Zip)?;
    Ok(())
}

/// Collect the files to ship: every regular file under `dist_dir` whose path
/// does not contain the `DoNotShip` marker, paired with its slash-separated
/// archive name relative to `dist_dir`.
fn shippable_files(dist_dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dist_dir).sort_by_file_name() {
        let entry = entry.map_err(|source| ArchiveError::Walk { source })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.to_string_lossy().contains(DO_NOT_SHIP_MARKER) {
            log::debug!("Skipping DoNotShip file: {}", path.display());
            continue;
        }

        let Ok(relative) = path.strip_prefix(dist_dir) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        files.push((path.to_path_buf(), name));
    }

    Ok(files)
}
