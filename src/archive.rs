//! Zip creation and multi-format unpacking for the `compress` and `extract`
//! commands.
//!
//! Everything here is synchronous; the shell runs one command at a time so
//! the calls simply block until the archive is written or unpacked.

use anyhow::{Context, Result, anyhow, bail};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use walkdir::WalkDir;
use xz2::read::XzDecoder;
use zip_next::write::SimpleFileOptions;
use zip_next::{CompressionMethod, ZipArchive, ZipWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    TarBz2,
    TarXz,
}

impl ArchiveFormat {
    /// Infers the format from the file name, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();

        if name.ends_with(".zip") {
            Some(Self::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") || name.ends_with(".tbz")
        {
            Some(Self::TarBz2)
        } else if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            Some(Self::TarXz)
        } else if name.ends_with(".tar") {
            Some(Self::Tar)
        } else {
            None
        }
    }
}

/// Writes every file and directory below `source` into a deflated zip at
/// `destination`. Entry names are relative to `source`. Returns the number of
/// entries written.
pub fn create_zip(source: &Path, destination: &Path) -> Result<usize> {
    if !source.is_dir() {
        bail!("'{}' is not a directory", source.display());
    }

    let file = File::create(destination)
        .with_context(|| format!("Failed to create '{}'", destination.display()))?;
    // the archive may live inside the tree being compressed
    let own_path = destination.canonicalize().ok();

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut written = 0;

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk '{}'", source.display()))?;
        let relative = entry.path().strip_prefix(source)?;
        let name = entry_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), options)
                .with_context(|| format!("Failed to add directory '{}'", name))?;
        } else if entry.file_type().is_file() {
            if own_path.is_some() && entry.path().canonicalize().ok() == own_path {
                continue;
            }

            zip.start_file(name.clone(), options)
                .with_context(|| format!("Failed to add file '{}'", name))?;
            let mut input = File::open(entry.path())
                .with_context(|| format!("Failed to open '{}'", entry.path().display()))?;
            io::copy(&mut input, &mut zip)
                .with_context(|| format!("Failed to compress '{}'", entry.path().display()))?;
        } else {
            continue;
        }

        written += 1;
    }

    zip.finish()
        .with_context(|| format!("Failed to finish '{}'", destination.display()))?;

    Ok(written)
}

/// Unpacks `archive` into `destination`, choosing the decoder from the
/// archive's extension.
pub fn unpack(archive: &Path, destination: &Path) -> Result<()> {
    let format = ArchiveFormat::from_path(archive)
        .ok_or_else(|| anyhow!("Unknown archive format '{}'", archive.display()))?;

    let file =
        File::open(archive).with_context(|| format!("Failed to open '{}'", archive.display()))?;

    let unpacked = match format {
        ArchiveFormat::Zip => unpack_zip(file, destination),
        ArchiveFormat::Tar => unpack_tar(file, destination),
        ArchiveFormat::TarGz => unpack_tar(GzDecoder::new(file), destination),
        ArchiveFormat::TarBz2 => unpack_tar(BzDecoder::new(file), destination),
        ArchiveFormat::TarXz => unpack_tar(XzDecoder::new(file), destination),
    };
    unpacked.with_context(|| format!("Failed to unpack '{}'", archive.display()))
}

fn unpack_tar<R: Read>(reader: R, destination: &Path) -> Result<()> {
    tar::Archive::new(reader).unpack(destination)?;
    Ok(())
}

fn unpack_zip(file: File, destination: &Path) -> Result<()> {
    let mut zip = ZipArchive::new(file)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let relative = entry
            .enclosed_name()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| anyhow!("entry '{}' points outside the destination", entry.name()))?;
        let out_path = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("Failed to create '{}'", out_path.display()))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        let mut output = File::create(&out_path)
            .with_context(|| format!("Failed to create '{}'", out_path.display()))?;
        io::copy(&mut entry, &mut output)
            .with_context(|| format!("Failed to extract '{}'", out_path.display()))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

/// Zip entry names always use `/`, whatever the host separator.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
