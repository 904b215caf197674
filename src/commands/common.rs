use anyhow::{Context, Result};
use std::fs::{File, FileTimes};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Target path for copy/move: an existing directory receives the source under
/// its own file name, anything else is used as given.
pub async fn destination_for(source: &Path, destination: &Path) -> PathBuf {
    let is_dir = fs::metadata(destination)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    match source.file_name() {
        Some(name) if is_dir => destination.join(name),
        _ => destination.to_path_buf(),
    }
}

/// Copies `source` to `target` with its permission bits and its access and
/// modification times.
pub async fn copy_with_metadata(source: &Path, target: &Path) -> Result<()> {
    // fs::copy carries the permission bits over
    fs::copy(source, target).await.with_context(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            source.display(),
            target.display()
        )
    })?;

    let metadata = fs::metadata(source)
        .await
        .with_context(|| format!("Failed to read metadata of '{}'", source.display()))?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);

    // A read-only copy can't be opened for writing; timestamps only need
    // ownership on unix.
    let file = File::options()
        .write(true)
        .open(target)
        .or_else(|_| File::open(target))
        .with_context(|| format!("Failed to open '{}'", target.display()))?;
    file.set_times(times)
        .with_context(|| format!("Failed to set timestamps on '{}'", target.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_directory_destination_keeps_source_name() {
        let temp_dir = tempdir().unwrap();
        let target_dir = temp_dir.path().join("out");
        std::fs::create_dir(&target_dir).unwrap();

        let resolved = destination_for(&temp_dir.path().join("a.txt"), &target_dir).await;
        assert_eq!(resolved, target_dir.join("a.txt"));
    }

    #[tokio::test]
    async fn test_file_destination_used_as_is() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("b.txt");

        let resolved = destination_for(&temp_dir.path().join("a.txt"), &target).await;
        assert_eq!(resolved, target);
    }

    #[tokio::test]
    async fn test_copy_with_metadata_keeps_times() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("old.txt");
        std::fs::write(&source, "aged").unwrap();
        let past = SystemTime::now() - Duration::from_secs(3 * 86_400);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_times(FileTimes::new().set_accessed(past).set_modified(past))
            .unwrap();

        let target = temp_dir.path().join("new.txt");
        copy_with_metadata(&source, &target).await.unwrap();

        let copied = std::fs::metadata(&target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "aged");
        assert_eq!(copied.modified().unwrap(), past);
    }

    #[tokio::test]
    async fn test_copy_with_metadata_missing_source_fails() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("never.txt");

        let err = copy_with_metadata(&temp_dir.path().join("ghost.txt"), &target)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to copy"));
        assert!(!target.exists());
    }
}
