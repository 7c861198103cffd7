use std::fs;
use std::path::Path;

use crate::types::error::ScaffoldError;
use crate::types::manifest::FileManifest;

/// Replays a manifest under `root`: directories first, then files. The root
/// must not exist yet; when it does, nothing at all is written. Existing
/// files are never overwritten.
pub fn write_manifest(root: &Path, manifest: &FileManifest) -> Result<(), ScaffoldError> {
    if root.exists() {
        return Err(ScaffoldError::AlreadyExists(root.display().to_string()));
    }

    fs::create_dir_all(root).map_err(|e| {
        ScaffoldError::Io(format!(
            "Failed to create addon directory '{}': {}",
            root.display(),
            e
        ))
    })?;

    for dir in manifest.dirs() {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| {
            ScaffoldError::Io(format!("Failed to create directory '{}': {}", path.display(), e))
        })?;
    }

    for entry in manifest.files() {
        let path = root.join(&entry.path);
        if path.exists() {
            return Err(ScaffoldError::AlreadyExists(path.display().to_string()));
        }
        fs::write(&path, &entry.content).map_err(|e| {
            ScaffoldError::Io(format!("Failed to write '{}': {}", path.display(), e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> FileManifest {
        let mut manifest = FileManifest::new();
        manifest
            .add_file("includes/Plugin.php", "<?php\n".to_string())
            .unwrap();
        manifest.add_file("readme.txt", "readme\n".to_string()).unwrap();
        manifest
    }

    #[test]
    fn writes_dirs_then_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("wptravelengine-demo");

        write_manifest(&root, &sample_manifest()).unwrap();

        assert!(root.join("includes").is_dir());
        assert_eq!(
            fs::read_to_string(root.join("includes/Plugin.php")).unwrap(),
            "<?php\n"
        );
        assert_eq!(fs::read_to_string(root.join("readme.txt")).unwrap(), "readme\n");
    }

    #[test]
    fn existing_root_aborts_before_any_write() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("wptravelengine-demo");
        fs::create_dir_all(&root).unwrap();

        let err = write_manifest(&root, &sample_manifest()).unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
        assert!(fs::read_dir(&root).unwrap().next().is_none(), "root not empty");
    }
}
