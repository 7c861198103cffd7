use crate::types::error::ScaffoldError;

/// One file to generate, addressed relative to the addon root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
    pub content: String,
}

/// The complete set of directories and files for one scaffold run.
///
/// Directories are listed in creation order and every ancestor of a file
/// path is registered before the file itself, so a writer can replay the
/// manifest top to bottom without sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileManifest {
    dirs: Vec<String>,
    files: Vec<ManifestEntry>,
}

impl FileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: &str) {
        let normalized = path.trim_matches('/');
        if normalized.is_empty() {
            return;
        }
        if let Some(split) = normalized.rfind('/') {
            self.add_dir(&normalized[..split]);
        }
        if !self.dirs.iter().any(|d| d == normalized) {
            self.dirs.push(normalized.to_string());
        }
    }

    pub fn add_file(&mut self, path: &str, content: String) -> Result<(), ScaffoldError> {
        if self.files.iter().any(|entry| entry.path == path) {
            return Err(ScaffoldError::DuplicatePath(path.to_string()));
        }
        if let Some(split) = path.rfind('/') {
            self.add_dir(&path[..split]);
        }
        self.files.push(ManifestEntry {
            path: path.to_string(),
            content,
        });
        Ok(())
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn files(&self) -> &[ManifestEntry] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&ManifestEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.file(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_registers_ancestor_dirs() {
        let mut manifest = FileManifest::new();
        manifest
            .add_file("includes/Builders/API.php", "x".to_string())
            .unwrap();

        assert_eq!(manifest.dirs(), &["includes", "includes/Builders"]);
    }

    #[test]
    fn parents_come_before_children() {
        let mut manifest = FileManifest::new();
        manifest.add_dir("src/admin/js");

        assert_eq!(manifest.dirs(), &["src", "src/admin", "src/admin/js"]);
    }

    #[test]
    fn duplicate_dirs_collapse() {
        let mut manifest = FileManifest::new();
        manifest.add_dir("includes");
        manifest.add_file("includes/Plugin.php", "x".to_string()).unwrap();

        assert_eq!(manifest.dirs(), &["includes"]);
    }

    #[test]
    fn duplicate_file_path_is_rejected() {
        let mut manifest = FileManifest::new();
        manifest.add_file("readme.txt", "a".to_string()).unwrap();
        let err = manifest.add_file("readme.txt", "b".to_string()).unwrap_err();

        assert_eq!(err, ScaffoldError::DuplicatePath("readme.txt".to_string()));
        assert_eq!(manifest.files().len(), 1);
    }

    #[test]
    fn root_level_file_needs_no_dir() {
        let mut manifest = FileManifest::new();
        manifest.add_file("composer.json", "{}".to_string()).unwrap();

        assert!(manifest.dirs().is_empty());
        assert!(manifest.contains("composer.json"));
    }
}
