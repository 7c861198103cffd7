use std::path::{Path, PathBuf};

use crate::naming;
use crate::template::assemble::assemble;
use crate::template::stubs::StubLibrary;
use crate::types::answers::AnswerSet;
use crate::types::error::ScaffoldError;
use crate::types::names::DerivedNames;
use crate::utils::fs::write_manifest;
use crate::utils::logger::{LogLevel, Logger};

/// What one successful scaffold run produced.
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub root: PathBuf,
    pub answers: AnswerSet,
    pub names: DerivedNames,
    pub file_count: usize,
}

/// Scaffold a new addon under `cwd`.
///
/// ### Parameters
/// - `cwd`: The directory the addon folder is created in.
/// - `answers`: The validated questionnaire answers.
///
/// The whole manifest is assembled in memory before anything is written, so
/// a missing stub or an existing target directory aborts with zero files on
/// disk.
pub async fn scaffold_addon(cwd: &str, answers: AnswerSet) -> Result<ScaffoldOutcome, ScaffoldError> {
    if answers.addon_name.trim().is_empty() {
        Logger::new().log_message(LogLevel::Error, "Addon name is required.");
        return Err(ScaffoldError::EmptyName);
    }

    let answers = answers.normalized();
    let names = naming::derive(&answers.addon_name, answers.is_gateway);
    let manifest = assemble(&answers, &names, &StubLibrary::new())?;

    let root = Path::new(cwd).join(&names.full_slug);
    if root.exists() {
        Logger::new().log_message(
            LogLevel::Error,
            &format!("Directory already exists: {}", root.display()),
        );
        return Err(ScaffoldError::AlreadyExists(root.display().to_string()));
    }

    write_manifest(&root, &manifest)?;

    Ok(ScaffoldOutcome {
        root,
        file_count: manifest.files().len(),
        answers,
        names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answers::SettingsType;

    fn answers(name: &str, is_gateway: bool) -> AnswerSet {
        AnswerSet {
            addon_name: name.to_string(),
            description: AnswerSet::default_description(name),
            is_gateway,
            requires_pro: false,
            settings_type: SettingsType::Both,
            use_webpack: true,
        }
    }

    #[tokio::test]
    async fn scaffolds_a_basic_addon_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().to_str().unwrap().to_string();

        let outcome = scaffold_addon(&cwd, answers("Trip Difficulty Level", false))
            .await
            .unwrap();

        assert_eq!(
            outcome.root,
            tmp.path().join("wptravelengine-trip-difficulty-level")
        );
        assert!(outcome.root.join("includes/Plugin.php").is_file());
        assert!(outcome.root.join("includes/Settings/Globals.php").is_file());
        assert!(outcome.root.join("includes/Settings/TripEdits.php").is_file());
        assert!(outcome.root.join("src/admin/js/index.js").is_file());
        assert!(outcome.root.join("webpack.config.js").is_file());
    }

    #[tokio::test]
    async fn gateway_normalization_applies_before_assembly() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().to_str().unwrap().to_string();

        let outcome = scaffold_addon(&cwd, answers("PayStack Payment Gateway", true))
            .await
            .unwrap();

        assert_eq!(
            outcome.root,
            tmp.path().join("wptravelengine-paystack-payment")
        );
        assert_eq!(outcome.answers.settings_type, SettingsType::Global);
        assert!(!outcome.answers.use_webpack);
        assert!(outcome.root.join("includes/Payment.php").is_file());
        assert!(!outcome.root.join("webpack.config.js").exists());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().to_str().unwrap().to_string();

        let err = scaffold_addon(&cwd, answers("   ", false)).await.unwrap_err();
        assert_eq!(err, ScaffoldError::EmptyName);
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn existing_target_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().to_str().unwrap().to_string();
        let target = tmp.path().join("wptravelengine-trip-difficulty-level");
        std::fs::create_dir_all(&target).unwrap();

        let err = scaffold_addon(&cwd, answers("Trip Difficulty Level", false))
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
        assert!(std::fs::read_dir(&target).unwrap().next().is_none());
    }
}
