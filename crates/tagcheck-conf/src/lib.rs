mod format;

use std::fs;
use std::path::Path;

use config::Config;
use config::ConfigError as ExternalConfigError;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
pub use format::OutputFormat;
pub use format::UnknownFormat;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] ExternalConfigError),
    #[error("Failed to read package.json")]
    PackageJsonIo(#[from] std::io::Error),
    #[error("Failed to parse package.json")]
    PackageJsonParse(#[from] serde_json::Error),
}

/// Effective settings after all configuration sources are merged.
///
/// Sources, lowest priority first:
///
/// 1. `tagcheck.toml` in the user config directory
/// 2. the `"tagcheck"` object in `package.json`
/// 3. `.tagcheck.toml`
/// 4. `tagcheck.toml`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of findings printed. `0` prints all of them.
    pub report_limit: usize,
    /// Exit with status 1 when anything is found.
    pub fail_on_error: bool,
    /// Replaces the built-in void element list when set.
    pub void_elements: Option<Vec<String>>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_limit: 20,
            fail_on_error: false,
            void_elements: None,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    pub fn new(project_root: &Path) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("io.github", "tagcheck", "tagcheck")
            .map(|proj_dirs| proj_dirs.config_dir().join("tagcheck.toml"));

        Self::load_from_paths(project_root, user_config_file.as_deref())
    }

    fn load_from_paths(
        project_root: &Path,
        user_config_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            tracing::debug!(path = %path.display(), "user config");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        let package_json_path = project_root.join("package.json");
        if package_json_path.exists() {
            let content = fs::read_to_string(&package_json_path)?;
            let package: serde_json::Value = serde_json::from_str(&content)?;

            if let Some(table) = package.get("tagcheck").filter(|v| v.is_object()) {
                let json = serde_json::to_string(table)?;
                builder = builder.add_source(File::from_str(&json, FileFormat::Json));
            }
        }

        builder = builder.add_source(
            File::from(project_root.join(".tagcheck.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(
            File::from(project_root.join("tagcheck.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        let config = builder.build()?;
        let settings = config.try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    mod defaults {
        use super::*;

        #[test]
        fn test_load_no_files() {
            let dir = tempdir().unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.report_limit, 20);
            assert!(!settings.fail_on_error);
            assert_eq!(settings.format, OutputFormat::Text);
        }
    }

    mod project_files {
        use super::*;

        #[test]
        fn test_load_tagcheck_toml_only() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("tagcheck.toml"), "report_limit = 5").unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert_eq!(settings.report_limit, 5);
        }

        #[test]
        fn test_load_dot_tagcheck_toml_only() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(".tagcheck.toml"), "fail_on_error = true").unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert!(settings.fail_on_error);
        }

        #[test]
        fn test_load_package_json_only() {
            let dir = tempdir().unwrap();
            let content = r#"{
  "name": "auction-frontend",
  "tagcheck": { "format": "json", "void_elements": ["img", "Icon"] }
}"#;
            fs::write(dir.path().join("package.json"), content).unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert_eq!(settings.format, OutputFormat::Json);
            assert_eq!(
                settings.void_elements,
                Some(vec!["img".to_string(), "Icon".to_string()])
            );
        }

        #[test]
        fn test_package_json_without_section() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert_eq!(settings, Settings::default());
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn test_project_priority_tagcheck_overrides_dot_tagcheck() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(".tagcheck.toml"), "report_limit = 1").unwrap();
            fs::write(dir.path().join("tagcheck.toml"), "report_limit = 2").unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert_eq!(settings.report_limit, 2);
        }

        #[test]
        fn test_project_priority_dot_tagcheck_overrides_package_json() {
            let dir = tempdir().unwrap();
            fs::write(
                dir.path().join("package.json"),
                r#"{"tagcheck": {"fail_on_error": false, "report_limit": 7}}"#,
            )
            .unwrap();
            fs::write(dir.path().join(".tagcheck.toml"), "fail_on_error = true").unwrap();
            let settings = Settings::load_from_paths(dir.path(), None).unwrap();
            assert!(settings.fail_on_error);
            assert_eq!(settings.report_limit, 7);
        }

        #[test]
        fn test_user_priority_project_overrides_user() {
            let user_dir = tempdir().unwrap();
            let project_dir = tempdir().unwrap();
            let user_conf_path = user_dir.path().join("tagcheck.toml");
            fs::write(&user_conf_path, "report_limit = 50\nfail_on_error = true").unwrap();
            fs::write(project_dir.path().join("tagcheck.toml"), "report_limit = 3").unwrap();

            let settings =
                Settings::load_from_paths(project_dir.path(), Some(&user_conf_path)).unwrap();
            assert_eq!(settings.report_limit, 3);
            assert!(settings.fail_on_error);
        }
    }

    mod user_config {
        use super::*;

        #[test]
        fn test_no_user_config_file_present() {
            let user_dir = tempdir().unwrap();
            let project_dir = tempdir().unwrap();
            let user_conf_path = user_dir.path().join("tagcheck.toml");

            let settings =
                Settings::load_from_paths(project_dir.path(), Some(&user_conf_path)).unwrap();
            assert_eq!(settings, Settings::default());
        }
    }

    mod deserialize {
        use super::*;

        #[test]
        fn test_deserialize_from_toml() {
            let settings: Settings = toml::from_str(
                r#"
                format = "pretty"
                report_limit = 0
                void_elements = ["img"]
                "#,
            )
            .unwrap();
            assert_eq!(settings.format, OutputFormat::Pretty);
            assert_eq!(settings.report_limit, 0);
            assert_eq!(settings.void_elements, Some(vec!["img".to_string()]));
            assert!(!settings.fail_on_error);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_invalid_toml_content() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("tagcheck.toml"), "report_limit = not_a_number").unwrap();
            let result = Settings::load_from_paths(dir.path(), None);
            assert!(matches!(result.unwrap_err(), ConfigError::Config(_)));
        }

        #[test]
        fn test_invalid_format_value() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("tagcheck.toml"), r#"format = "xml""#).unwrap();
            let result = Settings::load_from_paths(dir.path(), None);
            assert!(matches!(result.unwrap_err(), ConfigError::Config(_)));
        }

        #[test]
        fn test_malformed_package_json() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("package.json"), "{ not json").unwrap();
            let result = Settings::load_from_paths(dir.path(), None);
            assert!(matches!(
                result.unwrap_err(),
                ConfigError::PackageJsonParse(_)
            ));
        }
    }
}
