use crate::catalog::{default_catalog, validate_catalog, Question};
use crate::errors::IntakeError;
use crate::runtime::FileSystem;
use crate::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// When false the config questions replace the built-in catalog instead
    /// of extending it.
    pub include_defaults: bool,
    pub questions: Vec<Question>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::Text,
            },
            catalog: CatalogConfig {
                include_defaults: true,
                questions: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PartialAppConfig {
    output: Option<PartialOutputConfig>,
    catalog: Option<PartialCatalogConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PartialCatalogConfig {
    include_defaults: Option<bool>,
    questions: Option<Vec<Question>>,
}

/// Loads defaults, merges the optional config file over them, applies CLI
/// overrides, and resolves the effective question catalog.
pub fn load_config(
    overrides: &CliOverrides,
    fs: &dyn FileSystem,
) -> Result<(AppConfig, Vec<Question>), IntakeError> {
    let mut cfg = AppConfig::default();

    if let Some(path) = &overrides.config_path {
        let file_contents = fs.read_to_string(path)?;
        let partial: PartialAppConfig = toml::from_str(&file_contents)
            .map_err(|e| IntakeError::ConfigParse(e.to_string()))?;
        merge_partial_config(&mut cfg, partial);
    }

    apply_cli_overrides(&mut cfg, overrides);

    let catalog = effective_catalog(&cfg);
    validate_catalog(&catalog)?;
    Ok((cfg, catalog))
}

fn merge_partial_config(cfg: &mut AppConfig, partial: PartialAppConfig) {
    if let Some(output) = partial.output {
        if let Some(format) = output.format {
            cfg.output.format = format;
        }
    }

    if let Some(catalog) = partial.catalog {
        if let Some(include_defaults) = catalog.include_defaults {
            cfg.catalog.include_defaults = include_defaults;
        }
        if let Some(questions) = catalog.questions {
            cfg.catalog.questions = questions;
        }
    }
}

fn apply_cli_overrides(cfg: &mut AppConfig, overrides: &CliOverrides) {
    if let Some(format) = overrides.format {
        cfg.output.format = format;
    }
}

fn effective_catalog(cfg: &AppConfig) -> Vec<Question> {
    let mut catalog = if cfg.catalog.include_defaults {
        default_catalog()
    } else {
        Vec::new()
    };
    catalog.extend(cfg.catalog.questions.iter().cloned());
    catalog
}

#[cfg(test)]
mod tests {
    use super::{load_config, AppConfig, CliOverrides};
    use crate::errors::IntakeError;
    use crate::runtime::FakeFileSystem;
    use crate::types::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_without_config_file() {
        let fs = FakeFileSystem::default();
        let (cfg, catalog) =
            load_config(&CliOverrides::default(), &fs).expect("load defaults");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn config_file_overrides_format_and_extends_catalog() {
        let path = PathBuf::from("/cfg/intake.toml");
        let fs = FakeFileSystem::with_file(
            &path,
            r#"
[output]
format = "json"

[[catalog.questions]]
key = "logs_url"
prompt = "Where are the logs?"
detail = "Link to the log archive."
required = false
"#,
        );
        let overrides = CliOverrides {
            config_path: Some(path),
            ..CliOverrides::default()
        };
        let (cfg, catalog) = load_config(&overrides, &fs).expect("load config");
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(catalog.len(), 9);
        let last = catalog.last().expect("appended question");
        assert_eq!(last.key, "logs_url");
        assert!(!last.required);
    }

    #[test]
    fn replacing_the_catalog_drops_defaults() {
        let path = PathBuf::from("/cfg/replace.toml");
        let fs = FakeFileSystem::with_file(
            &path,
            r#"
[catalog]
include_defaults = false

[[catalog.questions]]
key = "what_broke"
prompt = "What broke?"
required = true
"#,
        );
        let overrides = CliOverrides {
            config_path: Some(path),
            ..CliOverrides::default()
        };
        let (_cfg, catalog) = load_config(&overrides, &fs).expect("load config");
        let keys: Vec<_> = catalog.into_iter().map(|q| q.key).collect();
        assert_eq!(keys, vec!["what_broke"]);
    }

    #[test]
    fn cli_format_wins_over_config_file() {
        let path = PathBuf::from("/cfg/intake.toml");
        let fs = FakeFileSystem::with_file(&path, "[output]\nformat = \"json\"\n");
        let overrides = CliOverrides {
            config_path: Some(path),
            format: Some(OutputFormat::Text),
            ..CliOverrides::default()
        };
        let (cfg, _catalog) = load_config(&overrides, &fs).expect("load config");
        assert_eq!(cfg.output.format, OutputFormat::Text);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let fs = FakeFileSystem::default();
        let overrides = CliOverrides {
            config_path: Some(PathBuf::from("/cfg/absent.toml")),
            ..CliOverrides::default()
        };
        let error = load_config(&overrides, &fs).expect_err("missing file");
        assert!(matches!(error, IntakeError::Io(_)));
    }

    #[test]
    fn unparsable_config_is_a_parse_error() {
        let path = PathBuf::from("/cfg/broken.toml");
        let fs = FakeFileSystem::with_file(&path, "not valid toml [");
        let overrides = CliOverrides {
            config_path: Some(path),
            ..CliOverrides::default()
        };
        let error = load_config(&overrides, &fs).expect_err("broken toml");
        assert!(matches!(error, IntakeError::ConfigParse(_)));
    }

    #[test]
    fn duplicate_config_question_key_is_invalid() {
        let path = PathBuf::from("/cfg/dup.toml");
        let fs = FakeFileSystem::with_file(
            &path,
            r#"
[[catalog.questions]]
key = "error_message"
prompt = "Shadowed prompt"
"#,
        );
        let overrides = CliOverrides {
            config_path: Some(path),
            ..CliOverrides::default()
        };
        let error = load_config(&overrides, &fs).expect_err("duplicate key");
        assert!(matches!(error, IntakeError::InvalidConfig(_)));
    }
}
