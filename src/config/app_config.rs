use config::{builder::DefaultState, Config, ConfigBuilder};
use error_stack::{report, ResultExt};
use thiserror::Error;

use super::sheets_config::{LayoutConfig, SpreadsheetConfig};
use crate::domain::sheets::schema::{COLUMN_COUNT, HEADER_ROW_COUNT};

pub const DEFAULT_CONFIG_PATH: &str = "Config";
pub const ENV_PREFIX: &str = "SIGNIF_SHEETS";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file")]
    FailedToRead,
    #[error("Failed to deserialize config")]
    FailedToDeserialize,
    #[error("Invalid layout: {0}")]
    InvalidLayout(&'static str),
}

impl AppConfig {
    /// Loads the file at `CONFIG_PATH` (default `Config`), with
    /// `SIGNIF_SHEETS__SECTION__KEY` environment overrides.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let builder = Config::builder()
            .add_source(config::File::with_name(&config_path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        Self::from_builder(builder)
            .attach_printable_lazy(|| format!("Config file: {}", config_path))
    }

    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> error_stack::Result<Self, ConfigError> {
        let config = builder.build().map_err(|e| match e {
            config::ConfigError::NotFound(property) => report!(ConfigError::FailedToRead)
                .attach_printable(format!("Missing property {:?}", property)),
            e => report!(ConfigError::FailedToRead).attach_printable(e.to_string()),
        })?;

        let app_config: AppConfig = config
            .try_deserialize()
            .change_context(ConfigError::FailedToDeserialize)
            .attach_printable("Make sure all required fields are present in the configuration file")?;

        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> error_stack::Result<(), ConfigError> {
        let LayoutConfig {
            row_count,
            column_count,
        } = self.layout;

        if row_count <= HEADER_ROW_COUNT as u32 {
            return Err(report!(ConfigError::InvalidLayout(
                "row_count must leave room below the header rows"
            )))
            .attach_printable_lazy(|| format!("row_count = {}", row_count));
        }
        if column_count < COLUMN_COUNT as u32 {
            return Err(report!(ConfigError::InvalidLayout(
                "column_count must fit every schema column"
            )))
            .attach_printable_lazy(|| {
                format!("column_count = {}, need at least {}", column_count, COLUMN_COUNT)
            });
        }
        if i32::try_from(row_count).is_err() || i32::try_from(column_count).is_err() {
            return Err(report!(ConfigError::InvalidLayout(
                "row_count and column_count must fit a sheet grid"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(contents: &str) -> error_stack::Result<AppConfig, ConfigError> {
        AppConfig::from_builder(
            Config::builder().add_source(File::from_str(contents, FileFormat::Toml)),
        )
    }

    #[test]
    fn test_layout_defaults() {
        let config = from_toml(
            r#"
            [sheets]
            priv_key = "client_secret.json"
            spreadsheet_id = "abc"
            "#,
        )
        .unwrap();

        assert_eq!(config.sheets.spreadsheet_id.as_ref(), "abc");
        assert_eq!(config.sheets.priv_key.as_ref(), "client_secret.json");
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.layout.row_count, 1000);
        assert_eq!(config.layout.column_count, 11);
    }

    #[test]
    fn test_layout_override() {
        let config = from_toml(
            r#"
            [sheets]
            priv_key = "key.json"
            spreadsheet_id = "abc"

            [layout]
            row_count = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.row_count, 200);
        assert_eq!(config.layout.column_count, 11);
    }

    #[test]
    fn test_missing_spreadsheet_id() {
        let result = from_toml(
            r#"
            [sheets]
            priv_key = "key.json"
            "#,
        );

        assert!(matches!(
            result.unwrap_err().current_context(),
            ConfigError::FailedToDeserialize
        ));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let result = from_toml(
            r#"
            [sheets]
            priv_key = "key.json"
            spreadsheet_id = "abc"

            [layout]
            row_count = 0
            "#,
        );

        assert!(matches!(
            result.unwrap_err().current_context(),
            ConfigError::InvalidLayout(_)
        ));
    }

    fn layout_error(layout: &str) -> ConfigError {
        let contents = format!(
            "[sheets]\npriv_key = \"key.json\"\nspreadsheet_id = \"abc\"\n\n[layout]\n{}\n",
            layout
        );
        *from_toml(&contents).unwrap_err().current_context()
    }

    #[test]
    fn test_narrow_grid_rejected() {
        assert!(matches!(
            layout_error("column_count = 5"),
            ConfigError::InvalidLayout(_)
        ));
        assert!(matches!(
            layout_error("column_count = 10"),
            ConfigError::InvalidLayout(_)
        ));
    }

    #[test]
    fn test_header_only_grid_rejected() {
        assert!(matches!(
            layout_error("row_count = 2"),
            ConfigError::InvalidLayout(_)
        ));
    }

    #[test]
    fn test_smallest_valid_layout() {
        let config = from_toml(
            r#"
            [sheets]
            priv_key = "key.json"
            spreadsheet_id = "abc"

            [layout]
            row_count = 3
            column_count = 11
            "#,
        )
        .unwrap();

        assert_eq!(
            config.layout,
            LayoutConfig {
                row_count: 3,
                column_count: 11
            }
        );
    }
}
