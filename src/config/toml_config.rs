use crate::domain::model::PrintConfiguration;
use crate::utils::error::{PclError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Print profile loaded from a TOML file.
///
/// ```toml
/// [print]
/// paper_format = "A4"
/// envelope_type = "Janela"
/// margin_top = 15
/// margin_left = 20
/// company_logo = "${LOGO_PATH}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub print: PrintConfiguration,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| PclError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOGO_PATH})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(logo) = self.print.logo() {
            validate_path("print.company_logo", logo)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TextEncoding;

    #[test]
    fn test_parse_print_profile() {
        let config = TomlConfig::from_toml_str(
            r#"
[print]
paper_format = "A4"
envelope_type = "Comum"
include_postal_code = false
margin_top = 15
margin_left = 20
encoding = "latin1"
"#,
        )
        .unwrap();

        assert_eq!(config.print.envelope_type, "Comum");
        assert!(config.print.include_full_address);
        assert!(!config.print.include_postal_code);
        assert_eq!(config.print.margin_top, 15);
        assert_eq!(config.print.margin_left, 20);
        assert_eq!(config.print.encoding, TextEncoding::Latin1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_original_key_names() {
        let config = TomlConfig::from_toml_str(
            r#"
[print]
TipoEnvelope = "Janela"
MargemSuperior = 30
"#,
        )
        .unwrap();
        assert!(config.print.is_windowed_envelope());
        assert_eq!(config.print.margin_top, 30);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.print, PrintConfiguration::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("MALA_DIRETA_TEST_LOGO", "logos/acme.png");
        let config = TomlConfig::from_toml_str(
            r#"
[print]
company_logo = "${MALA_DIRETA_TEST_LOGO}"
"#,
        )
        .unwrap();
        assert_eq!(config.print.logo(), Some("logos/acme.png"));
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let result = TomlConfig::from_toml_str("[print]\nmargin_top = -5\n");
        assert!(matches!(result, Err(PclError::ConfigValidationError { .. })));
    }
}
