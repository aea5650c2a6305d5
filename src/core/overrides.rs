use crate::domain::model::PrintConfiguration;
use crate::utils::error::{PclError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverrideKey {
    PaperFormat,
    EnvelopeType,
    FullAddress,
    PostalCode,
}

impl OverrideKey {
    fn parse(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "formatoimpressao" | "paperformat" => Some(OverrideKey::PaperFormat),
            "tipoenvelope" | "envelopetype" => Some(OverrideKey::EnvelopeType),
            "enderecocompleto" | "includefulladdress" => Some(OverrideKey::FullAddress),
            "codigopostal" | "includepostalcode" => Some(OverrideKey::PostalCode),
            _ => None,
        }
    }
}

/// Parses `true`/`false` the way the batch producers write them.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(PclError::InvalidOverride {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Returns `base` with the recognised batch overrides applied.
///
/// Nothing is applied unless every recognised value parses.
pub fn apply_overrides(
    base: &PrintConfiguration,
    overrides: &HashMap<String, String>,
) -> Result<PrintConfiguration> {
    let mut config = base.clone();

    // 依鍵排序，讓結果與日誌不受 HashMap 順序影響
    let mut entries: Vec<(&String, &String)> = overrides.iter().collect();
    entries.sort();

    for (key, value) in entries {
        match OverrideKey::parse(key) {
            Some(OverrideKey::PaperFormat) => config.paper_format = value.clone(),
            Some(OverrideKey::EnvelopeType) => config.envelope_type = value.clone(),
            Some(OverrideKey::FullAddress) => config.include_full_address = parse_bool(key, value)?,
            Some(OverrideKey::PostalCode) => config.include_postal_code = parse_bool(key, value)?,
            None => {
                tracing::debug!("Ignoring unknown override '{}'", key);
                continue;
            }
        }
        tracing::debug!("Override {} = {}", key, value);
    }

    Ok(config)
}
