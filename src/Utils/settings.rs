use crate::Utils::logger::{LogSettings, default_log_file_name, parse_level};
use crate::Utils::task_parser::{DocumentMap, Value, parse_document};
use crate::polynomial::parse_poly::{ParseMode, ParseOptions};
use crate::polynomial::poly_engine::CancellationPolicy;
use crate::polynomial::poly_errors::PolyError;
use crate::polynomial::poly_format::FormatOptions;
use log::info;
use std::fs;
use std::path::Path;

/// Settings for a polynomial session, read from a task_parser document:
/// ```text
/// parsing    mode: strict
/// arithmetic zero_tolerance: 0.0
/// formatting variable: X
/// logging    level: info   console: true  file: auto
/// ```
/// Missing sections and keys keep their defaults, unknown keys are ignored.
/// `file: auto` writes to a timestamped log_YYYY-MM-DD_HH-MM-SS.txt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyConfig {
    pub mode: ParseMode,
    pub policy: CancellationPolicy,
    pub format: FormatOptions,
    pub log: LogSettings,
}

fn single_value<'a>(
    document: &'a DocumentMap,
    section: &str,
    key: &str,
) -> Result<Option<&'a Value>, PolyError> {
    let Some(values) = document.get(section).and_then(|s| s.get(key)) else {
        return Ok(None);
    };
    match values.as_slice() {
        [value] => Ok(Some(value)),
        _ => Err(PolyError::Config(format!(
            "{}.{} expects exactly one value, got {}",
            section,
            key,
            values.len()
        ))),
    }
}

impl PolyConfig {
    pub fn from_document(input: &str) -> Result<PolyConfig, PolyError> {
        let document = parse_document(input).map_err(PolyError::Config)?;
        let mut config = PolyConfig::default();

        if let Some(value) = single_value(&document, "parsing", "mode")? {
            config.mode = value
                .to_string()
                .parse::<ParseMode>()
                .map_err(|_| PolyError::Config(format!("unknown parsing mode '{}'", value)))?;
        }

        if let Some(value) = single_value(&document, "arithmetic", "zero_tolerance")? {
            let eps = value.as_float().ok_or_else(|| {
                PolyError::Config(format!("zero_tolerance must be a number, got '{}'", value))
            })?;
            config.policy = if eps == 0.0 {
                CancellationPolicy::Exact
            } else if eps > 0.0 && eps.is_finite() {
                CancellationPolicy::Tolerance(eps)
            } else {
                return Err(PolyError::Config(format!(
                    "zero_tolerance must be a non-negative finite number, got {}",
                    eps
                )));
            };
        }

        if let Some(value) = single_value(&document, "formatting", "variable")? {
            let text = value.to_string();
            let mut chars = text.chars();
            config.format.variable = match (chars.next(), chars.next()) {
                (Some(symbol), None) if symbol.is_alphabetic() => symbol,
                _ => {
                    return Err(PolyError::Config(format!(
                        "variable must be a single letter, got '{}'",
                        text
                    )));
                }
            };
        }

        if let Some(value) = single_value(&document, "logging", "level")? {
            config.log.level = parse_level(&value.to_string())
                .ok_or_else(|| PolyError::Config(format!("unknown log level '{}'", value)))?;
        }
        if let Some(value) = single_value(&document, "logging", "console")? {
            config.log.console = value.as_boolean().ok_or_else(|| {
                PolyError::Config(format!("console must be true or false, got '{}'", value))
            })?;
        }
        if let Some(value) = single_value(&document, "logging", "file")? {
            let name = value.to_string();
            config.log.file = if name.eq_ignore_ascii_case("auto") {
                Some(default_log_file_name())
            } else {
                Some(name)
            };
        }

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PolyConfig, PolyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PolyError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_document(&content)?;
        info!("settings loaded from {}", path.display());
        Ok(config)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            mode: self.mode,
            policy: self.policy,
        }
    }

    pub fn cancellation_policy(&self) -> CancellationPolicy {
        self.policy
    }

    pub fn format_options(&self) -> FormatOptions {
        self.format
    }

    pub fn log_settings(&self) -> LogSettings {
        self.log.clone()
    }
}
