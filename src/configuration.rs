use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MIN_YEAR: i32 = 1;
pub const DEFAULT_MAX_YEAR: i32 = 10000;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid year range [{min_year}, {max_year}]")]
    InvalidYearRange { min_year: i32, max_year: i32 },
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

fn default_min_year() -> i32 { DEFAULT_MIN_YEAR }
fn default_max_year() -> i32 { DEFAULT_MAX_YEAR }

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default = "default_min_year")]
    min_year: i32,
    #[serde(default = "default_max_year")]
    max_year: i32
}

/// Accepted year range of a calculator, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    min_year: i32,
    max_year: i32
}

impl Configuration {
    pub fn new(min_year: i32, max_year: i32) -> Result<Configuration, ConfigurationError> {
        if (min_year < 1) || (min_year > max_year) {
            log::debug!("rejected year range [{}, {}]", min_year, max_year);
            return Err(ConfigurationError::InvalidYearRange { min_year, max_year });
        }
        Ok(Configuration { min_year, max_year })
    }

    /// Missing fields fall back to the default range.
    pub fn from_json(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::new(json_prop.min_year, json_prop.max_year)
    }

    pub fn min_year(&self) -> i32 { self.min_year }
    pub fn max_year(&self) -> i32 { self.max_year }

    #[inline]
    pub fn contains_year(&self, year: i32) -> bool {
        (year >= self.min_year) && (year <= self.max_year)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration { min_year: DEFAULT_MIN_YEAR, max_year: DEFAULT_MAX_YEAR }
    }
}
