use serde::{Deserialize, Serialize};

/// Settings of a calculator [`Session`](struct.Session.html).
///
/// Every field has a default, so a host can load a partial TOML document:
///
/// ```
/// # use torchlite::Config;
/// let config = Config::from_toml("history_limit = 10").unwrap();
/// assert_eq!(config.history_limit, Some(10));
/// assert!(config.record_failures);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of history entries to keep, `None` for no limit.
    /// Written as `0` in TOML.
    #[serde(with = "history_limit")]
    pub history_limit: Option<usize>,
    /// Whether failed evaluations are recorded in history.
    pub record_failures: bool,
    /// Decimal places shown on the display after an evaluation.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: Some(3),
            record_failures: true,
            precision: 10,
        }
    }
}

impl Config {
    /// Configuration keeping every evaluation in history.
    pub fn unbounded() -> Self {
        Self {
            history_limit: None,
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// TOML has no null, a zero limit stands for "unbounded"
mod history_limit {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(limit: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(limit.unwrap_or(0) as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let limit = usize::deserialize(deserializer)?;
        Ok(if limit == 0 { None } else { Some(limit) })
    }
}
