use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameRecord — One entry of the FreeToGame catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub short_description: String,
    // The list endpoint omits the long-form fields; only the detail
    // endpoint carries them.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub game_url: String,
    #[serde(default, deserialize_with = "requirements_as_text")]
    pub minimum_system_requirements: String,
    pub freetogame_profile_url: Option<String>,
}

/// The detail endpoint returns requirements as an object of named lines;
/// flatten those to `key: value` lines so the record stays flat.
fn requirements_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(k, v)| match v.as_str() {
                Some(s) => format!("{}: {}", k, s),
                None => format!("{}: {}", k, v),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Platform — Upstream platform partitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Pc,
    Web,
}

impl Platform {
    /// Substring matched against [`GameRecord::platform`].
    pub fn filter_value(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Web => "Web",
        }
    }

    /// Value of the upstream `platform` query parameter.
    pub fn api_param(self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Web => "browser",
        }
    }
}
