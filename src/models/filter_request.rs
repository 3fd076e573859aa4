use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Form payload of `POST /filter-and-copy`, exactly as submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    pub source_folder: String,
    pub from_timestamp: String,
    pub to_timestamp: String,
    pub file_formats: String,
    #[serde(default, deserialize_with = "deserialize_form_bool")]
    pub use_created_time: bool,
    pub dest_folder_base: String,
    pub dest_folder_name: String,
}

impl FilterRequest {
    /// Folder the matches are copied into: `dest_folder_base/dest_folder_name`.
    ///
    /// An absolute `dest_folder_name` replaces the base, as `Path::join` does.
    pub fn destination_folder(&self) -> PathBuf {
        PathBuf::from(&self.dest_folder_base).join(&self.dest_folder_name)
    }
}

/// Parse the boolean spellings HTML forms produce (`on`, `1`, `true`, ...)
pub fn parse_form_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" | "y" | "t" => Some(true),
        "false" | "0" | "off" | "no" | "n" | "f" => Some(false),
        _ => None,
    }
}

fn deserialize_form_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_form_bool(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid boolean value: {raw:?}")))
}
