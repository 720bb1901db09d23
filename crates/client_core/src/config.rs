use std::fs;

use serde::Deserialize;

/// Single source of truth for the contact form's default country code.
/// The original UI disagreed with itself here ("+92" on reset, "+7" on
/// hover); "+92" is the documented default.
pub const DEFAULT_COUNTRY_CODE: &str = "+92";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    /// Preferred navigation sequence, matched against category names by
    /// case-insensitive substring containment.
    pub nav_keywords: Vec<String>,
    pub nav_max_sections: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".into(),
            nav_keywords: vec![
                "DEVELOPMENT".into(),
                "MAINTENANCE".into(),
                "SECURITY".into(),
                "BUSINESS TOOLS".into(),
            ],
            nav_max_sections: 6,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    nav_keywords: Option<Vec<String>>,
    nav_max_sections: Option<usize>,
}

/// Defaults, overlaid by `site.toml` when present, overlaid by environment
/// variables. Malformed file entries are ignored rather than fatal.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("site.toml") {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.api_base_url {
                settings.api_base_url = v;
            }
            if let Some(v) = file_cfg.nav_keywords {
                settings.nav_keywords = v;
            }
            if let Some(v) = file_cfg.nav_max_sections {
                settings.nav_max_sections = v;
            }
        }
    }

    if let Ok(v) = std::env::var("SITE_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("SITE_NAV_MAX_SECTIONS") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.nav_max_sections = parsed;
        }
    }

    settings
}
