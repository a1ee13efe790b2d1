use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::extract::SkillDictionary;
use crate::layout::{LayoutStyle, PageGeometry};

/// Engine configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the US Letter defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub page_geometry: PageGeometry,
    pub footer_brand: String,
    pub skill_dictionary: SkillDictionary,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = PageGeometry::default();
        let page_geometry = PageGeometry {
            width: optional_env("PAGE_WIDTH")?.unwrap_or(defaults.width),
            height: optional_env("PAGE_HEIGHT")?.unwrap_or(defaults.height),
            margin: optional_env("PAGE_MARGIN")?.unwrap_or(defaults.margin),
        };
        let footer_brand =
            std::env::var("FOOTER_BRAND").unwrap_or_else(|_| LayoutStyle::default().brand);
        let style = LayoutStyle {
            brand: footer_brand.clone(),
            ..LayoutStyle::default()
        };
        page_geometry
            .validate(&style)
            .context("PAGE_WIDTH / PAGE_HEIGHT / PAGE_MARGIN describe an unusable page")?;

        let skill_dictionary = match std::env::var("SKILL_DICTIONARY") {
            Ok(raw) => SkillDictionary::new(parse_skill_list(&raw)),
            Err(_) => SkillDictionary::default(),
        };

        Ok(Config {
            page_geometry,
            footer_brand,
            skill_dictionary,
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Default typography with the configured footer brand.
    pub fn layout_style(&self) -> LayoutStyle {
        LayoutStyle {
            brand: self.footer_brand.clone(),
            ..LayoutStyle::default()
        }
    }
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

/// Splits a comma-separated dictionary override, dropping blanks.
fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
