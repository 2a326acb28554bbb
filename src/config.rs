use std::{env, path::PathBuf, str::FromStr};

use crate::parse::Extraction;
use crate::terminal::Palette;

pub const DEFAULT_HTML_PATH: &str = "./html-samples/cafeteria.html";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format `{other}`, expected `text` or `json`")),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "unknown color choice `{other}`, expected `auto`, `always` or `never`"
            )),
        }
    }
}

impl ColorChoice {
    pub fn palette(self) -> Palette {
        match self {
            Self::Auto => Palette::detect(),
            Self::Always => Palette::new(true),
            Self::Never => Palette::plain(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub html_path: PathBuf,
    pub extraction: Extraction,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            extraction: Extraction::default(),
            format: OutputFormat::default(),
            color: ColorChoice::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let html_path = lookup("MENU_HTML")
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_HTML_PATH), PathBuf::from);
        Self {
            html_path,
            extraction: choice(&lookup, "MENU_EXTRACTION"),
            format: choice(&lookup, "MENU_FORMAT"),
            color: choice(&lookup, "MENU_COLOR"),
        }
    }
}

/// unset falls back to the default silently, garbage falls back with a warning
fn choice<T>(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    match lookup(var).map(|value| value.parse::<T>()) {
        Some(Ok(parsed)) => parsed,
        Some(Err(e)) => {
            log::warn!("ignoring env var {var}: {e}");
            T::default()
        }
        None => T::default(),
    }
}
