//! Header color themes. Both variants share markup and behavior; only the
//! CSS modifier class differs.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavTheme {
    /// Black header with yellow accents.
    #[default]
    Midnight,
    /// White header with brand-blue accents.
    Daylight,
}

impl NavTheme {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Midnight => "site-navbar--midnight",
            Self::Daylight => "site-navbar--daylight",
        }
    }

    /// Full class list for the `<nav>` root.
    pub fn header_class(self, solid: bool) -> String {
        let state = if solid { "site-navbar--solid" } else { "site-navbar--top" };
        format!("site-navbar {} {state}", self.css_modifier())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown navbar theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for NavTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midnight" | "dark" => Ok(Self::Midnight),
            "daylight" | "light" => Ok(Self::Daylight),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
