//! Records supplied by the content system. All of them are read-only on our side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CMS entries are keyed by either a numeric row id or a slug, depending on
/// which backend produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for MenuItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<MenuItemId>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Only `_blank` is meaningful for client-side routing; other frame names are ignored.
    pub fn opens_new_tab(&self) -> bool {
        self.target.as_deref() == Some("_blank")
    }
}

/// Named menus published by the content system, each in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menus {
    #[serde(default)]
    pub header: Vec<MenuItem>,
    #[serde(default)]
    pub footer: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub site_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GlobalSettings {
    /// `tel:` URI for the phone number, with spacing and punctuation removed.
    pub fn phone_href(&self) -> String {
        let dialable: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{dialable}")
    }
}
