//! Icon references and icon resolution.
//!
//! The platform owns icon retrieval (`IconService`); this module only decides
//! when to ask it and normalizes every outcome to a displayable reference.

mod extension;
mod resolve;
mod service;

pub use extension::{icon_for_extension, ExtensionIconService};
pub use resolve::resolve_icon;
pub use service::{IconError, IconService};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque icon reference (data URI, file URL, named icon).
///
/// The empty reference is a valid value: the UI renders its placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for IconRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Icon resolution requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    /// 16x16.
    Small,
    /// 32x32.
    #[default]
    Large,
}

impl IconSize {
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Large => 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_ref_empty_and_display() {
        assert!(IconRef::empty().is_empty());
        assert!(IconRef::default().is_empty());
        let r = IconRef::from("icon://archive");
        assert!(!r.is_empty());
        assert_eq!(r.to_string(), "icon://archive");
        assert_eq!(r.as_str(), "icon://archive");
    }

    #[test]
    fn icon_size_pixels_and_default() {
        assert_eq!(IconSize::default(), IconSize::Large);
        assert_eq!(IconSize::Large.pixels(), 32);
        assert_eq!(IconSize::Small.pixels(), 16);
    }
}
