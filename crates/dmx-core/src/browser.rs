//! Host browser detection: version, Edge, colour scheme.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CHROME_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Chrom(?:e|ium)/([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)")
        .expect("static regex is valid")
});

/// Media query for a dark system theme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Chromium version from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrowserVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub patch: u32,
}

impl BrowserVersion {
    /// Parses the first `Chrome/a.b.c.d` or `Chromium/a.b.c.d` token.
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        let caps = CHROME_VERSION.captures(user_agent)?;
        let part = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
        Some(Self {
            major: part(1)?,
            minor: part(2)?,
            build: part(3)?,
            patch: part(4)?,
        })
    }
}

impl fmt::Display for BrowserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.build, self.patch)
    }
}

/// True when the browser's major version is at least `min_major`.
///
/// A zero threshold or an unparseable user agent yields false.
pub fn version_at_least(user_agent: &str, min_major: u32) -> bool {
    if min_major == 0 {
        return false;
    }
    BrowserVersion::from_user_agent(user_agent).is_some_and(|v| v.major >= min_major)
}

/// True for Microsoft Edge, whose user agent carries an `Edg` token.
pub fn is_edge(user_agent: &str) -> bool {
    user_agent
        .to_lowercase()
        .find("edg")
        .is_some_and(|idx| idx > 0)
}

/// Evaluates CSS media queries against the host.
pub trait MediaQuery {
    fn matches(&self, query: &str) -> bool;
}

/// True if the host reports a dark colour scheme. No probe means light.
pub fn is_dark_mode(probe: Option<&dyn MediaQuery>) -> bool {
    probe.is_some_and(|p| p.matches(DARK_SCHEME_QUERY))
}
