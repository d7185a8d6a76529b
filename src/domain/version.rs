//! Semantic version model with permissive coercion
//!
//! Registry version strings are loosely formatted (`"2"`, `"1.0"`,
//! `"1.0.0rc1"`, `"1.2.3.4"`). `Version::coerce` turns them into a
//! `major.minor.patch[-pre][+build]` triple, filling missing components
//! with zero. Pre-release detection is a separate check on the raw string,
//! see [`is_prerelease`].

use crate::error::VersionFormatError;
use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Leading numeric part: `1`, `1.2` or `1.2.3`
static BASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+)(?:\.(\d+))?)?").unwrap());

/// Pre-release label written in front of the number, e.g. `alpha-1.5.5`
static LEADING_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(alpha|alfa|beta|preview|pre|rc|dev|a|b|c)[-_.](\d.*)$").unwrap()
});

/// PEP 440 public + local version (packaging's VERSION_PATTERN)
static PEP440_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^\s*
        v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?P<pre>[-_.]?(?:alpha|a|beta|b|preview|pre|c|rc)[-_.]?(?:[0-9]+)?)?
        (?P<post>(?:-[0-9]+)|(?:[-_.]?(?:post|rev|r)[-_.]?(?:[0-9]+)?))?
        (?P<dev>[-_.]?dev[-_.]?(?:[0-9]+)?)?
        (?:\+[a-z0-9]+(?:[-_.][a-z0-9]+)*)?
        \s*$",
    )
    .unwrap()
});

static ALPHA_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// Words that mark a version string as not yet stable
const PRERELEASE_MARKERS: &[&str] = &[
    "a", "alpha", "alfa", "b", "beta", "c", "rc", "pre", "preview", "dev", "canary", "nightly",
    "snapshot",
];

/// A semantic version coerced from a registry version string
///
/// Ordering and equality follow semver precedence: build metadata is
/// carried for display but never compared, and a release ranks above any
/// pre-release of the same triple.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Create a plain release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// Best-effort parse of an arbitrary version string
    ///
    /// Fails when no leading numeric dotted sequence can be extracted, or
    /// when a component leaves no room for a next major/minor/patch.
    pub fn coerce(text: &str) -> Result<Self, VersionFormatError> {
        let err = || VersionFormatError::new(text);

        let trimmed = text.trim();
        let trimmed = match trimmed.strip_prefix(['v', 'V']) {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => trimmed,
        };

        let (label, body) = match LEADING_LABEL_RE.captures(trimmed) {
            Some(caps) => (
                caps.get(1).map(|m| m.as_str().to_ascii_lowercase()),
                caps.get(2).map_or("", |m| m.as_str()),
            ),
            None => (None, trimmed),
        };

        let caps = BASE_RE.captures(body).ok_or_else(err)?;
        let component = |idx: usize| -> Result<u64, VersionFormatError> {
            match caps.get(idx) {
                None => Ok(0),
                Some(m) => match m.as_str().parse::<u64>() {
                    Ok(n) if n < u64::MAX => Ok(n),
                    _ => Err(err()),
                },
            }
        };
        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;

        let base_end = caps.get(0).map_or(0, |m| m.end());
        let (pre, build) = split_rest(&body[base_end..]);

        let mut pre_ids: Vec<String> = label.into_iter().collect();
        pre_ids.extend(normalize_identifiers(&pre, true));
        let build_ids = normalize_identifiers(&build, false);

        let mut inner = semver::Version::new(major, minor, patch);
        if !pre_ids.is_empty() {
            inner.pre = Prerelease::new(&pre_ids.join(".")).map_err(|_| err())?;
        }
        if !build_ids.is_empty() {
            inner.build = BuildMetadata::new(&build_ids.join(".")).map_err(|_| err())?;
        }

        Ok(Self { inner })
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// The pre-release tag, empty for releases
    pub fn pre(&self) -> &str {
        self.inner.pre.as_str()
    }

    /// The build metadata, empty when absent
    pub fn build(&self) -> &str {
        self.inner.build.as_str()
    }

    /// Returns true if the coerced version carries a pre-release tag
    pub fn has_prerelease_tag(&self) -> bool {
        !self.inner.pre.is_empty()
    }

    /// Lowest version that counts as a major update of `self`
    pub fn next_major(&self) -> Self {
        if self.has_prerelease_tag() && self.minor() == 0 && self.patch() == 0 {
            Self::new(self.major(), 0, 0)
        } else {
            Self::new(self.major().saturating_add(1), 0, 0)
        }
    }

    /// Lowest version that counts as a minor update of `self`
    pub fn next_minor(&self) -> Self {
        if self.has_prerelease_tag() && self.patch() == 0 {
            Self::new(self.major(), self.minor(), 0)
        } else {
            Self::new(self.major(), self.minor().saturating_add(1), 0)
        }
    }

    /// Lowest version that counts as a patch update of `self`
    pub fn next_patch(&self) -> Self {
        if self.has_prerelease_tag() {
            Self::new(self.major(), self.minor(), self.patch())
        } else {
            Self::new(self.major(), self.minor(), self.patch().saturating_add(1))
        }
    }
}

/// Split whatever follows the numeric triple into (pre-release, build)
fn split_rest(rest: &str) -> (String, String) {
    let rest: String = rest
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let (pre, build) = if let Some(build) = rest.strip_prefix(['+', '.']) {
        (String::new(), build.to_string())
    } else {
        let rest = rest.strip_prefix('-').unwrap_or(rest.as_str());
        match rest.split_once('+') {
            Some((pre, build)) => (pre.to_string(), build.to_string()),
            None => (rest.to_string(), String::new()),
        }
    };

    (pre, build.replace('+', "."))
}

/// Drop empty identifiers; numeric pre-release identifiers lose leading zeros
fn normalize_identifiers(raw: &str, strip_zeros: bool) -> Vec<String> {
    raw.split('.')
        .filter(|id| !id.is_empty())
        .map(|id| {
            if strip_zeros && id.len() > 1 && id.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = id.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                }
            } else {
                id.to_string()
            }
        })
        .collect()
}

/// Syntactic check for whether a raw version string denotes a pre-release
///
/// Valid PEP 440 versions are pre-releases when they carry a pre or dev
/// segment (`1.0a1`, `2.0.0rc1`, `1.0.dev3`). Strings outside PEP 440 are
/// checked for a pre-release word such as `alpha` or `rc`.
pub fn is_prerelease(text: &str) -> bool {
    if let Some(caps) = PEP440_RE.captures(text) {
        return caps.name("pre").is_some() || caps.name("dev").is_some();
    }

    ALPHA_RUN_RE.find_iter(text).any(|m| {
        let word = m.as_str().to_ascii_lowercase();
        PRERELEASE_MARKERS.contains(&word.as_str())
    })
}

impl FromStr for Version {
    type Err = VersionFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::coerce(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.inner;
        let b = &other.inner;
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
            .then_with(|| match (a.pre.is_empty(), b.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.pre.cmp(&b.pre),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
