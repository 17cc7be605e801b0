use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Cookbook version as found in `metadata.rb`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted `major.minor.patch` triple (e.g., "1.2.3" -> Version(1,2,3))
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::parse(format!(
                "No major/minor/patch elements found in '{}'",
                text
            )));
        }

        let major = parse_component(parts[0], "major")?;
        let minor = parse_component(parts[1], "minor")?;
        let patch = parse_component(parts[2], "patch")?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump level
    ///
    /// Fails instead of wrapping when the bumped component is already `u64::MAX`.
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let bumped = match level {
            BumpLevel::Major => Version {
                major: increment(self.major, level)?,
                minor: 0,
                patch: 0,
            },
            BumpLevel::Minor => Version {
                major: self.major,
                minor: increment(self.minor, level)?,
                patch: 0,
            },
            BumpLevel::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: increment(self.patch, level)?,
            },
        };
        Ok(bumped)
    }

    /// Bump version by level name, rejecting anything but patch/minor/major
    pub fn bump_named(&self, level: &str) -> Result<Self> {
        self.bump(level.parse()?)
    }
}

fn increment(component: u64, level: BumpLevel) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        BumpError::parse(format!(
            "{} version {} cannot be incremented",
            level, component
        ))
    })
}

// `u64::from_str` tolerates a leading '+', so digits are checked first.
fn parse_component(part: &str, name: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::parse(format!(
            "Invalid {} version: '{}'",
            name, part
        )));
    }

    part.parse::<u64>().map_err(|e| {
        BumpError::parse(format!("Invalid {} version: '{}' ({})", name, part, e))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        }
    }
}

impl FromStr for BumpLevel {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "patch" => Ok(BumpLevel::Patch),
            other => Err(BumpError::UnknownBumpLevel(other.to_string())),
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
