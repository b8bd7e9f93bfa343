use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A definition file version formatted as `<major>.<minor>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileVersion {
    major: u32,
    minor: u32,
}

impl FileVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses `<major>.<minor>` where both parts are plain decimal digits.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidFileVersion(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: parse_part(major).ok_or_else(invalid)?,
            minor: parse_part(minor).ok_or_else(invalid)?,
        })
    }

    pub fn major(self) -> u32 {
        self.major
    }

    pub fn minor(self) -> u32 {
        self.minor
    }
}

fn parse_part(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for FileVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<FileVersion> for String {
    fn from(v: FileVersion) -> String {
        v.to_string()
    }
}

impl TryFrom<String> for FileVersion {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_versions() {
        let v = FileVersion::parse("1.0").unwrap();
        assert_eq!((v.major(), v.minor()), (1, 0));
        assert_eq!(v.to_string(), "1.0");
        assert_eq!("12.34".parse::<FileVersion>().unwrap(), FileVersion::new(12, 34));
    }

    #[test]
    fn invalid_versions() {
        for s in ["", "1", "1.", ".1", "1.2.3", "a.b", "-1.0", "+1.0", " 1.0", "1.0 ", "99999999999.0"] {
            assert!(FileVersion::parse(s).is_err(), "expected invalid: {s:?}");
        }
    }

    #[test]
    fn ordering() {
        assert!(FileVersion::new(1, 9) < FileVersion::new(1, 10));
        assert!(FileVersion::new(1, 10) < FileVersion::new(2, 0));
    }

    #[test]
    fn serde_roundtrip() {
        let v = FileVersion::new(2, 1);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"2.1\"");
        let back: FileVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<FileVersion>("\"v1\"").is_err());
    }
}
