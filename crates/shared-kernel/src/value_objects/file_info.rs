// crates/shared-kernel/src/value_objects/file_info.rs
use std::{fmt, time::SystemTime};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// UTF-8 base name of a directory entry; non UTF-8 names are lossy converted when harvested.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Decimal byte count with `,` thousands separators, e.g. `1,234,567`.
    pub fn to_grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl std::iter::Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(FileSize::bytes).fold(0, u64::saturating_add))
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_grouped())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    /// Minute-precision form used in listings.
    pub fn to_short(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::new(DateTime::<Local>::from(time))
    }
}
