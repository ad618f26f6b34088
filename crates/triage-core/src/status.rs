//! Status code acceptance policies
//!
//! An [`AcceptancePolicy`] is an ordered set of inclusive status ranges plus
//! at most one singleton code, evaluated as a union. Two presets are exported
//! and the caller must pick one; redirect handling deliberately has no
//! default.

use std::ops::RangeInclusive;

/// Inclusive status code interval `[lo, hi]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRange {
    lo: u16,
    hi: u16,
}

impl StatusRange {
    /// Create a range; bounds are normalized so `lo <= hi`
    pub const fn new(lo: u16, hi: u16) -> Self {
        if lo <= hi { Self { lo, hi } } else { Self { lo: hi, hi: lo } }
    }

    /// Range covering a single code
    pub const fn single(code: u16) -> Self {
        Self { lo: code, hi: code }
    }

    /// Whether `code` falls inside the range
    pub const fn contains(self, code: u16) -> bool {
        self.lo <= code && code <= self.hi
    }
}

impl From<RangeInclusive<u16>> for StatusRange {
    fn from(range: RangeInclusive<u16>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Union of status ranges (plus an optional singleton code) that count as
/// success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptancePolicy {
    ranges: Vec<StatusRange>,
    code: Option<u16>,
}

impl AcceptancePolicy {
    /// Policy accepting exactly the given ranges
    pub fn exact(ranges: impl IntoIterator<Item = StatusRange>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
            code: None,
        }
    }

    /// Preset accepting 2xx codes only
    pub fn success() -> Self {
        Self::exact([StatusRange::new(200, 299)])
    }

    /// Preset accepting 2xx and 3xx codes (redirects included)
    pub fn success_and_redirects() -> Self {
        Self::exact([StatusRange::new(200, 399)])
    }

    /// Append one extra range
    #[must_use]
    pub fn with_range(mut self, range: impl Into<StatusRange>) -> Self {
        self.ranges.push(range.into());
        self
    }

    /// Append several extra ranges
    #[must_use]
    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = StatusRange>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    /// Set the singleton extra code (at most one; last call wins)
    #[must_use]
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    /// Whether `code` lies in the union of the configured ranges and the
    /// singleton code
    pub fn accepts(&self, code: u16) -> bool {
        self.code == Some(code) || self.ranges.iter().any(|range| range.contains(code))
    }
}
