//! Time representation for the playback clock and visibility windows.
//!
//! The playhead uses rational seconds so that repeated fixed steps never
//! accumulate floating-point error. Visibility windows come from user input
//! and are plain `f64` seconds.

use num_rational::{Ratio, Rational64};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A playhead position in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayheadTime {
    value: Rational64,
}

impl PlayheadTime {
    /// Create a new time of `numerator / denominator` seconds.
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            value: Rational64::new(numerator, denominator),
        }
    }

    /// Create a time from seconds as a float.
    /// Precision is one microsecond; values clamp to `[0, MAX]`.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        const PRECISION: i64 = 1_000_000;
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::ZERO;
        }
        if seconds >= Self::MAX_SECONDS as f64 {
            return Self::MAX;
        }
        Self {
            value: Rational64::new((seconds * PRECISION as f64).round() as i64, PRECISION),
        }
    }

    /// Add `rhs`, saturating at [`PlayheadTime::MAX`].
    pub fn saturating_add(self, rhs: Self) -> Self {
        let widen = |r: Rational64| Ratio::new(i128::from(*r.numer()), i128::from(*r.denom()));
        let sum = widen(self.value) + widen(rhs.value);
        if sum >= Ratio::from_integer(i128::from(Self::MAX_SECONDS)) {
            return Self::MAX;
        }
        match (i64::try_from(*sum.numer()), i64::try_from(*sum.denom())) {
            (Ok(numer), Ok(denom)) => Self {
                value: Rational64::new(numer, denom),
            },
            _ => Self::MAX,
        }
    }

    /// Convert to seconds as f64.
    #[inline]
    pub fn to_seconds_f64(self) -> f64 {
        *self.value.numer() as f64 / *self.value.denom() as f64
    }

    pub const ZERO: Self = Self {
        value: Rational64::new_raw(0, 1),
    };

    /// Upper bound of the playhead in whole seconds (about 31 years).
    pub const MAX_SECONDS: i64 = 1_000_000_000;

    pub const MAX: Self = Self {
        value: Rational64::new_raw(Self::MAX_SECONDS, 1),
    };

    #[inline]
    pub fn is_zero(self) -> bool {
        *self.value.numer() == 0
    }
}

impl Default for PlayheadTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for PlayheadTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for PlayheadTime {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl fmt::Display for PlayheadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.to_seconds_f64())
    }
}

/// The interval during which an item is rendered, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whether `seconds` lies inside the window. Both boundaries count.
    #[inline]
    pub fn contains(self, seconds: f64) -> bool {
        self.start <= seconds && seconds <= self.end
    }

    /// `0 <= start <= end`.
    #[inline]
    pub fn is_well_formed(self) -> bool {
        0.0 <= self.start && self.start <= self.end
    }
}

/// Format seconds as a zero padded `MM:SS` transport label.
pub fn format_clock(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let remaining = (seconds % 60.0).floor() as u64;
    format!("{minutes:02}:{remaining:02}")
}
