//! Raw wire quantities: byte counts and nanosecond durations.

use serde::{Deserialize, Serialize};

/// Divisor convention used when scaling a raw byte count.
///
/// Two schema revisions report binary (1024-based) magnitudes, a third
/// reports decimal (1000-based). The conventions must never be mixed within
/// one report; the renderer standardizes on [`UnitBase::Binary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitBase {
    #[default]
    Binary,
    Decimal,
}

impl UnitBase {
    fn divisor(self) -> f64 {
        match self {
            UnitBase::Binary => 1024.0,
            UnitBase::Decimal => 1000.0,
        }
    }
}

/// An integer count of bytes as carried on the wire.
///
/// Latency distributions reuse this wrapper for time magnitudes; the wire
/// format does not encode units, so neither does the model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Bytes(pub i64);

impl Bytes {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scale down by `power` steps of the base divisor.
    pub fn scaled(self, base: UnitBase, power: u32) -> f64 {
        self.0 as f64 / base.divisor().powi(power as i32)
    }

    pub fn kib(self) -> f64 {
        self.scaled(UnitBase::Binary, 1)
    }

    pub fn mib(self) -> f64 {
        self.scaled(UnitBase::Binary, 2)
    }

    pub fn gib(self) -> f64 {
        self.scaled(UnitBase::Binary, 3)
    }

    pub fn kb(self) -> f64 {
        self.scaled(UnitBase::Decimal, 1)
    }

    pub fn mb(self) -> f64 {
        self.scaled(UnitBase::Decimal, 2)
    }

    pub fn gb(self) -> f64 {
        self.scaled(UnitBase::Decimal, 3)
    }
}

/// A duration in whole nanoseconds, the wire encoding the speedtest uses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DurationNs(pub i64);

impl DurationNs {
    pub const fn from_secs(secs: i64) -> Self {
        DurationNs(secs * 1_000_000_000)
    }

    /// Whole elapsed seconds, truncated.
    pub fn as_secs(self) -> i64 {
        self.0 / 1_000_000_000
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
