// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ledger timestamps.
//!
//! Ledger times count seconds since the Ripple epoch, 2000-01-01T00:00:00Z.

use crate::error::CodecError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and the Ripple epoch.
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

const SECONDS_PER_DAY: u64 = 86_400;

/// Ledger times are UInt32 fields; anything wider is a range error.
pub fn ripple_time_to_datetime(ripple_time: u64) -> Result<DateTime<Utc>, CodecError> {
    u32::try_from(ripple_time)
        .ok()
        .and_then(|t| DateTime::from_timestamp(i64::from(t) + RIPPLE_EPOCH_OFFSET, 0))
        .ok_or_else(|| CodecError::range("ledger time", ripple_time, 0, u32::MAX))
}

pub fn datetime_to_ripple_time(datetime: DateTime<Utc>) -> Result<u32, CodecError> {
    let seconds = datetime.timestamp() - RIPPLE_EPOCH_OFFSET;
    u32::try_from(seconds).map_err(|_| CodecError::range("ledger time", seconds, 0, u32::MAX))
}

/// Renders a settle delay as `H:MM:SS`, prefixed with `N day(s), ` when at
/// least a day long.
pub fn format_settle_delay(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let rest = seconds % SECONDS_PER_DAY;
    let clock = format!("{}:{:02}:{:02}", rest / 3_600, rest % 3_600 / 60, rest % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Formats ledger and Unix timestamps with one strftime pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerClock {
    format: String,
}

impl LedgerClock {
    pub fn new(format: impl Into<String>) -> Result<Self, CodecError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(CodecError::InvalidTimeFormat(format));
        }
        Ok(Self { format })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn format_datetime(&self, datetime: &DateTime<Utc>) -> String {
        datetime.format(&self.format).to_string()
    }

    pub fn format_ripple_time(&self, ripple_time: u64) -> Result<String, CodecError> {
        Ok(self.format_datetime(&ripple_time_to_datetime(ripple_time)?))
    }

    pub fn format_unix_time(&self, unix_time: i64) -> Result<String, CodecError> {
        let datetime = DateTime::from_timestamp(unix_time, 0)
            .ok_or_else(|| CodecError::range("unix time", unix_time, i64::MIN, i64::MAX))?;
        Ok(self.format_datetime(&datetime))
    }
}

impl Default for LedgerClock {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}
