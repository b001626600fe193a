//! Token validity windows.

use std::time::{Duration, SystemTime};

use crate::error::{Result, TokenError};

/// How long a token is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifetime {
    /// Explicit start and end, in epoch seconds.
    StartEnd { start: u64, end: u64 },
    /// Valid from the moment the configuration is built, for this many seconds.
    Duration(f64),
}

impl Default for Lifetime {
    fn default() -> Self {
        Lifetime::Duration(3600.0)
    }
}

/// A resolved validity window in whole epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub end: u64,
}

impl Window {
    /// Length of the window in seconds.
    pub fn seconds(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

impl Lifetime {
    /// Resolve the lifetime into a window, reading `now` only for `Duration`.
    pub fn resolve(&self, now: SystemTime) -> Result<Window> {
        let window = match *self {
            Lifetime::StartEnd { start, end } => Window { start, end },
            Lifetime::Duration(seconds) => {
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(TokenError::InvalidDuration(seconds));
                }
                let epoch = epoch_seconds(now);
                Window {
                    start: epoch.round() as u64,
                    end: (epoch + seconds).round() as u64,
                }
            }
        };

        if window.end <= window.start {
            return Err(TokenError::InvalidLifetime {
                start: window.start,
                end: window.end,
            });
        }

        Ok(window)
    }
}

/// Fractional epoch seconds; both window ends are rounded from this value.
fn epoch_seconds(at: SystemTime) -> f64 {
    at.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs_f64()
}
