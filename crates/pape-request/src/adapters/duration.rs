//! Whole-seconds duration codec for `max_auth_age`

use std::time::Duration;

use crate::error::PapeError;
use crate::ports::DurationCodec;

/// Encodes a duration as non-negative integer seconds.
///
/// Sub-second precision is truncated on encode. Decode accepts ASCII
/// digits only: no sign, no fraction, no surrounding whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeSecondsCodec;

impl DurationCodec for WholeSecondsCodec {
    fn encode(&self, duration: Duration) -> String {
        duration.as_secs().to_string()
    }

    fn decode(&self, value: &str) -> Result<Duration, PapeError> {
        let invalid = || PapeError::InvalidMaxAuthAge {
            value: value.to_string(),
        };
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| invalid())
    }
}
