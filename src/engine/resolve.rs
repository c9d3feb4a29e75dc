//! Turn built accumulators into a single date.
//!
//! ```text
//! origin = now
//! date valid?      ──yes──▶ origin = date.compile(now)        (errors surface)
//! offset.compile(origin)
//!     ok           ──────▶ origin = shifted
//!     err + date   ──────▶ keep origin, report the error on the side
//!     err, no date ──────▶ surface the error
//! ```

use chrono::{DateTime, TimeZone};
use tracing::debug;

use super::builder::Contexts;
use crate::api::ParseResult;
use crate::error::ParseError;

/// Resolve `contexts` relative to `now`.
///
/// On success also returns the offset error that was swallowed because a
/// valid absolute date already produced an origin, if any.
pub(crate) fn resolve<Tz: TimeZone>(
    contexts: &Contexts,
    now: &DateTime<Tz>,
) -> Result<(ParseResult<Tz>, Option<ParseError>), ParseError> {
    if contexts.is_empty() {
        return Err(ParseError::NoDateFound);
    }

    let matched_size = contexts.offset.size.max(contexts.date.size);
    let date_valid = contexts.date.is_valid();

    let mut origin = now.clone();
    if date_valid {
        origin = contexts.date.compile(now)?;
        debug!(origin = ?origin, "absolute date compiled");
    }

    match contexts.offset.compile(&origin) {
        Ok(date) => Ok((ParseResult { matched_size, date }, None)),
        Err(err) if date_valid => {
            debug!(error = %err, "offset ignored, keeping absolute date");
            Ok((ParseResult { matched_size, date: origin }, Some(err)))
        }
        Err(err) => Err(err),
    }
}
