//! Range header grammar: `<unit>=<start>-[end]`

use super::types::Range;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `unit` is one or more ASCII word characters, `start` one or more digits,
/// `end` zero or more digits. No surrounding whitespace.
static RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)=([0-9]+)-([0-9]*)$").unwrap());

/// Parse a range expression such as `items=0-24` or `items=50-`.
///
/// Returns `Ok(None)` for an empty input. Input that does not match the
/// grammar fails with a malformed [`Error::InvalidRange`]; a well-formed but
/// backwards range (`items=10-5`) fails validation with an unsatisfiable
/// [`Error::InvalidRange`]. An open end covers one default-sized page.
pub fn parse_range_header(header: &str) -> Result<Option<Range>> {
    if header.is_empty() {
        return Ok(None);
    }

    let captures = RANGE_REGEX
        .captures(header)
        .ok_or_else(|| Error::malformed_range(header))?;

    let unit = &captures[1];
    let start: i64 = captures[2]
        .parse()
        .map_err(|_| Error::invalid_offset(&captures[2]))?;

    let end = match &captures[3] {
        "" => start.saturating_add(i64::from(DEFAULT_PAGE_SIZE) - 1),
        digits => digits.parse().map_err(|_| Error::malformed_range(header))?,
    };

    let range = Range::with_unit(start, end, unit);
    range.validate()?;

    tracing::trace!(unit, start, end, "parsed range header");
    Ok(Some(range))
}
