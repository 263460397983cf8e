use rand::{Rng, distr::Alphanumeric};

use crate::types::ConcertQuery;

pub const INFO_MISSING: &str = "Please provide an artist name, concert name, and concert year in the query string (in the format ?info=artist_name/concert_name/year)";
pub const INFO_MALFORMED: &str =
    "The query string must contain artist_name, concert_name, and year separated by slashes.";
pub const INFO_EMPTY_SEGMENT: &str = "Artist name, concert name, and year must not be empty.";

pub fn generate_state_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Parses `artist/concert/year` into a [`ConcertQuery`].
///
/// Each segment is trimmed. The error is the message shown to the browser.
pub fn parse_concert_info(info: Option<&str>) -> Result<ConcertQuery, &'static str> {
    let info = match info {
        Some(info) if !info.trim().is_empty() => info,
        _ => return Err(INFO_MISSING),
    };

    let parts: Vec<&str> = info.split('/').map(str::trim).collect();
    let [artist, concert, year] = parts[..] else {
        return Err(INFO_MALFORMED);
    };

    if artist.is_empty() || concert.is_empty() || year.is_empty() {
        return Err(INFO_EMPTY_SEGMENT);
    }

    Ok(ConcertQuery {
        artist: artist.to_string(),
        concert: concert.to_string(),
        year: year.to_string(),
    })
}

pub fn format_concert_info(query: &ConcertQuery) -> String {
    format!("{}/{}/{}", query.artist, query.concert, query.year)
}
