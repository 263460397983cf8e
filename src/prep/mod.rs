//! # Prep Module
//!
//! The matching heuristics behind the concert prep playlist.
//!
//! - [`setlist`] - finds the fan-curated setlist playlist for a concert among
//!   free-text search results and picks the most-followed one
//! - [`unheard`] - decides which artist and setlist tracks the listener has
//!   not heard yet and turns them into a private playlist
//!
//! Both only talk to Spotify through [`crate::spotify::Catalog`].

pub mod setlist;
pub mod unheard;

pub use setlist::{is_setlist_candidate, most_followed, resolve_setlist};
pub use unheard::{
    PrepOutcome, create_prep_playlist, known_pool, track_in_list, unheard_uris,
};
