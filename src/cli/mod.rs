//! # CLI Module
//!
//! Command handlers of the `poprank` binary. Each handler calls one library
//! operation on the [`Session`](crate::session::Session) it is given and
//! renders the result as a table or a line of text. Fatal errors end the
//! process through the `error!` macro.
//!
//! ## Commands
//!
//! - [`auth`] - checks that the Spotify credentials can be exchanged for a token
//! - [`search_artists`] - lists artists matching a search term
//! - [`compare_artists`] - compares the global popularity of two artists
//! - [`country_popularity`] - summarizes an artist's popularity in a region
//! - [`genre_artists`] - top artists of a genre, counted over genre playlists
//! - [`market_artists`] - top artists of a market, counted over chart playlists
//! - [`top_videos`] - top videos of a genre ranked by view count
//! - [`video_chart`] - the region's most popular music videos

mod artists;
mod auth;
mod rankings;
mod videos;

pub use artists::compare_artists;
pub use artists::country_popularity;
pub use artists::search_artists;
pub use auth::auth;
pub use rankings::genre_artists;
pub use rankings::market_artists;
pub use videos::top_videos;
pub use videos::video_chart;
