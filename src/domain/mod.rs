//! Domain values shared by the listing, like and map services.

pub mod filter;
pub mod like;
pub mod listing;
pub mod map;
pub mod types;
