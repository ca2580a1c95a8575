//! Client-side listing layer of the campsite directory.
//!
//! Drives the paginated campsite grid (load more, numbered pages, filters),
//! renders campsite cards and the page strip, toggles likes and prepares map
//! data. Network access sits behind the repository traits so every piece can
//! run headless.

pub mod domain;
pub mod dto;
pub mod escape;
pub mod events;
pub mod models;
pub mod pagination;
pub mod render;
pub mod repository;
pub mod services;
pub mod view;
