pub mod filters;
pub mod likes;
pub mod listing;
pub mod local_filter;
pub mod map;
pub mod strategy;
