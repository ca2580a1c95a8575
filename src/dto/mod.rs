//! View models handed to the templates.

pub mod card;
