//! Command handlers for the star-mirror CLI

pub mod mirror;
