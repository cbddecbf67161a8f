//! Chirp service module
//!
//! Body validation and cleaning, plus the create, list, fetch and delete
//! flows. Callers authenticate first and pass the author's id in.

mod service;

#[cfg(test)]
mod tests;

pub use service::{clean_chirp_body, parse_author_id, parse_chirp_id, ChirpService};
