//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures return the url-encoded field pairs the front-end forms post, including the
//! empty honeypot field every real submission carries. Tests adjust individual pairs
//! with [`payload::with_field`] and [`payload::without_field`].

pub mod payload;
