//! Small pure helpers shared by the service layer.

pub mod sanitize;
