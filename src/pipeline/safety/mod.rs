pub mod types;
pub mod patterns;
pub mod messages;
pub mod output_sanitize;
