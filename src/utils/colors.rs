//! ANSI color helper utilities for terminal output.

use crate::models::bucket::Bucket;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Bucket label color:
/// current → green
/// upcoming → cyan
/// past → grey
pub fn color_for_bucket(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Current => GREEN,
        Bucket::Upcoming => CYAN,
        Bucket::Past => GREY,
    }
}

/// Grey out placeholder values such as "Not set".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "Not set" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
