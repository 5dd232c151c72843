//! Fixed values shared by every profile in the process.

/// Placeholder first name stored when a profile is constructed without one.
pub const DEFAULT_FIRST_NAME: &str = "Anonymous";

/// First names that the baseline denial rule refuses. Matched exactly.
pub const DENIED_NAMES: [&str; 2] = ["root", "admin"];

/// Separator placed between first and last name in a full name.
pub const NAME_SEPARATOR: char = ' ';
