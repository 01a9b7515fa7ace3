//! Runtime constants and configuration defaults

/// Default canvas dimension for drawn artwork
pub const DEFAULT_CANVAS_SIZE: usize = 32;

/// Fixed seed for reproducible rolls
pub const DEFAULT_SEED: u64 = 42;

/// Default roll count for Monte-Carlo verification
pub const DEFAULT_TRIALS: u64 = 10_000;

// Mint field limits enforced before metadata upload
/// Maximum NFT name length in characters
pub const MAX_NAME_LENGTH: usize = 32;
/// Maximum creator message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 80;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
