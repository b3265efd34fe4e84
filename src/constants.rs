//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// HTTP/Network constants
pub mod network {
    /// Per-request timeout (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 12;

    /// Fixed client identification sent with every request
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (compatible; CodeSweep/0.1; +https://github.com/junyeong-ai/codesweep)";
}

/// Scan pipeline constants
pub mod scan {
    /// Default number of concurrent fetch workers
    pub const DEFAULT_WORKERS: usize = 6;

    /// Minimum accepted worker count
    pub const MIN_WORKERS: usize = 2;

    /// Maximum accepted worker count
    pub const MAX_WORKERS: usize = 20;

    /// Pause after recording each completed source (milliseconds).
    /// Keeps the scanner from hammering tracker servers.
    pub const POLITENESS_DELAY_MS: u64 = 100;
}

/// Code shape constants
pub mod code {
    /// Total alphanumeric characters in a redemption code
    pub const CODE_LEN: usize = 25;

    /// Characters per hyphen-joined group
    pub const GROUP_LEN: usize = 5;

    /// Number of groups in the canonical form
    pub const GROUP_COUNT: usize = 5;

    /// Characters of surrounding text inspected when inferring status.
    /// The window runs forward from the match position, it is not centered.
    pub const SNIPPET_WINDOW: usize = 200;
}

/// Default tracker pages scanned when no sources are configured
pub mod trackers {
    pub const DEFAULT_TRACKERS: &[&str] = &[
        "https://mentalmars.com/tag/shift-codes/",
        "https://shiftcodestk.com/",
        "https://game8.co/games/Borderlands-4/archives/",
        "https://www.reddit.com/r/Borderlands/comments/",
    ];
}
