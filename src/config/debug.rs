//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Anything about handling the SelectionState (accepted and rejected events)
    pub log_selection: bool,

    /// Log every filter → build → publish cycle with row and point counts
    pub log_recompute: bool,

    /// Summary of the loaded store (row count, date bounds, absent cells)
    pub log_load: bool,

    /// Background loader thread lifecycle
    pub log_loader: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,
    log_load: true,

    log_recompute: false,
    log_loader: false,
};

/// Activate trace_time macro (scope-level timing)
pub const LOG_PERFORMANCE: bool = cfg!(debug_assertions);
