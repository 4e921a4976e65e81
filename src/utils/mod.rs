mod perf;
mod time_utils;

pub use perf::report_elapsed;
pub use time_utils::{AppInstant, TimeUtils};
