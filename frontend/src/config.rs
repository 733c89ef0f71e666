use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Simulated latencies, in milliseconds.
pub const SCHEDULE_DELAY_MS: u32 = 1_500;
pub const CONTACT_DELAY_MS: u32 = 1_500;
pub const TRACKING_DELAY_MS: u32 = 1_000;
pub const PLAN_SCROLL_DELAY_MS: u32 = 1_000;

pub const TOAST_LIFETIME_MS: u32 = 5_000;
/// Length of the slide-out animation before a toast leaves the page.
pub const TOAST_EXIT_MS: u32 = 300;

// Scroll thresholds, in CSS pixels.
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
pub const SECTION_LEAD: f64 = 100.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const ORDER_PREFIX: &str = "CD-";

pub const SCHEDULE_SECTION_ID: &str = "schedule";
pub const TRACK_RESULT_ID: &str = "track-result";
