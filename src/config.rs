use log::Level;

/// How long the full-screen loader stays up after mount.
pub const LOADING_DELAY_MS: u32 = 2_000;
/// Fade-out of the loader overlay before it leaves the tree.
pub const LOADER_EXIT_MS: u32 = 300;

/// Fraction of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Scroll offsets (px) over which the hero background is transformed.
pub const SCROLL_INPUT: (f64, f64) = (0.0, 300.0);
pub const PARALLAX_Y1: (f64, f64) = (0.0, 50.0);
pub const PARALLAX_Y2: (f64, f64) = (0.0, -50.0);
pub const PARALLAX_OPACITY: (f64, f64) = (1.0, 0.3);

pub const NAV_LABELS: [&str; 5] = ["HOME", "SERVICES", "TEAM", "BLOG", "CONTACT"];
pub const INITIAL_SECTION: &str = "home";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
