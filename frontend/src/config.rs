use log::Level;

/// Vertical offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Breathing room left above an anchor target after the navbar height.
pub const ANCHOR_MARGIN_PX: f64 = 20.0;

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_SELECTORS: &str =
    ".feature-item, .stat-card, .team-card, .proposal-card, .review-card, .expert-card, .gallery-item";

/// (container, item) pairs whose items reveal one after another.
pub const STAGGER_GROUPS: &[(&str, &str)] = &[
    (".about-features", ".feature-item"),
    (".about-stats", ".stat-card"),
    (".team-grid", ".team-card"),
    (".proposal-cards", ".proposal-card"),
    (".reviews-grid", ".review-card"),
    (".gallery-grid", ".gallery-item"),
];
pub const STAGGER_STEP_MS: u32 = 100;

pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const LAZY_ROOT_MARGIN: &str = "50px 0px";
pub const CRITICAL_IMAGES: &[&str] = &["assets/images/logo.png", "assets/images/gallery-5.jpg"];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
