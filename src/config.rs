use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose toggles while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND: &str = "Hanzo";
pub const TAGLINE: &str = "Design subscriptions for startups";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const ACCENT: &str = "#FF3700";
pub const ACCENT_HOVER: &str = "#E63200";
pub const INK: &str = "#1A1A1A";

/// Seconds for one full pass of the logo ticker.
pub const MARQUEE_SECONDS: u32 = 20;

/// Delay between consecutive children of a staggered entrance.
pub const STAGGER_STEP_MS: u32 = 100;

/// A region counts as entered once it is this far above the viewport's bottom edge.
pub const ENTRANCE_MARGIN_PX: f64 = 50.0;
