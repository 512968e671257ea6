// DOM hooks and web-side tuning.

pub const CANVAS_ID: &str = "bg-canvas";
pub const SCROLL_TRACK_ID: &str = "scroll-container";
pub const CAROUSEL_ID: &str = "project-carousel";
pub const CARD_SELECTOR: &str = ".project-card";

// Cap the backing-store resolution on high-density displays
pub const DEVICE_PIXEL_RATIO_CAP: f64 = 2.0;

// Pointer parallax: world-unit eye offset at full deflection, smoothed per frame
pub const PARALLAX_STRENGTH: f32 = 40.0;
pub const PARALLAX_LERP_FACTOR: f32 = 0.05;

// CSS perspective applied to the card flip transform (px)
pub const CARD_PERSPECTIVE_PX: f32 = 1200.0;
