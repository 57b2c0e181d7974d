use log::Level;

pub const UNICORN_STUDIO_URL: &str =
    "https://cdn.jsdelivr.net/gh/hiunicornstudio/unicornstudio.js@v1.4.34/dist/unicornStudio.umd.js";
pub const UNICORN_STUDIO_NAMESPACE: &str = "UnicornStudio";
pub const UNICORN_STUDIO_PROJECT: &str = "Lsh3KNRmavdVzclnWuKh";

pub const LOGO_URL: &str = "https://dynnamo.com/images/Copia%20de%20DYNNAMO%20LOGOTIPO%2002.png";
pub const LOGO_FALLBACK_URL: &str = "https://placehold.co/120x36/0d1117/06b6d4?text=DYNNAMO";
pub const LOGO_BADGE_FALLBACK_URL: &str = "https://placehold.co/90x28/0d1117/06b6d4?text=DYNNAMO";

pub const CONTACT_EMAIL: &str = "info@dynnamo.com";

/// Fraction of a target that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
