//! Colors for game elements

pub const BACKGROUND_TOP: &str = "#282a36";
pub const BACKGROUND_BOTTOM: &str = "#44475a";
pub const STAR: &str = "#6272a4";

pub const PLATFORM_TOP: &str = "#50fa7b";
pub const PLATFORM_BOTTOM: &str = "#3ae66f";
pub const PLATFORM_STRIPE: &str = "#2c8c4f";

pub const COIN_CENTER: &str = "#f1fa8c";
pub const COIN_EDGE: &str = "#ffb86c";

pub const FACE: &str = "#282a36";
pub const SMILE: &str = "#000000";

/// Fallback body gradient for a character without a loaded image
pub fn character_gradient(name: &str) -> [&'static str; 2] {
    match name {
        "Pink Hero" => ["#ff79c6", "#bd93f9"],
        "Moana" => ["#8be9fd", "#6272a4"],
        _ => ["#50fa7b", "#34d058"],
    }
}
