//! Game colors

use super::Rgba;

pub const LAPIS_LAZULI: Rgba = Rgba::rgb(51, 101, 138);
pub const CAROLINA_BLUE: Rgba = Rgba::rgb(134, 187, 216);
pub const HUNYADI_YELLOW: Rgba = Rgba::rgb(246, 174, 45);
pub const PANTONE: Rgba = Rgba::rgb(242, 100, 25);
pub const PALE_AZURE: Rgba = Rgba::rgb(99, 210, 255);
pub const STEEL_BLUE: Rgba = Rgba::rgb(32, 129, 195);
pub const TIFFANY_BLUE: Rgba = Rgba::rgb(120, 213, 215);
pub const ASH_GRAY: Rgba = Rgba::rgb(190, 216, 212);
pub const SEASALT: Rgba = Rgba::rgb(247, 249, 249);

/// Match and main menu background
pub const BACKGROUND: Rgba = CAROLINA_BLUE;
pub const LOGIN_BACKGROUND: Rgba = ASH_GRAY;

/// Focused widget outline
pub const FOCUSED: Rgba = STEEL_BLUE;
pub const UNFOCUSED: Rgba = PALE_AZURE;
