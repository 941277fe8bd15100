pub const DEFAULT_WIDTH: i32 = 480;           // Initial window width
pub const DEFAULT_HEIGHT: i32 = 800;          // Initial window height
pub const MIN_WIDTH: i32 = 320;
pub const MIN_HEIGHT: i32 = 560;
pub const FPS: u32 = 60;                      // Frames per second

pub const FADE_DURATION: f32 = 0.35;          // Fade-in of a newly selected artwork (seconds)

pub const MARGIN_TOP: f32 = 50.0;
pub const MARGIN_BOTTOM: f32 = 4.0;
pub const MARGIN_SIDE: f32 = 10.0;
pub const PADDING: f32 = 16.0;                // Padding around and inside the cards

pub const FRAME_MAX_WIDTH: f32 = 400.0;       // Artwork card, excluding padding
pub const FRAME_MAX_HEIGHT: f32 = 460.0;
pub const SHADOW_SIZE: f32 = 8.0;

pub const TITLE_FONT_SIZE: i32 = 28;
pub const INFO_FONT_SIZE: i32 = 18;
pub const DESCRIPTION_HEIGHT: f32 = 2.0 * PADDING + TITLE_FONT_SIZE as f32 + 8.0 + INFO_FONT_SIZE as f32;

pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const BUTTON_FONT_SIZE: i32 = 20;
