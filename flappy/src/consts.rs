//! Screen geometry and game tuning.
//!
//! Coordinates are signed, pipes scroll past the left edge into negative `x`.

pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;

/// Pixels per row in the pixel buffer, rows start at `y << 9`
pub const PIXEL_STRIDE: usize = 512;
/// Number of 16-bit words backing one pixel buffer
pub const SURFACE_LEN: usize = PIXEL_STRIDE * SCREEN_HEIGHT as usize;

pub const TEXT_COLUMNS: usize = 80;
pub const TEXT_ROWS: usize = 60;
/// Cells per row in the character buffer, rows start at `row << 7`
pub const TEXT_STRIDE: usize = 128;
/// Number of bytes backing the character buffer
pub const TEXT_LEN: usize = TEXT_STRIDE * TEXT_ROWS;

pub const BIRD_X: i32 = 50;
pub const BIRD_WIDTH: i32 = 10;
pub const BIRD_HEIGHT: i32 = 10;

pub const PIPE_WIDTH: i32 = 20;
pub const PIPE_GAP: i32 = 90;
pub const PIPE_COUNT: usize = 2;
pub const PIPE_SPEED: i32 = 1;

pub const GRAVITY: i32 = 1;
pub const JUMP_STRENGTH: i32 = -5;
pub const MAX_FALL_SPEED: i32 = 5;
