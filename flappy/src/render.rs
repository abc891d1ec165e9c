//! Drawing of the game entities and text.
//!
//! Sprites are erased by repainting their previous footprint with
//! [`Color::BACKGROUND`]. A sprite whose shape changes between drawing and
//! erasing leaves stray pixels behind.

use core::fmt::Write;

use heapless::String;

use crate::context::Context;
use crate::entity::{Bird, Pipes};
use crate::surface::{Color, Surface};
use crate::text::TextPlane;

pub const SCORE_POS: (usize, usize) = (2, 2);
pub const GAME_OVER_POS: (usize, usize) = (35, 29);
pub const FINAL_SCORE_POS: (usize, usize) = (35, 31);
pub const RESTART_POS: (usize, usize) = (28, 33);

pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RESTART_TEXT: &str = "Press KEY3 to restart";

/// `"Score: "` followed by at most 10 digits
pub type ScoreText = String<20>;

pub fn format_score(score: u32) -> Result<ScoreText, &'static str> {
    let mut text = ScoreText::new();
    write!(text, "Score: {}", score).map_err(|_| "Score text overflow")?;
    Ok(text)
}

/// Blank the character grid, then paint the whole back buffer with the
/// background
pub fn clear_screen<C: Context + ?Sized>(ctx: &mut C) -> Result<(), &'static str> {
    ctx.text().clear_text()?;
    ctx.surface().fill_screen(Color::BACKGROUND);
    Ok(())
}

pub fn draw_bird<S: Surface + ?Sized>(surface: &mut S, bird: &Bird) {
    surface.paint(bird.footprint(), Color::YELLOW);
}

/// Paint over the bird as it was drawn with its top edge at `y`
pub fn erase_bird<S: Surface + ?Sized>(surface: &mut S, bird: &Bird, y: i32) {
    surface.paint(bird.footprint_at(y), Color::BACKGROUND);
}

fn paint_pipes<S: Surface + ?Sized>(surface: &mut S, pipes: &Pipes, color: Color) {
    pipes
        .iter()
        .flat_map(|pipe| pipe.footprint())
        .for_each(|segment| surface.paint(segment, color));
}

pub fn draw_pipes<S: Surface + ?Sized>(surface: &mut S, pipes: &Pipes) {
    paint_pipes(surface, pipes, Color::GREEN);
}

pub fn erase_pipes<S: Surface + ?Sized>(surface: &mut S, pipes: &Pipes) {
    paint_pipes(surface, pipes, Color::BACKGROUND);
}

pub fn draw_score<T: TextPlane + ?Sized>(text: &mut T, score: u32) -> Result<(), &'static str> {
    let (col, row) = SCORE_POS;
    text.draw_text(col, row, &format_score(score)?)
}

/// Three line overlay shown while the game is over
///
/// Leaves the pixel surface as it is.
pub fn draw_game_over<T: TextPlane + ?Sized>(text: &mut T, score: u32) -> Result<(), &'static str> {
    let (col, row) = GAME_OVER_POS;
    text.draw_text(col, row, GAME_OVER_TEXT)?;
    let (col, row) = FINAL_SCORE_POS;
    text.draw_text(col, row, &format_score(score)?)?;
    let (col, row) = RESTART_POS;
    text.draw_text(col, row, RESTART_TEXT)
}
