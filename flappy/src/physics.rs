//! Per-frame movement of the bird and the pipes.

use log::debug;

use crate::consts::*;
use crate::entity::Bird;
use crate::state::GameState;

/// Gravity, terminal velocity, then the ceiling clamp
///
/// Hitting the ceiling stops upward motion, it never ends the game.
pub fn update_bird(bird: &mut Bird) {
    bird.vy = (bird.vy + GRAVITY).min(MAX_FALL_SPEED);
    bird.y += bird.vy;
    if bird.y < 0 {
        bird.y = 0;
        bird.vy = 0;
    }
}

/// Scroll pipes left, recycle the ones that left the screen and count the
/// ones the bird passed
///
/// Recycling is checked before scoring, both against the current `x`.
/// Returns the number of pipes scored in this frame.
pub fn update_pipes(state: &mut GameState) -> u32 {
    let GameState {
        bird,
        pipes,
        score,
        rng,
        ..
    } = state;

    let mut passed = 0;
    for (n, pipe) in pipes.iter_mut().enumerate() {
        pipe.x -= PIPE_SPEED;

        if pipe.right() < 0 {
            pipe.respawn(SCREEN_WIDTH, rng);
            debug!("pipe {} recycled, gap at {}", n, pipe.gap_y);
        }

        if !pipe.scored && pipe.right() < bird.x {
            pipe.scored = true;
            *score += 1;
            passed += 1;
            debug!("pipe {} passed, score {}", n, score);
        }
    }
    passed
}
