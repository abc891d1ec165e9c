use log::{error, info, trace};

use crate::context::{Buttons, Context};
use crate::render;
use crate::state::GameState;

/// Frame driver
///
/// Owns the game state and the platform context. Each call to [`tick`]
/// produces exactly one frame and returns after the display swapped buffers.
///
/// [`tick`]: Flappy::tick
pub struct Flappy<C: Context> {
    pub ctx: C,
    state: GameState,
}

impl<C: Context> Flappy<C> {
    /// Seed from the context and prepare both display buffers
    pub fn new(mut ctx: C) -> Result<Self, &'static str> {
        let seed = ctx.read_seed();
        Self::with_seed(ctx, seed)
    }

    pub fn with_seed(ctx: C, seed: u32) -> Result<Self, &'static str> {
        let mut game = Self {
            ctx,
            state: GameState::new(seed),
        };
        game.setup()?;
        info!("game started, seed {:#010x}", seed);
        Ok(game)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clear both buffers before the first frame
    fn setup(&mut self) -> Result<(), &'static str> {
        render::clear_screen(&mut self.ctx)?;
        self.wait_for_vsync();
        render::clear_screen(&mut self.ctx)
    }

    fn restart(&mut self) -> Result<(), &'static str> {
        info!("restart");
        render::clear_screen(&mut self.ctx)?;
        self.state.reset();
        Ok(())
    }

    /// Request a buffer swap and busy-wait until the display confirms it
    fn wait_for_vsync(&mut self) {
        self.ctx.request_swap();
        match nb::block!(self.ctx.poll_swap()) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Run a single frame
    pub fn tick(&mut self) -> Result<(), &'static str> {
        let prev_y = self.state.bird.y;
        let Buttons { jump, restart } = self.ctx.read_buttons();

        if jump {
            self.state.jump();
        }
        if restart && self.state.is_game_over() {
            self.restart()?;
        }

        if self.state.is_game_over() {
            render::draw_game_over(self.ctx.text(), self.state.score)?;
        } else {
            self.play(prev_y)?;
        }

        self.wait_for_vsync();
        Ok(())
    }

    fn play(&mut self, prev_y: i32) -> Result<(), &'static str> {
        let surface = self.ctx.surface();
        render::erase_bird(surface, &self.state.bird, prev_y);
        render::erase_pipes(surface, &self.state.pipes);

        self.state.step();
        trace!(
            "bird y={} vy={} score={}",
            self.state.bird.y,
            self.state.bird.vy,
            self.state.score
        );

        let surface = self.ctx.surface();
        render::draw_pipes(surface, &self.state.pipes);
        render::draw_bird(surface, &self.state.bird);
        render::draw_score(self.ctx.text(), self.state.score)
    }

    /// Run frames forever
    ///
    /// A failing frame is logged and the loop goes on with the next one.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.tick() {
                error!("frame failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_region;
    use crate::consts::*;
    use crate::context::testing::TestingContext;
    use crate::state::Phase;
    use crate::surface::{Color, Rect};
    use crate::utils::testing::{count_color, text_at};

    fn game(seed: u32) -> Flappy<TestingContext> {
        let _ = env_logger::builder().is_test(true).try_init();
        Flappy::new(TestingContext::new(seed)).unwrap()
    }

    fn run_to_game_over(game: &mut Flappy<TestingContext>) -> usize {
        let mut frames = 0;
        while !game.state().is_game_over() {
            game.tick().unwrap();
            frames += 1;
            assert!(frames < 1000, "bird never hit anything");
        }
        frames
    }

    #[test]
    fn setup_clears_both_buffers() {
        let game = game(42);
        assert_region!(game.ctx.front(), Rect::SCREEN, Color::SKY_BLUE);
        assert_region!(game.ctx.back(), Rect::SCREEN, Color::SKY_BLUE);
        assert_eq!(text_at(game.ctx.grid(), 0, 0, TEXT_COLUMNS), " ".repeat(TEXT_COLUMNS));
        assert_eq!(game.ctx.swaps, 1);
        assert_eq!(game.state().phase, Phase::Playing);
    }

    #[test]
    fn seed_comes_from_context() {
        let game = game(42);
        assert_eq!(game.state().pipes[0].gap_y, 118);
        assert_eq!(game.state().pipes[1].gap_y, 133);
    }

    #[test]
    fn frame_draws_sprites_and_swaps() {
        let mut game = game(42);
        game.tick().unwrap();

        let ctx = &game.ctx;
        assert_eq!(ctx.swaps, 2);
        assert_region!(ctx.front(), Rect::new(50, 116, 59, 125), Color::YELLOW);
        assert_eq!(count_color(ctx.front(), Color::YELLOW), 100);
        // first pipe scrolled one column into view, gap centered at 118
        assert_region!(ctx.front(), Rect::new(319, 0, 319, 73), Color::GREEN);
        assert_region!(ctx.front(), Rect::new(319, 74, 319, 162), Color::SKY_BLUE);
        assert_region!(ctx.front(), Rect::new(319, 163, 319, 239), Color::GREEN);
        assert_eq!(text_at(ctx.grid(), 2, 2, 8), "Score: 0");
    }

    #[test]
    fn swap_waits_for_display() {
        let mut game = game(1);
        // two pending polls plus the completing one, per swap
        assert_eq!(game.ctx.polls, 3);
        game.tick().unwrap();
        assert_eq!(game.ctx.polls, 6);
        assert_eq!(game.ctx.swaps, 2);
    }

    #[test]
    fn falls_to_floor_without_input() {
        let mut game = game(42);
        assert_eq!(run_to_game_over(&mut game), 32);
        assert_eq!(game.state().bird.y, 235);
    }

    #[test]
    fn game_over_overlay_every_frame() {
        let mut game = game(42);
        run_to_game_over(&mut game);
        let state = game.state().clone();
        let swaps = game.ctx.swaps;

        for n in 1..=5 {
            game.tick().unwrap();
            let grid = game.ctx.grid();
            assert_eq!(text_at(grid, 35, 29, 9), "Game Over");
            assert_eq!(text_at(grid, 35, 31, 8), "Score: 0");
            assert_eq!(text_at(grid, 28, 33, 21), "Press KEY3 to restart");
            assert_eq!(game.ctx.swaps, swaps + n);
        }
        assert_eq!(game.state(), &state);
    }

    #[test]
    fn jump_ignored_after_game_over() {
        let mut game = game(42);
        run_to_game_over(&mut game);
        let state = game.state().clone();

        game.ctx.press(Buttons::JUMP);
        game.tick().unwrap();
        assert_eq!(game.state(), &state);
    }

    #[test]
    fn held_jump_keeps_bird_at_ceiling() {
        let mut game = game(42);
        game.ctx.press(Buttons::JUMP);
        for _ in 0..200 {
            game.tick().unwrap();
            assert!(!game.state().is_game_over());
        }
        assert_eq!((game.state().bird.y, game.state().bird.vy), (0, 0));
    }

    #[test]
    fn restart_after_game_over() {
        let mut game = game(42);
        run_to_game_over(&mut game);
        game.tick().unwrap();

        game.ctx.press(Buttons::RESTART);
        game.tick().unwrap();
        game.ctx.release();

        let state = game.state();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        // respawned at 320 and 490, then scrolled by this frame
        assert_eq!((state.pipes[0].x, state.pipes[1].x), (319, 489));
        assert_eq!((state.pipes[0].gap_y, state.pipes[1].gap_y), (62, 189));
        assert_eq!((state.bird.y, state.bird.vy), (116, -4));

        let grid = game.ctx.grid();
        assert_eq!(text_at(grid, 35, 29, 9), "         ");
        assert_eq!(text_at(grid, 2, 2, 8), "Score: 0");
    }

    #[test]
    fn restart_ignored_while_playing() {
        let mut game = game(42);
        for _ in 0..10 {
            game.tick().unwrap();
        }
        game.ctx.press(Buttons::RESTART);
        game.tick().unwrap();
        assert_eq!(game.state().pipes[0].x, 309);
    }

    #[test]
    fn passing_a_pipe_scores() {
        let mut game = game(42);
        game.state.pipes[0].x = BIRD_X - PIPE_WIDTH + 1;
        game.state.pipes[0].gap_y = 120;

        game.tick().unwrap();
        assert_eq!(game.state().score, 0);
        game.tick().unwrap();
        assert_eq!(game.state().score, 1);
        assert_eq!(text_at(game.ctx.grid(), 2, 2, 8), "Score: 1");
        assert!(!game.state().is_game_over());
    }

    #[test]
    fn overlay_keeps_last_frame() {
        let mut game = game(42);
        run_to_game_over(&mut game);
        game.tick().unwrap();
        game.tick().unwrap();
        // the crashed bird is still on the buffer drawn in the final frame
        let crashed = game.state().bird.footprint().clip();
        let drawn_in = if game.ctx.swaps % 2 == 0 {
            game.ctx.back()
        } else {
            game.ctx.front()
        };
        assert_region!(drawn_in, crashed, Color::YELLOW);
    }
}
