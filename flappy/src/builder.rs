use crate::context::Context;
use crate::game::Flappy;

pub struct Builder<C: Context> {
    context: Option<C>,
    seed: Option<u32>,
}

impl<C: Context> Builder<C> {
    pub fn new() -> Self {
        Self {
            context: None,
            seed: None,
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Use a fixed seed instead of asking the context for one
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Flappy<C>, &'static str> {
        let mut context = self.context.ok_or("Context not provided")?;
        let seed = match self.seed {
            Some(seed) => seed,
            None => context.read_seed(),
        };
        Flappy::with_seed(context, seed)
    }
}

impl<C: Context> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}
