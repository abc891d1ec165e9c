#![cfg_attr(not(test), no_std)]
pub mod builder;
pub mod collision;
pub mod consts;
pub mod context;
pub mod entity;
pub mod game;
pub mod physics;
pub mod render;
pub mod rng;
pub mod state;
pub mod surface;
pub mod text;
mod utils;

pub use builder::Builder;
pub use context::{Buttons, Context};
pub use game::Flappy;
pub use state::{GameState, Phase};
pub use surface::{Color, Rect, Surface};
pub use text::TextPlane;
