#![no_std]

pub mod color;
pub mod fs;
pub mod header;
pub mod sprite;

pub use color::{ALPHA_THRESHOLD, Rgba, TRANSPARENT};
pub use header::{HeaderError, write_header};
pub use sprite::{Sprite, SpriteError};

extern crate alloc;
