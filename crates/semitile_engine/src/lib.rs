#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
//! Data model for 4bpp tile graphics: tiles, palettes and tilemaps
//! together with their binary representations.

mod error;
pub use error::*;

mod position;
pub use position::*;

mod tile;
pub use tile::*;

mod palette;
pub use palette::*;

mod tilemap;
pub use tilemap::*;
