//! Core engine types: handles, geometry, RNG, configuration, errors.
//!
//! Nothing here knows about solitaire rules. Cards, piles and variants are
//! built on top of these pieces.

pub mod config;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod rng;

pub use config::{BaizeConfig, DEFAULT_VARIANT};
pub use error::{EngineError, Legality, MoveError};
pub use geometry::{Geometry, Point, Rect};
pub use handle::{CardRef, PileId};
pub use rng::{GameRng, GameRngState};
