//! Card identity, runtime card state, and pairwise comparison.

pub mod definition;
pub mod instance;
pub mod pair;

pub use definition::{CardId, Color, Suit, ACE, CARDS_PER_SUIT, KING};
pub use instance::Card;
pub use pair::CardPair;
