//! Combat participants and their mutable attributes.
//!
//! A [`Character`] is a single concrete record: the differences between
//! characters are pure data (stats, element, skill list), never behaviour.
mod character;
mod element;
mod party;
mod skill;

pub use character::{Character, CharacterTemplate};
pub use element::Element;
pub use party::{Party, alive_indices, any_alive};
pub use skill::Skill;
