use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Elemental affinity of a character.
///
/// The "beats" relation is a fixed directed 5-cycle:
/// Fire → Wind → Psychic → Thunder → Water → Fire.
/// [`Element::None`] neither beats nor is beaten by anything.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Wind,
    Psychic,
    Thunder,
    Water,
    #[default]
    None,
}

impl Element {
    /// Returns the element this one is strong against.
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Wind),
            Element::Wind => Some(Element::Psychic),
            Element::Psychic => Some(Element::Thunder),
            Element::Thunder => Some(Element::Water),
            Element::Water => Some(Element::Fire),
            Element::None => None,
        }
    }

    /// Returns the element that is strong against this one.
    pub const fn weakness(self) -> Option<Element> {
        match self {
            Element::Wind => Some(Element::Fire),
            Element::Psychic => Some(Element::Wind),
            Element::Thunder => Some(Element::Psychic),
            Element::Water => Some(Element::Thunder),
            Element::Fire => Some(Element::Water),
            Element::None => None,
        }
    }

    /// True when an attack of this element gets the elemental advantage.
    pub fn has_advantage_over(self, defender: Element) -> bool {
        self.beats() == Some(defender)
    }
}
