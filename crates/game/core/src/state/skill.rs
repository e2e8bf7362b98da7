/// A named battle technique. Immutable data; behaviour lives in the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    /// Base power; 0 means the skill deals no damage.
    pub power: u32,
    /// Flavor line spoken when the skill is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quote: String,
    /// Added to the caster's attack for their next action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_bonus_next_turn: u32,
    /// Seals the caster's skills for their next two own turns.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locks_caster: bool,
}

impl Skill {
    /// Plain damaging skill.
    pub fn strike(name: impl Into<String>, power: u32, quote: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power,
            quote: quote.into(),
            attack_bonus_next_turn: 0,
            locks_caster: false,
        }
    }

    /// Zero-power skill that raises the caster's next action.
    pub fn charge(name: impl Into<String>, bonus: u32, quote: impl Into<String>) -> Self {
        Self {
            attack_bonus_next_turn: bonus,
            ..Self::strike(name, 0, quote)
        }
    }

    /// Damaging skill that seals the caster's skills afterwards.
    pub fn recoil(name: impl Into<String>, power: u32, quote: impl Into<String>) -> Self {
        Self {
            locks_caster: true,
            ..Self::strike(name, power, quote)
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }

    pub fn is_charge(&self) -> bool {
        self.power == 0 && self.attack_bonus_next_turn > 0
    }

    pub fn is_recoil(&self) -> bool {
        self.locks_caster
    }
}
