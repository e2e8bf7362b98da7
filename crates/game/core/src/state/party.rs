use core::ops::{Deref, DerefMut};

use super::Character;

/// Ordered party roster. Insertion order is recruitment order.
///
/// The party only grows; defeated members stay in place and are simply not
/// actionable until they are restored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Party {
    members: Vec<Character>,
}

impl Party {
    pub fn new(members: Vec<Character>) -> Self {
        Self { members }
    }

    /// Appends a recruit at the end of the roster.
    pub fn recruit(&mut self, member: Character) {
        self.members.push(member);
    }

    /// Restores every member, alive or defeated.
    pub fn restore_all(&mut self) {
        for member in &mut self.members {
            member.restore();
        }
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.members.iter_mut().find(|member| member.name == name)
    }

    pub fn members(&self) -> &[Character] {
        &self.members
    }
}

impl Deref for Party {
    type Target = [Character];

    fn deref(&self) -> &Self::Target {
        &self.members
    }
}

impl DerefMut for Party {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.members
    }
}

impl FromIterator<Character> for Party {
    fn from_iter<T: IntoIterator<Item = Character>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Indices of living characters, in roster order.
pub fn alive_indices(roster: &[Character]) -> Vec<usize> {
    roster
        .iter()
        .enumerate()
        .filter_map(|(index, member)| member.is_alive().then_some(index))
        .collect()
}

pub fn any_alive(roster: &[Character]) -> bool {
    roster.iter().any(Character::is_alive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CharacterTemplate, Element};

    fn member(name: &str) -> Character {
        CharacterTemplate::new(name, Element::None, 5, 5, 50).spawn()
    }

    #[test]
    fn alive_indices_skip_defeated_members() {
        let mut party: Party = ["A", "B", "C"].into_iter().map(member).collect();
        party[1].take_damage(50);

        assert_eq!(alive_indices(&party), vec![0, 2]);
        assert!(any_alive(&party));

        party[0].take_damage(50);
        party[2].take_damage(50);
        assert!(alive_indices(&party).is_empty());
        assert!(!any_alive(&party));
    }

    #[test]
    fn restore_all_revives_defeated_members() {
        let mut party: Party = ["A", "B"].into_iter().map(member).collect();
        party[0].take_damage(50);
        party[1].take_damage(10);

        party.restore_all();

        assert!(party.iter().all(|m| m.health() == m.max_health));
    }

    #[test]
    fn recruit_appends_in_order() {
        let mut party: Party = ["A"].into_iter().map(member).collect();
        party.recruit(member("B"));
        let names: Vec<_> = party.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
