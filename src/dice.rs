use indexmap::IndexMap;
use rand::Rng;
use uuid::Uuid;

use crate::die::Die;

pub const NUMBER_OF_DICE: usize = 10;

/// The ten dice on the table, in display order.
///
/// Every operation returns a new `Dice`; individual records are replaced, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    dice: IndexMap<Uuid, Die>,
}

impl Dice {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::from_dice((0..NUMBER_OF_DICE).map(|_| Die::roll(rng)))
    }

    fn from_dice(dice: impl IntoIterator<Item = Die>) -> Self {
        let dice: IndexMap<Uuid, Die> = dice.into_iter().map(|die| (die.id(), die)).collect();
        debug_assert_eq!(dice.len(), NUMBER_OF_DICE, "ids must be unique");
        Self { dice }
    }

    pub fn rolled(&self, rng: &mut impl Rng) -> Self {
        Self::from_dice(self.dice.values().map(|die| {
            if die.is_held() {
                die.clone()
            } else {
                die.rerolled(rng)
            }
        }))
    }

    /// Returns `None` if no die carries `id`.
    pub fn with_hold_toggled(&self, id: &Uuid) -> Option<Self> {
        if !self.dice.contains_key(id) {
            return None;
        }
        Some(Self::from_dice(self.dice.values().map(|die| {
            if die.id() == *id {
                die.toggled()
            } else {
                die.clone()
            }
        })))
    }

    pub fn is_won(&self) -> bool {
        let Some(first) = self.dice.values().next() else {
            return false;
        };
        self.dice.values().all(Die::is_held)
            && self.dice.values().all(|die| die.value() == first.value())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Die> {
        self.dice.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.values()
    }

    pub fn values(&self) -> Vec<u8> {
        self.iter().map(Die::value).collect()
    }

    #[cfg(test)]
    pub fn fixed(faces: &[(u8, bool)]) -> Self {
        Self::from_dice(
            faces
                .iter()
                .map(|&(value, is_held)| Die::fixed(value, is_held)),
        )
    }
}
