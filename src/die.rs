use rand::Rng;
use serde::Serialize;
use uuid::{Builder, Uuid};

pub const FACES: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Die {
    id: Uuid,
    value: u8,
    is_held: bool,
}

impl Die {
    /// Both the id and the face come from `rng`, so a seeded game deals the same dice.
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self {
            id: Builder::from_random_bytes(rng.random()).into_uuid(),
            value: roll_face(rng),
            is_held: false,
        }
    }

    /// Same die, new face. Held dice are the caller's business.
    pub fn rerolled(&self, rng: &mut impl Rng) -> Self {
        Self {
            value: roll_face(rng),
            ..self.clone()
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            is_held: !self.is_held,
            ..self.clone()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.is_held
    }

    #[cfg(test)]
    pub fn fixed(value: u8, is_held: bool) -> Self {
        assert!((1..=FACES).contains(&value), "face out of range: {value}");
        Self {
            id: Uuid::new_v4(),
            value,
            is_held,
        }
    }
}

fn roll_face(rng: &mut impl Rng) -> u8 {
    rng.random_range(1..=FACES)
}
