use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use uuid::Uuid;

use crate::{
    config::GameConfig,
    dice::Dice,
    protocol::{Action, MsgOut, WIN_ANNOUNCEMENT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    Rolled,
    NewGame,
}

pub struct Game {
    dice: Dice,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => {
                info!("Seeding dice with `{seed}`");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let dice = Dice::new(&mut rng);
        Self { dice, rng }
    }

    #[cfg(test)]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    pub fn new_game(&mut self) {
        self.dice = Dice::new(&mut self.rng);
        info!("New game dealt: {:?}", self.dice.values());
    }

    pub fn roll(&mut self) -> RollOutcome {
        if self.is_won() {
            self.new_game();
            return RollOutcome::NewGame;
        }
        self.dice = self.dice.rolled(&mut self.rng);
        info!("Rolled: {:?}", self.dice.values());
        RollOutcome::Rolled
    }

    /// Unknown ids leave the dice untouched and return `false`.
    pub fn toggle_hold(&mut self, id: &Uuid) -> bool {
        match self.dice.with_hold_toggled(id) {
            Some(dice) => {
                self.dice = dice;
                debug!(
                    "Die `{id}` held: {:?}",
                    self.dice.get(id).map(|die| die.is_held())
                );
                true
            }
            None => {
                warn!("No die with id `{id}`, hold ignored");
                false
            }
        }
    }

    pub fn is_won(&self) -> bool {
        self.dice.is_won()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.status() {
            GameStatus::Playing => "Roll",
            GameStatus::Won => "New Game",
        }
    }

    pub fn snapshot(&self) -> MsgOut {
        MsgOut::Dice {
            dice: self.dice.iter().cloned().collect(),
            won: self.is_won(),
            button: self.action_label(),
        }
    }

    pub fn handle(&mut self, action: Action) -> Vec<MsgOut> {
        let was_won = self.is_won();
        match action {
            Action::Roll => {
                self.roll();
            }
            Action::Hold { id } => {
                self.toggle_hold(&id);
            }
            Action::Show => {}
        }

        let mut out = Vec::with_capacity(2);
        if !was_won && self.is_won() {
            info!("Game won with all dice on `{}`", self.dice.values()[0]);
            out.push(MsgOut::GameWon {
                message: WIN_ANNOUNCEMENT,
            });
        }
        out.push(self.snapshot());
        out
    }

    #[cfg(test)]
    fn with_dice(dice: Dice) -> Self {
        Self {
            dice,
            rng: StdRng::seed_from_u64(99),
        }
    }
}
