mod config;
mod dice;
mod die;
mod game;
mod protocol;
mod session;

use anyhow::Result;
use tokio::io::BufReader;

use crate::{config::GameConfig, game::Game};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env()?;
    let mut game = Game::new(config);
    session::run(
        &mut game,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
