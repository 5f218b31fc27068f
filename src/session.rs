use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    game::Game,
    protocol::{MsgOut, parse_action},
};

/// Sends the opening snapshot, then answers one JSON action per input line until EOF.
pub async fn run(
    game: &mut Game,
    reader: impl AsyncBufRead + Unpin,
    mut writer: impl AsyncWrite + Unpin,
) -> Result<()> {
    send(&mut writer, &game.snapshot()).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("Unable to read input")? {
        if line.trim().is_empty() {
            continue;
        }
        let replies = match parse_action(&line) {
            Ok(action) => game.handle(action),
            Err(err) => {
                warn!("Unknown message: `{}`. The error: `{}`", line, err);
                vec![MsgOut::UnknownMessage(err.to_string())]
            }
        };
        for msg in &replies {
            send(&mut writer, msg).await?;
        }
    }

    info!("Input closed, bye!");
    Ok(())
}

async fn send(out: &mut (impl AsyncWrite + Unpin), msg: &MsgOut) -> Result<()> {
    let mut line = serde_json::to_vec(msg).context("Unable to encode message")?;
    line.push(b'\n');
    out.write_all(&line).await.context("Unable to write output")?;
    out.flush().await?;
    Ok(())
}
