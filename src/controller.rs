//! Game orchestration: drives the bridge game from raw input.

use crate::io::{GameEvent, InputSource, OutputSink, Prompt};
use anyhow::{Context, Result};
use bridge_game::{
    BridgeBuilder, BridgeGame, Command, GameOutcome, InvalidInput, LaneGenerator,
    check_bridge_size, check_command_option, check_direction,
};
use tracing::{debug, info, instrument, warn};

/// How a session ended. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player crossed the bridge.
    Succeeded(GameOutcome),
    /// The player quit after a fall.
    Quit(GameOutcome),
    /// Input ran out before the game finished.
    InputClosed,
}

/// Orchestrates one game between an input source and an output sink.
pub struct GameController<I, O, G> {
    input: I,
    output: O,
    generator: G,
}

impl<I, O, G> GameController<I, O, G>
where
    I: InputSource,
    O: OutputSink,
    G: LaneGenerator,
{
    /// Creates a new controller.
    pub fn new(input: I, output: O, generator: G) -> Self {
        Self {
            input,
            output,
            generator,
        }
    }

    /// Plays a full session and closes the output exactly once.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors from the collaborators. Invalid input is
    /// reported through the output and asked for again.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<SessionEnd> {
        info!("Starting bridge crossing session");
        self.output
            .emit(&GameEvent::Started)
            .context("Failed to render start message")?;

        let end = self.play()?;
        info!(?end, "Session ended");

        self.output.close().context("Failed to close output")?;
        Ok(end)
    }

    fn play(&mut self) -> Result<SessionEnd> {
        let Some(size) = self.request_valid(Prompt::BridgeSize, check_bridge_size)? else {
            return Ok(SessionEnd::InputClosed);
        };
        let bridge = BridgeBuilder::build(size, &mut self.generator);
        let mut game = BridgeGame::new(bridge);

        loop {
            let Some(lane) = self.request_valid(Prompt::Direction, check_direction)? else {
                return Ok(SessionEnd::InputClosed);
            };
            let report = game.make_move(lane)?;
            self.output
                .emit(&GameEvent::Map(report.map().clone()))
                .context("Failed to render crossing map")?;

            if game.is_last() {
                self.finish(&game)?;
                return Ok(SessionEnd::Succeeded(game.outcome()));
            }
            if !game.is_fail() {
                continue;
            }

            info!(attempt = game.attempt_count(), "Attempt failed");
            let Some(command) = self.request_valid(Prompt::Command, check_command_option)? else {
                return Ok(SessionEnd::InputClosed);
            };
            match command {
                Command::Retry => game.retry()?,
                Command::Quit => {
                    self.finish(&game)?;
                    return Ok(SessionEnd::Quit(game.outcome()));
                }
            }
        }
    }

    /// Asks for `prompt` until `check` accepts the line or input ends.
    #[instrument(skip(self, check))]
    fn request_valid<T>(
        &mut self,
        prompt: Prompt,
        check: impl Fn(&str) -> Result<T, InvalidInput>,
    ) -> Result<Option<T>> {
        loop {
            let Some(raw) = self
                .input
                .request(prompt)
                .context("Failed to read input")?
            else {
                info!("Input closed");
                return Ok(None);
            };

            match check(&raw) {
                Ok(value) => {
                    debug!(%raw, "Input accepted");
                    return Ok(Some(value));
                }
                Err(err) => {
                    warn!(%raw, error = %err, "Input rejected");
                    self.output
                        .emit(&GameEvent::InvalidInput {
                            message: err.to_string(),
                        })
                        .context("Failed to render input error")?;
                }
            }
        }
    }

    fn finish(&mut self, game: &BridgeGame) -> Result<()> {
        let events = [
            GameEvent::Finished {
                is_fail: game.is_fail(),
            },
            GameEvent::Map(game.crossing_map()),
            GameEvent::Result(game.outcome()),
        ];
        for event in &events {
            self.output
                .emit(event)
                .context("Failed to render final result")?;
        }
        Ok(())
    }
}
