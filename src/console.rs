//! Line-oriented console collaborators.

use crate::io::{GameEvent, InputSource, OutputSink, Prompt, closed_error};
use bridge_game::{Cell, GameOutcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, trace};

/// Reads trimmed lines from any buffered reader, printing prompts to `W`.
///
/// Pass [`io::sink()`] as the writer to suppress prompts.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates a console input.
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn request(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        writeln!(self.prompts, "{}", prompt.text())?;
        self.prompts.flush()?;

        // Undecodable bytes become replacement characters and fail validation.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        let raw = String::from_utf8_lossy(&line).trim().to_string();
        trace!(%raw, "Line read");
        Ok(Some(raw))
    }
}

/// Human-readable rendering of game events.
#[derive(Debug)]
pub struct TextOutput<W> {
    writer: W,
    closed: bool,
}

impl<W: Write> TextOutput<W> {
    /// Creates a text renderer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn lane_line(cells: &[Cell]) -> String {
        let symbols: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
        format!("[ {} ]", symbols.join(" | "))
    }

    fn result_lines(outcome: &GameOutcome) -> [String; 2] {
        let verdict = if outcome.is_success() {
            "Success"
        } else {
            "Failure"
        };
        [
            format!("Game succeeded: {verdict}"),
            format!("Total attempts: {}", outcome.attempt_count()),
        ]
    }
}

impl<W: Write> OutputSink for TextOutput<W> {
    #[instrument(skip(self))]
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        let w = &mut self.writer;
        match event {
            GameEvent::Started => {
                writeln!(w, "Bridge crossing game started.")?;
                writeln!(w)?;
            }
            GameEvent::Map(map) => {
                writeln!(w, "{}", Self::lane_line(map.upper()))?;
                writeln!(w, "{}", Self::lane_line(map.lower()))?;
            }
            GameEvent::Finished { is_fail } => {
                if !is_fail {
                    writeln!(w)?;
                }
                writeln!(w, "Final game result")?;
            }
            GameEvent::Result(outcome) => {
                writeln!(w)?;
                for line in Self::result_lines(outcome) {
                    writeln!(w, "{line}")?;
                }
            }
            GameEvent::InvalidInput { message } => writeln!(w, "{message}")?,
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        self.closed = true;
        self.writer.flush()
    }
}

/// One JSON object per event, newline-delimited.
#[derive(Debug)]
pub struct JsonOutput<W> {
    writer: W,
    closed: bool,
}

impl<W: Write> JsonOutput<W> {
    /// Creates a JSON lines renderer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonOutput<W> {
    #[instrument(skip(self))]
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        self.closed = true;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_game::{
        BridgeBuilder, BridgeGame, Lane, ScriptedLanes, check_bridge_size,
    };

    fn failed_game() -> BridgeGame {
        let lanes = ScriptedLanes::from_tokens("UDU").unwrap();
        let mut game = BridgeGame::new(BridgeBuilder::build(check_bridge_size("3").unwrap(), lanes));
        game.make_move(Lane::Up).unwrap();
        game.make_move(Lane::Up).unwrap();
        game
    }

    fn render(events: &[GameEvent]) -> String {
        let mut out = TextOutput::new(Vec::new());
        for event in events {
            out.emit(event).unwrap();
        }
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_console_input_trims_and_prompts() {
        let mut prompts = Vec::new();
        let mut input = ConsoleInput::new(&b"  5 \nU\n"[..], &mut prompts);
        assert_eq!(input.request(Prompt::BridgeSize).unwrap().as_deref(), Some("5"));
        assert_eq!(input.request(Prompt::Direction).unwrap().as_deref(), Some("U"));
        assert_eq!(input.request(Prompt::Direction).unwrap(), None);
        drop(input);
        let shown = String::from_utf8(prompts).unwrap();
        assert!(shown.starts_with("Enter the bridge length.\n"));
    }

    #[test]
    fn test_console_input_decodes_bad_bytes_lossily() {
        let mut input = ConsoleInput::new(&b"\xff\xfe\r\nD\n"[..], io::sink());
        let raw = input.request(Prompt::Direction).unwrap().unwrap();
        assert!(raw.contains(char::REPLACEMENT_CHARACTER));
        assert!(bridge_game::check_direction(&raw).is_err());
        assert_eq!(input.request(Prompt::Direction).unwrap().as_deref(), Some("D"));
    }

    #[test]
    fn test_text_map_layout() {
        let text = render(&[GameEvent::Map(failed_game().crossing_map())]);
        assert_eq!(text, "[ O | X ]\n[   |   ]\n");
    }

    #[test]
    fn test_text_final_banner_and_result() {
        let game = failed_game();
        let text = render(&[
            GameEvent::Finished { is_fail: true },
            GameEvent::Result(game.outcome()),
        ]);
        assert_eq!(
            text,
            "Final game result\n\nGame succeeded: Failure\nTotal attempts: 1\n"
        );
    }

    #[test]
    fn test_text_success_banner_has_leading_blank_line() {
        let text = render(&[GameEvent::Finished { is_fail: false }]);
        assert_eq!(text, "\nFinal game result\n");
    }

    #[test]
    fn test_emit_after_close_fails() {
        let mut out = TextOutput::new(Vec::new());
        out.close().unwrap();
        assert!(out.emit(&GameEvent::Started).is_err());
        assert!(out.close().is_err());
    }

    #[test]
    fn test_json_lines() {
        let mut out = JsonOutput::new(Vec::new());
        out.emit(&GameEvent::Started).unwrap();
        out.emit(&GameEvent::Map(failed_game().crossing_map())).unwrap();
        out.close().unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["event"], "started");
        assert_eq!(lines[1]["event"], "map");
        assert_eq!(lines[1]["upper"][1], "Wrong");
        assert_eq!(lines[1]["lower"][0], "Blank");
    }
}
