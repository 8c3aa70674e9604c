//! Tests for the game controller with scripted collaborators.

use std::collections::VecDeque;
use std::io;

use bridge_crossing::{GameController, GameEvent, InputSource, OutputSink, Prompt, SessionEnd};
use bridge_game::{Cell, ScriptedLanes};

/// Replays canned lines and records which prompts were asked.
struct ScriptedInput {
    lines: VecDeque<&'static str>,
    asked: Vec<Prompt>,
}

impl ScriptedInput {
    fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: lines.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl InputSource for &mut ScriptedInput {
    fn request(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.asked.push(prompt);
        Ok(self.lines.pop_front().map(str::to_string))
    }
}

/// Collects events and counts closes.
#[derive(Default)]
struct RecordingOutput {
    events: Vec<GameEvent>,
    closes: usize,
}

impl OutputSink for &mut RecordingOutput {
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closes += 1;
        Ok(())
    }
}

fn run(lines: &[&'static str]) -> (SessionEnd, ScriptedInput, RecordingOutput) {
    let mut input = ScriptedInput::new(lines);
    let mut output = RecordingOutput::default();
    let lanes = ScriptedLanes::from_tokens("UDU").expect("Valid script");
    let end = GameController::new(&mut input, &mut output, lanes)
        .run()
        .expect("Session should not fail");
    (end, input, output)
}

fn invalid_count(output: &RecordingOutput) -> usize {
    output
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::InvalidInput { .. }))
        .count()
}

#[test]
fn test_clean_crossing() {
    let (end, _, output) = run(&["3", "U", "D", "U"]);

    let SessionEnd::Succeeded(outcome) = end else {
        panic!("Expected success, got {end:?}");
    };
    assert!(outcome.is_success());
    assert_eq!(outcome.attempt_count(), 1);

    assert_eq!(output.events[0], GameEvent::Started);
    // Start, three maps, banner, final map, result.
    assert_eq!(output.events.len(), 7);
    assert_eq!(output.events[4], GameEvent::Finished { is_fail: false });
    assert_eq!(output.events[6], GameEvent::Result(outcome));
    assert_eq!(output.closes, 1);
}

#[test]
fn test_fail_retry_then_cross() {
    let (end, input, output) = run(&["3", "D", "R", "U", "D", "U"]);

    let SessionEnd::Succeeded(outcome) = end else {
        panic!("Expected success, got {end:?}");
    };
    assert_eq!(outcome.attempt_count(), 2);
    assert!(input.asked.contains(&Prompt::Command));

    let GameEvent::Map(first) = &output.events[1] else {
        panic!("Expected map after first move");
    };
    assert_eq!(first.upper(), &vec![Cell::Blank]);
    assert_eq!(first.lower(), &vec![Cell::Wrong]);
}

#[test]
fn test_fail_then_quit() {
    let (end, _, output) = run(&["3", "D", "Q"]);

    let SessionEnd::Quit(outcome) = end else {
        panic!("Expected quit, got {end:?}");
    };
    assert!(!outcome.is_success());
    assert_eq!(outcome.attempt_count(), 1);

    let tail = &output.events[output.events.len() - 3..];
    assert_eq!(tail[0], GameEvent::Finished { is_fail: true });
    let GameEvent::Map(map) = &tail[1] else {
        panic!("Expected final map");
    };
    assert_eq!(map.lower(), &vec![Cell::Wrong]);
    assert_eq!(tail[2], GameEvent::Result(outcome));
    assert_eq!(output.closes, 1);
}

#[test]
fn test_invalid_input_reprompts_same_step() {
    let (end, input, output) = run(&[
        "abc", "2", "21", "3", "X", "u", "D", "retry", "R", "U", "D", "U",
    ]);

    assert!(matches!(end, SessionEnd::Succeeded(_)));
    assert_eq!(invalid_count(&output), 6);
    assert_eq!(
        &input.asked[..4],
        &[Prompt::BridgeSize, Prompt::BridgeSize, Prompt::BridgeSize, Prompt::BridgeSize]
    );

    let messages: Vec<&str> = output
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::InvalidInput { message } => Some(message.as_str()),
            _ => None,
        })
        .collect();
    assert!(messages.iter().all(|m| m.starts_with("[ERROR]")));
}

#[test]
fn test_end_of_input_terminates_cleanly() {
    for lines in [&[][..], &["3"][..], &["3", "D"][..], &["abc"][..]] {
        let (end, _, output) = run(lines);
        assert_eq!(end, SessionEnd::InputClosed, "lines: {lines:?}");
        assert_eq!(output.closes, 1);
    }
}
