//! Bubble Arena entry point
//!
//! Wires the listener thread, the console frontend, and the tick loop
//! together, and owns the outer retry loop that rebuilds the game state.

use std::io::BufRead;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use bubble_arena::frontend::Frontend;
use bubble_arena::highscores::HighScoreRecord;
use bubble_arena::input::{InputEvent, InputQueue, InputSender};
use bubble_arena::sim::{EndDecision, GameEvent, GamePhase, GameState, tick};
use bubble_arena::{Settings, persistence};

fn main() {
    env_logger::init();
    log::info!("bubble-arena starting");

    let settings = Settings::default();
    let (input_tx, input_queue) = InputQueue::channel();
    let (text_tx, text_rx) = channel();
    spawn_listener(input_tx, text_tx);

    let mut frontend = ConsoleFrontend::new(text_rx);
    run(&settings, input_queue, &mut frontend);
    log::info!("bubble-arena exiting");
}

/// Outer retry loop: one iteration per game session
fn run(settings: &Settings, mut queue: InputQueue, frontend: &mut dyn Frontend) {
    let tick_interval = Duration::from_secs_f64(1.0 / settings.tick_hz as f64);

    'session: loop {
        let high = persistence::load_or_default(&settings.score_path);
        let seed = settings.run_seed();
        log::info!("starting session with seed {}", seed);

        let mut state = GameState::new(seed);
        if let Some(color) = high.achievement_color() {
            frontend.apply(&state, &GameEvent::AvatarColor(color));
        }
        frontend.draw_hud(&state, &high);

        loop {
            let started = Instant::now();
            let events = queue.drain();
            for event in tick(&mut state, &events) {
                frontend.apply(&state, &event);
            }

            if state.phase == GamePhase::Ended {
                match frontend.end_decision(state.score) {
                    EndDecision::Retry => {
                        maybe_record(settings, frontend, &high, state.score);
                        continue 'session;
                    }
                    EndDecision::Abort => {
                        maybe_record(settings, frontend, &high, state.score);
                        return;
                    }
                    EndDecision::Ignore => state.ignore_ending(),
                }
            }

            if let Some(rest) = tick_interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

/// Persist the session score iff it beats the stored record
fn maybe_record(
    settings: &Settings,
    frontend: &mut dyn Frontend,
    high: &HighScoreRecord,
    score: u32,
) {
    if !high.improves(score) {
        return;
    }
    let name = frontend.player_name();
    let record = HighScoreRecord::new(name, score);
    if let Err(e) = persistence::store(&settings.score_path, &record) {
        log::error!("failed to save high score: {}", e);
    }
}

/// Map one typed token to an input command. Unrecognized tokens are free
/// text and go to whichever prompt is waiting.
fn decode_key(token: &str) -> Option<InputEvent> {
    match token {
        "space" => Some(InputEvent::EnableMovement),
        "esc" | "escape" => Some(InputEvent::DisableMovement),
        "u" => Some(InputEvent::Unstick),
        "shift" => Some(InputEvent::UseSlowCharge),
        "left" => Some(InputEvent::TurnLeft),
        "right" => Some(InputEvent::TurnRight),
        _ => None,
    }
}

/// Background stdin listener: decodes key tokens into input events and
/// forwards everything else as free text for the blocking prompts
fn spawn_listener(input_tx: InputSender, text_tx: Sender<String>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let token = line.trim().to_lowercase();
            match decode_key(&token) {
                Some(event) => input_tx.send(event),
                None => {
                    if text_tx.send(line).is_err() {
                        break;
                    }
                }
            }
        }
        log::debug!("stdin listener finished");
    });
}

/// Line-oriented frontend: prints state changes, reads free text from the
/// listener's pass-through channel
struct ConsoleFrontend {
    text_rx: Receiver<String>,
}

impl ConsoleFrontend {
    fn new(text_rx: Receiver<String>) -> Self {
        Self { text_rx }
    }

    fn read_line(&self) -> String {
        self.text_rx.recv().unwrap_or_default()
    }
}

impl Frontend for ConsoleFrontend {
    fn draw_hud(&mut self, state: &GameState, high: &HighScoreRecord) {
        println!(
            "Points: {}  High Score: {}: {}  Speed: {:.1}  Lives: {}  Slow Bubbles: {}",
            state.score,
            high.name,
            high.score,
            state.avatar.speed,
            state.avatar.lives,
            state.avatar.slow_charges,
        );
    }

    fn apply(&mut self, _state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::AvatarColor(color) => println!("avatar color: {}", color),
            GameEvent::LivesChanged(lives) => println!("lives: {}", lives),
            GameEvent::ScoreChanged(score) => println!("points: {}", score),
            GameEvent::SpeedChanged(speed) => println!("speed: {:.1}", speed),
            GameEvent::SlowChargesChanged(n) => println!("slow bubbles: {}", n),
            GameEvent::BossShown => println!("the boss has appeared!"),
            GameEvent::BossColor(color) => println!("boss color: {:?}", color),
            GameEvent::BossDefeated => println!("boss defeated!"),
            GameEvent::GameEnded { score } => {
                println!("you have ended with {} points", score)
            }
            GameEvent::ThresholdMissed { threshold } => {
                println!("(score jumped past the {} mark)", threshold)
            }
            // Position-only updates; a graphical frontend would redraw here
            GameEvent::PointBubbleMoved(_)
            | GameEvent::SlowBubbleMoved(_)
            | GameEvent::AvatarRecentered(_)
            | GameEvent::BossMoved(_) => {}
        }
    }

    fn end_decision(&mut self, score: u32) -> EndDecision {
        loop {
            println!("Game over with {} points: [r]etry / [a]bort / [i]gnore?", score);
            let answer = self.read_line();
            match answer.trim().to_lowercase().as_str() {
                "r" | "retry" => return EndDecision::Retry,
                "a" | "abort" | "" => return EndDecision::Abort,
                "i" | "ignore" => return EndDecision::Ignore,
                other => println!("unrecognized choice: {:?}", other),
            }
        }
    }

    fn player_name(&mut self) -> String {
        println!("ENTER YOUR NAME:");
        self.read_line().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frontend stub that only answers the name prompt
    struct NamedFrontend(&'static str);

    impl Frontend for NamedFrontend {
        fn draw_hud(&mut self, _state: &GameState, _high: &HighScoreRecord) {}

        fn apply(&mut self, _state: &GameState, _event: &GameEvent) {}

        fn end_decision(&mut self, _score: u32) -> EndDecision {
            EndDecision::Abort
        }

        fn player_name(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn scratch_settings(name: &str) -> Settings {
        let mut score_path = std::env::temp_dir();
        score_path.push(format!("bubble_arena_{}_{}.json", name, std::process::id()));
        Settings {
            score_path,
            ..Default::default()
        }
    }

    #[test]
    fn test_maybe_record_persists_only_improvements() {
        let settings = scratch_settings("record");
        let _ = std::fs::remove_file(&settings.score_path);
        let mut frontend = NamedFrontend("ada");

        // Not an improvement: nothing written, no name prompt needed
        let high = HighScoreRecord::new("old", 100);
        maybe_record(&settings, &mut frontend, &high, 100);
        assert!(!settings.score_path.exists());

        // Improvement: record lands on disk with the prompted name
        maybe_record(&settings, &mut frontend, &high, 150);
        let stored = persistence::load_or_default(&settings.score_path);
        assert_eq!(stored, HighScoreRecord::new("ada", 150));

        // A worse later session leaves the file untouched
        maybe_record(&settings, &mut frontend, &stored, 120);
        assert_eq!(
            persistence::load_or_default(&settings.score_path),
            HighScoreRecord::new("ada", 150)
        );
        std::fs::remove_file(&settings.score_path).unwrap();
    }

    #[test]
    fn test_decode_key_bindings() {
        assert_eq!(decode_key("space"), Some(InputEvent::EnableMovement));
        assert_eq!(decode_key("esc"), Some(InputEvent::DisableMovement));
        assert_eq!(decode_key("u"), Some(InputEvent::Unstick));
        assert_eq!(decode_key("shift"), Some(InputEvent::UseSlowCharge));
        assert_eq!(decode_key("left"), Some(InputEvent::TurnLeft));
        assert_eq!(decode_key("right"), Some(InputEvent::TurnRight));
        assert_eq!(decode_key("retry"), None);
    }

    #[test]
    fn test_console_decision_parsing() {
        let (tx, rx) = channel();
        tx.send("nonsense".to_string()).unwrap();
        tx.send("i".to_string()).unwrap();
        let mut frontend = ConsoleFrontend::new(rx);
        assert_eq!(frontend.end_decision(50), EndDecision::Ignore);
    }

    #[test]
    fn test_console_name_prompt_trims() {
        let (tx, rx) = channel();
        tx.send("  Sam  ".to_string()).unwrap();
        let mut frontend = ConsoleFrontend::new(rx);
        assert_eq!(frontend.player_name(), "Sam");
    }
}
