//! TUI application state and logic

use crate::core::{GameReport, GameSession, LetterSet, MaxScoreRule, WordBank, is_pangram};
use crate::output::formatters::format_grade;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input box accepts
const MAX_INPUT_LEN: usize = 24;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub rule: MaxScoreRule,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub report: Option<GameReport>,
    pub show_rules: bool,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Entry,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_grade: Option<u32>,
    pub total_words: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, letters: LetterSet, rng: StdRng, rule: MaxScoreRule) -> Self {
        Self {
            session: GameSession::new(letters, bank),
            rule,
            input_mode: InputMode::Entry,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome to the Spelling Bee! Press '?' for the rules.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Enter on an empty line ends the game."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            report: None,
            show_rules: false,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Submit the word in the input buffer, or finish the game if it is empty
    pub fn handle_enter(&mut self) {
        let word = std::mem::take(&mut self.input_buffer);
        if word.is_empty() {
            self.finish_game();
        } else {
            self.handle_submission(&word);
        }
    }

    pub fn handle_submission(&mut self, word: &str) {
        match self.session.submit(word) {
            Ok(points) if is_pangram(word, self.session.letters()) => {
                self.add_message(
                    &format!("🐝 PANGRAM! {} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(points) => {
                self.add_message(
                    &format!("{} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    /// Grade the current game and switch to the results screen
    pub fn finish_game(&mut self) {
        let report = self.session.clone().finish(self.rule);

        self.stats.games_played += 1;
        self.stats.total_words += report.accepted.len();
        if let Ok(grade) = report.grade {
            self.stats.best_grade = Some(self.stats.best_grade.map_or(grade, |b| b.max(grade)));
        }

        self.add_message(
            &format!(
                "Final score {} of {} ({})",
                report.score,
                report.max_score,
                format_grade(&report.grade)
            ),
            MessageStyle::Info,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);

        self.report = Some(report);
        self.input_mode = InputMode::Finished;
    }

    pub fn new_game(&mut self) {
        let letters = LetterSet::generate(&mut self.rng);
        self.session = GameSession::new(letters, self.session.bank());
        self.report = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Entry;
        self.add_message("New puzzle! Find words with the center letter.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Entry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.show_rules = !self.show_rules,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < MAX_INPUT_LEN {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.handle_enter(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
