//! TUI application state and logic

use crate::core::RACK_SIZE;
use crate::game::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most recent messages kept for display
const MAX_MESSAGES: usize = 5;

/// Word being typed, with an editing cursor
///
/// Holds at most [`RACK_SIZE`] lowercase letters; the cursor sits between
/// characters, from 0 (before the first) to `len()` (after the last).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl InputBuffer {
    /// Longest word that can be typed
    pub const MAX_LEN: usize = RACK_SIZE;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a letter at the cursor
    ///
    /// Letters are lowercased. Returns `false` (and changes nothing) for
    /// non-letters or when the buffer is full.
    pub fn insert(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() || self.chars.len() >= Self::MAX_LEN {
            return false;
        }
        self.chars.insert(self.cursor, ch.to_ascii_lowercase());
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    /// Delete the character under the cursor (delete)
    pub fn delete_at(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Take the typed word, leaving the buffer empty
    pub fn take(&mut self) -> String {
        let word = self.text();
        self.clear();
        word
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
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

/// Application state
pub struct App<'d> {
    pub session: Session<'d>,
    pub input: InputBuffer,
    pub messages: Vec<Message>,
    /// Whether new racks get their top-word list computed
    pub compute_top: bool,
    pub should_quit: bool,
}

impl<'d> App<'d> {
    /// Wrap a session that already holds its first rack
    #[must_use]
    pub fn new(session: Session<'d>, compute_top: bool) -> Self {
        let mut app = Self {
            session,
            input: InputBuffer::new(),
            messages: Vec::new(),
            compute_top,
            should_quit: false,
        };
        app.add_message(
            "Spell words from your tiles. Blanks (_) match any letter for 0 points.",
            MessageStyle::Info,
        );
        app
    }

    /// Play the typed word
    pub fn submit_input(&mut self) {
        if self.input.is_empty() {
            return;
        }

        let word = self.input.take();
        let previous_best = self.session.best_score();
        let score = self.session.submit(&word);

        if score == 0 {
            self.add_message(
                &format!("'{}' scores nothing", word.to_uppercase()),
                MessageStyle::Error,
            );
        } else if score > previous_best {
            self.add_message(
                &format!("New best: {} for {score}!", word.to_uppercase()),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("{} scores {score}", word.to_uppercase()),
                MessageStyle::Info,
            );
        }

        if score > 0 && self.session.all_found() {
            self.add_message(
                "🎉 You found every top word! Ctrl-N for a new rack.",
                MessageStyle::Success,
            );
        }
    }

    pub fn shuffle(&mut self) {
        self.session.shuffle();
    }

    /// Deal a fresh random rack
    pub fn new_rack(&mut self) {
        if self.session.reset(None, self.compute_top).is_ok() {
            self.input.clear();
            self.messages.clear();
            self.add_message("New rack!", MessageStyle::Info);
        }
    }

    /// Show every top word
    pub fn reveal(&mut self) {
        self.session.reveal();
        self.add_message("Top words revealed", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_rack(),
            KeyCode::Char('r') if ctrl => self.reveal(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => {
                self.input.insert(c);
            }
            KeyCode::Tab => self.shuffle(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => self.input.delete_before(),
            KeyCode::Delete => self.input.delete_at(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(),
            _ => {}
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("TUI started on rack {}", app.session.rack());

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI closed, best score {}", app.session.best_score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn typed(text: &str) -> InputBuffer {
        let mut input = InputBuffer::new();
        for ch in text.chars() {
            input.insert(ch);
        }
        input
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        let mut session = Session::with_rng(dictionary, StdRng::seed_from_u64(3));
        session.load_rack("quitqqq".parse().unwrap(), true);
        App::new(session, true)
    }

    #[test]
    fn insert_appends_and_lowercases() {
        let input = typed("QuIt");
        assert_eq!(input.text(), "quit");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn insert_rejects_non_letters() {
        let mut input = typed("ab");
        assert!(!input.insert('1'));
        assert!(!input.insert(' '));
        assert!(!input.insert('é'));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn insert_is_capped() {
        let mut input = typed("abcdefg");
        assert!(!input.insert('h'));
        assert_eq!(input.len(), InputBuffer::MAX_LEN);
        assert_eq!(input.text(), "abcdefg");
    }

    #[test]
    fn insert_at_cursor() {
        let mut input = typed("qit");
        input.home();
        input.move_right();
        assert!(input.insert('u'));
        assert_eq!(input.text(), "quit");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_before_and_at_cursor() {
        let mut input = typed("quit");
        input.delete_before();
        assert_eq!(input.text(), "qui");

        input.home();
        input.delete_before(); // nothing before the cursor
        assert_eq!(input.text(), "qui");

        input.delete_at();
        assert_eq!(input.text(), "ui");
        assert_eq!(input.cursor(), 0);

        input.end();
        input.delete_at(); // nothing under the cursor
        assert_eq!(input.text(), "ui");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn clear_and_take() {
        let mut input = typed("quit");
        assert_eq!(input.take(), "quit");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);

        let mut input = typed("qi");
        input.clear();
        assert_eq!(input, InputBuffer::new());
    }

    #[test]
    fn typing_and_submitting() {
        let dictionary = Dictionary::from_words(["quit", "qi", "it"]).unwrap();
        let mut app = app(&dictionary);

        for ch in "quit".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(app.input.is_empty());
        assert_eq!(app.session.best_score(), 13);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.contains("QUIT"));
    }

    #[test]
    fn bad_word_is_an_error_message() {
        let dictionary = Dictionary::from_words(["quit", "qi", "it"]).unwrap();
        let mut app = app(&dictionary);

        for ch in "tiq".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.session.best_score(), 0);
    }

    #[test]
    fn finding_everything_is_announced() {
        let dictionary = Dictionary::from_words(["quit", "qi"]).unwrap();
        let mut app = app(&dictionary);

        for word in ["qi", "quit"] {
            for ch in word.chars() {
                app.handle_key(key(KeyCode::Char(ch)));
            }
            app.handle_key(key(KeyCode::Enter));
        }

        assert!(app.session.all_found());
        assert!(app.messages.last().unwrap().text.contains("every top word"));
    }

    #[test]
    fn empty_submit_is_ignored() {
        let dictionary = Dictionary::from_words(["qi"]).unwrap();
        let mut app = app(&dictionary);
        let before = app.messages.len();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn control_keys() {
        let dictionary = Dictionary::from_words(["quit", "qi"]).unwrap();
        let mut app = app(&dictionary);

        app.handle_key(ctrl('r'));
        assert!(app.session.all_found());

        app.handle_key(key(KeyCode::Char('q')));
        app.handle_key(ctrl('u'));
        assert!(app.input.is_empty());

        // Control chords never reach the buffer
        app.handle_key(ctrl('x'));
        assert!(app.input.is_empty());

        app.handle_key(ctrl('n'));
        assert_eq!(app.session.best_score(), 0);
        assert!(!app.session.all_found() || app.session.top_words().is_empty());

        assert!(!app.should_quit);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_shuffles_and_escape_quits() {
        let dictionary = Dictionary::from_words(["qi"]).unwrap();
        let mut app = app(&dictionary);
        let tiles = app.session.rack().sorted_tiles();

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.rack().sorted_tiles(), tiles);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn editing_keys() {
        let dictionary = Dictionary::from_words(["qi"]).unwrap();
        let mut app = app(&dictionary);

        for ch in "qit".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Home));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char('u')));
        assert_eq!(app.input.text(), "quit");

        app.handle_key(key(KeyCode::End));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Delete));
        assert_eq!(app.input.text(), "qu");
    }

    #[test]
    fn messages_are_bounded() {
        let dictionary = Dictionary::from_words(["qi"]).unwrap();
        let mut app = app(&dictionary);
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 15");
    }
}
