//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Any input that is not a command is played
//! as a word.

use crate::game::Session;
use crate::output::formatters::{format_rack, format_top_words, mark_blanks};
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: /shuffle, /new [seed], /reveal, /help, /quit";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// With `compute_top` unset, racks dealt by `/new` skip the top-word search.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session, compute_top: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, compute_top, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Game loop over arbitrary input and output streams
///
/// Returns when the input ends or the player quits.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session,
    compute_top: bool,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "Make the best word you can from your seven tiles.")?;
    writeln!(out, "Blanks (_) stand for any letter but score nothing.")?;
    writeln!(out, "{HELP}\n")?;
    print_state(session, &mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();

        match text.split_once(' ').map_or((text, ""), |(cmd, arg)| (cmd, arg.trim())) {
            ("", _) => print_state(session, &mut out)?,
            ("/quit" | "/q", _) => break,
            ("/help" | "/h", _) => writeln!(out, "{HELP}")?,
            ("/shuffle" | "/s", _) => {
                session.shuffle();
                writeln!(out, "Rack: {}", format_rack(session.rack()))?;
            }
            ("/reveal" | "/r", _) => {
                session.reveal();
                write!(out, "{}", format_top_words(session.top_words()))?;
            }
            ("/new" | "/n", arg) => {
                let seed = (!arg.is_empty()).then_some(arg);
                match session.reset(seed, compute_top) {
                    Ok(()) => {
                        writeln!(out, "\nNew rack!")?;
                        print_state(session, &mut out)?;
                    }
                    Err(e) => writeln!(out, "Invalid seed: {e}")?,
                }
            }
            (cmd, _) if cmd.starts_with('/') => {
                writeln!(out, "Unknown command '{cmd}'. {HELP}")?;
            }
            _ => submit(session, &text.to_ascii_lowercase(), &mut out)?,
        }
    }

    writeln!(out, "\nThanks for playing!")
}

fn submit<W: Write>(session: &mut Session, word: &str, out: &mut W) -> io::Result<()> {
    let previous_best = session.best_score();
    let score = session.submit(word);

    if score == 0 {
        return writeln!(out, "'{word}' scores nothing");
    }

    write!(out, "'{word}' scores {score}")?;
    let blanks = session.blanks_for(word);
    if blanks.contains(&true) {
        write!(out, " as {}", mark_blanks(word, &blanks))?;
    }
    if score > previous_best {
        write!(out, " - new best!")?;
    }
    writeln!(out)?;

    if session.all_found() {
        writeln!(out, "You found every top word! Type /new for another rack.")?;
    }
    Ok(())
}

fn print_state<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "Rack: {}", format_rack(session.rack()))?;
    if let Some(seed) = session.seed() {
        writeln!(out, "Seed: {seed}")?;
    }
    if let Some(best) = session.best() {
        writeln!(out, "Best: {} ({})", best.word, best.score)?;
    }
    write!(out, "{}", format_top_words(session.top_words()))
}
