//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{can_play, score_tile};
use crate::output::formatters::mask_word;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Rack and input
            Constraint::Percentage(45), // Top words and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 TILESET - Find the best word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Rack
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Best word
        ])
        .split(area);

    render_rack(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_best(f, app, chunks[2]);
}

fn render_rack(f: &mut Frame, app: &App, area: Rect) {
    let tiles = app.session.rack().tiles();

    let mut letters = vec![Span::raw(" ")];
    let mut scores = vec![Span::raw(" ")];
    for &tile in tiles {
        let style = if tile.is_blank() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        letters.push(Span::styled(
            format!(" {} ", tile.to_char().to_ascii_uppercase()),
            style,
        ));
        letters.push(Span::raw(" "));
        scores.push(Span::styled(
            format!("{:^3}", score_tile(tile)),
            Style::default().fg(Color::DarkGray),
        ));
        scores.push(Span::raw(" "));
    }

    let rack = Paragraph::new(vec![Line::from(""), Line::from(letters), Line::from(scores)])
        .block(
            Block::default()
                .title(" Rack ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(rack, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let word = app.input.text();
    let blanks = app.session.blanks_for(&word);
    let playable = can_play(app.session.rack(), &word);

    let spans: Vec<Span> = word
        .chars()
        .zip(&blanks)
        .map(|(ch, &blank)| {
            let style = if !playable {
                Style::default().fg(Color::Red)
            } else if blank {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Span::styled(ch.to_ascii_uppercase().to_string(), style)
        })
        .collect();

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Your Word | Enter to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, area);

    // Cursor sits inside the border
    f.set_cursor_position((area.x + 1 + app.input.cursor() as u16, area.y + 1));
}

fn render_best(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.session.best() {
        Some(best) => Line::from(vec![
            Span::raw("Best: "),
            Span::styled(
                best.word.to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" for {} points", best.score)),
        ]),
        None => Line::from("No word played yet"),
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Best Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Top words
            Constraint::Length(3), // Found gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_top_words(f, app, chunks[0]);
    render_found_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_top_words(f: &mut Frame, app: &App, area: Rect) {
    let top = app.session.top_words();

    let items: Vec<ListItem> = if top.is_empty() {
        vec![ListItem::new("No top words").style(Style::default().fg(Color::DarkGray))]
    } else {
        top.iter()
            .enumerate()
            .map(|(i, entry)| {
                let (word, style) = if entry.found {
                    (entry.word.to_uppercase(), Style::default().fg(Color::Green))
                } else {
                    (mask_word(&entry.word), Style::default().fg(Color::DarkGray))
                };
                ListItem::new(format!("{:>2}. {word:<7} {:>3}", i + 1, entry.score)).style(style)
            })
            .collect()
    };

    let list =
        List::new(items).block(Block::default().title(" Top Words ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_found_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.found_count();
    let total = app.session.top_words().len();
    let percent = if total > 0 {
        (found * 100 / total) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Found ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total} top words"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let seed_text = app
        .session
        .seed()
        .map_or_else(|| "Seed: none".to_string(), |seed| format!("Seed: {seed}"));
    let seed = Paragraph::new(seed_text).alignment(Alignment::Center);
    f.render_widget(seed, chunks[0]);

    let help = Paragraph::new("Tab: Shuffle | ^N: New | ^R: Reveal | ^U: Clear | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::Session;
    use ratatui::{Terminal, backend::TestBackend};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_rack_seed_and_masked_words() {
        let dictionary = Dictionary::from_words(["bean", "bin", "hen"]).unwrap();
        let mut session = Session::with_rng(&dictionary, StdRng::seed_from_u64(1));
        session.reset(Some("00091122243533"), true).unwrap();
        let app = App::new(session, true);

        let text = screen(&app);
        assert!(text.contains(" A   B   E   H   I   N   M "));
        assert!(text.contains("Seed: 00091122243533"));
        assert!(text.contains("----"));
        assert!(!text.contains("BEAN"));
        assert!(text.contains("0/3 top words"));
    }

    #[test]
    fn found_words_are_shown() {
        let dictionary = Dictionary::from_words(["bean", "bin", "hen"]).unwrap();
        let mut session = Session::with_rng(&dictionary, StdRng::seed_from_u64(1));
        session.reset(Some("00091122243533"), true).unwrap();
        let mut app = App::new(session, true);

        for ch in "bean".chars() {
            app.input.insert(ch);
        }
        app.submit_input();

        let text = screen(&app);
        assert!(text.contains("BEAN"));
        assert!(text.contains("Best: BEAN for 6 points"));
        assert!(text.contains("1/3 top words"));
    }
}
