//! TUI rendering with ratatui
//!
//! Hive, found words, and results screens for the Spelling Bee interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameReport, LetterSet, PANGRAM_BONUS, is_pangram};
use crate::output::formatters::{format_grade, rank_title};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    match &app.report {
        Some(report) => render_report(f, report, main_chunks[0]),
        None => render_board(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hive
            Constraint::Min(3),    // Found words
        ])
        .split(area);

    render_hive(f, app.session.letters(), chunks[0]);
    render_found_words(f, app, chunks[1]);
}

/// Hive letters, center letter highlighted and shown first
fn render_hive(f: &mut Frame, letters: &LetterSet, area: Rect) {
    let order = letters.display_order();
    let center = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let outer = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(order.len() * 2);
    for (i, &ch) in order.iter().enumerate() {
        let style = if i == 0 { center } else { outer };
        spans.push(Span::styled(
            format!(" {} ", char::from(ch).to_ascii_uppercase()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let content = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(
            "Every word must use the highlighted letter",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Hive ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.session.letters();
    let items: Vec<ListItem> = app
        .session
        .accepted()
        .iter()
        .rev()
        .map(|word| {
            if is_pangram(word, letters) {
                ListItem::new(format!("★ {word}")).style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {word}"))
            }
        })
        .collect();

    let title = format!(" Found Words ({}) ", app.session.accepted().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_report(f: &mut Frame, report: &GameReport, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary
            Constraint::Length(3), // Grade gauge
            Constraint::Min(3),    // Accepted words
        ])
        .split(area);

    let summary = vec![
        Line::from(vec![
            Span::raw("Puzzle:      "),
            Span::styled(
                report.letters.to_string().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Final score: {}", report.score)),
        Line::from(format!("Max score:   {}", report.max_score)),
        Line::from(format!("Your grade:  {}", format_grade(&report.grade))),
    ];
    let paragraph = Paragraph::new(summary)
        .block(
            Block::default()
                .title(" 🎉 Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    let (percent, label) = match report.grade {
        Ok(grade) => (
            u16::try_from(grade.min(100)).unwrap_or(100),
            format!("{grade}% | {}", rank_title(grade)),
        ),
        Err(_) => (0, "no words available for this puzzle".to_string()),
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Grade ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, chunks[1]);

    let items: Vec<ListItem> = report
        .accepted
        .iter()
        .enumerate()
        .map(|(i, word)| ListItem::new(format!("{:>3}. {word}", i + 1)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, chunks[2]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Score
            Constraint::Percentage(50), // Messages or rules
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    if app.show_rules {
        render_rules(f, chunks[1]);
    } else {
        render_messages(f, app, chunks[1]);
    }
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.session.letters();
    let pangrams = app
        .session
        .accepted()
        .iter()
        .filter(|word| is_pangram(word, letters))
        .count();

    let content = vec![
        Line::from(vec![
            Span::raw("Score:    "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Words:    {}", app.session.accepted().len())),
        Line::from(format!("Pangrams: {pangrams}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let rules = vec![
        Line::from("Create words using letters from the hive."),
        Line::from("Words must contain at least 4 letters."),
        Line::from("Words must include the highlighted letter."),
        Line::from("Letters can be used more than once."),
        Line::from("4-letter words are worth 1 point each."),
        Line::from("Longer words earn 1 point per letter."),
        Line::from(format!(
            "A pangram uses every letter and is worth {PANGRAM_BONUS} extra points!"
        )),
    ];

    let paragraph = Paragraph::new(rules)
        .block(Block::default().title(" Rules ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Entry => (
            " Enter a word | Enter on empty line to finish ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let best = app
        .stats
        .best_grade
        .map_or_else(|| "-".to_string(), |grade| format!("{grade}%"));
    let help = match app.input_mode {
        InputMode::Entry => "?: Rules | Esc: Quit | Enter: Submit",
        InputMode::Finished => "n: New Game | q: Quit",
    };

    let status = Paragraph::new(format!(
        "Games: {} | Best grade: {best} | {help}",
        app.stats.games_played
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
