//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::WordScore;
use crate::output::formatters::score_marker;
use crate::persistence::SliceStore;
use crate::session::{ScoreSummary, accuracy, completion};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SliceStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_word_list(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PSEUDOWORD REVIEW")
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

const fn score_color(score: WordScore) -> Color {
    match score {
        WordScore::Correct => Color::Green,
        WordScore::Incorrect => Color::Red,
        WordScore::Skipped => Color::Yellow,
        WordScore::NotScored => Color::DarkGray,
    }
}

fn render_word_list<S: SliceStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .workspace
        .words
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", score_marker(entry.score)),
                    Style::default().fg(score_color(entry.score)),
                ),
                Span::raw(format!("{:>3}. ", i + 1)),
                Span::styled(
                    format!("{:<10}", entry.rendered_spelling()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" /{}/", entry.phonetic()),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Words ({}) ", app.workspace.words.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.workspace.words.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_side_panel<S: SliceStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Current word
            Constraint::Length(3), // Accuracy
            Constraint::Length(3), // Completion
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_current_word(f, app, chunks[0]);
    render_gauge(f, " Accuracy ", accuracy(&app.workspace.words), Color::Green, chunks[1]);
    render_gauge(
        f,
        " Completion ",
        completion(&app.workspace.words),
        Color::Cyan,
        chunks[2],
    );
    render_messages(f, app, chunks[3]);
}

fn render_current_word<S: SliceStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Current Word ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(entry) = app.current_entry() else {
        f.render_widget(Paragraph::new("No words to review").block(block), area);
        return;
    };

    // One span per sound, the one under the cursor highlighted
    let spelling: Vec<Span> = entry
        .sounds()
        .iter()
        .enumerate()
        .map(|(pos, sound)| {
            let text = sound.spelling(entry.spelling_index(pos)).to_string();
            let style = if pos == app.sound_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Span::styled(text, style)
        })
        .collect();

    let cursor_sound = entry.sounds().get(app.sound_cursor);
    let variants = cursor_sound.map_or_else(String::new, |sound| {
        format!(
            "/{}/ → {}",
            sound.symbol(),
            sound.spellings().join(" | ")
        )
    });

    let mut content = vec![
        Line::from(spelling),
        Line::from(format!("Sounds:  /{}/", entry.phonetic())),
        Line::from(format!("Variant: {variants}")),
        Line::from(vec![
            Span::raw("Score:   "),
            Span::styled(
                entry.score.label(),
                Style::default().fg(score_color(entry.score)),
            ),
        ]),
        Line::from(format!("Cue:     {}", entry.cue_score.label())),
    ];
    if !entry.notes.is_empty() {
        content.push(Line::from(format!("Notes:   {}", entry.notes)));
    }
    if !app.workspace.words.notes().is_empty() {
        content.push(Line::from(Span::styled(
            format!("Session: {}", app.workspace.words.notes()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_gauge(f: &mut Frame, title: &str, summary: ScoreSummary, color: Color, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(summary.percent().min(100))
        .label(summary.to_string());
    f.render_widget(gauge, area);
}

fn render_messages<S: SliceStore>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_input<S: SliceStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Normal => (
            " c/i/s/x: score | 1-4, 0: cue | n: note | N: session notes ",
            "",
            Color::DarkGray,
        ),
        InputMode::WordNotes => (
            " Word note | Enter to save, Esc to cancel ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::SessionNotes => (
            " Session notes | Enter to save, Esc to cancel ",
            app.input_buffer.as_str(),
            Color::Cyan,
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

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "↑/↓: word | ←/→: sound | Space: spelling | d: delete | q: quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
