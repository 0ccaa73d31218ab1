//! TUI application state and logic

use crate::core::{CueScore, WordScore};
use crate::persistence::SliceStore;
use crate::session::WordListEntry;
use crate::workspace::Workspace;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: SliceStore> {
    pub workspace: Workspace<S>,
    /// Index of the highlighted word
    pub selected: usize,
    /// Sound position within the highlighted word, for spelling changes
    pub sound_cursor: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    WordNotes,
    SessionNotes,
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

impl<S: SliceStore> App<S> {
    pub fn new(workspace: Workspace<S>) -> Self {
        let mut app = Self {
            workspace,
            selected: 0,
            sound_cursor: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        if app.workspace.words.is_empty() {
            app.add_message("Word list is empty. Run `generate` first.", MessageStyle::Error);
        } else {
            let count = app.workspace.words.len();
            app.add_message(&format!("Reviewing {count} words"), MessageStyle::Info);
        }
        app
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&WordListEntry> {
        self.workspace.words.entry(self.selected)
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

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.workspace.words.len() {
            self.selected += 1;
            self.sound_cursor = 0;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.sound_cursor = 0;
        }
    }

    pub fn move_sound_cursor(&mut self, forward: bool) {
        let len = self.current_entry().map_or(0, |e| e.sounds().len());
        if forward {
            if self.sound_cursor + 1 < len {
                self.sound_cursor += 1;
            }
        } else {
            self.sound_cursor = self.sound_cursor.saturating_sub(1);
        }
    }

    /// Score the highlighted word and move on to the next one
    pub fn score_current(&mut self, score: WordScore) {
        match self.workspace.words.set_score(self.selected, score) {
            Ok(()) => {
                self.persist();
                self.select_next();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn cue_current(&mut self, cue: CueScore) {
        match self.workspace.words.set_cue_score(self.selected, cue) {
            Ok(()) => {
                self.add_message(&format!("Cue: {cue}"), MessageStyle::Info);
                self.persist();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn cycle_spelling(&mut self) {
        match self
            .workspace
            .words
            .cycle_spelling(self.selected, self.sound_cursor)
        {
            Ok(_) => self.persist(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn delete_current(&mut self) {
        match self.workspace.words.remove_entry(self.selected) {
            Ok(entry) => {
                self.add_message(
                    &format!("Removed {}", entry.rendered_spelling()),
                    MessageStyle::Info,
                );
                let len = self.workspace.words.len();
                if self.selected >= len {
                    self.selected = len.saturating_sub(1);
                }
                self.sound_cursor = 0;
                self.persist();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Start editing notes, pre-filling the buffer with the current text
    pub fn begin_edit(&mut self, mode: InputMode) {
        let current = match mode {
            InputMode::Normal => return,
            InputMode::WordNotes => match self.current_entry() {
                Some(entry) => entry.notes.clone(),
                None => return,
            },
            InputMode::SessionNotes => self.workspace.words.notes().to_string(),
        };
        self.input_buffer = current;
        self.input_mode = mode;
    }

    pub fn commit_edit(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        match self.input_mode {
            InputMode::Normal => {}
            InputMode::WordNotes => {
                if let Err(err) = self.workspace.words.set_notes(self.selected, text) {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                } else {
                    self.add_message("Note saved", MessageStyle::Success);
                    self.persist();
                }
            }
            InputMode::SessionNotes => {
                self.workspace.words.set_session_notes(text);
                self.add_message("Session notes saved", MessageStyle::Success);
                self.persist();
            }
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_edit(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    fn persist(&mut self) {
        if !self.workspace.save() {
            self.add_message("Failed to save state", MessageStyle::Error);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::WordNotes | InputMode::SessionNotes => match key.code {
                KeyCode::Esc => self.cancel_edit(),
                KeyCode::Enter => self.commit_edit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.move_sound_cursor(true),
            KeyCode::Left | KeyCode::Char('h') => self.move_sound_cursor(false),
            KeyCode::Char(' ') | KeyCode::Tab => self.cycle_spelling(),
            KeyCode::Char('c') => self.score_current(WordScore::Correct),
            KeyCode::Char('i') => self.score_current(WordScore::Incorrect),
            KeyCode::Char('s') => self.score_current(WordScore::Skipped),
            KeyCode::Char('x') => self.score_current(WordScore::NotScored),
            KeyCode::Char('1') => self.cue_current(CueScore::Independent),
            KeyCode::Char('2') => self.cue_current(CueScore::Minimal),
            KeyCode::Char('3') => self.cue_current(CueScore::Moderate),
            KeyCode::Char('4') => self.cue_current(CueScore::Maximum),
            KeyCode::Char('0') => self.cue_current(CueScore::NotScored),
            KeyCode::Char('n') => self.begin_edit(InputMode::WordNotes),
            KeyCode::Char('N') => self.begin_edit(InputMode::SessionNotes),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_current(),
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
pub fn run_tui<S: SliceStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SliceStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
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

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::SoundInventory;
    use crate::persistence::{MemoryStore, SliceName, SliceStore};
    use crate::session::SessionState;

    fn app() -> App<MemoryStore> {
        let inventory = SoundInventory::en_us().unwrap();
        let mut workspace = Workspace::open(MemoryStore::new());
        for symbols in [["k", "æ", "t"], ["d", "ɪ", "p"], ["s", "ʌ", "n"]] {
            crate::commands::add_word(&mut workspace.words, &inventory, &symbols).unwrap();
        }
        App::new(workspace)
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn stored_words(app: &App<MemoryStore>) -> SessionState {
        let json = app
            .workspace
            .store()
            .read(SliceName::WordList.key())
            .unwrap()
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn scoring_advances_and_saves() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('i'));

        assert_eq!(app.selected, 2);
        let saved = stored_words(&app);
        assert_eq!(saved.entries()[0].score, WordScore::Correct);
        assert_eq!(saved.entries()[1].score, WordScore::Incorrect);
    }

    #[test]
    fn cue_keys_set_cue_score() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_entry().unwrap().cue_score, CueScore::Moderate);
    }

    #[test]
    fn space_cycles_spelling_at_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.current_entry().unwrap().spelling_index(0), 1);
        assert_eq!(app.current_entry().unwrap().rendered_spelling(), "cat");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.sound_cursor, 2);
    }

    #[test]
    fn note_editing_round_trip() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::WordNotes);
        for c in "ok".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(stored_words(&app).entries()[0].notes, "ok");
    }

    #[test]
    fn escape_cancels_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('N'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.workspace.words.notes().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn delete_keeps_selection_in_range() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.workspace.words.len(), 2);
        assert_eq!(app.selected, 1);
        assert_eq!(stored_words(&app).len(), 2);
    }

    #[test]
    fn empty_list_reports_errors() {
        let mut app = App::new(Workspace::open(MemoryStore::new()));
        press(&mut app, KeyCode::Char('c'));
        let errors = app
            .messages
            .iter()
            .filter(|m| m.style == MessageStyle::Error)
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
