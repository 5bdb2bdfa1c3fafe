//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `InputState`: Key handling, independent of the terminal
//! - `TuiInterface`: Terminal setup, rendering, and the `GameInterface` implementation
//!
//! # State Machine
//! - `Typing` → (ENTER on a rejected word) → `ShowingError` → (ENTER/ESC) → `Typing`
//! - `F5` restarts from `Typing`; `ESC` from `Typing` quits

use crate::game_state::{GameInterface, Session, UserAction, capitalize, letter_count_glyph};
use crate::validator::Rejection;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const DIALOG_WIDTH_PERCENT: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;
const RESTART_KEY: KeyCode = KeyCode::F(5);

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const GLYPH_STYLE: Style = Style::new().fg(Color::Yellow);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

impl From<&Rejection> for ErrorDialog {
    fn from(rejection: &Rejection) -> Self {
        Self {
            title: rejection.title(),
            message: rejection.message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiState {
    Typing,
    ShowingError(ErrorDialog),
}

/// Text field and dialog state, driven one key at a time.
#[derive(Debug)]
pub struct InputState {
    input: String,
    state: TuiState,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: TuiState::Typing,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn show_error(&mut self, dialog: ErrorDialog) {
        self.state = TuiState::ShowingError(dialog);
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.state = TuiState::Typing;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.kind != KeyEventKind::Press {
            debug_log!("handle_key() - Ignoring non-Press key event: {:?}", key.kind);
            return None;
        }

        match self.state {
            TuiState::ShowingError(_) => {
                self.handle_dialog_key(key);
                None
            }
            TuiState::Typing => self.handle_typing_key(key),
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            debug_log!("handle_dialog_key() - Dialog dismissed");
            self.state = TuiState::Typing;
        }
    }

    fn handle_typing_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_modifier =
            key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_typing_key() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            code if code == RESTART_KEY => {
                self.input.clear();
                Some(UserAction::Restart)
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.input);
                info_log!("handle_typing_key() - Submitting '{}'", word);
                Some(UserAction::Submit(word))
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c)
                if !has_modifier && !c.is_control() && self.input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.input.push(c);
                None
            }
            _ => {
                debug_log!("handle_typing_key() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }
}

/// Snapshot of the session shown on screen.
#[derive(Debug, Default)]
struct SessionView {
    root: String,
    used_words: Vec<String>,
    score: u32,
}

impl SessionView {
    fn update(&mut self, session: &Session) {
        self.root = session.display_root();
        self.used_words = session.used_words().to_vec();
        self.score = session.score();
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: &'a SessionView,
    input: &'a InputState,
    status: &'a str,
}

fn render(f: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(5),    // Used words
            Constraint::Length(3), // Score
            Constraint::Length(3), // Status
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0], &ctx.view.root);
    render_input(f, chunks[1], ctx.input.input());
    render_used_words(f, chunks[2], &ctx.view.used_words);
    render_score(f, chunks[3], ctx.view.score);
    render_status(f, chunks[4], ctx.status);
    render_instructions(f, chunks[5], ctx.input.state());

    if let TuiState::ShowingError(dialog) = ctx.input.state() {
        render_dialog(f, dialog);
    }
}

fn render_title(f: &mut Frame, area: Rect, root: &str) {
    let title = Paragraph::new(root.to_string())
        .style(HEADER_STYLE)
        .alignment(Alignment::Center)
        .block(Block::default().title("WORD SCRAMBLE").borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![Span::raw(input.to_string()), Span::styled("_", INFO_STYLE)]);
    let paragraph =
        Paragraph::new(line).block(Block::default().title("Enter your word").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
    let items: Vec<ListItem> = used_words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(letter_count_glyph(word), GLYPH_STYLE),
                Span::raw(" "),
                Span::raw(capitalize(word)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!("Your words ({})", used_words.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_score(f: &mut Frame, area: Rect, score: u32) {
    let paragraph = Paragraph::new(format!("Your score is: {score}"))
        .style(SUCCESS_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = match state {
        TuiState::Typing => "Type a word | ENTER: Submit | F5: Restart | ESC: Quit",
        TuiState::ShowingError(_) => "ENTER/ESC: OK",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_dialog(f: &mut Frame, dialog: &ErrorDialog) {
    let area = centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT, f.area());
    let lines = vec![
        Line::from(dialog.message.clone()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", INFO_STYLE)).alignment(Alignment::Center),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(dialog.title.clone(), ERROR_STYLE))
            .borders(Borders::ALL),
    );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Rectangle `percent_x` wide and `height` rows tall, centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and session display.
pub struct TuiInterface<B: Backend> {
    terminal: Terminal<B>,
    input: InputState,
    view: SessionView,
    status: String,
    owns_terminal: bool,
}

impl TuiInterface<CrosstermBackend<io::Stdout>> {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        let mut interface = Self::with_terminal(terminal);
        interface.owns_terminal = true;
        Ok(interface)
    }
}

impl<B: Backend> TuiInterface<B> {
    /// Wraps an already configured terminal, e.g. a `TestBackend`.
    pub fn with_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            input: InputState::new(),
            view: SessionView::default(),
            status: String::new(),
            owns_terminal: false,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    /// Draw the current UI state to the terminal.
    pub fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: &self.view,
            input: &self.input,
            status: &self.status,
        };
        self.terminal.draw(|f| render(f, &ctx))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::warn!("Draw error: {e}");
        }
    }

    fn poll_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            other => {
                debug_log!("poll_key() - Ignoring non-key event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl<B: Backend> GameInterface for TuiInterface<B> {
    fn display_session(&mut self, session: &Session) {
        self.view.update(session);
        self.input.reset();
        self.status = format!("Find words in {}", session.display_root());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match Self::poll_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.input.handle_key(key) {
                        info_log!("read_action() - Action received: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("read_action() - Input error, returning Exit: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, session: &Session) {
        self.view.update(session);
        self.status = format!("{} accepted!", capitalize(word));
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: &Rejection, session: &Session) {
        self.view.update(session);
        self.input.show_error(ErrorDialog::from(rejection));
        self.status = rejection.title();
        self.draw_or_log();
    }

    fn display_restart(&mut self, session: &Session) {
        self.display_session(session);
        self.status = format!("New game - find words in {}", session.display_root());
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl<B: Backend> Drop for TuiInterface<B> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(state: &mut InputState, word: &str) {
        for c in word.chars() {
            assert_eq!(state.handle_key(press(KeyCode::Char(c))), None);
        }
    }

    fn screen_text(interface: &TuiInterface<TestBackend>) -> String {
        let buffer = interface.terminal().backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_typing_and_submit() {
        let mut state = InputState::new();
        type_word(&mut state, "Gum");
        assert_eq!(state.input(), "Gum");
        assert_eq!(
            state.handle_key(press(KeyCode::Enter)),
            Some(UserAction::Submit("Gum".to_string()))
        );
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut state = InputState::new();
        type_word(&mut state, "gumm");
        state.handle_key(press(KeyCode::Backspace));
        assert_eq!(state.input(), "gum");
    }

    #[test]
    fn test_modifier_chars_ignored() {
        let mut state = InputState::new();
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(key), None);
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut state = InputState::new();
        for _ in 0..(MAX_INPUT_LENGTH + 5) {
            state.handle_key(press(KeyCode::Char('a')));
        }
        assert_eq!(state.input().len(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn test_restart_and_exit_keys() {
        let mut state = InputState::new();
        type_word(&mut state, "gu");
        assert_eq!(state.handle_key(press(RESTART_KEY)), Some(UserAction::Restart));
        assert_eq!(state.input(), "");
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Some(UserAction::Exit));
    }

    #[test]
    fn test_dialog_blocks_input_until_dismissed() {
        let mut state = InputState::new();
        state.show_error(ErrorDialog::from(&Rejection::AlreadyUsed));

        assert_eq!(state.handle_key(press(KeyCode::Char('x'))), None);
        assert_eq!(state.handle_key(press(KeyCode::Esc)), None);
        assert_eq!(state.state(), &TuiState::Typing);
        assert_eq!(state.input(), "");

        state.show_error(ErrorDialog::from(&Rejection::NotARealWord));
        assert_eq!(state.handle_key(press(KeyCode::Enter)), None);
        assert_eq!(state.state(), &TuiState::Typing);
    }

    #[test]
    fn test_error_dialog_from_rejection() {
        let dialog = ErrorDialog::from(&Rejection::TooShort { length: 2 });
        assert_eq!(dialog.title, "Word is only 2 letters long");
        assert_eq!(
            dialog.message,
            "Word needs to be longer than 2 letters, no cheating"
        );
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect, Rect::new(20, 16, 60, 7));

        let small = centered_rect(60, 7, Rect::new(0, 0, 10, 4));
        assert_eq!(small.height, 4);
    }

    #[test]
    fn test_render_session_and_dialog() {
        let terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut interface = TuiInterface::with_terminal(terminal);
        let dict = WordListDictionary::from_words("en", ["gum"]);
        let mut session = Session::new("mug");

        interface.display_session(&session);
        assert!(screen_text(&interface).contains("Mug"));

        session.submit("gum", &dict);
        interface.display_accepted("gum", &session);
        let text = screen_text(&interface);
        assert!(text.contains("Gum"));
        assert!(text.contains("Your score is: 1"));

        session.submit("gum", &dict);
        interface.display_rejection(&Rejection::AlreadyUsed, &session);
        let text = screen_text(&interface);
        assert!(text.contains("Word used already"));
        assert!(text.contains("Be more original..."));
        assert!(text.contains("Your score is: 0"));
    }
}
