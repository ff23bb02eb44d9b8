//! # lernquest
//!
//! A terminal quiz with an admin area for managing the question bank.
//!
//! Questions live in a JSON file. A quiz walks through them with a 30 second
//! countdown per question, then scores the answers overall and per category.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lernquest::{AdminAuth, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::open("questions.json", AdminAuth::new(None));
//!     quiz.run()
//! }
//! ```
//!
//! The session and scoring engines work without a terminal:
//!
//! ```rust
//! use lernquest::{score, Advance, Question, Session};
//!
//! let questions = vec![Question {
//!     id: 1,
//!     text: "2 + 2?".to_string(),
//!     options: vec!["3".into(), "4".into(), "5".into(), "6".into()],
//!     correct_option: 1,
//!     category: "Math".to_string(),
//! }];
//!
//! let mut session = Session::start(questions).unwrap();
//! session.select_option(1).unwrap();
//! let Ok(Advance::Finished(answers)) = session.advance() else { unreachable!() };
//! assert_eq!(score(&answers).unwrap().percentage, 100);
//! ```

mod admin;
mod app;
pub mod auth;
pub mod config;
mod data;
mod error;
pub mod export;
mod feedback;
pub mod logging;
mod models;
pub mod scoring;
pub mod session;
pub mod terminal;
mod ui;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;

pub use app::{App, Notification, NotificationKind};
pub use auth::AdminAuth;
pub use config::{Args, Command, Config};
pub use data::{DEFAULT_QUESTIONS_PATH, QuestionStore, StoreError};
pub use error::QuizError;
pub use models::{Answer, AppState, NewQuestion, Question, ValidationError, option_label};
pub use scoring::{
    CategoryStat, FeedbackBand, Report, ScoreSummary, ScoringError, breakdown_by_category, score,
};
pub use session::{Advance, Session, SessionError, SessionState};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The interactive quiz application.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(store: QuestionStore, auth: AdminAuth) -> Self {
        Self {
            app: App::new(store, auth),
        }
    }

    /// Quiz over the question file at `path`.
    pub fn open<P: Into<PathBuf>>(path: P, auth: AdminAuth) -> Self {
        Self::new(QuestionStore::open(path), auth)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store(), config.auth())
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!("Using question file {}", self.app.store().path().display());
        let mut terminal = terminal::TerminalSession::enter()?;
        run_event_loop(&mut terminal, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Decodes an exported answer list and scores it against the catalog in
/// `store`. An empty catalog fails with [`ScoringError::EmptyCatalog`], the
/// same case the results screen shows as "no results".
pub fn report_from_query(store: &QuestionStore, query: &str) -> Result<Report, QuizError> {
    let answers = export::from_query(query)?;
    let questions = store.list();
    Ok(Report::build(&questions, &answers)?)
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key) {
                    break;
                }
            }
        }

        app.update(Instant::now());
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key.code),
        AppState::NoQuestions => handle_no_questions_input(app, key.code),
        AppState::Quiz => handle_quiz_input(app, key.code),
        AppState::Results => handle_result_input(app, key.code),
        AppState::AdminLogin => handle_login_input(app, key.code),
        AppState::AdminList => handle_admin_list_input(app, key.code),
        AppState::AdminEditor => handle_editor_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_admin();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_no_questions_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_admin();
            false
        }
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    let state = app.session().map(Session::state);

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => match state {
            Some(SessionState::AwaitingAnswer) => app.submit_answer(),
            _ => app.next_question(),
        },
        KeyCode::Char('n') | KeyCode::Right => app.next_question(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.answer_option(digit as usize - 1);
            }
        }
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }

    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.start_quiz();
            false
        }
        KeyCode::Char('h') | KeyCode::Esc => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_login_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.login_mut().push(c),
        KeyCode::Backspace => app.login_mut().pop(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }

    false
}

fn handle_admin_list_input(app: &mut App, key: KeyCode) -> bool {
    if app.question_list().pending_delete().is_some() {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return false;
    }

    match key {
        KeyCode::Down | KeyCode::Char('j') => app.question_list_mut().next(),
        KeyCode::Up | KeyCode::Char('k') => app.question_list_mut().previous(),
        KeyCode::Char('n') => app.new_question(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.question_list_mut().request_delete(),
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }

    false
}

fn handle_editor_input(app: &mut App, key: KeyEvent) -> bool {
    let save = matches!(key.code, KeyCode::F(2))
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S')));
    if save {
        app.save_editor();
        return false;
    }

    if key.code == KeyCode::Esc {
        app.cancel_editor();
        return false;
    }

    let Some(editor) = app.editor_mut() else {
        return false;
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => editor.next_field(),
        KeyCode::BackTab | KeyCode::Up => editor.previous_field(),
        KeyCode::Left => editor.cycle(false),
        KeyCode::Right => editor.cycle(true),
        KeyCode::Backspace => editor.delete_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.insert_char(c)
        }
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{TempStore, question};

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(temp: &TempStore) -> App {
        App::new(temp.store.clone(), AdminAuth::new(Some("quiz".to_string())))
    }

    #[test]
    fn test_quit_from_welcome() {
        let temp = TempStore::new();
        let mut app = app_with(&temp);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_quiz_keys_answer_and_advance() {
        let temp = TempStore::new();
        temp.store.add(question("one", "A", 1)).unwrap();
        temp.store.add(question("two", "B", 0)).unwrap();
        let mut app = app_with(&temp);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Quiz);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().unwrap().state(), SessionState::Answered);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().unwrap().current_number(), 2);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Results);

        let summary = app.results().unwrap().summary;
        assert_eq!((summary.correct_count, summary.total), (1, 2));
    }

    #[test]
    fn test_login_accepts_q_in_password() {
        let temp = TempStore::new();
        let mut app = app_with(&temp);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state, AppState::AdminLogin);
        type_str(&mut app, "quiz");
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::AdminList);
    }

    #[test]
    fn test_editor_keys_create_question() {
        let temp = TempStore::new();
        let mut app = app_with(&temp);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "quiz");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::AdminEditor);
        type_str(&mut app, "Largest planet?");
        for option in ["Mars", "Jupiter", "Venus", "Earth"] {
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, option);
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);

        handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.state, AppState::AdminList);

        let stored = temp.store.list();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].text, "Largest planet?");
        assert_eq!(stored[0].correct_option, 1);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let temp = TempStore::new();
        temp.store.add(question("one", "A", 0)).unwrap();
        let mut app = app_with(&temp);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "quiz");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(temp.store.list().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(temp.store.list().is_empty());
    }

    #[test]
    fn test_report_from_query() {
        let temp = TempStore::new();
        let first = temp.store.add(question("one", "A", 0)).unwrap();
        let answers = vec![Answer::for_question(&first, 0)];
        let query = export::to_query(&answers).unwrap();

        let report = report_from_query(&temp.store, &query).unwrap();
        assert_eq!(report.summary.percentage, 100);

        assert!(matches!(
            report_from_query(&temp.store, "answers=%5B%5D"),
            Err(QuizError::Scoring(_))
        ));

        temp.store.delete(first.id).unwrap();
        assert!(matches!(
            report_from_query(&temp.store, &query),
            Err(QuizError::Scoring(ScoringError::EmptyCatalog))
        ));
        assert!(matches!(
            report_from_query(&temp.store, "nothing=here"),
            Err(QuizError::Export(_))
        ));
    }
}
