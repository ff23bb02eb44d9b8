use std::time::{Duration, Instant};

use log::{error, info, warn};

use crate::admin::{Editor, LoginForm, QuestionList, SaveOutcome};
use crate::auth::AdminAuth;
use crate::data::QuestionStore;
use crate::export;
use crate::feedback::{self, MessageKind};
use crate::models::{AppState, Question};
use crate::scoring::{Report, ScoringError};
use crate::session::{Advance, Session, SessionError, SessionState};

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);
const UNREADABLE_ANSWERS: &str = "The exported answers could not be read.";
const NOTHING_ANSWERED: &str = "No question was answered before the time ran out.";
const EMPTY_CATALOG: &str = "There are no questions to score against.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient status line message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    shown_at: Instant,
}

/// Turns wall-clock time into whole-second ticks for the session.
#[derive(Debug, Clone, Copy)]
struct Ticker {
    last: Instant,
}

impl Ticker {
    fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Number of whole seconds elapsed since the last due tick.
    fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last).as_secs();
        let ticks = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.last += Duration::from_secs(u64::from(ticks));
        ticks
    }
}

pub struct App {
    pub state: AppState,
    store: QuestionStore,
    auth: AdminAuth,
    session: Option<Session>,
    ticker: Ticker,
    selected_option: usize,
    message: &'static str,
    results: Option<Report>,
    no_results_reason: &'static str,
    result_scroll: usize,
    authenticated: bool,
    login: LoginForm,
    question_list: QuestionList,
    editor: Option<Editor>,
    notification: Option<Notification>,
}

impl App {
    pub fn new(store: QuestionStore, auth: AdminAuth) -> Self {
        Self {
            state: AppState::Welcome,
            store,
            auth,
            session: None,
            ticker: Ticker::new(Instant::now()),
            selected_option: 0,
            message: "",
            results: None,
            no_results_reason: UNREADABLE_ANSWERS,
            result_scroll: 0,
            authenticated: false,
            login: LoginForm::default(),
            question_list: QuestionList::default(),
            editor: None,
            notification: None,
        }
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    // Quiz

    pub fn start_quiz(&mut self) {
        match Session::start(self.store.list()) {
            Ok(session) => {
                info!("Starting quiz with {} questions", session.total_questions());
                self.session = Some(session);
                self.ticker = Ticker::new(Instant::now());
                self.selected_option = 0;
                self.results = None;
                self.state = AppState::Quiz;
                self.refresh_message();
            }
            Err(SessionError::EmptyCatalog) => {
                warn!("Quiz requested but the catalog is empty");
                self.state = AppState::NoQuestions;
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn select_next_option(&mut self) {
        let len = self.option_count();
        if len > 0 {
            self.selected_option = (self.selected_option + 1) % len;
        }
    }

    pub fn select_previous_option(&mut self) {
        let len = self.option_count();
        if len > 0 {
            self.selected_option = (self.selected_option + len - 1) % len;
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |s| s.current_question().options.len())
    }

    /// Highlights `option` and locks it in, as if chosen with the cursor.
    pub fn answer_option(&mut self, option: usize) {
        if option >= self.option_count() {
            return;
        }
        if self.session.as_ref().map(Session::state) == Some(SessionState::AwaitingAnswer) {
            self.selected_option = option;
            self.submit_answer();
        }
    }

    /// Locks in the highlighted option.
    pub fn submit_answer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Err(err) = session.select_option(self.selected_option) {
            self.notify_error(err.to_string());
            return;
        }
        self.refresh_message();
    }

    /// Moves to the next question, or to the results after the last one.
    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.advance() {
            Ok(Advance::Next) => {
                self.selected_option = 0;
                self.ticker = Ticker::new(Instant::now());
                self.refresh_message();
            }
            Ok(Advance::Finished(answers)) => {
                info!("Quiz finished with {} recorded answers", answers.len());
                self.session = None;
                match export::to_query(&answers) {
                    Ok(query) => self.show_results(&query),
                    Err(err) => {
                        error!("Failed to export answers: {}", err);
                        self.results = None;
                        self.no_results_reason = UNREADABLE_ANSWERS;
                        self.state = AppState::Results;
                    }
                }
            }
            Err(SessionError::NotYetAnswered) => {
                self.notify_error("Pick an answer first".to_string());
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    /// Called once per elapsed second while the quiz runs. A question whose
    /// countdown ran out is skipped automatically; returns true in that case.
    pub fn tick(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        session.tick();
        if session.state() != SessionState::TimedOut {
            return false;
        }
        self.next_question();
        true
    }

    /// Drives [`App::tick`] from wall-clock time and expires notifications.
    pub fn update(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= NOTIFICATION_TTL)
        {
            self.notification = None;
        }

        if self.state != AppState::Quiz {
            return;
        }

        // Leftover seconds never carry over to the next question.
        for _ in 0..self.ticker.due(now) {
            if self.tick() {
                self.ticker = Ticker::new(now);
                break;
            }
        }
    }

    fn refresh_message(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let answered_correctly = session.current_answer().map(|a| a.is_correct);
        let kind = MessageKind::for_state(session.state(), answered_correctly);
        self.message = feedback::pick_message(kind, &mut rand::thread_rng());
    }

    // Results

    /// Decodes an exported answer list and scores it against the catalog.
    /// Undecodable or empty input shows the "no results" screen.
    pub fn show_results(&mut self, query: &str) {
        self.result_scroll = 0;
        self.state = AppState::Results;

        let answers = match export::from_query(query) {
            Ok(answers) => answers,
            Err(err) => {
                warn!("Could not read exported answers: {}", err);
                self.results = None;
                self.no_results_reason = UNREADABLE_ANSWERS;
                return;
            }
        };

        self.results = match Report::build(&self.store.list(), &answers) {
            Ok(report) => Some(report),
            Err(err) => {
                info!("No results to show: {}", err);
                self.no_results_reason = match err {
                    ScoringError::EmptyAnswerSet => NOTHING_ANSWERED,
                    ScoringError::EmptyCatalog => EMPTY_CATALOG,
                };
                None
            }
        };
    }

    /// Why [`App::results`] is empty.
    pub fn no_results_reason(&self) -> &'static str {
        self.no_results_reason
    }

    pub fn results(&self) -> Option<&Report> {
        self.results.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .results
            .as_ref()
            .map_or(0, |r| r.categories.len().saturating_sub(1));
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Back to the welcome screen, discarding any running session.
    pub fn go_home(&mut self) {
        self.session = None;
        self.results = None;
        self.editor = None;
        self.state = AppState::Welcome;
    }

    // Admin

    pub fn open_admin(&mut self) {
        self.session = None;
        if self.authenticated {
            self.show_question_list();
        } else {
            self.login = LoginForm::default();
            self.state = AppState::AdminLogin;
        }
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn submit_login(&mut self) {
        if self.login.submit(&self.auth) {
            info!("Admin logged in");
            self.authenticated = true;
            self.show_question_list();
        } else {
            warn!("Rejected admin login attempt");
        }
    }

    pub fn uses_default_password(&self) -> bool {
        self.auth.uses_default()
    }

    fn show_question_list(&mut self) {
        self.question_list.reload(&self.store);
        self.editor = None;
        self.state = AppState::AdminList;
    }

    pub fn question_list(&self) -> &QuestionList {
        &self.question_list
    }

    pub fn question_list_mut(&mut self) -> &mut QuestionList {
        &mut self.question_list
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.question_list.take_pending_delete() else {
            return;
        };

        match self.store.delete(id) {
            Ok(()) => self.notify_success(format!("Question {} deleted", id)),
            Err(err) => self.notify_error(format!("Could not delete question: {}", err)),
        }
        self.question_list.reload(&self.store);
    }

    pub fn cancel_delete(&mut self) {
        self.question_list.take_pending_delete();
    }

    pub fn new_question(&mut self) {
        self.editor = Some(Editor::create(self.store.categories()));
        self.state = AppState::AdminEditor;
    }

    pub fn edit_selected(&mut self) {
        let Some(question) = self.question_list.selected().cloned() else {
            return;
        };
        self.edit_question(&question);
    }

    fn edit_question(&mut self, question: &Question) {
        self.editor = Some(Editor::edit(question, self.store.categories()));
        self.state = AppState::AdminEditor;
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        self.editor.as_mut()
    }

    /// Saves the editor draft. On failure the editor stays open.
    pub fn save_editor(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };

        match editor.save(&self.store) {
            Ok(SaveOutcome::Added(id)) => {
                self.notify_success(format!("Question {} added", id));
                self.show_question_list();
            }
            Ok(SaveOutcome::Updated(id)) => {
                self.notify_success(format!("Question {} updated", id));
                self.show_question_list();
            }
            Err(err) => self.notify_error(format!("Could not save question: {}", err)),
        }
    }

    pub fn cancel_editor(&mut self) {
        self.show_question_list();
    }

    // Notifications

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    fn notify_success(&mut self, text: String) {
        self.notify(NotificationKind::Success, text);
    }

    fn notify_error(&mut self, text: String) {
        self.notify(NotificationKind::Error, text);
    }

    fn notify(&mut self, kind: NotificationKind, text: String) {
        self.notification = Some(Notification {
            kind,
            text,
            shown_at: Instant::now(),
        });
    }
}
