mod admin;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, NotificationKind};
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [main, status] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    match app.state {
        AppState::Welcome => welcome::render(frame, main),
        AppState::NoQuestions => welcome::render_no_questions(frame, main),
        AppState::Quiz => quiz::render(frame, main, app),
        AppState::Results => result::render(frame, main, app),
        AppState::AdminLogin => admin::render_login(frame, main, app),
        AppState::AdminList => admin::render_list(frame, main, app),
        AppState::AdminEditor => admin::render_editor(frame, main, app),
    }

    render_notification(frame, status, app);
}

fn render_notification(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notification) = app.notification() else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };
    let widget = Paragraph::new(notification.text.as_str())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

/// Fixed-width text bar, e.g. `█████░░░░░` for 50% at width 10.
pub(crate) fn percent_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::auth::AdminAuth;
    use crate::data::test_support::{TempStore, question};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_every_screen() {
        let temp = TempStore::new();
        let mut app = App::new(temp.store.clone(), AdminAuth::new(None));

        assert!(draw(&app).contains("LERNQUEST"));

        app.start_quiz();
        assert_eq!(app.state, AppState::NoQuestions);
        assert!(draw(&app).contains("No questions available"));

        temp.store.add(question("Which one?", "Rust", 2)).unwrap();
        app.start_quiz();
        let screen = draw(&app);
        assert!(screen.contains("Question 1 of 1"));
        assert!(screen.contains("Which one?"));

        app.answer_option(2);
        app.next_question();
        assert_eq!(app.state, AppState::Results);
        let screen = draw(&app);
        assert!(screen.contains("1 / 1  (100%)"));
        assert!(screen.contains("Rust"));

        app.show_results("garbage");
        let screen = draw(&app);
        assert!(screen.contains("No results found"));
        assert!(screen.contains("The exported answers could not be read."));

        app.open_admin();
        assert!(draw(&app).contains("ADMIN LOGIN"));
        for c in "admin".chars() {
            app.login_mut().push(c);
        }
        app.submit_login();
        assert!(draw(&app).contains("Questions (1)"));

        app.edit_selected();
        assert!(draw(&app).contains("Edit question"));
    }

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(0, 4), "░░░░");
        assert_eq!(percent_bar(50, 4), "██░░");
        assert_eq!(percent_bar(100, 4), "████");
        assert_eq!(percent_bar(67, 3), "██░");
    }
}
