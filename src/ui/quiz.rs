use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::option_label;
use crate::session::{Session, SessionState};

const LOW_TIME_SECONDS: u32 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let [header, progress, message, question, options, controls] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(area);

    render_header(frame, header, session);
    render_progress(frame, progress, session);
    render_message(frame, message, app.message(), session);
    render_question_text(frame, question, &session.current_question().text);
    render_options(frame, options, session, app.selected_option());
    render_controls(frame, controls, session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let [timer, counter] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let remaining = session.remaining_seconds();
    let timer_color = if remaining < LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Gray
    };
    let widget = Paragraph::new(format!("⏱ {} s", remaining))
        .fg(timer_color)
        .bold();
    frame.render_widget(widget, timer);

    let widget = Paragraph::new(format!(
        "Question {} of {}",
        session.current_number(),
        session.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(widget, counter);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &Session) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .percent(session.progress_percent())
        .label("");
    frame.render_widget(gauge, area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, session: &Session) {
    let color = match (session.state(), session.current_answer()) {
        (SessionState::Answered, Some(answer)) if answer.is_correct => Color::Green,
        (SessionState::Answered, _) | (SessionState::TimedOut, _) => Color::Yellow,
        _ => Color::Magenta,
    };
    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(color)
        .italic();
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let question = session.current_question();
    let answered = session.state() != SessionState::AwaitingAnswer;
    let picked = session.current_answer().map(|a| a.selected_option);
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = if answered {
            if index == question.correct_option {
                ("✓", Style::default().fg(Color::Green).bold())
            } else if picked == Some(index) {
                ("✗", Style::default().fg(Color::Red).bold())
            } else {
                (" ", Style::default().fg(Color::DarkGray))
            }
        } else if index == cursor {
            (">", Style::default().fg(Color::Cyan).bold())
        } else {
            (" ", Style::default().fg(Color::Gray))
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &Session) {
    let text = match session.state() {
        SessionState::AwaitingAnswer => "j/k navigate  ·  enter select  ·  1-4 answer  ·  q quit",
        _ if session.is_last_question() => "enter show results  ·  q quit",
        _ => "enter next question  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
