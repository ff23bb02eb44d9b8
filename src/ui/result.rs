use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::percent_bar;
use crate::app::App;
use crate::scoring::{CategoryStat, FeedbackBand, Report, StatTier};

const CATEGORY_NAME_WIDTH: usize = 20;
const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [summary, categories, controls] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .areas(area);

    match app.results() {
        Some(report) => {
            render_score_summary(frame, summary, report);
            render_categories(frame, categories, &report.categories, app.result_scroll());
        }
        None => render_no_results(frame, summary, app.no_results_reason()),
    }
    render_controls(frame, controls);
}

fn band_color(band: FeedbackBand) -> Color {
    match band {
        FeedbackBand::Excellent | FeedbackBand::VeryGood => Color::Green,
        FeedbackBand::Good => Color::Cyan,
        FeedbackBand::OnTrack => Color::Yellow,
        FeedbackBand::KeepPracticing => Color::Red,
    }
}

fn tier_color(tier: StatTier) -> Color {
    match tier {
        StatTier::Strong => Color::Green,
        StatTier::Solid => Color::LightGreen,
        StatTier::Fair => Color::Yellow,
        StatTier::Weak => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, report: &Report) {
    let summary = &report.summary;
    let color = band_color(report.band());

    let [text, gauge] =
        Layout::vertical([Constraint::Length(6), Constraint::Length(2)]).areas(area);

    let content = vec![
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                summary.correct_count, summary.total, summary.percentage
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(report.band().label().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), text);

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(u16::from(summary.percentage))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, gauge);
}

fn render_categories(frame: &mut Frame, area: Rect, stats: &[CategoryStat], scroll: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "By category",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    lines.extend(stats.iter().skip(scroll).map(|stat| {
        let percentage = stat.percentage();
        let color = tier_color(stat.tier());
        Line::from(vec![
            Span::styled(
                format!("  {:<width$} ", truncate(&stat.category), width = CATEGORY_NAME_WIDTH),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(percent_bar(percentage, BAR_WIDTH), Style::default().fg(color)),
            Span::styled(
                format!(
                    " {}/{} ({}%)",
                    stat.correct_count, stat.total_answered, percentage
                ),
                Style::default().fg(color),
            ),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_no_results(frame: &mut Frame, area: Rect, reason: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No results found",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(reason.fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retry  ·  h home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= CATEGORY_NAME_WIDTH {
        name.to_string()
    } else {
        let cut: String = name.chars().take(CATEGORY_NAME_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}
