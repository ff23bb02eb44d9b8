//! Score aggregation and feedback banding for finished sessions.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

use crate::models::{Answer, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("there are no answers to score")]
    EmptyAnswerSet,
    #[error("the question catalog is empty")]
    EmptyCatalog,
}

/// Overall result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct_count: usize,
    pub total: usize,
    /// 0-100, rounded to the nearest integer.
    pub percentage: u8,
}

impl ScoreSummary {
    pub fn band(&self) -> FeedbackBand {
        FeedbackBand::for_percentage(self.percentage)
    }
}

/// Answered questions of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStat {
    pub category: String,
    pub total_answered: usize,
    pub correct_count: usize,
}

impl CategoryStat {
    pub fn percentage(&self) -> u8 {
        rounded_percentage(self.correct_count, self.total_answered)
    }

    pub fn tier(&self) -> StatTier {
        StatTier::for_percentage(self.percentage())
    }
}

/// Feedback tier for the overall percentage, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackBand {
    Excellent,
    VeryGood,
    Good,
    OnTrack,
    KeepPracticing,
}

const FEEDBACK_BANDS: [(u8, FeedbackBand); 4] = [
    (90, FeedbackBand::Excellent),
    (75, FeedbackBand::VeryGood),
    (60, FeedbackBand::Good),
    (40, FeedbackBand::OnTrack),
];

impl FeedbackBand {
    /// Highest band whose lower bound `percentage` reaches.
    pub fn for_percentage(percentage: u8) -> Self {
        FEEDBACK_BANDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map_or(FeedbackBand::KeepPracticing, |(_, band)| *band)
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackBand::Excellent => "Excellent! You have mastered this topic!",
            FeedbackBand::VeryGood => "Very good! You have a solid understanding of the topic.",
            FeedbackBand::Good => "Well done! A little more practice and you will be even better.",
            FeedbackBand::OnTrack => "You are on the right track. Review the difficult topics.",
            FeedbackBand::KeepPracticing => {
                "Don't worry! Practice makes perfect. Give it another try."
            }
        }
    }
}

/// Coarse grading used to colour per-category bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    Strong,
    Solid,
    Fair,
    Weak,
}

impl StatTier {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => StatTier::Strong,
            60..=79 => StatTier::Solid,
            40..=59 => StatTier::Fair,
            _ => StatTier::Weak,
        }
    }
}

/// Everything the results screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: ScoreSummary,
    pub categories: Vec<CategoryStat>,
}

impl Report {
    /// Scores `answers` against the catalog `questions`, which must not be
    /// empty.
    pub fn build(questions: &[Question], answers: &[Answer]) -> Result<Self, ScoringError> {
        if questions.is_empty() {
            return Err(ScoringError::EmptyCatalog);
        }
        let summary = score(answers)?;
        let categories = breakdown_by_category(questions, answers)
            .into_values()
            .collect();
        Ok(Self {
            summary,
            categories,
        })
    }

    pub fn band(&self) -> FeedbackBand {
        self.summary.band()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(
            f,
            "Score: {}/{} ({}%)",
            summary.correct_count, summary.total, summary.percentage
        )?;
        writeln!(f, "{}", self.band().label())?;
        for stat in &self.categories {
            write!(
                f,
                "\n  {:<20} {}/{} ({}%)",
                stat.category,
                stat.correct_count,
                stat.total_answered,
                stat.percentage()
            )?;
        }
        Ok(())
    }
}

pub fn score(answers: &[Answer]) -> Result<ScoreSummary, ScoringError> {
    if answers.is_empty() {
        return Err(ScoringError::EmptyAnswerSet);
    }

    let correct_count = answers.iter().filter(|a| a.is_correct).count();
    let total = answers.len();

    Ok(ScoreSummary {
        correct_count,
        total,
        percentage: rounded_percentage(correct_count, total),
    })
}

/// Per-category totals keyed by category name.
///
/// Answers whose question is not in `questions` are skipped. Categories
/// without answers are not present.
pub fn breakdown_by_category(
    questions: &[Question],
    answers: &[Answer],
) -> BTreeMap<String, CategoryStat> {
    let by_id: HashMap<u32, &Question> = questions.iter().map(|q| (q.id, q)).collect();
    let mut stats: BTreeMap<String, CategoryStat> = BTreeMap::new();

    for answer in answers {
        let Some(question) = by_id.get(&answer.question_id) else {
            continue;
        };

        let stat = stats
            .entry(question.category.clone())
            .or_insert_with(|| CategoryStat {
                category: question.category.clone(),
                total_answered: 0,
                correct_count: 0,
            });
        stat.total_answered += 1;
        if answer.is_correct {
            stat.correct_count += 1;
        }
    }

    stats
}

/// `round(100 * correct / total)` with halves rounded up, in integers.
fn rounded_percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * correct + total) / (2 * total);
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, category: &str) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: 0,
            category: category.to_string(),
        }
    }

    fn answer(question_id: u32, is_correct: bool) -> Answer {
        Answer {
            question_id,
            selected_option: if is_correct { 0 } else { 1 },
            is_correct,
        }
    }

    #[test]
    fn test_score_empty_answer_set() {
        assert_eq!(score(&[]), Err(ScoringError::EmptyAnswerSet));
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        let answers = [answer(1, true), answer(2, false), answer(3, true)];
        assert_eq!(
            score(&answers),
            Ok(ScoreSummary {
                correct_count: 2,
                total: 3,
                percentage: 67,
            })
        );

        let one_of_three = [answer(1, true), answer(2, false), answer(3, false)];
        assert_eq!(score(&one_of_three).unwrap().percentage, 33);

        let half = [answer(1, true), answer(2, false)];
        assert_eq!(score(&half).unwrap().percentage, 50);

        let one_of_eight: Vec<Answer> = (1..=8).map(|id| answer(id, id == 1)).collect();
        // 12.5 rounds up
        assert_eq!(score(&one_of_eight).unwrap().percentage, 13);
    }

    #[test]
    fn test_score_matches_float_rounding() {
        for total in 1..=40usize {
            for correct in 0..=total {
                let answers: Vec<Answer> =
                    (0..total).map(|i| answer(i as u32, i < correct)).collect();
                let expected = (100.0 * correct as f64 / total as f64).round() as u8;
                assert_eq!(score(&answers).unwrap().percentage, expected);
            }
        }
    }

    #[test]
    fn test_breakdown_by_category() {
        let questions = [question(1, "A"), question(2, "A"), question(3, "B")];
        let answers = [answer(1, true), answer(2, false), answer(3, true)];

        let stats = breakdown_by_category(&questions, &answers);
        assert_eq!(stats.len(), 2);

        let a = &stats["A"];
        assert_eq!((a.total_answered, a.correct_count, a.percentage()), (2, 1, 50));
        let b = &stats["B"];
        assert_eq!((b.total_answered, b.correct_count, b.percentage()), (1, 1, 100));
    }

    #[test]
    fn test_breakdown_omits_unanswered_categories_and_unknown_ids() {
        let questions = [question(1, "A"), question(2, "B")];
        let answers = [answer(1, false), answer(99, true)];

        let stats = breakdown_by_category(&questions, &answers);
        assert_eq!(stats.keys().collect::<Vec<_>>(), vec!["A"]);
        assert!(stats.values().all(|s| s.total_answered > 0));
        assert_eq!(stats["A"].percentage(), 0);
    }

    #[test]
    fn test_feedback_band_boundaries() {
        assert_eq!(FeedbackBand::for_percentage(100), FeedbackBand::Excellent);
        assert_eq!(FeedbackBand::for_percentage(90), FeedbackBand::Excellent);
        assert_eq!(FeedbackBand::for_percentage(89), FeedbackBand::VeryGood);
        assert_eq!(FeedbackBand::for_percentage(75), FeedbackBand::VeryGood);
        assert_eq!(FeedbackBand::for_percentage(74), FeedbackBand::Good);
        assert_eq!(FeedbackBand::for_percentage(60), FeedbackBand::Good);
        assert_eq!(FeedbackBand::for_percentage(59), FeedbackBand::OnTrack);
        assert_eq!(FeedbackBand::for_percentage(40), FeedbackBand::OnTrack);
        assert_eq!(FeedbackBand::for_percentage(39), FeedbackBand::KeepPracticing);
        assert_eq!(FeedbackBand::for_percentage(0), FeedbackBand::KeepPracticing);
    }

    #[test]
    fn test_stat_tier() {
        assert_eq!(StatTier::for_percentage(80), StatTier::Strong);
        assert_eq!(StatTier::for_percentage(79), StatTier::Solid);
        assert_eq!(StatTier::for_percentage(40), StatTier::Fair);
        assert_eq!(StatTier::for_percentage(39), StatTier::Weak);
    }

    #[test]
    fn test_report_build() {
        let questions = [question(1, "B"), question(2, "A")];
        let answers = [answer(1, true), answer(2, true)];

        let report = Report::build(&questions, &answers).unwrap();
        assert_eq!(report.summary.percentage, 100);
        assert_eq!(report.band(), FeedbackBand::Excellent);
        let names: Vec<&str> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        assert_eq!(
            Report::build(&questions, &[]),
            Err(ScoringError::EmptyAnswerSet)
        );
        assert_eq!(
            Report::build(&[], &answers),
            Err(ScoringError::EmptyCatalog)
        );
    }

    #[test]
    fn test_report_display() {
        let questions = [question(1, "Rust"), question(2, "Rust")];
        let report = Report::build(&questions, &[answer(1, true), answer(2, false)]).unwrap();
        let text = report.to_string();

        assert!(text.starts_with("Score: 1/2 (50%)\n"));
        assert!(text.contains(FeedbackBand::OnTrack.label()));
        assert!(text.contains("Rust"));
        assert!(text.ends_with("1/2 (50%)"));
    }
}
