use std::path::PathBuf;

use lernquest::{
    Advance, FeedbackBand, NewQuestion, QuestionStore, Session, SessionState, StoreError, export,
    report_from_query,
};

struct TempFile(PathBuf);

impl TempFile {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("lernquest-flow-{}.json", uuid::Uuid::new_v4())))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn new_question(text: &str, category: &str, correct_option: usize) -> NewQuestion {
    NewQuestion {
        text: text.to_string(),
        options: ["A", "B", "C", "D"].iter().map(|o| o.to_string()).collect(),
        correct_option,
        category: category.to_string(),
    }
}

fn seeded_store(file: &TempFile) -> QuestionStore {
    let store = QuestionStore::open(&file.0);
    store.add(new_question("q1", "A", 0)).unwrap();
    store.add(new_question("q2", "A", 1)).unwrap();
    store.add(new_question("q3", "B", 2)).unwrap();
    store
}

#[test]
fn full_quiz_scores_by_category() {
    let file = TempFile::new();
    let store = seeded_store(&file);
    let ids: Vec<u32> = store.list().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let mut session = Session::start(store.list()).unwrap();
    let mut finished = None;
    for choice in [0, 0, 2] {
        session.select_option(choice).unwrap();
        match session.advance().unwrap() {
            Advance::Next => {}
            Advance::Finished(answers) => finished = Some(answers),
        }
    }
    assert_eq!(session.state(), SessionState::Terminal);

    let answers = finished.expect("session should finish after the last question");
    let query = export::to_query(&answers).unwrap();
    let report = report_from_query(&store, &query).unwrap();

    assert_eq!(report.summary.correct_count, 2);
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.percentage, 67);
    assert_eq!(report.band(), FeedbackBand::Good);

    let a = &report.categories[0];
    assert_eq!((a.category.as_str(), a.correct_count, a.total_answered), ("A", 1, 2));
    assert_eq!(a.percentage(), 50);
    let b = &report.categories[1];
    assert_eq!((b.category.as_str(), b.correct_count, b.total_answered), ("B", 1, 1));
    assert_eq!(b.percentage(), 100);
}

#[test]
fn timed_out_question_is_not_scored() {
    let file = TempFile::new();
    let store = seeded_store(&file);
    let mut session = Session::start(store.list()).unwrap();

    session.select_option(0).unwrap();
    session.advance().unwrap();

    while session.state() == SessionState::AwaitingAnswer {
        session.tick();
    }
    assert_eq!(session.state(), SessionState::TimedOut);
    assert_eq!(session.remaining_seconds(), 0);
    session.advance().unwrap();

    session.select_option(1).unwrap();
    let Advance::Finished(answers) = session.advance().unwrap() else {
        panic!("expected the session to finish");
    };

    assert_eq!(answers.len(), 2);
    let report = report_from_query(&store, &export::to_query(&answers).unwrap()).unwrap();
    assert_eq!((report.summary.correct_count, report.summary.total), (1, 2));
    let a = &report.categories[0];
    assert_eq!((a.category.as_str(), a.correct_count, a.total_answered), ("A", 1, 1));
    let b = &report.categories[1];
    assert_eq!((b.category.as_str(), b.correct_count, b.total_answered), ("B", 0, 1));
}

#[test]
fn catalog_edits_persist_across_store_handles() {
    let file = TempFile::new();
    let store = seeded_store(&file);

    store.delete(3).unwrap();
    let added = store.add(new_question("q4", "  ", 3)).unwrap();
    assert_eq!(added.id, 3);
    assert_eq!(added.category, "General");

    let mut edited = store.list()[0].clone();
    edited.text = "edited".to_string();
    store.update(edited).unwrap();

    let reopened = QuestionStore::open(&file.0);
    let texts: Vec<String> = reopened.list().into_iter().map(|q| q.text).collect();
    assert_eq!(texts, vec!["edited", "q2", "q4"]);

    assert!(matches!(reopened.delete(42), Err(StoreError::NotFound(42))));
    assert!(matches!(
        reopened.add(new_question("", "A", 0)),
        Err(StoreError::Invalid(_))
    ));
}

#[test]
fn empty_catalog_cannot_start() {
    let file = TempFile::new();
    let store = QuestionStore::open(&file.0);
    assert!(Session::start(store.list()).is_err());
}
