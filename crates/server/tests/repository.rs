mod common;

use common::{QUESTIONS, TestApp};
use trivia_core::domain::{CategoryId, QuestionId};
use trivia_server::repository::NewQuestion;

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let app = TestApp::spawn().await;
    let questions = app.state.questions.list_all().await.expect("list questions");
    let mut record = questions[0].clone();
    record.question = "Which year did Iron Man premiere?".to_string();
    record.answer = "2008".to_string();
    record.category = app.category_id("Science");
    record.difficulty = 2;

    let updated = app
        .state
        .questions
        .update(record.clone())
        .await
        .expect("update question")
        .expect("question exists");

    assert_eq!(updated, record);
    let stored = app
        .state
        .questions
        .find_by_id(record.id)
        .await
        .expect("find question")
        .expect("question exists");
    assert_eq!(stored, record);
}

#[tokio::test]
async fn test_update_missing_question_returns_none() {
    let app = TestApp::spawn().await;
    let mut record = app.state.questions.list_all().await.expect("list questions")[0].clone();
    record.id = QuestionId::new(9_999);

    let updated = app.state.questions.update(record).await.expect("update question");

    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_category_removes_its_questions() {
    let app = TestApp::spawn().await;
    let entertainment = app.category_id("Entertainment");

    let deleted = app
        .state
        .categories
        .delete(entertainment)
        .await
        .expect("delete category");

    assert!(deleted);
    assert!(
        app.state
            .categories
            .find_by_id(entertainment)
            .await
            .expect("find category")
            .is_none()
    );
    let remaining = app.state.questions.list_all().await.expect("list questions");
    assert_eq!(remaining.len(), QUESTIONS.len() - 2);
    assert!(remaining.iter().all(|question| question.category != entertainment));

    let again = app
        .state
        .categories
        .delete(entertainment)
        .await
        .expect("delete category twice");
    assert!(!again);
}

#[tokio::test]
async fn test_list_by_category_uses_relation() {
    let app = TestApp::spawn().await;
    let sports = app.category_id("Sports");

    let questions = app
        .state
        .questions
        .list_by_category(sports)
        .await
        .expect("list by category");

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answer, "Lionel Messi");
    assert!(
        app.state
            .questions
            .list_by_category(CategoryId::new(404))
            .await
            .expect("list unknown category")
            .is_empty()
    );
}

#[tokio::test]
async fn test_search_matches_substring_in_any_case() {
    let app = TestApp::spawn().await;

    let matches = app.state.questions.search("WHO").await.expect("search");

    assert_eq!(matches.len(), 2);
    assert!(
        matches
            .iter()
            .all(|question| question.question.to_lowercase().contains("who"))
    );
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let app = TestApp::spawn().await;
    let science = app.category_id("Science");
    let new_question = |text: &str| NewQuestion {
        question: text.to_string(),
        answer: "answer".to_string(),
        category: science,
        difficulty: 1,
    };

    let first = app
        .state
        .questions
        .create(new_question("First?"))
        .await
        .expect("create first");
    let second = app
        .state
        .questions
        .create(new_question("Second?"))
        .await
        .expect("create second");

    assert!(second.id > first.id);
    assert_eq!(first.category, science);
}

#[tokio::test]
async fn test_search_finds_non_ascii_text_as_written() {
    let app = TestApp::spawn().await;
    app.state
        .questions
        .create(NewQuestion {
            question: "Which Église overlooks the Île de la Cité?".to_string(),
            answer: "Notre-Dame".to_string(),
            category: app.category_id("Science"),
            difficulty: 2,
        })
        .await
        .expect("create question");

    let exact = app.state.questions.search("Église").await.expect("search");
    let ascii_case = app.state.questions.search("WHICH Église").await.expect("search");

    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].answer, "Notre-Dame");
    assert_eq!(ascii_case.len(), 1);
}
