#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::tests::support::{add_category, add_question, send, setup_app, setup_app_with};

    async fn draw_all(app: &axum::Router, category: Value) -> Vec<i64> {
        let mut previous: Vec<i64> = Vec::new();
        loop {
            let body = json!({"previous_questions": previous, "quiz_category": {"type": "x", "id": category}});
            let (status, json) = send(app, "POST", "/quizzes", Some(body)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["success"], true);
            match json["question"]["id"].as_i64() {
                Some(id) => {
                    assert!(!previous.contains(&id), "question {id} drawn twice");
                    previous.push(id);
                }
                None => return previous,
            }
        }
    }

    #[tokio::test]
    async fn test_quiz_draws_each_category_question_once() {
        let (app, state) = setup_app().await;
        let science = add_category(&state.db, "Science").await;
        let art = add_category(&state.db, "Art").await;
        let mut expected = HashSet::new();
        for n in 0..5 {
            expected.insert(add_question(&state.db, &format!("S{n}"), science, 1).await);
            add_question(&state.db, &format!("A{n}"), art, 1).await;
        }

        let drawn = draw_all(&app, json!(science)).await;

        assert_eq!(drawn.len(), 5);
        assert_eq!(drawn.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[tokio::test]
    async fn test_quiz_all_categories() {
        let (app, state) = setup_app().await;
        let science = add_category(&state.db, "Science").await;
        let art = add_category(&state.db, "Art").await;
        for n in 0..3 {
            add_question(&state.db, &format!("S{n}"), science, 1).await;
            add_question(&state.db, &format!("A{n}"), art, 1).await;
        }

        assert_eq!(draw_all(&app, json!(0)).await.len(), 6);
        assert_eq!(draw_all(&app, json!("all")).await.len(), 6);
    }

    #[tokio::test]
    async fn test_quiz_category_as_string_id() {
        let (app, state) = setup_app().await;
        let science = add_category(&state.db, "Science").await;
        let q = add_question(&state.db, "S", science, 1).await;

        let body = json!({"previous_questions": [], "quiz_category": {"id": science.to_string()}});
        let (status, json) = send(&app, "POST", "/quizzes", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["question"]["id"], q);
    }

    #[tokio::test]
    async fn test_quiz_exhausted_pool_returns_no_question() {
        let (app, state) = setup_app().await;
        let cat = add_category(&state.db, "Science").await;
        let q = add_question(&state.db, "Only one", cat, 1).await;

        let body = json!({"previous_questions": [q], "quiz_category": {"id": cat}});
        let (status, json) = send(&app, "POST", "/quizzes", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"success": true, "question": null}));

        let body = json!({"quiz_category": {"id": 0}});
        let (status, json) = send(&app, "POST", "/quizzes", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["question"]["id"], q);
    }

    #[tokio::test]
    async fn test_quiz_on_empty_database() {
        let (app, _) = setup_app().await;
        let body = json!({"previous_questions": [], "quiz_category": {"id": 0}});
        let (status, json) = send(&app, "POST", "/quizzes", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["question"].is_null());
    }

    #[tokio::test]
    async fn test_quiz_without_category_is_400() {
        let (app, _) = setup_app().await;
        let bodies = [
            json!({"previous_questions": []}),
            json!({"previous_questions": [], "quiz_category": null}),
            json!({"previous_questions": [], "quiz_category": {"type": "Science"}}),
            json!({"previous_questions": [], "quiz_category": {"id": "science"}}),
        ];
        for body in bodies {
            let (status, json) = send(&app, "POST", "/quizzes", Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["error"], 400);
        }
    }

    #[tokio::test]
    async fn test_quiz_seeded_draws_repeat() {
        async fn sequence() -> Vec<i64> {
            let (app, state) = setup_app_with("[quiz]\nseed = 99\n").await;
            let cat = add_category(&state.db, "Science").await;
            for n in 0..10 {
                add_question(&state.db, &format!("S{n}"), cat, 1).await;
            }
            let mut out = Vec::new();
            for _ in 0..5 {
                let body = json!({"quiz_category": {"id": cat}});
                let (_, json) = send(&app, "POST", "/quizzes", Some(body)).await;
                out.push(json["question"]["id"].as_i64().unwrap());
            }
            out
        }

        assert_eq!(sequence().await, sequence().await);
    }
}
