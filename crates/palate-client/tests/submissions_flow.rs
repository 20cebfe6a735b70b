mod common;

use palate_client::TokenStore;
use palate_shared::{NewSubmission, Submission, SubmissionUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tasting_note(item_id: &str) -> NewSubmission {
    NewSubmission {
        item_id: item_id.to_string(),
        comment: "bright acidity, short finish".to_string(),
        city: "Porto".to_string(),
        country: "Portugal".to_string(),
        rating: 74,
    }
}

#[tokio::test]
async fn failed_creation_is_labeled_and_leaves_local_state_alone() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = common::client_for(&server.uri());
    store.save("tok-subs").unwrap();

    // Caller-side list, as a view component would hold it.
    let mut local: Vec<Submission> = Vec::new();

    match client.submissions.create(tasting_note("item-1")).await {
        Ok(created) => local.push(created),
        Err(err) => assert!(err.to_string().contains("creating submission")),
    }
    assert!(local.is_empty());
}

#[tokio::test]
async fn created_submission_shows_up_for_the_user() {
    let server = MockServer::start().await;
    let note = tasting_note("item-2");

    Mock::given(method("POST"))
        .and(path("/submissions/"))
        .and(header("Authorization", "Bearer tok-subs"))
        .and(body_json(json!({
            "item_id": note.item_id.clone(),
            "comment": note.comment.clone(),
            "city": note.city.clone(),
            "country": note.country.clone(),
            "rating": note.rating
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Submission added successfully",
            "id": "sub-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/submissions/"))
        .and(header("Authorization", "Bearer tok-subs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "submissions": [{
                "id": "sub-1",
                "item_id": note.item_id.clone(),
                "comment": note.comment.clone(),
                "city": note.city.clone(),
                "country": note.country.clone(),
                "rating": note.rating
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = common::client_for(&server.uri());
    store.save("tok-subs").unwrap();

    let created = client.submissions.create(note).await.unwrap();
    assert_eq!(created.id, "sub-1");

    let listed = client.submissions.list_for_user().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn item_filter_is_passed_as_a_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/submissions/"))
        .and(query_param("item_id", "item-7"))
        .and(header("Authorization", "Bearer tok-filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "submissions": [{
                "id": "sub-9",
                "item_id": "item-7",
                "comment": "oxidized",
                "city": "Jena",
                "country": "Germany",
                "rating": 31
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = common::client_for(&server.uri());
    store.save("tok-filter").unwrap();

    let listed = client.submissions.list_for_item("item-7").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].item_id, "item-7");
}

#[tokio::test]
async fn submission_reads_require_a_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/submissions/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _store) = common::client_for(&server.uri());

    let err = client.submissions.list_for_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.operation(), Some("listing submissions"));
}

#[tokio::test]
async fn single_submission_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/submissions/sub-3/"))
        .and(header("Authorization", "Bearer tok-life"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "submission": {
                "id": "sub-3",
                "item_id": "item-5",
                "comment": "needs decanting",
                "city": "Mendoza",
                "country": "Argentina",
                "rating": 66
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/submissions/sub-3/"))
        .and(header("Authorization", "Bearer tok-life"))
        .and(body_json(json!({ "rating": 81 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Submission updated successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/submissions/sub-3/"))
        .and(header("Authorization", "Bearer tok-life"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Submission deleted successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = common::client_for(&server.uri());
    store.save("tok-life").unwrap();

    let fetched = client.submissions.get("sub-3").await.unwrap();
    assert_eq!(fetched.item_id, "item-5");

    let changes = SubmissionUpdate {
        rating: Some(81),
        ..Default::default()
    };
    client.submissions.update("sub-3", &changes).await.unwrap();
    client.submissions.remove("sub-3").await.unwrap();
}
