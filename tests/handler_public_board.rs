mod common;

use axum_test::TestServer;
use board_sharing::routes::router;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashSet;

const TOKEN_A: &str = "aaaaaaaaaaaaaaaabbbbbbbbbbbbbbbb";
const TOKEN_B: &str = "ccccccccccccccccdddddddddddddddd";

struct Fixture {
    server: TestServer,
    pool: PgPool,
    project_id: i64,
    a: common::SeededBoard,
    b: common::SeededBoard,
}

async fn setup(pool: PgPool) -> Fixture {
    let project_id = common::create_project(&pool, "Acme").await;
    let member = common::create_user(&pool, "member@example.com").await;

    let a = common::seed_board(&pool, project_id, "Board A", member).await;
    let b = common::seed_board(&pool, project_id, "Board B", member).await;
    common::set_board_token(&pool, a.board_id, Some(TOKEN_A)).await;
    common::set_board_token(&pool, b.board_id, Some(TOKEN_B)).await;

    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(router(state)).unwrap();

    Fixture {
        server,
        pool,
        project_id,
        a,
        b,
    }
}

fn ids(json: &Value, collection: &str) -> HashSet<i64> {
    json["included"][collection]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

fn set(values: &[i64]) -> HashSet<i64> {
    values.iter().copied().collect()
}

#[sqlx::test]
async fn test_snapshot_contains_only_the_shared_board(pool: PgPool) {
    let fx = setup(pool).await;

    let response = fx.server.get(&format!("/public-boards/{}", TOKEN_A)).await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    let a = fx.a;

    assert_eq!(json["item"]["id"], a.board_id);
    assert_eq!(ids(&json, "lists"), set(&[a.active_list_id, a.closed_list_id]));
    assert_eq!(ids(&json, "cards"), set(&[a.active_card_id, a.closed_card_id]));
    assert_eq!(ids(&json, "labels"), set(&[a.label_id]));
    assert_eq!(ids(&json, "taskLists"), set(&[a.task_list_id]));
    assert_eq!(ids(&json, "tasks"), set(&[a.task_id]));
    assert_eq!(
        ids(&json, "attachments"),
        set(&[a.file_attachment_id, a.link_attachment_id])
    );
    assert_eq!(
        ids(&json, "customFieldGroups"),
        set(&[a.board_group_id, a.card_group_id])
    );
    assert_eq!(ids(&json, "customFields"), set(&[a.field_id]));
    assert_eq!(ids(&json, "customFieldValues"), set(&[a.value_id]));
    assert_eq!(ids(&json, "projects"), set(&[fx.project_id]));
}

#[sqlx::test]
async fn test_snapshot_has_no_cross_board_leakage(pool: PgPool) {
    let fx = setup(pool).await;

    let json = fx
        .server
        .get(&format!("/public-boards/{}", TOKEN_B))
        .await
        .json::<Value>();
    let a = fx.a;

    assert_eq!(json["item"]["id"], fx.b.board_id);

    for card in json["included"]["cards"].as_array().unwrap() {
        assert_eq!(card["boardId"], fx.b.board_id);
    }
    for list in json["included"]["lists"].as_array().unwrap() {
        assert_eq!(list["boardId"], fx.b.board_id);
    }
    let a_card_ids = set(&[
        a.active_card_id,
        a.closed_card_id,
        a.archived_card_id,
        a.trashed_card_id,
    ]);

    assert!(ids(&json, "labels").is_disjoint(&set(&[a.label_id])));
    assert!(ids(&json, "lists").is_disjoint(&set(&[
        a.active_list_id,
        a.closed_list_id,
        a.archive_list_id,
        a.trash_list_id,
    ])));
    assert!(ids(&json, "cards").is_disjoint(&a_card_ids));
    assert!(ids(&json, "taskLists").is_disjoint(&set(&[a.task_list_id])));
    assert!(ids(&json, "tasks").is_disjoint(&set(&[a.task_id])));
    assert!(ids(&json, "attachments").is_disjoint(&set(&[
        a.file_attachment_id,
        a.link_attachment_id,
    ])));
    assert!(ids(&json, "customFieldGroups").is_disjoint(&set(&[
        a.board_group_id,
        a.card_group_id,
    ])));
    assert!(ids(&json, "customFields").is_disjoint(&set(&[a.field_id])));
    assert!(ids(&json, "customFieldValues").is_disjoint(&set(&[a.value_id])));

    for card_label in json["included"]["cardLabels"].as_array().unwrap() {
        let card_id = card_label["cardId"].as_i64().unwrap();
        let label_id = card_label["labelId"].as_i64().unwrap();
        assert!(!a_card_ids.contains(&card_id));
        assert_ne!(label_id, a.label_id);
    }
    for attachment in json["included"]["attachments"].as_array().unwrap() {
        let card_id = attachment["cardId"].as_i64().unwrap();
        assert!(!a_card_ids.contains(&card_id));
    }
    for value in json["included"]["customFieldValues"].as_array().unwrap() {
        let card_id = value["cardId"].as_i64().unwrap();
        assert!(!a_card_ids.contains(&card_id));
    }
}

#[sqlx::test]
async fn test_snapshot_excludes_archive_and_trash(pool: PgPool) {
    let fx = setup(pool).await;

    let json = fx
        .server
        .get(&format!("/public-boards/{}", TOKEN_A))
        .await
        .json::<Value>();
    let a = fx.a;

    for list in json["included"]["lists"].as_array().unwrap() {
        let list_type = list["type"].as_str().unwrap();
        assert!(list_type == "active" || list_type == "closed");
    }

    let card_ids = ids(&json, "cards");
    assert!(!card_ids.contains(&a.archived_card_id));
    assert!(!card_ids.contains(&a.trashed_card_id));

    for card_label in json["included"]["cardLabels"].as_array().unwrap() {
        assert_eq!(card_label["cardId"], a.active_card_id);
    }
    for value in json["included"]["customFieldValues"].as_array().unwrap() {
        assert_ne!(value["cardId"], a.archived_card_id);
    }
    assert_eq!(json["included"]["tasks"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_snapshot_has_no_membership_or_user_data(pool: PgPool) {
    let fx = setup(pool).await;

    let json = fx
        .server
        .get(&format!("/public-boards/{}", TOKEN_A))
        .await
        .json::<Value>();

    let included = json["included"].as_object().unwrap();
    assert!(!included.contains_key("boardMemberships"));
    assert!(!included.contains_key("users"));

    let body = json.to_string();
    assert!(!body.contains("member@example.com"));
}

#[sqlx::test]
async fn test_file_attachments_are_signed_urls(pool: PgPool) {
    let fx = setup(pool).await;

    let json = fx
        .server
        .get(&format!("/public-boards/{}", TOKEN_A))
        .await
        .json::<Value>();

    let attachments = json["included"]["attachments"].as_array().unwrap();
    let file = attachments
        .iter()
        .find(|a| a["id"] == fx.a.file_attachment_id)
        .unwrap();
    let link = attachments
        .iter()
        .find(|a| a["id"] == fx.a.link_attachment_id)
        .unwrap();

    let url = file["url"].as_str().unwrap();
    assert!(url.starts_with(&format!(
        "{}/attachments/{}/download/plan.pdf?expires=",
        common::TEST_PUBLIC_BASE_URL,
        fx.a.file_attachment_id
    )));
    assert!(url.contains("&signature="));
    assert!(file.get("data").is_none());
    assert!(!json.to_string().contains("private/uploads/plan-key"));

    assert_eq!(link["url"], "https://docs.example.org/plan");
}

#[sqlx::test]
async fn test_response_is_not_cacheable(pool: PgPool) {
    let fx = setup(pool).await;

    let response = fx.server.get(&format!("/public-boards/{}", TOKEN_A)).await;

    response.assert_status_ok();
    assert_eq!(response.header("cache-control"), "no-store");
}

#[sqlx::test]
async fn test_public_route_needs_no_authentication(pool: PgPool) {
    let fx = setup(pool).await;

    let response = fx.server.get(&format!("/public-boards/{}", TOKEN_A)).await;

    response.assert_status_ok();
    assert!(response.headers().get("www-authenticate").is_none());
}

#[sqlx::test]
async fn test_revoked_token_is_not_found(pool: PgPool) {
    let fx = setup(pool).await;
    common::set_board_token(&fx.pool, fx.a.board_id, None).await;

    fx.server
        .get(&format!("/public-boards/{}", TOKEN_A))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_never_issued_token_is_not_found(pool: PgPool) {
    let fx = setup(pool).await;

    fx.server
        .get("/public-boards/0123456789abcdef0123456789abcdef")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_malformed_token_is_not_found(pool: PgPool) {
    let fx = setup(pool).await;

    fx.server
        .get("/public-boards/not-a-token")
        .await
        .assert_status_not_found();
    fx.server
        .get(&format!("/public-boards/{}", TOKEN_A.to_uppercase()))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_not_found_bodies_are_identical(pool: PgPool) {
    let fx = setup(pool).await;
    common::set_board_token(&fx.pool, fx.b.board_id, None).await;

    let malformed = fx.server.get("/public-boards/xyz").await;
    let unknown = fx
        .server
        .get("/public-boards/0123456789abcdef0123456789abcdef")
        .await;
    let revoked = fx.server.get(&format!("/public-boards/{}", TOKEN_B)).await;

    malformed.assert_status_not_found();
    unknown.assert_status_not_found();
    revoked.assert_status_not_found();

    assert_eq!(malformed.text(), unknown.text());
    assert_eq!(unknown.text(), revoked.text());

    let json = unknown.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Board not found");
}

#[sqlx::test]
async fn test_undecodable_token_matches_unknown_token_body(pool: PgPool) {
    let fx = setup(pool).await;

    let undecodable = fx.server.get("/public-boards/%FF").await;
    let unknown = fx
        .server
        .get("/public-boards/0123456789abcdef0123456789abcdef")
        .await;

    undecodable.assert_status_not_found();
    assert_eq!(undecodable.text(), unknown.text());
    assert_eq!(
        undecodable.json::<Value>()["error"]["message"],
        "Board not found"
    );
}

#[sqlx::test]
async fn test_empty_board_snapshot(pool: PgPool) {
    let project_id = common::create_project(&pool, "Acme").await;
    let board_id = common::create_board(&pool, project_id, "Empty").await;
    common::set_board_token(&pool, board_id, Some(TOKEN_A)).await;

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get(&format!("/public-boards/{}", TOKEN_A)).await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["item"]["id"], board_id);
    assert!(json["included"]["lists"].as_array().unwrap().is_empty());
    assert!(json["included"]["cards"].as_array().unwrap().is_empty());
    assert_eq!(json["included"]["projects"].as_array().unwrap().len(), 1);
}
