#![allow(dead_code)]

use board_sharing::application::services::AttachmentUrlSigner;
use board_sharing::domain::board_event::BoardEvent;
use board_sharing::infrastructure::notify::LocalBus;
use board_sharing::state::AppState;
use board_sharing::utils::token_hash::hmac_sha256_hex;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_PUBLIC_BASE_URL: &str = "https://boards.example.com";

pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (email, name) VALUES ($1, $1) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_project(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO projects (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn add_project_manager(pool: &PgPool, project_id: i64, user_id: i64) {
    sqlx::query("INSERT INTO project_managers (project_id, user_id) VALUES ($1, $2)")
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_board(pool: &PgPool, project_id: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO boards (project_id, name) VALUES ($1, $2) RETURNING id")
        .bind(project_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn set_board_token(pool: &PgPool, board_id: i64, token: Option<&str>) {
    sqlx::query("UPDATE boards SET public_share_token = $2 WHERE id = $1")
        .bind(board_id)
        .bind(token)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn board_token(pool: &PgPool, board_id: i64) -> Option<String> {
    sqlx::query_scalar("SELECT public_share_token FROM boards WHERE id = $1")
        .bind(board_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn add_board_member(pool: &PgPool, board_id: i64, user_id: i64) {
    sqlx::query("INSERT INTO board_memberships (board_id, user_id) VALUES ($1, $2)")
        .bind(board_id)
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_label(pool: &PgPool, board_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO labels (board_id, name, color) VALUES ($1, $2, 'berry-red') RETURNING id",
    )
    .bind(board_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_list(pool: &PgPool, board_id: i64, list_type: &str, position: f64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO lists (board_id, type, position, name) VALUES ($1, $2, $3, $2) RETURNING id",
    )
    .bind(board_id)
    .bind(list_type)
    .bind(position)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_card(pool: &PgPool, board_id: i64, list_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO cards (board_id, list_id, position, name) VALUES ($1, $2, 1, $3) RETURNING id",
    )
    .bind(board_id)
    .bind(list_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attach_label(pool: &PgPool, card_id: i64, label_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO card_labels (card_id, label_id) VALUES ($1, $2) RETURNING id")
        .bind(card_id)
        .bind(label_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_task_list(pool: &PgPool, card_id: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO task_lists (card_id, name) VALUES ($1, $2) RETURNING id")
        .bind(card_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_task(pool: &PgPool, task_list_id: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tasks (task_list_id, name) VALUES ($1, $2) RETURNING id")
        .bind(task_list_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_attachment(
    pool: &PgPool,
    card_id: i64,
    kind: &str,
    name: &str,
    data: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO attachments (card_id, type, name, data) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(card_id)
    .bind(kind)
    .bind(name)
    .bind(data)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_board_field_group(pool: &PgPool, board_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO custom_field_groups (board_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(board_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_card_field_group(pool: &PgPool, card_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO custom_field_groups (card_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(card_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_custom_field(pool: &PgPool, group_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO custom_fields (custom_field_group_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(group_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_custom_field_value(
    pool: &PgPool,
    card_id: i64,
    group_id: i64,
    field_id: i64,
    content: &str,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO custom_field_values (card_id, custom_field_group_id, custom_field_id, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(card_id)
    .bind(group_id)
    .bind(field_id)
    .bind(content)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Stores an API token for `user_id` and returns the raw bearer value.
pub async fn create_api_token(pool: &PgPool, user_id: i64, name: &str) -> String {
    let raw = format!("raw-token-{}", name);

    sqlx::query("INSERT INTO api_tokens (user_id, name, token_hash) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(name)
        .bind(hmac_sha256_hex(TEST_SIGNING_SECRET, &raw))
        .execute(pool)
        .await
        .unwrap();

    raw
}

/// Ids of one fully populated board.
#[derive(Debug, Clone, Copy)]
pub struct SeededBoard {
    pub board_id: i64,
    pub active_list_id: i64,
    pub closed_list_id: i64,
    pub archive_list_id: i64,
    pub trash_list_id: i64,
    pub active_card_id: i64,
    pub closed_card_id: i64,
    pub archived_card_id: i64,
    pub trashed_card_id: i64,
    pub label_id: i64,
    pub task_list_id: i64,
    pub task_id: i64,
    pub file_attachment_id: i64,
    pub link_attachment_id: i64,
    pub board_group_id: i64,
    pub card_group_id: i64,
    pub field_id: i64,
    pub value_id: i64,
}

/// Creates a board with every kind of descendant, including archive and
/// trash lists holding their own cards, labels, tasks and attachments.
pub async fn seed_board(pool: &PgPool, project_id: i64, name: &str, member_id: i64) -> SeededBoard {
    let board_id = create_board(pool, project_id, name).await;
    add_board_member(pool, board_id, member_id).await;

    let active_list_id = create_list(pool, board_id, "active", 1.0).await;
    let closed_list_id = create_list(pool, board_id, "closed", 2.0).await;
    let archive_list_id = create_list(pool, board_id, "archive", 3.0).await;
    let trash_list_id = create_list(pool, board_id, "trash", 4.0).await;

    let active_card_id = create_card(pool, board_id, active_list_id, "Active card").await;
    let closed_card_id = create_card(pool, board_id, closed_list_id, "Closed card").await;
    let archived_card_id = create_card(pool, board_id, archive_list_id, "Archived card").await;
    let trashed_card_id = create_card(pool, board_id, trash_list_id, "Trashed card").await;

    let label_id = create_label(pool, board_id, "Bug").await;
    attach_label(pool, active_card_id, label_id).await;
    attach_label(pool, archived_card_id, label_id).await;

    let task_list_id = create_task_list(pool, active_card_id, "Checklist").await;
    let task_id = create_task(pool, task_list_id, "Ship it").await;
    let hidden_task_list = create_task_list(pool, trashed_card_id, "Hidden").await;
    create_task(pool, hidden_task_list, "Hidden task").await;

    let file_attachment_id = create_attachment(
        pool,
        active_card_id,
        "file",
        "plan.pdf",
        "private/uploads/plan-key",
    )
    .await;
    let link_attachment_id = create_attachment(
        pool,
        closed_card_id,
        "link",
        "Docs",
        "https://docs.example.org/plan",
    )
    .await;
    create_attachment(pool, archived_card_id, "file", "old.pdf", "private/old-key").await;

    let board_group_id = create_board_field_group(pool, board_id, "Estimates").await;
    let card_group_id = create_card_field_group(pool, closed_card_id, "Card fields").await;
    create_card_field_group(pool, trashed_card_id, "Trashed fields").await;
    let field_id = create_custom_field(pool, board_group_id, "Points").await;
    let value_id = create_custom_field_value(pool, active_card_id, board_group_id, field_id, "5").await;
    create_custom_field_value(pool, archived_card_id, board_group_id, field_id, "8").await;

    SeededBoard {
        board_id,
        active_list_id,
        closed_list_id,
        archive_list_id,
        trash_list_id,
        active_card_id,
        closed_card_id,
        archived_card_id,
        trashed_card_id,
        label_id,
        task_list_id,
        task_id,
        file_attachment_id,
        link_attachment_id,
        board_group_id,
        card_group_id,
        field_id,
        value_id,
    }
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<BoardEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let url_signer =
        AttachmentUrlSigner::new(TEST_PUBLIC_BASE_URL, "test-attachment-secret", 3600).unwrap();

    let state = AppState::new(
        Arc::new(pool),
        tx,
        Arc::new(LocalBus::default()),
        TEST_SIGNING_SECRET.to_string(),
        url_signer,
    );

    (state, rx)
}
