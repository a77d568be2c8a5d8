mod common;

use common::{create_test_pool, create_test_user};

use ipgeo_core::User;
use ipgeo_db::UserRepository;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_created_user_when_found_by_email_then_fields_round_trip() {
    // Given: A user written through the repository
    let pool = create_test_pool().await;
    let user = User::new(
        "user@example.com".to_string(),
        "$argon2id$stored-hash".to_string(),
    );
    UserRepository::create(&pool, &user).await.unwrap();

    // When: Looking it up by email
    let result = UserRepository::find_by_email(&pool, "user@example.com")
        .await
        .unwrap();

    // Then: The stored fields come back
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.email, eq(&user.email));
    assert_that!(found.password_hash, eq(&user.password_hash));
}

#[tokio::test]
async fn given_email_lookup_then_match_is_exact_and_case_sensitive() {
    // Given
    let pool = create_test_pool().await;
    let user = User::new(
        "User@Example.com".to_string(),
        "$argon2id$stored-hash".to_string(),
    );
    UserRepository::create(&pool, &user).await.unwrap();

    // When / Then: Only the exact spelling matches
    let exact = UserRepository::find_by_email(&pool, "User@Example.com")
        .await
        .unwrap();
    assert_that!(exact, some(anything()));

    let lowered = UserRepository::find_by_email(&pool, "user@example.com")
        .await
        .unwrap();
    assert_that!(lowered, none());
}

#[tokio::test]
async fn given_unknown_id_when_found_then_returns_none() {
    let pool = create_test_pool().await;

    let result = UserRepository::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_duplicate_email_when_created_then_unique_constraint_fails() {
    // Given
    let pool = create_test_pool().await;
    let first = create_test_user(&pool).await;

    // When: Creating another user with the same email
    let duplicate = User {
        id: Uuid::new_v4(),
        email: first.email.clone(),
        password_hash: "$argon2id$other".to_string(),
        created_at: Utc::now(),
    };
    let result = UserRepository::create(&pool, &duplicate).await;

    // Then
    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_existing_email_when_insert_if_absent_then_not_written() {
    // Given
    let pool = create_test_pool().await;
    let existing = create_test_user(&pool).await;

    // When: Seeding the same email again
    let seed = User {
        id: Uuid::new_v4(),
        email: existing.email.clone(),
        password_hash: "$argon2id$other".to_string(),
        created_at: Utc::now(),
    };
    let written = UserRepository::insert_if_absent(&pool, &seed).await.unwrap();

    // Then: Nothing written, original hash untouched
    assert_that!(written, eq(false));
    let found = UserRepository::find_by_id(&pool, existing.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.password_hash, eq(&existing.password_hash));
}

#[tokio::test]
async fn given_fresh_email_when_insert_if_absent_then_written() {
    let pool = create_test_pool().await;
    let user = User::new(
        "seed@example.com".to_string(),
        "$argon2id$seed-hash".to_string(),
    );

    let written = UserRepository::insert_if_absent(&pool, &user).await.unwrap();

    assert_that!(written, eq(true));
}
