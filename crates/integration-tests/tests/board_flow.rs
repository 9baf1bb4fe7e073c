//! End-to-end tests for signup, login, and posting.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The board server running (cargo run -p clubhouse-board)
//!
//! Run with: cargo test -p clubhouse-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use uuid::Uuid;

use clubhouse_integration_tests::{board_base_url, client};

/// Test helper: generate a unique username.
fn unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Test helper: sign up an account with matching passwords.
async fn sign_up(client: &Client, username: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/sign-up", board_base_url()))
        .form(&[
            ("first_name", "Test"),
            ("last_name", "User"),
            ("username", username),
            ("password", password),
            ("confirm_password", password),
        ])
        .send()
        .await
        .expect("Failed to sign up")
}

/// Test helper: log in with the given credentials.
async fn log_in(client: &Client, username: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/log-in", board_base_url()))
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .expect("Failed to log in")
}

/// Test helper: post a message as the logged-in user.
async fn post_message(client: &Client, title: &str, body: &str) -> reqwest::Response {
    client
        .post(format!("{}/new-message", board_base_url()))
        .form(&[("title", title), ("message", body)])
        .send()
        .await
        .expect("Failed to post message")
}

/// Test helper: fetch the message list page body.
async fn board_page(client: &Client) -> String {
    client
        .get(board_base_url())
        .send()
        .await
        .expect("Failed to fetch board")
        .text()
        .await
        .expect("Failed to read board page")
}

// ============================================================================
// Signup Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_signup_redirects_to_login() {
    let client = client();
    let resp = sign_up(&client, &unique_username("signup"), "pw123-secret").await;

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/log-in");
}

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_signup_rejects_empty_fields() {
    let client = client();
    let resp = client
        .post(format!("{}/sign-up", board_base_url()))
        .form(&[
            ("first_name", ""),
            ("last_name", "User"),
            ("username", unique_username("empty").as_str()),
            ("password", "pw123-secret"),
            ("confirm_password", "pw123-secret"),
        ])
        .send()
        .await
        .expect("Failed to sign up");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body, "All fields are required.");
}

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_signup_rejects_password_mismatch() {
    let client = client();
    let resp = client
        .post(format!("{}/sign-up", board_base_url()))
        .form(&[
            ("first_name", "Test"),
            ("last_name", "User"),
            ("username", unique_username("mismatch").as_str()),
            ("password", "pw123-secret"),
            ("confirm_password", "pw124-secret"),
        ])
        .send()
        .await
        .expect("Failed to sign up");

    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body, "Passwords do not match.");
}

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_signup_rejects_duplicate_username() {
    let client = client();
    let username = unique_username("dup");

    let resp = sign_up(&client, &username, "pw123-secret").await;
    assert!(resp.status().is_redirection());

    // Second signup with the same username fails without creating an account
    let resp = sign_up(&client, &username, "pw123-secret").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body, "There was an error creating your account.");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_login_failures_are_indistinguishable() {
    let client = client();
    let username = unique_username("login");
    sign_up(&client, &username, "pw123-secret").await;

    // Wrong password
    let resp = log_in(&client, &username, "wrong-password").await;
    assert!(resp.status().is_redirection());
    let wrong_password_location = resp.headers()["location"].clone();

    // Unknown username
    let resp = log_in(&client, &unique_username("nobody"), "pw123-secret").await;
    assert!(resp.status().is_redirection());
    let unknown_user_location = resp.headers()["location"].clone();

    // Both failures land on the same login redirect
    assert_eq!(wrong_password_location, unknown_user_location);
    assert_eq!(wrong_password_location, "/log-in?error=credentials");
}

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_logout_clears_session() {
    let client = client();
    let username = unique_username("logout");
    sign_up(&client, &username, "pw123-secret").await;

    let resp = log_in(&client, &username, "pw123-secret").await;
    assert!(resp.status().is_redirection());

    let resp = client
        .get(format!("{}/log-out", board_base_url()))
        .send()
        .await
        .expect("Failed to log out");
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/");

    // Gated routes reject the old session
    let resp = client
        .get(format!("{}/new-message", board_base_url()))
        .send()
        .await
        .expect("Failed to fetch new-message");
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/log-in");
}

// ============================================================================
// Authorization Gate Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_gated_routes_redirect_anonymous_to_login() {
    let client = client();
    let base_url = board_base_url();

    for path in ["/new-message", "/join-club"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to fetch gated route");
        assert!(resp.status().is_redirection(), "{path} should redirect");
        assert_eq!(resp.headers()["location"], "/log-in", "{path}");
    }

    // Mutations are gated too
    let resp = client
        .post(format!("{base_url}/delete-message/1"))
        .send()
        .await
        .expect("Failed to post delete");
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/log-in");
}

// ============================================================================
// End-to-End Flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_signup_login_post_flow() {
    let client = client();
    let username = unique_username("alice");

    // Sign up redirects to the login form
    let resp = sign_up(&client, &username, "pw123-secret").await;
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/log-in");

    // Log in establishes a session and redirects home
    let resp = log_in(&client, &username, "pw123-secret").await;
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/");

    // Post two messages; the newer one must be listed first
    let first_title = format!("Hi {}", Uuid::new_v4());
    let second_title = format!("Hello again {}", Uuid::new_v4());

    let resp = post_message(&client, &first_title, "Hello").await;
    assert!(resp.status().is_redirection());
    let resp = post_message(&client, &second_title, "Still here").await;
    assert!(resp.status().is_redirection());

    let body = board_page(&client).await;
    let first_pos = body.find(&first_title).expect("first message not listed");
    let second_pos = body.find(&second_title).expect("second message not listed");
    assert!(
        second_pos < first_pos,
        "newer message should appear before older one"
    );

    // Attributed to the author
    assert!(body.contains("Test User"));
}

#[tokio::test]
#[ignore = "Requires running board server and database"]
async fn test_new_message_requires_both_fields() {
    let client = client();
    let username = unique_username("fields");
    sign_up(&client, &username, "pw123-secret").await;
    log_in(&client, &username, "pw123-secret").await;

    let resp = post_message(&client, "", "no title here").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body, "Both fields are required.");
}
