use crate::helpers::TestForm;
use claims::{assert_matches, assert_some_eq};
use fake::faker::internet::en::Username;
use fake::Fake;
use password_reset_form::constant::{
    CURRENT_PASSWORD_REQUIRED_MSG, NEW_PASSWORD_REQUIRED_MSG, PASSWORD_RULE_MSG,
    RESET_SUCCESS_MSG, SERVER_ERROR_FALLBACK_MSG, SERVER_UNAVAILABLE_MSG, USERNAME_REQUIRED_MSG,
};
use password_reset_form::domain::FormField;
use password_reset_form::workflow::{SubmissionPhase, SubmitOutcome};
use std::time::Duration;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn empty_required_fields_are_reported_and_nothing_is_sent() {
    // Arrange
    let app = TestForm::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // We assert that no request is fired at the reset endpoint!
        .expect(0)
        .mount(&app.reset_server)
        .await;
    let test_cases = vec![
        (FormField::Username, USERNAME_REQUIRED_MSG),
        (FormField::CurrentPassword, CURRENT_PASSWORD_REQUIRED_MSG),
        (FormField::NewPassword, NEW_PASSWORD_REQUIRED_MSG),
    ];

    for (field, message) in test_cases {
        app.fill_valid();
        app.form.set_field(field, "");

        // Act
        let outcome = app.form.submit().await;

        // Assert
        assert_matches!(outcome, SubmitOutcome::Invalid(_));
        assert_some_eq!(app.form.errors().get(field), message);
        assert_eq!(app.form.phase(), SubmissionPhase::Idle);
    }
}

#[tokio::test]
async fn a_weak_new_password_is_rejected_locally() {
    let app = TestForm::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.reset_server)
        .await;

    for weak in ["abcdef", "abc12"] {
        app.fill("alice", "old1!", weak, weak);

        let outcome = app.form.submit().await;

        assert_matches!(outcome, SubmitOutcome::Invalid(_));
        assert_some_eq!(app.form.errors().get(FormField::NewPassword), PASSWORD_RULE_MSG);
    }
}

#[tokio::test]
async fn valid_input_posts_three_fields_and_ends_in_success() {
    // Arrange
    let app = TestForm::spawn().await;
    Mock::given(path("/submit"))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "currentPassword": "old1!",
            "newPassword": "New1!x"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.reset_server)
        .await;
    app.fill_valid();

    // Act
    let outcome = app.form.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Accepted);
    // Still loading until the reveal delay has passed.
    assert_eq!(app.form.phase(), SubmissionPhase::Loading);
    let phase = app.wait_for_phase(|phase| phase.is_terminal()).await;
    assert_eq!(phase, SubmissionPhase::Success(RESET_SUCCESS_MSG.into()));
    assert!(app.form.errors().is_valid());
}

#[tokio::test]
async fn a_server_message_is_shown_verbatim_and_fields_are_kept() {
    // Arrange
    let mut app = TestForm::spawn().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"message": "Invalid current password"})),
        )
        .expect(1)
        .mount(&app.reset_server)
        .await;
    let username: String = Username().fake();
    app.fill(&username, "old1!", "New1!x", "New1!x");

    // Act
    let outcome = app.form.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Failed("Invalid current password".into()));
    assert_eq!(
        app.form.phase(),
        SubmissionPhase::Failed("Invalid current password".into())
    );
    assert_some_eq!(app.form.view().backend_error(), "Invalid current password");
    let input = app.form.input();
    assert_eq!(input.get(FormField::Username), username);
    assert_eq!(input.get(FormField::CurrentPassword), "old1!");
    assert_eq!(input.get(FormField::ConfirmPassword), "New1!x");
    app.assert_no_navigation_within(Duration::from_millis(300)).await;
}

#[tokio::test]
async fn an_error_without_a_message_uses_the_generic_text() {
    let app = TestForm::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream timeout"))
        .expect(1)
        .mount(&app.reset_server)
        .await;
    app.fill_valid();

    let outcome = app.form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed(SERVER_ERROR_FALLBACK_MSG.into()));
}

#[tokio::test]
async fn an_unreachable_server_is_reported_as_unavailable() {
    // Arrange
    let app = TestForm::spawn_unreachable().await;
    app.fill_valid();

    // Act
    let outcome = app.form.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Failed(SERVER_UNAVAILABLE_MSG.into()));
    assert_eq!(
        app.form.phase(),
        SubmissionPhase::Failed(SERVER_UNAVAILABLE_MSG.into())
    );
}

#[tokio::test]
async fn a_second_submit_while_loading_sends_nothing() {
    // Arrange
    let app = TestForm::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .expect(1)
        .mount(&app.reset_server)
        .await;
    app.fill_valid();

    // Act
    let form = app.form.clone();
    let first = tokio::spawn(async move { form.submit().await });
    app.wait_for_phase(|phase| phase.is_loading()).await;
    assert!(!app.form.view().submit_enabled());
    let second = app.form.submit().await;

    // Assert
    assert_eq!(second, SubmitOutcome::InFlight);
    assert_eq!(first.await.unwrap(), SubmitOutcome::Accepted);
    // Mock expectations are checked on drop
}

#[tokio::test]
async fn a_failed_attempt_can_be_corrected_and_resubmitted() {
    // Arrange
    let app = TestForm::spawn().await;
    Mock::given(body_json(serde_json::json!({
        "username": "alice",
        "currentPassword": "wrong1!",
        "newPassword": "New1!x"
    })))
    .respond_with(
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({"message": "Invalid current password"})),
    )
    .expect(1)
    .mount(&app.reset_server)
    .await;
    Mock::given(body_json(serde_json::json!({
        "username": "alice",
        "currentPassword": "old1!",
        "newPassword": "New1!x"
    })))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&app.reset_server)
    .await;
    app.fill("alice", "wrong1!", "New1!x", "New1!x");

    // Act - Part 1 - Wrong current password
    let outcome = app.form.submit().await;
    assert_eq!(outcome, SubmitOutcome::Failed("Invalid current password".into()));

    // Act - Part 2 - Fix the one field and try again
    app.form.set_field(FormField::CurrentPassword, "old1!");
    let outcome = app.form.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Accepted);
    // The previous failure text is gone as soon as the new attempt starts.
    assert_eq!(app.form.view().backend_error(), None);
    let phase = app.wait_for_phase(|phase| phase.is_terminal()).await;
    assert_eq!(phase, SubmissionPhase::Success(RESET_SUCCESS_MSG.into()));
}
