//! End-to-end sign-up flow over the file-backed store.

use dreamclerk_application::SessionContext;
use dreamclerk_application::registration_service::WELCOME_LINK;
use dreamclerk_core::config::AppConfig;
use dreamclerk_core::notification::{NotificationEvent, NotificationKind};
use dreamclerk_core::registration::{RegistrationForm, RegistrationWizard, StepOutcome};
use dreamclerk_core::user::ProfileField;
use tempfile::TempDir;

fn open_session(temp_dir: &TempDir) -> SessionContext {
    let config = AppConfig {
        data_dir: Some(temp_dir.path().to_path_buf()),
        ..AppConfig::default()
    };
    SessionContext::open(config).unwrap()
}

fn form(name: &str, email: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_string(),
        email: email.to_string(),
        password: "abc12345".to_string(),
        confirm_password: "abc12345".to_string(),
        bio: String::new(),
        accept_terms: true,
    }
}

fn walk_to_final_step(wizard: &mut RegistrationWizard) {
    while !wizard.is_final_step() {
        wizard.next().unwrap();
    }
    assert_eq!(wizard.next().unwrap(), StepOutcome::Submit);
}

#[tokio::test]
async fn test_register_signs_in_and_welcomes() {
    let temp_dir = TempDir::new().unwrap();
    let session = open_session(&temp_dir);
    let mut events = session.notifications().subscribe();

    let mut wizard = RegistrationWizard::with_form(form("Ada", "ada@example.com"));
    walk_to_final_step(&mut wizard);
    let user = session.register(&mut wizard).await.unwrap();

    // Wizard is reset for the next visitor.
    assert_eq!(wizard.step(), 1);
    assert_eq!(session.current_user_id().await, Some(user.id.clone()));

    // Counter and registrations agree.
    assert_eq!(session.counter().get_count().await, 1);
    let stats = session.counter().stats().await.unwrap().unwrap();
    assert_eq!(stats.value, 1);

    // Welcome notification was stored and streamed.
    let notifications = session.notifications().list(&user.id).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Success);
    assert_eq!(notifications[0].link.as_deref(), Some(WELCOME_LINK));
    match events.recv().await.unwrap() {
        NotificationEvent::Created { notification } => assert_eq!(notification.user_id, user.id),
        other => panic!("unexpected event: {:?}", other),
    }

    // Fresh profile is incomplete.
    let completion = session.profiles().completion(&user.id).await.unwrap();
    assert!(!completion.is_complete);
    assert!(!completion.missing_fields.contains(&ProfileField::Name));
    assert!(completion.missing_fields.contains(&ProfileField::Bio));

    session.logout().await;
    assert!(session.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_counter_tracks_successive_registrations() {
    let temp_dir = TempDir::new().unwrap();
    let session = open_session(&temp_dir);

    for (i, email) in ["a@example.com", "b@example.com", "c@example.com"]
        .iter()
        .enumerate()
    {
        session
            .registration()
            .register_form(&form("Student", email))
            .await
            .unwrap();
        assert_eq!(session.counter().stats().await.unwrap().unwrap().value, i as u64 + 1);
    }
    assert_eq!(session.counter().get_count().await, 3);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let session = open_session(&temp_dir);

    session
        .registration()
        .register_form(&form("Ada", "ada@example.com"))
        .await
        .unwrap();
    let err = session
        .registration()
        .register_form(&form("Ada Again", "ADA@example.com"))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(session.counter().get_count().await, 1);
}

#[tokio::test]
async fn test_invalid_form_registers_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let session = open_session(&temp_dir);

    let mut bad = form("Ada", "ada@example.com");
    bad.confirm_password = "mismatch1".to_string();
    let err = session.registration().register_form(&bad).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.user_message(), "Passwords do not match.");
    assert_eq!(session.counter().get_count().await, 0);
}

#[tokio::test]
async fn test_sign_in_after_restart() {
    let temp_dir = TempDir::new().unwrap();
    let user = {
        let session = open_session(&temp_dir);
        session
            .registration()
            .register_form(&form("Ada", "ada@example.com"))
            .await
            .unwrap()
    };

    let session = open_session(&temp_dir);
    assert!(session.current_user_id().await.is_none());
    let signed_in = session.sign_in("ada@example.com").await.unwrap();
    assert_eq!(signed_in.id, user.id);
    assert!(session.sign_in("nobody@example.com").await.unwrap_err().is_not_found());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_simultaneous_sign_ups_keep_stats_equal_to_registrations() {
    let temp_dir = TempDir::new().unwrap();
    let session = open_session(&temp_dir);
    let registration = session.registration();
    let forms = [
        form("A", "a@example.com"),
        form("B", "b@example.com"),
        form("C", "c@example.com"),
        form("A again", "a@example.com"),
    ];

    let (a, b, c, d) = tokio::join!(
        registration.register_form(&forms[0]),
        registration.register_form(&forms[1]),
        registration.register_form(&forms[2]),
        registration.register_form(&forms[3]),
    );

    let registered = [a.is_ok(), b.is_ok(), c.is_ok(), d.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(registered, 3);
    assert_eq!(session.counter().get_count().await, 3);
    assert_eq!(session.counter().stats().await.unwrap().unwrap().value, 3);
}
