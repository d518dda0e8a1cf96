//! Tests for a session surviving an application restart.
//!
//! A restart is simulated by opening a second store over the same session file.

use khademni::{
    config::Config,
    model::auth::Role,
    navigation::{LANDING_PATH, WORKER_DASHBOARD_PATH},
    session::SessionStore,
};
use khademni_test_utils::prelude::*;

fn config_in(dir: &tempfile::TempDir) -> Result<Config, TestError> {
    Ok(Config::new("http://localhost:8080")?.with_session_file(dir.path().join("session.json")))
}

/// Expect a login to be visible after reopening the store
#[test]
fn restores_session_after_restart() -> Result<(), TestError> {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir)?;

    SessionStore::for_config(&config).set_session("abc", Role::Worker);
    let reopened = SessionStore::for_config(&config);

    assert!(reopened.is_authenticated());
    assert_eq!(reopened.token().as_deref(), Some("abc"));
    assert_eq!(reopened.session().dashboard_path(), WORKER_DASHBOARD_PATH);

    Ok(())
}

/// Expect a logout to be visible after reopening the store
#[test]
fn clear_survives_restart() -> Result<(), TestError> {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir)?;

    let store = SessionStore::for_config(&config);
    store.set_session("abc", Role::Employer);
    store.clear();
    let reopened = SessionStore::for_config(&config);

    assert!(!reopened.is_authenticated());
    assert_eq!(reopened.role(), None);
    assert_eq!(reopened.session().dashboard_path(), LANDING_PATH);

    Ok(())
}

/// Expect a full login through the services to reach the session file
#[tokio::test]
async fn login_writes_through_to_file() -> Result<(), TestError> {
    let dir = tempfile::tempdir().unwrap();
    let test = TestBuilder::new()
        .with_login_endpoint(Role::Employer, 1)
        .build()
        .await?;
    let config = Config::new(&test.server.url())?.with_session_file(dir.path().join("session.json"));

    let services = khademni::service::Services::from_config(&config);
    services.auth.login(&auth_factory::mock_login()).await?;
    let reopened = SessionStore::for_config(&config);

    assert_eq!(reopened.role(), Some(Role::Employer));
    test.assert_mocks();

    Ok(())
}
