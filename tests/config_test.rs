use std::{env, fs};

use akshun::config;
use akshun::rdio::RdioSession;

// One sequential test: the data-dir override and the credentials are
// process-global environment state.
#[tokio::test]
async fn test_environment_loading_and_session_credentials() {
    // Point the local data directory at a scratch location
    let mut scratch = env::temp_dir();
    scratch.push(format!("akshun-config-test-{}", std::process::id()));
    fs::create_dir_all(&scratch).unwrap();
    unsafe { env::set_var("XDG_DATA_HOME", &scratch) };

    // A missing .env file is not an error; credentials may come straight
    // from the environment
    assert!(config::load_env().await.is_ok());

    // A file that exists but cannot be parsed is
    let env_file = scratch.join("akshun/.env");
    fs::create_dir_all(env_file.parent().unwrap()).unwrap();
    fs::write(&env_file, "THIS IS NOT A VALID LINE\n").unwrap();
    assert!(config::load_env().await.is_err());
    fs::remove_file(&env_file).unwrap();

    // With credentials in the environment the session constructs either way
    unsafe {
        env::set_var("RDIO_CONSUMER_KEY", "test-key");
        env::set_var("RDIO_CONSUMER_SECRET", "test-secret");
    }
    let _session = RdioSession::default();

    fs::remove_dir_all(&scratch).ok();
}
