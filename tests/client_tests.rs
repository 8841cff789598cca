use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tumblr::{Client, Config};

// Tests in this file share the process-wide configuration
static GLOBAL_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_new_clients_receive_global_credentials() {
    let _guard = GLOBAL_LOCK.lock();
    tumblr::reset();
    tumblr::configure(|c| c.credentials.consumer_key = Some("thekey".to_string()));

    let client = Client::new();
    assert_eq!(client.credentials().consumer_key.as_deref(), Some("thekey"));
    assert_eq!(tumblr::credentials().consumer_key.as_deref(), Some("thekey"));
    assert_eq!(tumblr::new().credentials().consumer_key.as_deref(), Some("thekey"));
    tumblr::reset();
}

#[test]
fn test_global_changes_do_not_reach_existing_clients() {
    let _guard = GLOBAL_LOCK.lock();
    tumblr::reset();
    tumblr::configure(|c| c.credentials.consumer_key = Some("first".to_string()));
    let before = Client::new();

    tumblr::configure(|c| {
        c.credentials.consumer_key = Some("second".to_string());
        c.api_scheme = "http".to_string();
    });
    let after = Client::new();

    assert_eq!(before.credentials().consumer_key.as_deref(), Some("first"));
    assert_eq!(before.api_scheme(), "https");
    assert_eq!(after.credentials().consumer_key.as_deref(), Some("second"));
    assert_eq!(after.api_scheme(), "http");
    tumblr::reset();
}

#[test]
fn test_custom_clients_keep_separate_credentials() {
    let _guard = GLOBAL_LOCK.lock();
    tumblr::reset();
    let client1 = Client::with_config(tumblr::config().with_consumer_key("key1"));
    let client2 = Client::with_config(tumblr::config().with_consumer_key("key2"));

    assert_ne!(
        client1.credentials().consumer_key,
        client2.credentials().consumer_key
    );
    assert_eq!(tumblr::credentials().consumer_key, None);
}

#[test]
fn test_api_scheme() {
    let _guard = GLOBAL_LOCK.lock();
    tumblr::reset();
    assert_eq!(Client::new().api_scheme(), "https");

    let client = Client::with_config(Config::default().with_api_scheme("http"));
    assert_eq!(client.api_scheme(), "http");

    tumblr::configure(|c| c.api_scheme = "http".to_string());
    assert_eq!(Client::new().api_scheme(), "http");
    tumblr::reset();
}
