mod common;

use common::{bad_options, call, client, only_call, CONSUMER_KEY};
use tumblr::Options;

#[test]
fn test_tagged() {
    let client = client();
    client.tagged("cats", Options::new().with("limit", 5)).unwrap();
    assert_eq!(
        only_call(&client),
        call(
            "GET",
            "v2/tagged",
            Options::new()
                .with("tag", "cats")
                .with("api_key", CONSUMER_KEY)
                .with("limit", 5)
        )
    );
}

#[test]
fn test_tagged_rejects_offset() {
    let client = client();
    assert!(client.tagged("cats", bad_options()).is_err());
    let err = client.tagged("cats", Options::new().with("offset", 5)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid options (offset) passed, only [before, limit, filter] allowed."
    );
    assert!(client.transport().calls().is_empty());
}
