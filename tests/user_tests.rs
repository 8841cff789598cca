mod common;

use common::{bad_options, call, client, only_call};
use serde_json::json;
use tumblr::{LikesQuery, Options, RestError, Timestamp};

#[test]
fn test_info() {
    let client = client();
    client.info().unwrap();
    assert_eq!(only_call(&client), call("GET", "v2/user/info", Options::new()));
}

#[test]
fn test_option_methods_reject_unknown_options() {
    let client = client();
    let results = vec![
        client.dashboard(bad_options()),
        client.likes(bad_options()),
        client.following(bad_options()),
        client.add_filtered_content(Some("spoilers"), bad_options()),
        client.delete_filtered_content(Some("spoilers"), bad_options()),
    ];

    for result in results {
        assert!(matches!(result, Err(RestError::UnknownOption { .. })));
    }
    assert!(client.transport().calls().is_empty());
}

#[test]
fn test_dashboard() {
    let client = client();
    let options = Options::new().with("limit", 10).with("type", "photo").with("npf", true);
    client.dashboard(options.clone()).unwrap();
    assert_eq!(only_call(&client), call("GET", "v2/user/dashboard", options));
}

#[test]
fn test_likes_with_typed_query() {
    let client = client();
    let query = LikesQuery {
        limit: Some(20),
        after: Timestamp::from_unix(1_500_000_000),
        ..Default::default()
    };
    client.likes(query.to_options().unwrap()).unwrap();
    assert_eq!(
        only_call(&client),
        call(
            "GET",
            "v2/user/likes",
            Options::new().with("limit", 20).with("after", 1_500_000_000)
        )
    );
}

#[test]
fn test_following() {
    let client = client();
    client.following(Options::new().with("offset", 20)).unwrap();
    assert_eq!(
        only_call(&client),
        call("GET", "v2/user/following", Options::new().with("offset", 20))
    );
}

#[test]
fn test_follow_and_unfollow() {
    let client = client();
    client.follow("staff.tumblr.com").unwrap();
    client.unfollow("staff.tumblr.com").unwrap();

    let params = Options::new().with("url", "staff.tumblr.com");
    assert_eq!(
        client.transport().calls(),
        vec![
            call("POST", "v2/user/follow", params.clone()),
            call("POST", "v2/user/unfollow", params),
        ]
    );
}

#[test]
fn test_like_and_unlike() {
    let client = client();
    client.like(123, "abc").unwrap();
    client.unlike(123, "abc").unwrap();

    let params = Options::new().with("id", 123).with("reblog_key", "abc");
    assert_eq!(
        client.transport().calls(),
        vec![
            call("POST", "v2/user/like", params.clone()),
            call("POST", "v2/user/unlike", params),
        ]
    );
}

#[test]
fn test_filtered_content() {
    let client = client();
    client.filtered_content().unwrap();
    client.add_filtered_content(Some("spoilers"), Options::new()).unwrap();
    client
        .delete_filtered_content(None, Options::new().with("filtered_content", json!(["a", "b"])))
        .unwrap();

    assert_eq!(
        client.transport().calls(),
        vec![
            call("GET", "v2/user/filtered_content", Options::new()),
            call(
                "POST",
                "v2/user/filtered_content",
                Options::new().with("filtered_content", "spoilers")
            ),
            call(
                "DELETE",
                "v2/user/filtered_content",
                Options::new().with("filtered_content", json!(["a", "b"]))
            ),
        ]
    );
}
