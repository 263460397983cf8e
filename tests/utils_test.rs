use std::time::Duration;

use concertprep::config::{SCOPE, Settings};
use concertprep::management::SessionStore;
use concertprep::spotify::auth::{authorization_url, basic_auth_header};
use concertprep::types::ConcertQuery;
use concertprep::utils::*;
use reqwest::Url;

fn test_settings() -> Settings {
    Settings {
        client_id: "client-123".to_string(),
        client_secret: "secret-456".to_string(),
        redirect_uri: "http://127.0.0.1:5000/redirect".to_string(),
        api_url: "https://api.spotify.com/v1".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "https://accounts.spotify.com/api/token".to_string(),
        scope: SCOPE.to_string(),
    }
}

fn test_query() -> ConcertQuery {
    ConcertQuery {
        artist: "Taylor Swift".to_string(),
        concert: "Eras Tour".to_string(),
        year: "2024".to_string(),
    }
}

#[test]
fn test_generate_state_key() {
    let key = generate_state_key();

    // Should be exactly 32 characters
    assert_eq!(key.len(), 32);

    // Should contain only alphanumeric characters
    assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated keys should be different
    assert_ne!(key, generate_state_key());
}

#[test]
fn test_parse_concert_info_valid() {
    let query = parse_concert_info(Some("Taylor Swift/Eras Tour/2024")).unwrap();
    assert_eq!(query, test_query());

    // Segments are trimmed
    let query = parse_concert_info(Some(" Taylor Swift / Eras Tour / 2024 ")).unwrap();
    assert_eq!(query, test_query());
}

#[test]
fn test_parse_concert_info_invalid() {
    assert_eq!(parse_concert_info(None), Err(INFO_MISSING));
    assert_eq!(parse_concert_info(Some("")), Err(INFO_MISSING));
    assert_eq!(parse_concert_info(Some("   ")), Err(INFO_MISSING));

    // Wrong arity
    assert_eq!(parse_concert_info(Some("Muse/Drones")), Err(INFO_MALFORMED));
    assert_eq!(
        parse_concert_info(Some("AC/DC/Power Up/2024")),
        Err(INFO_MALFORMED)
    );

    // Empty segment
    assert_eq!(
        parse_concert_info(Some("Muse//2024")),
        Err(INFO_EMPTY_SEGMENT)
    );
}

#[test]
fn test_format_concert_info_round_trip() {
    let query = test_query();
    let formatted = format_concert_info(&query);

    assert_eq!(formatted, "Taylor Swift/Eras Tour/2024");
    assert_eq!(parse_concert_info(Some(formatted.as_str())).unwrap(), query);
}

#[test]
fn test_authorization_url() {
    let url = authorization_url(&test_settings(), "state-key").unwrap();
    let parsed = Url::parse(&url).unwrap();

    assert_eq!(parsed.host_str(), Some("accounts.spotify.com"));
    assert_eq!(parsed.path(), "/authorize");

    let params: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    assert_eq!(get("response_type"), Some("code"));
    assert_eq!(get("client_id"), Some("client-123"));
    assert_eq!(get("redirect_uri"), Some("http://127.0.0.1:5000/redirect"));
    assert_eq!(get("state"), Some("state-key"));

    let scope = get("scope").unwrap();
    for permission in [
        "user-library-read",
        "user-read-private",
        "user-top-read",
        "user-read-recently-played",
        "playlist-modify-private",
        "playlist-modify-public",
    ] {
        assert!(scope.split(' ').any(|s| s == permission), "{}", permission);
    }

    // Spaces in the scope must be encoded
    assert!(!url.contains(' '));
}

#[test]
fn test_authorization_url_invalid_endpoint() {
    let mut settings = test_settings();
    settings.auth_url = "not a url".to_string();

    assert!(authorization_url(&settings, "state-key").is_err());
}

#[test]
fn test_basic_auth_header() {
    // base64("client-123:secret-456")
    assert_eq!(
        basic_auth_header("client-123", "secret-456"),
        "Basic Y2xpZW50LTEyMzpzZWNyZXQtNDU2"
    );
}

#[tokio::test]
async fn test_session_store_take_once() {
    let store = SessionStore::default();
    let key = store.begin(test_query()).await;

    assert_eq!(store.len().await, 1);
    assert_eq!(store.take(&key).await, Some(test_query()));

    // A state key only works once
    assert_eq!(store.take(&key).await, None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_session_store_isolates_logins() {
    let store = SessionStore::default();
    let other = ConcertQuery {
        artist: "Muse".to_string(),
        concert: "Drones".to_string(),
        year: "2016".to_string(),
    };

    let first = store.begin(test_query()).await;
    let second = store.begin(other.clone()).await;

    assert_ne!(first, second);
    assert_eq!(store.take(&second).await, Some(other));
    assert_eq!(store.take(&first).await, Some(test_query()));
    assert_eq!(store.take("unknown").await, None);
}

#[tokio::test]
async fn test_session_store_expires() {
    let store = SessionStore::new(Duration::ZERO);
    let key = store.begin(test_query()).await;

    assert_eq!(store.take(&key).await, None);
}
