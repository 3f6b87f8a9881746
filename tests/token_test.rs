use chartlist::{management::TokenManager, types::Token};

fn token(obtained_at: Option<u64>, expires_in: Option<u64>) -> Token {
    Token {
        access_token: "spotify-token".to_string(),
        refresh_token: None,
        scope: Some("playlist-modify-public".to_string()),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_token_without_lifetime_never_expires() {
    let manager = TokenManager::new(token(None, None));
    assert!(!manager.is_expired_at(u64::MAX / 2));

    let manager = TokenManager::new(token(Some(1_000), None));
    assert!(!manager.is_expired_at(1_000_000));
}

#[test]
fn test_token_expires_before_its_lifetime_ends() {
    let manager = TokenManager::new(token(Some(1_000), Some(3_600)));

    assert!(!manager.is_expired_at(1_000));
    assert!(!manager.is_expired_at(4_359));
    // within the four minute margin
    assert!(manager.is_expired_at(4_360));
    assert!(manager.is_expired_at(5_000));
}

#[test]
fn test_cached_token_deserializes_with_missing_fields() {
    let token: Token = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    let manager = TokenManager::new(token);

    assert_eq!(manager.current_token().access_token, "abc");
    assert!(!manager.is_expired_at(0));
}

#[test]
fn test_token_path_is_in_data_dir() {
    let path = TokenManager::token_path();
    assert!(path.ends_with("chartlist/cache/token.json"));
}
