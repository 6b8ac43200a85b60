use bookboard::auth::{create_jwt, decode_jwt, hash_password, verify_password};

#[test]
fn test_password_hashing() {
    let password = "super_secret_password";
    let hash = hash_password(password).expect("Failed to hash password");

    assert_ne!(password, hash);
    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("wrong_password", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let a = hash_password("same").unwrap();
    let b = hash_password("same").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_jwt_creation_and_verification() {
    let token = create_jwt("alice").expect("Failed to create JWT");
    assert!(!token.is_empty());

    let claims = decode_jwt(&token).expect("Failed to verify JWT");
    assert_eq!(claims.sub, "alice");

    let now = chrono::Utc::now().timestamp() as usize;
    assert!(claims.exp > now);
    // Expiry is 30 minutes out
    assert!(claims.exp <= now + 31 * 60);
}

#[test]
fn test_tampered_jwt_is_rejected() {
    let token = create_jwt("alice").unwrap();
    let mut tampered = token.clone();
    tampered.pop();
    assert!(decode_jwt(&tampered).is_err());
    assert!(decode_jwt("not.a.token").is_err());
}
