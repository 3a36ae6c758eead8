use super::*;

/// Tests the presence verifier accepts any token.
///
/// Expected: Ok
#[test]
fn presence_verifier_accepts_anything() {
    assert_eq!(PresenceVerifier.verify("whatever"), Ok(()));
}

/// Tests the static verifier accepts only its configured token.
///
/// Expected: Ok for the configured token, InvalidToken otherwise
#[test]
fn static_verifier_matches_exact_token() {
    let verifier = StaticTokenVerifier::new("secret");

    assert_eq!(verifier.verify("secret"), Ok(()));
    assert_eq!(verifier.verify("Secret"), Err(AuthError::InvalidToken));
    assert_eq!(verifier.verify("other"), Err(AuthError::InvalidToken));
}
