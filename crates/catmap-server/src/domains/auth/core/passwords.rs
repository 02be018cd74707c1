use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

/// Argon2id with default parameters. The pepper is concatenated to the
/// password before hashing; verification must use the same pepper.
pub fn hash_password(password: &str, pepper: &str) -> Result<String, &'static str> {
    let salt = SaltString::generate(&mut OsRng);
    let peppered = format!("{password}{pepper}");
    Argon2::default()
        .hash_password(peppered.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| "hash_failed")
}

pub fn verify_password(stored: &str, password: &str, pepper: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    let peppered = format!("{password}{pepper}");
    Argon2::default()
        .verify_password(peppered.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("meow-meow", "pepper").expect("hash");
        assert!(verify_password(&hash, "meow-meow", "pepper"));
        assert!(!verify_password(&hash, "meow-meow", "other-pepper"));
        assert!(!verify_password(&hash, "woof", "pepper"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("meow", "pepper").expect("hash");
        let b = hash_password("meow", "pepper").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify_password("not-a-phc-string", "meow", "pepper"));
        assert!(!verify_password("", "meow", "pepper"));
    }
}
