use base64::{engine::general_purpose, Engine};
use rand::prelude::*;

/// Generate an opaque session id: 32 random bytes, base64-encoded.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let random_bytes: [u8; 32] = rng.random();
    general_purpose::STANDARD.encode(random_bytes)
}

/// Generate a random password for seeded sample accounts.
///
/// Generates a 20-character password with a mix of uppercase letters,
/// lowercase letters, digits, and symbols using a cryptographically
/// secure random number generator.
pub fn generate_secure_password() -> String {
    const PASSWORD_LENGTH: usize = 20;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789\
                             !@#$%^&*()_+-=[]{}|;:,.<>?";

    let mut rng = rand::rng();
    let password: String = (0..PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    password
}
