use sha2::{Digest, Sha256};

/// Hex SHA-256 of a session token. Revocation entries are keyed by this.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
