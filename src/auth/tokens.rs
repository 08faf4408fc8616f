use rand::{rngs::OsRng, RngCore};

/// Nominal token lifetime reported to clients. Nothing checks it; the
/// tokens are opaque and never validated server-side.
pub const TOKEN_TTL_SECS: u64 = 3600;

const ACCESS_TOKEN_BYTES: usize = 24;
const REFRESH_TOKEN_BYTES: usize = 32;

/// Freshly issued access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

impl TokenPair {
    /// Generate a new pair of random hex tokens. Pure generation: nothing
    /// is persisted, and the two tokens are drawn independently.
    pub fn issue() -> Self {
        Self {
            access_token: random_hex(ACCESS_TOKEN_BYTES),
            refresh_token: random_hex(REFRESH_TOKEN_BYTES),
            expires_in: TOKEN_TTL_SECS,
        }
    }
}

fn random_hex(n_bytes: usize) -> String {
    let mut buf = vec![0u8; n_bytes];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_hex_tokens_of_fixed_length() {
        let pair = TokenPair::issue();
        assert_eq!(pair.access_token.len(), ACCESS_TOKEN_BYTES * 2);
        assert_eq!(pair.refresh_token.len(), REFRESH_TOKEN_BYTES * 2);
        assert!(pair.access_token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(pair.refresh_token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(pair.expires_in, 3600);
    }

    #[test]
    fn tokens_are_independent() {
        let first = TokenPair::issue();
        let second = TokenPair::issue();
        assert_ne!(first.access_token, second.access_token);
        assert_ne!(first.refresh_token, second.refresh_token);
        assert_ne!(first.access_token, first.refresh_token);
    }
}
