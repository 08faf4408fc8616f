/// How submitted passwords are prepared for storage and checked at login.
///
/// The default [`PlaintextVerifier`] stores and compares passwords as-is;
/// a hashing implementation can be swapped in through `AppState` without
/// touching the handlers.
pub trait CredentialVerifier: Send + Sync {
    /// Produce the value to store for a submitted password.
    fn protect(&self, plain: &str) -> anyhow::Result<String>;

    /// Check a submitted password against the stored value.
    fn verify(&self, plain: &str, stored: &str) -> anyhow::Result<bool>;
}

/// Stores passwords verbatim and compares by string equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn protect(&self, plain: &str) -> anyhow::Result<String> {
        Ok(plain.to_owned())
    }

    fn verify(&self, plain: &str, stored: &str) -> anyhow::Result<bool> {
        Ok(plain == stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protect_and_verify_roundtrip() {
        let verifier = PlaintextVerifier;
        let stored = verifier.protect("abcdef").expect("protect should succeed");
        assert_eq!(stored, "abcdef");
        assert!(verifier.verify("abcdef", &stored).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let verifier = PlaintextVerifier;
        let stored = verifier.protect("abcdef").expect("protect should succeed");
        assert!(!verifier.verify("abcdeg", &stored).expect("verify should not error"));
    }
}
