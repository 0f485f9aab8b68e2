use crate::domain::errors::DomainError;

/// One-way, salted password verifier. The auth workflow only ever sees
/// this trait; the algorithm behind it is swappable.
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        // A malformed stored hash is indistinguishable from a wrong
        // password as far as the caller is concerned.
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps the tests fast.
    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn hash_then_verify_accepts_the_password() {
        let h = hasher();
        let stored = h.hash("s3cret").expect("hash failed");
        assert!(h.verify("s3cret", &stored));
    }

    #[test]
    fn verify_rejects_a_wrong_password() {
        let h = hasher();
        let stored = h.hash("s3cret").expect("hash failed");
        assert!(!h.verify("not-the-password", &stored));
    }

    #[test]
    fn hashing_is_salted() {
        let h = hasher();
        let a = h.hash("same-password").expect("hash failed");
        let b = h.hash("same-password").expect("hash failed");
        assert_ne!(a, b, "two hashes of the same password must differ");
    }

    #[test]
    fn verify_rejects_a_malformed_stored_hash() {
        assert!(!hasher().verify("anything", "not-a-bcrypt-hash"));
    }
}
