//! Argon2id password hasher

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::errors::DomainError;

/// Password hasher configuration.
///
/// Defaults to the Argon2id parameters recommended by OWASP:
/// 19 MiB memory, 2 iterations, parallelism 1.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a hasher with the library's default Argon2id parameters
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of iterations
    /// * `parallelism` - Degree of parallelism
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, DomainError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            DomainError::Hashing {
                message: format!("Invalid parameters: {e}"),
            }
        })?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password.
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// password twice yields different strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Hashing` only if the underlying library fails.
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::Hashing {
                message: format!("Hashing failed: {e}"),
            })?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash.
    ///
    /// Never fails: an empty password, a malformed hash and any library error
    /// all read as "does not match", so callers cannot distinguish account
    /// states by error shape. The parameters embedded in `hash` are used, not
    /// this hasher's own.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        if password.is_empty() {
            return false;
        }

        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hash a password with the default parameters.
///
/// # Example
///
/// ```rust
/// use chirpy_core::services::password::hash_password;
///
/// let hash = hash_password("04234").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    PasswordHasher::new().hash(password)
}

/// Check a password against a stored hash with the default hasher.
pub fn check_password_hash(password: &str, hash: &str) -> bool {
    PasswordHasher::new().verify(password, hash)
}
