//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings carrying their own algorithm tag, parameters and
//! salt, so verification needs nothing but the stored string.

mod hasher;

pub use hasher::{check_password_hash, hash_password, PasswordHasher};
