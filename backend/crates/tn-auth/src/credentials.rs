//! Password hashing with Argon2id.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use error_location::ErrorLocation;
use log::warn;

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy)]
pub struct PasswordSettings {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Iterations
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        // OWASP minimum for Argon2id
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Hashes and verifies user passwords.
#[derive(Clone)]
pub struct CredentialVerifier {
    argon2: Argon2<'static>,
    /// Hash of a throwaway password, verified when the user does not exist
    dummy_hash: String,
}

impl CredentialVerifier {
    #[track_caller]
    pub fn new(settings: PasswordSettings) -> AuthErrorResult<Self> {
        let caller = Location::caller();
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| AuthError::Configuration {
            message: format!("Invalid Argon2 params: {}", e),
            location: ErrorLocation::from(caller),
        })?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = Self::hash_with(&argon2, "tenant-notes-dummy-password")?;

        Ok(Self { argon2, dummy_hash })
    }

    /// Hash `secret` with a fresh random salt. Returns a PHC string.
    #[track_caller]
    pub fn hash(&self, secret: &str) -> AuthErrorResult<String> {
        Self::hash_with(&self.argon2, secret)
    }

    /// Constant-time check of `secret` against a stored PHC hash.
    ///
    /// Mismatches and unparsable hashes both return `false`.
    pub fn verify(&self, secret: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Stored password hash is not a valid PHC string: {}", e);
                return false;
            }
        };

        self.argon2
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }

    /// Spend one verification on a throwaway hash.
    ///
    /// Login calls this for unknown e-mail addresses so they cost as much as
    /// a wrong password.
    pub fn verify_dummy(&self, secret: &str) -> bool {
        let _ = self.verify(secret, &self.dummy_hash);
        false
    }

    #[track_caller]
    fn hash_with(argon2: &Argon2<'static>, secret: &str) -> AuthErrorResult<String> {
        let caller = Location::caller();
        let salt = SaltString::generate(&mut OsRng);

        argon2
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(caller),
            })
    }
}
