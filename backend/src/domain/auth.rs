//! Authentication primitives: login credentials, sign-up registrations and
//! PBKDF2 password digests.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;
use zeroize::Zeroizing;

use super::user::{UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use news_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("reader", "password").unwrap();
/// assert_eq!(creds.username(), "reader");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validation failures for a sign-up form, keyed to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// The username failed [`Username`] validation.
    Username(UserValidationError),
    /// The first password field was blank.
    EmptyPassword,
    /// The confirmation did not match the password.
    PasswordMismatch,
}

impl RegistrationValidationError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Username(_) => "username",
            Self::EmptyPassword => "password1",
            Self::PasswordMismatch => "password2",
        }
    }
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordMismatch => write!(f, "the two password fields didn't match"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate the raw sign-up fields.
    ///
    /// # Examples
    /// ```
    /// use news_backend::domain::{Registration, RegistrationValidationError};
    ///
    /// let err = Registration::try_from_parts("reader", "secret", "other").unwrap_err();
    /// assert_eq!(err, RegistrationValidationError::PasswordMismatch);
    /// ```
    pub fn try_from_parts(
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let username = Username::new(username).map_err(RegistrationValidationError::Username)?;
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        if password != confirmation {
            return Err(RegistrationValidationError::PasswordMismatch);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Identifier of the hashing scheme, the first `$`-separated field.
pub const DIGEST_ALGORITHM: &str = "pbkdf2_sha256";

/// PBKDF2 rounds applied to new digests.
pub const DIGEST_ITERATIONS: u32 = 600_000;

const DIGEST_LEN: usize = 32;

/// PBKDF2-HMAC-SHA256 password digest stored as
/// `pbkdf2_sha256$<iterations>$<salt>$<hex>`.
///
/// The iteration count travels with the digest, so raising
/// [`DIGEST_ITERATIONS`] leaves existing accounts verifiable.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Derive a digest for `password` using a fresh random salt.
    pub fn derive(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        Self::derive_with(&salt, DIGEST_ITERATIONS, password)
    }

    fn derive_with(salt: &str, iterations: u32, password: &str) -> Self {
        let hash = hex::encode(pbkdf2_sha256(password, salt, iterations));
        Self(format!("{DIGEST_ALGORITHM}${iterations}${salt}${hash}"))
    }

    /// Wrap a digest previously produced by [`PasswordDigest::derive`].
    pub fn from_stored(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    /// Check a candidate password against the digest.
    ///
    /// Malformed stored values never verify.
    pub fn verify(&self, password: &str) -> bool {
        let mut fields = self.0.splitn(4, '$');
        let (Some(DIGEST_ALGORITHM), Some(iterations), Some(salt), Some(expected)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return false;
        };
        let Ok(iterations) = iterations.parse::<u32>() else {
            return false;
        };
        let Ok(expected) = hex::decode(expected) else {
            return false;
        };
        if iterations == 0 {
            return false;
        }
        let actual = pbkdf2_sha256(password, salt, iterations);
        actual.as_slice().ct_eq(expected.as_slice()).into()
    }

    /// Stored representation for persistence adapters.
    pub fn as_stored(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

fn pbkdf2_sha256(password: &str, salt: &str, iterations: u32) -> Zeroizing<[u8; DIGEST_LEN]> {
    let mut out = Zeroizing::new([0_u8; DIGEST_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut out[..]);
    out
}
