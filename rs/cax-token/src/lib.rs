//! Short-lived service tokens for CAX.
//!
//! Load an RSA private key with [`PrivateKey`], then call [`issue`] to produce an RS256 signed JWT
//! asserting an issuer and an expiration. Nothing else is asserted, and nothing is verified here.
//!
//! The current time is an argument rather than read from the clock, so issuance is deterministic.

mod claims;
mod error;
mod header;
mod issue;
mod key;

pub use claims::*;
pub use error::*;
pub use issue::*;
pub use key::*;

use std::time::Duration;

/// The principal named by tokens issued from the CLI.
pub const DEFAULT_ISSUER: &str = "cax";

/// How long tokens issued from the CLI remain valid.
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(12 * 60 * 60);

/// The smallest RSA modulus, in bits, that will be used for signing.
pub const MIN_KEY_BITS: usize = 2048;
