use std::{
	fmt,
	time::{Duration, SystemTime},
};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rsa::{
	Pkcs1v15Sign,
	sha2::{Digest, Sha256},
};
use serde::Serialize;

use crate::{Claims, Error, MIN_KEY_BITS, PrivateKey, Result, header::Header};

/// A signed, compact encoded token: `header.payload.signature`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Token> for String {
	fn from(token: Token) -> Self {
		token.0
	}
}

/// Issue an RS256 token asserting `issuer`, expiring `validity` after `now`.
///
/// The result depends only on the arguments; the same inputs always produce the same token.
pub fn issue(key: &PrivateKey, issuer: &str, validity: Duration, now: SystemTime) -> Result<Token> {
	let claims = Claims::new(issuer, validity, now)?;
	sign(key, &claims)
}

// Only reachable with claims from `Claims::new`.
fn sign(key: &PrivateKey, claims: &Claims) -> Result<Token> {
	if key.bits() < MIN_KEY_BITS {
		return Err(Error::Signing(format!(
			"key is {} bits, at least {MIN_KEY_BITS} required",
			key.bits()
		)));
	}

	let header = encode_segment(&Header::RS256)?;
	let payload = encode_segment(claims)?;
	let signing_input = format!("{header}.{payload}");

	let digest = Sha256::digest(signing_input.as_bytes());
	let signature = key
		.as_rsa()
		.sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
		.map_err(|err| Error::Signing(err.to_string()))?;

	Ok(Token(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature))))
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
	let json = serde_json::to_vec(value).map_err(|err| Error::Encoding(err.to_string()))?;
	Ok(URL_SAFE_NO_PAD.encode(json))
}
