use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::{Error, Result};

/// The payload of an issued token.
///
/// Only the issuer and the expiration are asserted.
/// The expiration always lands on a whole second after the unix epoch, since that is all the encoding can carry.
/// [`Claims::new`] is the only way to build claims for signing, so those properties always hold.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
	#[serde(rename = "iss")]
	issuer: String,

	#[serde(rename = "exp")]
	#[serde_as(as = "TimestampSeconds<i64>")]
	expires: SystemTime,
}

impl Claims {
	/// Build the claims for a token issued at `now` and valid for `validity`.
	pub fn new(issuer: &str, validity: Duration, now: SystemTime) -> Result<Self> {
		if issuer.is_empty() {
			return Err(Error::Encoding("issuer must not be empty".into()));
		}

		if validity.is_zero() {
			return Err(Error::Encoding("validity must be positive".into()));
		}

		let expires = now
			.checked_add(validity)
			.ok_or_else(|| Error::Encoding("expiration overflows".into()))?;

		let secs = expires
			.duration_since(UNIX_EPOCH)
			.map_err(|_| Error::Encoding("expiration precedes the unix epoch".into()))?
			.as_secs();

		if i64::try_from(secs).is_err() {
			return Err(Error::Encoding("expiration overflows".into()));
		}

		Ok(Self {
			issuer: issuer.to_string(),
			expires: UNIX_EPOCH + Duration::from_secs(secs),
		})
	}

	/// The principal that signed the token.
	pub fn issuer(&self) -> &str {
		&self.issuer
	}

	/// The instant after which the token must be rejected.
	pub fn expires(&self) -> SystemTime {
		self.expires
	}

	/// The expiration as seconds since the unix epoch.
	pub fn expires_at(&self) -> u64 {
		self.expires
			.duration_since(UNIX_EPOCH)
			.map(|d| d.as_secs())
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_expiration() {
		let now = UNIX_EPOCH + Duration::from_secs(1_000);
		let claims = Claims::new("cax", Duration::from_secs(60), now).unwrap();

		assert_eq!(claims.issuer(), "cax");
		assert_eq!(claims.expires_at(), 1_060);
	}

	#[test]
	fn test_subsecond_truncated() {
		let now = UNIX_EPOCH + Duration::from_millis(1_999);
		let claims = Claims::new("cax", Duration::from_secs(1), now).unwrap();

		assert_eq!(claims.expires_at(), 2);
		assert_eq!(claims.expires(), UNIX_EPOCH + Duration::from_secs(2));
	}

	#[test]
	fn test_serialized_expiry_matches() {
		// 1.6s would round up to 2 if it reached the encoder untruncated.
		let now = UNIX_EPOCH + Duration::from_millis(600);
		let claims = Claims::new("cax", Duration::from_secs(1), now).unwrap();
		assert_eq!(claims.expires_at(), 1);

		let json: serde_json::Value = serde_json::to_value(&claims).unwrap();
		assert_eq!(json["exp"], claims.expires_at());
	}

	#[test]
	fn test_serialize_shape() {
		let now = UNIX_EPOCH + Duration::from_secs(1_704_067_200);
		let claims = Claims::new("cax", Duration::from_secs(12 * 60 * 60), now).unwrap();

		let json = serde_json::to_string(&claims).unwrap();
		assert_eq!(json, r#"{"iss":"cax","exp":1704110400}"#);

		let decoded: Claims = serde_json::from_str(&json).unwrap();
		assert_eq!(decoded, claims);
	}

	#[test]
	fn test_empty_issuer() {
		let err = Claims::new("", Duration::from_secs(60), SystemTime::now()).unwrap_err();
		assert!(matches!(err, Error::Encoding(_)), "{err:?}");
	}

	#[test]
	fn test_zero_validity() {
		let err = Claims::new("cax", Duration::ZERO, SystemTime::now()).unwrap_err();
		assert!(matches!(err, Error::Encoding(_)), "{err:?}");
	}

	#[test]
	fn test_before_epoch() {
		let now = UNIX_EPOCH - Duration::from_secs(120);
		let err = Claims::new("cax", Duration::from_secs(60), now).unwrap_err();
		assert!(matches!(err, Error::Encoding(_)), "{err:?}");
	}

	#[test]
	fn test_overflow() {
		let now = UNIX_EPOCH + Duration::from_secs(i64::MAX as u64);
		let err = Claims::new("cax", Duration::from_secs(1), now).unwrap_err();
		assert!(matches!(err, Error::Encoding(_)), "{err:?}");
	}
}
