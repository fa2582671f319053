use std::{fmt, path::Path, str::FromStr};

use rsa::{
	RsaPrivateKey, RsaPublicKey,
	pkcs1::DecodeRsaPrivateKey,
	pkcs8::DecodePrivateKey,
	traits::PublicKeyParts,
};

use crate::{Error, Result};

const PKCS8_LABEL: &str = "PRIVATE KEY";
const PKCS1_LABEL: &str = "RSA PRIVATE KEY";

/// An RSA private key used to sign tokens.
///
/// The key is immutable once loaded, so a single instance can be shared by reference
/// across any number of concurrent [`crate::issue`] calls.
#[derive(Clone)]
pub struct PrivateKey {
	inner: RsaPrivateKey,
}

impl PrivateKey {
	/// Parse an unencrypted PEM encoded RSA private key.
	///
	/// Both PKCS#8 (`BEGIN PRIVATE KEY`) and PKCS#1 (`BEGIN RSA PRIVATE KEY`) documents are accepted,
	/// with the body wrapped at any line width.
	pub fn from_pem(bytes: &[u8]) -> Result<Self> {
		let pem = pem::parse(bytes.trim_ascii()).map_err(|err| Error::KeyFormat(err.to_string()))?;
		let der = pem.contents();

		let inner = match pem.tag() {
			PKCS8_LABEL => RsaPrivateKey::from_pkcs8_der(der).map_err(|err| Error::KeyParse(err.to_string()))?,
			PKCS1_LABEL => RsaPrivateKey::from_pkcs1_der(der).map_err(|err| Error::KeyParse(err.to_string()))?,
			other => return Err(Error::KeyParse(format!("unsupported PEM label: {other}"))),
		};

		inner.validate().map_err(|err| Error::KeyParse(err.to_string()))?;

		Ok(Self { inner })
	}

	/// Read and parse a PEM key file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let bytes = std::fs::read(path).map_err(|source| Error::KeyUnreadable {
			path: path.to_path_buf(),
			source,
		})?;

		Self::from_pem(&bytes)
	}

	/// The size of the modulus in bits.
	pub fn bits(&self) -> usize {
		self.inner.size() * 8
	}

	/// The public half of the key, for handing to verifiers.
	pub fn to_public_key(&self) -> RsaPublicKey {
		self.inner.to_public_key()
	}

	pub(crate) fn as_rsa(&self) -> &RsaPrivateKey {
		&self.inner
	}
}

impl FromStr for PrivateKey {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::from_pem(s.as_bytes())
	}
}

// Never print key material.
impl fmt::Debug for PrivateKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PrivateKey").field("bits", &self.bits()).finish_non_exhaustive()
	}
}
