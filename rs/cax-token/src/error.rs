use std::path::PathBuf;

/// Errors produced while loading a key or issuing a token.
///
/// Every variant is fatal to the request that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The key source could not be read at all.
	#[error("failed to read key file {path}: {source}")]
	KeyUnreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The bytes are not a PEM document.
	#[error("invalid PEM: {0}")]
	KeyFormat(String),

	/// The PEM document does not contain a supported RSA private key.
	#[error("unsupported private key: {0}")]
	KeyParse(String),

	/// The key cannot produce an RS256 signature.
	#[error("signing failed: {0}")]
	Signing(String),

	/// The header or claims could not be encoded.
	#[error("encoding failed: {0}")]
	Encoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
