use serde::Serialize;

/// The JOSE header prepended to every token.
///
/// Fields serialize in declaration order, producing `{"alg":"RS256","typ":"JWT"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Header {
	alg: &'static str,
	typ: &'static str,
}

impl Header {
	pub const RS256: Self = Self { alg: "RS256", typ: "JWT" };
}
