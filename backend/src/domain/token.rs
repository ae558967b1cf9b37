//! Bearer token codec.
//!
//! Wire format:
//!
//! ```text
//! token  := base64(email || DELIM || password)
//! header := "Bearer " || token
//! ```
//!
//! `DELIM` is a [`TokenDelimiter`] injected at construction. It is a format
//! separator only; the codec makes no confidentiality or integrity claim.
//! Every encoder and decoder in a deployment must share the same delimiter;
//! rotating it invalidates every token already issued.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::domain::Credential;

/// Scheme prefix expected at the start of an `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Delimiter shipped as the default configuration value.
pub const DEFAULT_TOKEN_DELIMITER: &str = "OGQ5MjMwMTktYzg0MC00NDg3LTgzOTMtMGE0MDlmYzEwMWFk";

/// Standard alphabet; encodes padded and decodes with or without padding.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Failures raised while extracting, decoding, or encoding a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Header lacks the `Bearer ` prefix or carries no token after it.
    #[error("Malformed authorization header")]
    MalformedHeader,
    /// Token is not valid base64 or does not split into exactly two parts.
    #[error("Malformed token")]
    MalformedToken,
    /// One of the decoded parts is empty.
    #[error("Missing token information")]
    MissingCredentialField,
    /// A credential field contains the delimiter and cannot be encoded
    /// reversibly.
    #[error("Credential contains the token delimiter")]
    DelimiterInCredential,
}

/// Validation error for [`TokenDelimiter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token delimiter must not be empty")]
pub struct EmptyDelimiterError;

/// Separator placed between email and password inside a token.
///
/// Used verbatim: it is never itself base64-decoded.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenDelimiter(String);

impl TokenDelimiter {
    /// Validate and wrap a delimiter.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyDelimiterError> {
        let value = value.into();
        if value.is_empty() {
            return Err(EmptyDelimiterError);
        }
        Ok(Self(value))
    }

    /// Borrow the raw delimiter.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for TokenDelimiter {
    fn default() -> Self {
        Self(DEFAULT_TOKEN_DELIMITER.to_owned())
    }
}

impl fmt::Debug for TokenDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenDelimiter(<redacted>)")
    }
}

/// Opaque token carried after `Bearer ` in the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bidirectional mapping between [`Credential`] and [`BearerToken`].
///
/// Stateless apart from the delimiter; every method is pure.
///
/// # Examples
/// ```
/// use auth_gate::domain::{Credential, TokenCodec, TokenDelimiter};
///
/// let codec = TokenCodec::new(TokenDelimiter::default());
/// let credential = Credential::try_from_parts("a@b.com", "p").unwrap();
/// let header = codec.authorization_header(&credential).unwrap();
/// assert_eq!(codec.decode_header(&header).unwrap(), credential);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenCodec {
    delimiter: TokenDelimiter,
}

impl TokenCodec {
    /// Build a codec around the deployment's delimiter.
    pub fn new(delimiter: TokenDelimiter) -> Self {
        Self { delimiter }
    }

    /// Encode a credential into a token.
    pub fn encode(&self, credential: &Credential) -> Result<BearerToken, TokenError> {
        let delimiter = self.delimiter.as_str();
        if credential.email().contains(delimiter) || credential.password().contains(delimiter) {
            return Err(TokenError::DelimiterInCredential);
        }
        let joined = format!("{}{delimiter}{}", credential.email(), credential.password());
        Ok(BearerToken(TOKEN_ENGINE.encode(joined)))
    }

    /// Decode a token back into the credential it carries.
    pub fn decode(&self, token: &BearerToken) -> Result<Credential, TokenError> {
        let bytes = TOKEN_ENGINE
            .decode(token.as_str())
            .map_err(|_| TokenError::MalformedToken)?;
        let decoded = String::from_utf8(bytes).map_err(|_| TokenError::MalformedToken)?;

        let mut parts = decoded.split(self.delimiter.as_str());
        let (Some(email), Some(password), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TokenError::MalformedToken);
        };

        Credential::try_from_parts(email, password).map_err(|_| TokenError::MissingCredentialField)
    }

    /// Pull the token out of an `Authorization` header value.
    pub fn extract_from_header(&self, header: &str) -> Result<BearerToken, TokenError> {
        header
            .strip_prefix(BEARER_PREFIX)
            .filter(|token| !token.is_empty())
            .map(BearerToken::new)
            .ok_or(TokenError::MalformedHeader)
    }

    /// Extract and decode in one step.
    pub fn decode_header(&self, header: &str) -> Result<Credential, TokenError> {
        let token = self.extract_from_header(header)?;
        self.decode(&token)
    }

    /// Render the full `Authorization` header value for a credential.
    pub fn authorization_header(&self, credential: &Credential) -> Result<String, TokenError> {
        let token = self.encode(credential)?;
        Ok(format!("{BEARER_PREFIX}{token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
    use rstest::{fixture, rstest};

    #[fixture]
    fn codec() -> TokenCodec {
        TokenCodec::default()
    }

    fn raw_token(body: &str) -> BearerToken {
        BearerToken::new(STANDARD.encode(body))
    }

    #[rstest]
    fn encodes_email_delimiter_password(codec: TokenCodec) {
        let credential = Credential::try_from_parts("fakeEmail", "fakePassword").expect("valid");
        let token = codec.encode(&credential).expect("encodable");
        let expected = STANDARD.encode(format!("fakeEmail{DEFAULT_TOKEN_DELIMITER}fakePassword"));
        assert_eq!(token.as_str(), expected);
    }

    #[rstest]
    #[case("a@b.com", "p")]
    #[case("user+tag@example.com", "correct horse battery staple")]
    #[case("ünïcødé@example.com", "pässwörd")]
    fn decode_reverses_encode(codec: TokenCodec, #[case] email: &str, #[case] password: &str) {
        let credential = Credential::try_from_parts(email, password).expect("valid");
        let token = codec.encode(&credential).expect("encodable");
        assert_eq!(codec.decode(&token).expect("decodable"), credential);
    }

    #[rstest]
    #[case("no delimiter at all".to_owned())]
    #[case(format!("a{DEFAULT_TOKEN_DELIMITER}b{DEFAULT_TOKEN_DELIMITER}c"))]
    #[case(format!("{DEFAULT_TOKEN_DELIMITER}{DEFAULT_TOKEN_DELIMITER}"))]
    fn rejects_wrong_segment_count(codec: TokenCodec, #[case] body: String) {
        assert_eq!(
            codec.decode(&raw_token(&body)),
            Err(TokenError::MalformedToken)
        );
    }

    #[rstest]
    #[case("not base64!!")]
    #[case("YWJj=")]
    #[case("YWJjZ")]
    fn rejects_invalid_base64(codec: TokenCodec, #[case] token: &str) {
        assert_eq!(
            codec.decode(&BearerToken::new(token)),
            Err(TokenError::MalformedToken)
        );
    }

    #[rstest]
    fn accepts_tokens_without_padding(codec: TokenCodec) {
        let body = format!("a@b.com{DEFAULT_TOKEN_DELIMITER}p");
        let unpadded = BearerToken::new(STANDARD_NO_PAD.encode(&body));
        assert!(STANDARD.encode(&body).ends_with('='));
        assert!(!unpadded.as_str().ends_with('='));

        let credential = codec.decode(&unpadded).expect("decodable");
        assert_eq!(credential.email(), "a@b.com");
        assert_eq!(credential.password(), "p");
    }

    #[rstest]
    fn encodes_with_padding(codec: TokenCodec) {
        let credential = Credential::try_from_parts("a@b.com", "p").expect("valid");
        let token = codec.encode(&credential).expect("encodable");
        assert_eq!(token.as_str().len() % 4, 0);
        assert!(token.as_str().ends_with('='));
    }

    #[rstest]
    fn rejects_non_utf8_payload(codec: TokenCodec) {
        let token = BearerToken::new(STANDARD.encode([0xff, 0xfe, 0xfd]));
        assert_eq!(codec.decode(&token), Err(TokenError::MalformedToken));
    }

    #[rstest]
    #[case(format!("{DEFAULT_TOKEN_DELIMITER}password"))]
    #[case(format!("email{DEFAULT_TOKEN_DELIMITER}"))]
    fn rejects_empty_segments(codec: TokenCodec, #[case] body: String) {
        assert_eq!(
            codec.decode(&raw_token(&body)),
            Err(TokenError::MissingCredentialField)
        );
    }

    #[rstest]
    fn delimiter_is_not_decoded_before_splitting() {
        let codec = TokenCodec::new(TokenDelimiter::new("::").expect("non-empty"));
        let token = raw_token("a@b.com::secret");
        let credential = codec.decode(&token).expect("decodable");
        assert_eq!(credential.email(), "a@b.com");
        assert_eq!(credential.password(), "secret");
    }

    #[rstest]
    fn tokens_do_not_survive_delimiter_rotation(codec: TokenCodec) {
        let credential = Credential::try_from_parts("a@b.com", "p").expect("valid");
        let token = codec.encode(&credential).expect("encodable");
        let rotated = TokenCodec::new(TokenDelimiter::new("|rotated|").expect("non-empty"));
        assert_eq!(rotated.decode(&token), Err(TokenError::MalformedToken));
    }

    #[rstest]
    fn encode_refuses_fields_containing_delimiter(codec: TokenCodec) {
        let email = format!("a{DEFAULT_TOKEN_DELIMITER}@b.com");
        let credential = Credential::try_from_parts(&email, "p").expect("valid");
        assert_eq!(
            codec.encode(&credential),
            Err(TokenError::DelimiterInCredential)
        );
    }

    #[rstest]
    fn extracts_token_after_prefix(codec: TokenCodec) {
        let token = codec.extract_from_header("Bearer abc123").expect("well formed");
        assert_eq!(token.as_str(), "abc123");
    }

    #[rstest]
    #[case("")]
    #[case("Bearer ")]
    #[case("Bearer")]
    #[case("bearer abc123")]
    #[case("Basic abc123")]
    #[case("abc123")]
    fn rejects_malformed_headers(codec: TokenCodec, #[case] header: &str) {
        assert_eq!(
            codec.extract_from_header(header),
            Err(TokenError::MalformedHeader)
        );
    }

    #[rstest]
    fn authorization_header_round_trips(codec: TokenCodec) {
        let credential = Credential::try_from_parts("fakeEmail", "fakePassword").expect("valid");
        let header = codec.authorization_header(&credential).expect("encodable");
        assert!(header.starts_with(BEARER_PREFIX));
        assert_eq!(codec.decode_header(&header).expect("decodable"), credential);
    }

    #[rstest]
    fn empty_delimiter_is_rejected() {
        assert_eq!(TokenDelimiter::new(""), Err(EmptyDelimiterError));
    }

    #[rstest]
    fn delimiter_debug_is_redacted() {
        let rendered = format!("{:?}", TokenDelimiter::default());
        assert!(!rendered.contains(DEFAULT_TOKEN_DELIMITER));
    }
}
