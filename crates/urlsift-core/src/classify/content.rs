//! Content-addressed segment detection: UUIDs and SHA-256 style digests.

use uuid::Uuid;

/// Length of a hex-encoded SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// True if `segment` is a UUID in simple (32 hex) or hyphenated (8-4-4-4-12) form.
///
/// Braced and URN forms are not path segments in practice and are rejected by the length gate.
pub fn is_uuid(segment: &str) -> bool {
    matches!(segment.len(), 32 | 36) && Uuid::try_parse(segment).is_ok()
}

/// True if `segment`, or its tail after the last `-`, is a hex digest of
/// `min_len..=64` characters. Covers `<hash>` and `constants-<hash>`.
pub fn is_content_hash(segment: &str, min_len: usize) -> bool {
    let token = segment
        .rsplit_once('-')
        .map_or(segment, |(_, tail)| tail);
    is_hex_digest(token, min_len)
}

fn is_hex_digest(token: &str, min_len: usize) -> bool {
    (min_len..=SHA256_HEX_LEN).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_hexdigit())
}
