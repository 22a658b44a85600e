//! constants.rs
//! Planning limits and registry identifiers shared across the crate.

/// Maximum number of ciphersuites one layout run can place.
/// Reservation owners are tracked as a single byte.
pub const MAX_SUITES: usize = 255;

/// Bytes drawn from the position stream per level tag.
pub const TAG_LEN: usize = 4;

/// Prefix of the static per-suite position seed.
pub const SEED_PREFIX: &str = "NegoCipherSuite:";

/// HKDF info label for seeds derived from ephemeral key material.
pub const EPHEMERAL_SEED_INFO: &[u8] = b"NegoCipherSuite|ephemeral-seed";

/// Length of a seed derived by HKDF.
pub const SEED_LEN_32: usize = 32;

/// Known ciphersuite identifiers (mirrored in `suite::registry`).
pub mod suite_ids {
    pub const ED25519: u16  = 0x0001;
    pub const CURVE448: u16 = 0x0002;
    pub const P256: u16     = 0x0003;
    pub const P384: u16     = 0x0004;
    pub const P521: u16     = 0x0005;
}

/// Position stream PRF identifiers.
pub mod prf_ids {
    pub const SHA256: u16 = 0x0001;
    pub const BLAKE3: u16 = 0x0002;
}
