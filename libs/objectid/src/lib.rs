//! # sid-objectid
//!
//! Twelve-byte object identifiers with a canonical 24-character hex form.
//!
//! ## Layout
//!
//! | Bytes  | Content                                   |
//! |--------|-------------------------------------------|
//! | 0..4   | seconds since the Unix epoch, big-endian  |
//! | 4..9   | random value fixed for the process        |
//! | 9..12  | counter, big-endian, randomly seeded      |
//!
//! Parsing is case-insensitive; formatting always produces lowercase hex.
//!
//! ```
//! use sid_objectid::ObjectId;
//!
//! let id: ObjectId = "511083bb08ce6b1b00000003".parse().unwrap();
//! assert_eq!(id.to_string(), "511083bb08ce6b1b00000003");
//! assert!(ObjectId::is_valid("511083BB08CE6B1B00000003"));
//! assert!(!ObjectId::is_valid("23432"));
//! ```

mod error;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

pub use error::ObjectIdError;

/// Length of the canonical hex form.
pub const HEX_LEN: usize = 24;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);

static COUNTER: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(rand::random()));

/// A 12-byte object identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Creates an identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Returns the creation time encoded in the identifier, in seconds.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Parses an identifier from its 24-character hex form.
    pub fn parse(s: &str) -> Result<Self, ObjectIdError> {
        if s.is_empty() {
            return Err(ObjectIdError::Empty);
        }
        if s.len() != HEX_LEN {
            return Err(ObjectIdError::InvalidLength { len: s.len() });
        }

        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| ObjectIdError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Returns true if `s` is a well-formed identifier.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        s.len() == HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Compares two loosely-typed identifier values.
    ///
    /// Values are equal when they are the same string, or when both are
    /// well-formed identifiers with the same bytes. `None` only equals `None`.
    #[must_use]
    pub fn loose_eq(a: Option<&str>, b: Option<&str>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) if a == b => true,
            (Some(a), Some(b)) => match (Self::parse(a), Self::parse(b)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 12]> for ObjectId {
    fn from(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
