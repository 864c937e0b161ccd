//! The scoped identifier value type.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use sid_objectid::ObjectId;

use crate::input::non_empty;
use crate::{ParseSink, ScopedIdError, ScopedIdFields, ScopedIdInput};

/// Pattern a canonical scoped id string must match.
///
/// Only object-id-shaped version segments are accepted here.
pub const GRAMMAR_PATTERN: &str = r"^[a-zA-Z]+(/[0-9a-fA-F]{24}){1,2}$";

static GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GRAMMAR_PATTERN).expect("valid scoped id regex"));

// =============================================================================
// Version Reference
// =============================================================================

/// The version a scoped id is pinned to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionRef {
    /// A specific version, keyed by object id.
    Object(ObjectId),
    /// A symbolic version name such as `latest`.
    Tag(String),
}

impl VersionRef {
    /// Interprets a raw version value.
    ///
    /// Empty input means "no version". Object-id-shaped input becomes
    /// [`VersionRef::Object`]; anything else is kept verbatim as a tag.
    pub fn coerce(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(match ObjectId::parse(raw) {
            Ok(oid) => VersionRef::Object(oid),
            Err(_) => VersionRef::Tag(raw.to_string()),
        })
    }

    /// Returns the object id, if this is an object-id version.
    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            VersionRef::Object(oid) => Some(*oid),
            VersionRef::Tag(_) => None,
        }
    }

    /// Returns the tag, if this is a symbolic version.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            VersionRef::Object(_) => None,
            VersionRef::Tag(tag) => Some(tag),
        }
    }

    fn normalize(self) -> Option<Self> {
        match self {
            VersionRef::Tag(tag) => Self::coerce(&tag),
            object => Some(object),
        }
    }
}

impl From<ObjectId> for VersionRef {
    fn from(oid: ObjectId) -> Self {
        VersionRef::Object(oid)
    }
}

impl std::fmt::Display for VersionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionRef::Object(oid) => std::fmt::Display::fmt(oid, f),
            VersionRef::Tag(tag) => f.write_str(tag),
        }
    }
}

// =============================================================================
// Scoped Id
// =============================================================================

/// A reference to a resource in a named scope, optionally pinned to a version.
///
/// The canonical string form is `{scope}/{id}` or `{scope}/{id}/{version}`.
///
/// Symbolic version tags are accepted by [`ScopedId::create`], by field
/// records passed to [`ScopedId::parse`], and by [`equals`]. The string
/// grammar and [`ScopedId::is_valid`] only accept object-id versions, so a
/// tagged id's canonical string does not parse back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedId {
    scope: String,
    id: ObjectId,
    version_id: Option<VersionRef>,
}

impl ScopedId {
    /// Creates a scoped id from typed parts.
    pub fn new(
        scope: impl Into<String>,
        id: ObjectId,
        version_id: Option<VersionRef>,
    ) -> Result<Self, ScopedIdError> {
        let scope = scope.into();
        if scope.is_empty() {
            return Err(ScopedIdError::InvalidScope);
        }

        Ok(Self {
            scope,
            id,
            version_id: version_id.and_then(VersionRef::normalize),
        })
    }

    /// Creates a scoped id from raw parts.
    ///
    /// Fields are checked in order: scope, then id. An empty version is
    /// treated as absent.
    pub fn create(
        scope: &str,
        id: Option<&str>,
        version_id: Option<&str>,
    ) -> Result<Self, ScopedIdError> {
        if scope.is_empty() {
            return Err(ScopedIdError::InvalidScope);
        }
        let id = non_empty(id).ok_or(ScopedIdError::InvalidId)?;
        let id = ObjectId::parse(id)?;

        Ok(Self {
            scope: scope.to_string(),
            id,
            version_id: version_id.and_then(VersionRef::coerce),
        })
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&VersionRef> {
        self.version_id.as_ref()
    }

    /// Formats the id as `scope/id[/version]`.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Parses a scoped id from any accepted input.
    ///
    /// An existing instance is handed back as-is. Field records go through
    /// [`ScopedId::create`]. Strings must match [`GRAMMAR_PATTERN`].
    pub fn parse<'a>(
        input: impl Into<ScopedIdInput<'a>>,
    ) -> Result<Cow<'a, ScopedId>, ScopedIdError> {
        match input.into() {
            ScopedIdInput::Instance(sid) => Ok(Cow::Borrowed(sid)),
            ScopedIdInput::Fields(fields) => Self::create(
                fields.scope.as_deref().unwrap_or_default(),
                fields.id.as_deref(),
                fields.version_id.as_deref(),
            )
            .map(Cow::Owned),
            ScopedIdInput::Text(s) => {
                if !GRAMMAR.is_match(s) {
                    return Err(ScopedIdError::InvalidFormat {
                        input: s.to_string(),
                    });
                }
                let mut segments = s.split('/');
                let scope = segments.next().unwrap_or_default();
                Self::create(scope, segments.next(), segments.next()).map(Cow::Owned)
            }
            ScopedIdInput::Absent => Err(ScopedIdError::InvalidFormat {
                input: String::new(),
            }),
        }
    }

    /// Like [`ScopedId::parse`], but discards the error.
    pub fn parse_opt<'a>(input: impl Into<ScopedIdInput<'a>>) -> Option<ScopedId> {
        Self::parse(input).ok().map(Cow::into_owned)
    }

    /// Parses `input` and stores the result in `sink` under `key`.
    ///
    /// Returns false and leaves `sink` untouched if parsing fails.
    pub fn try_parse<'a, S>(
        input: impl Into<ScopedIdInput<'a>>,
        sink: &mut S,
        key: S::Key,
    ) -> bool
    where
        S: ParseSink + ?Sized,
    {
        match Self::parse(input) {
            Ok(sid) => {
                sink.store(key, sid.into_owned());
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected scoped id");
                false
            }
        }
    }

    /// Returns true if `input` is, or describes, a well-formed scoped id.
    ///
    /// Field records must carry object-id-shaped versions to be valid.
    pub fn is_valid<'a>(input: impl Into<ScopedIdInput<'a>>) -> bool {
        match input.into() {
            ScopedIdInput::Absent => false,
            ScopedIdInput::Instance(_) => true,
            ScopedIdInput::Text(s) => GRAMMAR.is_match(s),
            ScopedIdInput::Fields(fields) => {
                non_empty(fields.scope.as_deref()).is_some()
                    && fields.id.as_deref().is_some_and(ObjectId::is_valid)
                    && non_empty(fields.version_id.as_deref()).is_none_or(ObjectId::is_valid)
            }
        }
    }

    /// Compares this id with any accepted input. See [`equals`].
    pub fn equals<'b>(&self, other: impl Into<ScopedIdInput<'b>>) -> bool {
        equals(self, other)
    }
}

/// Compares two scoped id inputs.
///
/// Identical references are equal and absent values never are. Two
/// object-shaped inputs compare field by field: id and scope only when the
/// left side has them, and the version must match on both sides (absent
/// only matches absent). Anything else compares canonical strings.
pub fn equals<'a, 'b>(
    a: impl Into<ScopedIdInput<'a>>,
    b: impl Into<ScopedIdInput<'b>>,
) -> bool {
    let (a, b) = (a.into(), b.into());

    if a.same_ref(&b) {
        return true;
    }
    if a.is_blank() || b.is_blank() {
        return false;
    }

    if let (Some(left), Some(right)) = (a.members(), b.members()) {
        if left.id.is_some() && !ObjectId::loose_eq(left.id.as_deref(), right.id.as_deref()) {
            return false;
        }
        if let Some(scope) = left.scope.as_deref() {
            if right.scope.as_deref() != Some(scope) {
                return false;
            }
        }
        return match left.version_id.as_deref() {
            Some(version) => ObjectId::loose_eq(Some(version), right.version_id.as_deref()),
            None => right.version_id.is_none(),
        };
    }

    match (a.canonical(), b.canonical()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl std::fmt::Display for ScopedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.scope, self.id)?;
        if let Some(version) = &self.version_id {
            write!(f, "/{version}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ScopedId {
    type Err = ScopedIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map(Cow::into_owned)
    }
}

impl PartialEq<str> for ScopedId {
    fn eq(&self, other: &str) -> bool {
        equals(self, other)
    }
}

impl PartialEq<&str> for ScopedId {
    fn eq(&self, other: &&str) -> bool {
        equals(self, *other)
    }
}

impl serde::Serialize for ScopedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Wire shapes accepted when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Text(String),
    Fields(ScopedIdFields),
}

impl<'de> serde::Deserialize<'de> for ScopedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Text(s) => ScopedId::parse(&s).map(Cow::into_owned),
            Repr::Fields(fields) => ScopedId::parse(&fields).map(Cow::into_owned),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
