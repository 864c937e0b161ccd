//! Accepted input shapes for parsing, validation, and equality.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::ScopedId;

/// A plain record carrying the raw fields of a scoped identifier.
///
/// Nothing is validated here; the record is checked when it is parsed.
/// Deserializes from `{"scope", "id" | "_id", "versionId" | "version_id"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedIdFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, alias = "version_id", skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl ScopedIdFields {
    /// Creates a record with a scope and id.
    pub fn new(scope: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            id: Some(id.into()),
            version_id: None,
        }
    }

    /// Sets the version field.
    #[must_use]
    pub fn with_version(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Renders `scope/id[/version]` when both scope and id are present.
    pub fn canonical(&self) -> Option<String> {
        let scope = non_empty(self.scope.as_deref())?;
        let id = non_empty(self.id.as_deref())?;
        Some(match non_empty(self.version_id.as_deref()) {
            Some(version) => format!("{scope}/{id}/{version}"),
            None => format!("{scope}/{id}"),
        })
    }
}

impl From<&ScopedId> for ScopedIdFields {
    fn from(sid: &ScopedId) -> Self {
        Self {
            scope: Some(sid.scope().to_string()),
            id: Some(sid.id().to_string()),
            version_id: sid.version_id().map(ToString::to_string),
        }
    }
}

/// Any value that [`ScopedId::parse`], [`ScopedId::is_valid`], or
/// [`ScopedId::equals`] accepts.
#[derive(Debug, Clone, Copy)]
pub enum ScopedIdInput<'a> {
    /// No value.
    Absent,
    /// An already constructed identifier.
    Instance(&'a ScopedId),
    /// A raw field record.
    Fields(&'a ScopedIdFields),
    /// A candidate canonical string.
    Text(&'a str),
}

impl<'a> ScopedIdInput<'a> {
    /// True for `Absent` and for the empty string.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            ScopedIdInput::Absent => true,
            ScopedIdInput::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True if both inputs refer to the very same value.
    pub(crate) fn same_ref(&self, other: &ScopedIdInput<'_>) -> bool {
        match (self, other) {
            (ScopedIdInput::Instance(a), ScopedIdInput::Instance(b)) => std::ptr::eq(*a, *b),
            (ScopedIdInput::Fields(a), ScopedIdInput::Fields(b)) => std::ptr::eq(*a, *b),
            // Empty strings have no stable address; any two are identical.
            (ScopedIdInput::Text(a), ScopedIdInput::Text(b)) if a.is_empty() || b.is_empty() => {
                a.is_empty() && b.is_empty()
            }
            (ScopedIdInput::Text(a), ScopedIdInput::Text(b)) => {
                a.len() == b.len() && std::ptr::eq(a.as_ptr(), b.as_ptr())
            }
            _ => false,
        }
    }

    /// Field view of object-shaped inputs.
    pub(crate) fn members(&self) -> Option<Members<'a>> {
        match *self {
            ScopedIdInput::Instance(sid) => Some(Members {
                scope: Some(Cow::Borrowed(sid.scope())),
                id: Some(Cow::Owned(sid.id().to_string())),
                version_id: sid.version_id().map(|v| Cow::Owned(v.to_string())),
            }),
            ScopedIdInput::Fields(fields) => Some(Members {
                scope: non_empty(fields.scope.as_deref()).map(Cow::Borrowed),
                id: non_empty(fields.id.as_deref()).map(Cow::Borrowed),
                version_id: non_empty(fields.version_id.as_deref()).map(Cow::Borrowed),
            }),
            ScopedIdInput::Absent | ScopedIdInput::Text(_) => None,
        }
    }

    /// Canonical string form, if this input has one.
    pub(crate) fn canonical(&self) -> Option<Cow<'a, str>> {
        match *self {
            ScopedIdInput::Absent => None,
            ScopedIdInput::Instance(sid) => Some(Cow::Owned(sid.to_string())),
            ScopedIdInput::Fields(fields) => fields.canonical().map(Cow::Owned),
            ScopedIdInput::Text(s) => Some(Cow::Borrowed(s)),
        }
    }
}

/// Present, non-empty members of an object-shaped input.
pub(crate) struct Members<'a> {
    pub scope: Option<Cow<'a, str>>,
    pub id: Option<Cow<'a, str>>,
    pub version_id: Option<Cow<'a, str>>,
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl<'a> From<&'a ScopedId> for ScopedIdInput<'a> {
    fn from(sid: &'a ScopedId) -> Self {
        ScopedIdInput::Instance(sid)
    }
}

impl<'a> From<&'a ScopedIdFields> for ScopedIdInput<'a> {
    fn from(fields: &'a ScopedIdFields) -> Self {
        ScopedIdInput::Fields(fields)
    }
}

impl<'a> From<&'a str> for ScopedIdInput<'a> {
    fn from(s: &'a str) -> Self {
        ScopedIdInput::Text(s)
    }
}

impl<'a> From<&'a String> for ScopedIdInput<'a> {
    fn from(s: &'a String) -> Self {
        ScopedIdInput::Text(s.as_str())
    }
}

impl<'a, T> From<Option<T>> for ScopedIdInput<'a>
where
    T: Into<ScopedIdInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ScopedIdInput::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OID: &str = "511083bb08ce6b1b00000003";

    #[test]
    fn test_fields_canonical() {
        let fields = ScopedIdFields::new("foo", OID);
        assert_eq!(fields.canonical().as_deref(), Some("foo/511083bb08ce6b1b00000003"));

        let fields = fields.with_version("ref");
        assert_eq!(
            fields.canonical().as_deref(),
            Some("foo/511083bb08ce6b1b00000003/ref")
        );

        assert_eq!(ScopedIdFields::default().canonical(), None);
    }

    #[test]
    fn test_fields_json_aliases() {
        let json = r#"{"scope":"foo","_id":"511083bb08ce6b1b00000003","versionId":"ref"}"#;
        let fields: ScopedIdFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields, ScopedIdFields::new("foo", OID).with_version("ref"));

        let json = r#"{"scope":"foo","id":"511083bb08ce6b1b00000003","version_id":"ref"}"#;
        let snake: ScopedIdFields = serde_json::from_str(json).unwrap();
        assert_eq!(snake, fields);
    }

    #[test]
    fn test_same_ref_text() {
        let s = String::from("foo/bar");
        let copy = s.clone();
        let a = ScopedIdInput::from(&s);
        assert!(a.same_ref(&ScopedIdInput::from(s.as_str())));
        assert!(!a.same_ref(&ScopedIdInput::from(&copy)));
    }

    #[test]
    fn test_same_ref_empty_strings() {
        let owned = String::new();
        let empty = ScopedIdInput::from(&owned);
        assert!(empty.same_ref(&ScopedIdInput::from("")));
        assert!(!empty.same_ref(&ScopedIdInput::from("foo")));
        assert!(!ScopedIdInput::from("foo").same_ref(&empty));
    }

    #[test]
    fn test_option_input() {
        let none: Option<&str> = None;
        assert!(matches!(ScopedIdInput::from(none), ScopedIdInput::Absent));
        assert!(ScopedIdInput::from("").is_blank());
        assert!(!ScopedIdInput::from(Some("x")).is_blank());
    }
}
