use std::collections::HashMap;

use proptest::prelude::*;
use rstest::rstest;
use sid_scoped::{equals, ObjectId, ScopedId, ScopedIdError, ScopedIdFields};

const OID: &str = "511083bb08ce6b1b00000003";
const OID2: &str = "511083bb08ce6b1b00000006";

fn scope_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,16}"
}

fn oid_strategy() -> impl Strategy<Value = String> {
    any::<[u8; 12]>().prop_map(|bytes| ObjectId::from_bytes(bytes).to_string())
}

proptest! {
    #[test]
    fn canonical_string_is_scope_slash_id(scope in scope_strategy(), id in oid_strategy()) {
        let sid = ScopedId::create(&scope, Some(&id), None).unwrap();
        prop_assert_eq!(sid.to_canonical_string(), format!("{scope}/{id}"));
    }

    #[test]
    fn canonical_string_parses_back(
        scope in scope_strategy(),
        id in oid_strategy(),
        version in proptest::option::of(oid_strategy()),
    ) {
        let sid = ScopedId::create(&scope, Some(&id), version.as_deref()).unwrap();
        let text = sid.to_canonical_string();
        let parsed = ScopedId::parse(text.as_str()).unwrap();
        prop_assert!(equals(&*parsed, &sid));
        prop_assert_eq!(&*parsed, &sid);
    }

    #[test]
    fn instance_equals_its_canonical_string(
        scope in scope_strategy(),
        id in oid_strategy(),
        version in proptest::option::of(oid_strategy()),
    ) {
        let sid = ScopedId::create(&scope, Some(&id), version.as_deref()).unwrap();
        prop_assert!(equals(&sid, &sid.to_canonical_string()));
    }

    #[test]
    fn non_empty_scopes_are_accepted_by_create(scope in "[^/]{1,24}", id in oid_strategy()) {
        let sid = ScopedId::create(&scope, Some(&id), None).unwrap();
        prop_assert_eq!(sid.scope(), scope.as_str());
    }
}

#[rstest]
#[case::unversioned("modules/511083bb08ce6b1b00000003", true)]
#[case::versioned("modules/511083bb08ce6b1b00000003/511083bb08ce6b1b00000006", true)]
#[case::uppercase_hex("modules/511083BB08CE6B1B00000003", true)]
#[case::scope_only("modules", false)]
#[case::tag_version("modules/511083bb08ce6b1b00000003/latest", false)]
#[case::numeric_scope("m0dules/511083bb08ce6b1b00000003", false)]
#[case::short_id("modules/511083bb08ce6b1b", false)]
#[case::trailing_slash("modules/511083bb08ce6b1b00000003/", false)]
#[case::empty("", false)]
fn string_validity(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(ScopedId::is_valid(input), expected);
    assert_eq!(ScopedId::parse(input).is_ok(), expected);
}

#[rstest]
#[case::empty_scope("", Some(OID), ScopedIdError::InvalidScope)]
#[case::missing_id("x", None, ScopedIdError::InvalidId)]
#[case::empty_id("x", Some(""), ScopedIdError::InvalidId)]
fn create_rejects(#[case] scope: &str, #[case] id: Option<&str>, #[case] expected: ScopedIdError) {
    assert_eq!(ScopedId::create(scope, id, None), Err(expected));
}

#[test]
fn create_rejects_malformed_id() {
    let err = ScopedId::create("x", Some("not-24-hex"), None).unwrap_err();
    assert!(err.is_id_error());
}

#[test]
fn parse_returns_existing_instance() {
    let sid = ScopedId::create("foo", Some(OID), None).unwrap();
    let parsed = ScopedId::parse(&sid).unwrap();
    assert!(std::ptr::eq(&*parsed, &sid));
}

#[test]
fn version_presence_must_match() {
    let plain = ScopedId::create("bar", Some(OID), None).unwrap();
    let versioned = ScopedId::create("bar", Some(OID), Some(OID2)).unwrap();
    assert!(!equals(&plain, &versioned));
    assert!(!equals(&versioned, &plain));
    assert_ne!(plain, versioned);
}

#[test]
fn symbolic_versions_are_accepted_by_fields_but_not_strings() {
    let fields = ScopedIdFields::new("foo", OID).with_version("ref");
    assert!(!ScopedId::is_valid(&fields));

    let parsed = ScopedId::parse(&fields).unwrap().into_owned();
    assert_eq!(parsed.to_string(), format!("foo/{OID}/ref"));
    assert!(equals(&parsed, &fields));
    assert!(ScopedId::parse(parsed.to_string().as_str()).is_err());
}

#[test]
fn try_parse_populates_sink_only_on_success() {
    let mut sink: HashMap<String, ScopedId> = HashMap::new();

    assert!(!ScopedId::try_parse("garbage", &mut sink, "key".to_string()));
    assert!(sink.is_empty());

    let valid = format!("modules/{OID}");
    assert!(ScopedId::try_parse(valid.as_str(), &mut sink, "key".to_string()));
    assert_eq!(sink["key"].to_string(), valid);
}
