use alloc::string::{String, ToString};
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::adapter::{Always, NeverEncode};
use crate::coding::EpochSeconds;
use crate::{Coded, FieldPresence, Immutable, Optional};

// -----------------------------------------------------------------------------
// Records coded through the hook

#[derive(Debug, PartialEq)]
struct Note {
    value: Optional<String>,
}

crate::impl_keyed_serde! {
    Note {
        value: Optional<String> => field,
    }
}

#[derive(Debug, PartialEq)]
struct StrictNote {
    value: Optional<String, Always>,
}

crate::impl_keyed_serde! {
    StrictNote {
        value: Optional<String, Always> => field,
    }
}

#[derive(Debug, PartialEq)]
struct Session {
    user: String,
    token: Optional<String, NeverEncode>,
}

crate::impl_keyed_serde! {
    Session {
        user: String => value,
        token: Optional<String, NeverEncode> => field,
    }
}

#[derive(Debug, PartialEq)]
struct Event {
    id: Immutable<u32>,
    date: Coded<EpochSeconds>,
    ended: Immutable<Optional<Coded<EpochSeconds>>>,
}

crate::impl_keyed_serde! {
    Event {
        id: Immutable<u32> => value,
        date: Coded<EpochSeconds> => value,
        ended: Immutable<Optional<Coded<EpochSeconds>>> => field,
    }
}

// -----------------------------------------------------------------------------
// Reference records, plain serde derive

#[derive(Serialize, Deserialize)]
struct PlainNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

#[derive(Serialize)]
struct PlainEvent {
    id: u32,
    date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct DerivedNote {
    #[serde(default, skip_serializing_if = "FieldPresence::is_omitted")]
    value: Optional<String>,
}

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn note(value: Option<&str>) -> Note {
    Note {
        value: Optional::new(value.map(str::to_string)),
    }
}

// -----------------------------------------------------------------------------
// Omit when absent

#[test]
fn absent_field_leaves_no_key() {
    assert_eq!(serde_json::to_string(&note(None)).unwrap(), "{}");
    assert_eq!(
        serde_json::to_string(&note(Some("hi"))).unwrap(),
        r#"{"value":"hi"}"#
    );
}

#[test]
fn matches_plain_optional_output() {
    for value in [None, Some("hi"), Some("")] {
        let plain = PlainNote {
            value: value.map(str::to_string),
        };

        assert_eq!(
            serde_json::to_string(&note(value)).unwrap(),
            serde_json::to_string(&plain).unwrap()
        );
        assert_eq!(
            ron::to_string(&note(value)).unwrap(),
            ron::to_string(&plain).unwrap()
        );
    }
}

#[test]
fn missing_key_decodes_as_absent() {
    let back: Note = serde_json::from_str("{}").unwrap();
    assert_eq!(back, note(None));

    let back: Note = serde_json::from_str(r#"{"value":null}"#).unwrap();
    assert_eq!(back, note(None));
}

#[test]
fn round_trip() {
    for value in [None, Some("hi")] {
        let json = serde_json::to_string(&note(value)).unwrap();
        assert_eq!(serde_json::from_str::<Note>(&json).unwrap(), note(value));

        let ron_text = ron::to_string(&note(value)).unwrap();
        assert_eq!(ron::from_str::<Note>(&ron_text).unwrap(), note(value));
    }
}

#[test]
fn derive_attributes_match_the_hook() {
    for value in [None, Some("hi")] {
        let derived = DerivedNote {
            value: Optional::new(value.map(str::to_string)),
        };
        assert_eq!(
            serde_json::to_string(&derived).unwrap(),
            serde_json::to_string(&note(value)).unwrap()
        );
    }

    let back: DerivedNote = serde_json::from_str("{}").unwrap();
    assert!(back.value.is_absent());
}

// -----------------------------------------------------------------------------
// Always present

#[test]
fn always_writes_null_and_requires_the_key() {
    let strict = StrictNote {
        value: Optional::none(),
    };
    assert_eq!(serde_json::to_string(&strict).unwrap(), r#"{"value":null}"#);

    let back: StrictNote = serde_json::from_str(r#"{"value":null}"#).unwrap();
    assert_eq!(back, strict);

    let err = serde_json::from_str::<StrictNote>("{}").unwrap_err();
    assert!(err.to_string().starts_with("missing field `value`"), "{err}");
}

// -----------------------------------------------------------------------------
// Never encode

#[test]
fn never_encode_writes_nothing() {
    let session = Session {
        user: "ada".to_string(),
        token: Optional::some("secret".to_string()),
    };
    assert_eq!(serde_json::to_string(&session).unwrap(), r#"{"user":"ada"}"#);

    let session = Session {
        user: "ada".to_string(),
        token: Optional::none(),
    };
    assert_eq!(serde_json::to_string(&session).unwrap(), r#"{"user":"ada"}"#);
}

#[test]
fn never_encode_decodes_as_absent() {
    let back: Session = serde_json::from_str(r#"{"user":"ada","token":"secret"}"#).unwrap();
    assert!(back.token.is_absent());

    let back: Session = serde_json::from_str(r#"{"token":{"any":[1]},"user":"ada"}"#).unwrap();
    assert!(back.token.is_absent());
    assert_eq!(back.user, "ada");

    let back: Session = serde_json::from_str(r#"{"user":"ada"}"#).unwrap();
    assert!(back.token.is_absent());
}

// -----------------------------------------------------------------------------
// Default path

#[test]
fn plain_fields_are_required() {
    let err = serde_json::from_str::<Session>(r#"{"token":"secret"}"#).unwrap_err();
    assert!(err.to_string().starts_with("missing field `user`"), "{err}");
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = serde_json::from_str::<Note>(r#"{"value":"a","value":"b"}"#).unwrap_err();
    assert!(err.to_string().starts_with("duplicate field `value`"), "{err}");
}

#[test]
fn unknown_keys_are_ignored() {
    let back: Note = serde_json::from_str(r#"{"other":[1,2],"value":"hi"}"#).unwrap();
    assert_eq!(back, note(Some("hi")));
}

#[test]
fn type_errors_propagate() {
    let err = serde_json::from_str::<Note>(r#"{"value":12}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid type: integer `12`"), "{err}");
}

// -----------------------------------------------------------------------------
// Stacked adapters

#[test]
fn stacked_adapters_keep_one_level() {
    let event = Event {
        id: Immutable::new(7),
        date: Coded::new(at(590277534)),
        ended: Immutable::new(Optional::none()),
    };
    let plain = PlainEvent {
        id: 7,
        date: 590277534,
        ended: None,
    };
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        r#"{"id":7,"date":590277534}"#
    );
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        serde_json::to_string(&plain).unwrap()
    );
    assert_eq!(ron::to_string(&event).unwrap(), ron::to_string(&plain).unwrap());

    let event = Event {
        ended: Immutable::new(Optional::some(Coded::new(at(590281134)))),
        ..event
    };
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        r#"{"id":7,"date":590277534,"ended":590281134}"#
    );

    let back: Event = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
    assert_eq!(back, event);
}

#[test]
fn immutable_is_transient() {
    let event = Event {
        id: Immutable::new(1),
        date: Coded::new(at(0)),
        ended: Immutable::new(Optional::none()),
    };
    let once = serde_json::to_string(&event).unwrap();
    let twice = serde_json::to_string(&serde_json::from_str::<Event>(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[cfg(all(debug_assertions, feature = "debug"))]
#[test]
fn converter_errors_name_the_field() {
    let err = serde_json::from_str::<Event>(r#"{"id":1,"date":1e300}"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("out of range for SystemTime"), "{msg}");
    assert!(msg.contains("(field: `date`)"), "{msg}");
}
