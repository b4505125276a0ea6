/// Implements `Serialize` and `Deserialize` for a record through the keyed
/// hook.
///
/// Each field is listed with its type and its coding path:
///
/// - `value`: written unconditionally, required on input.
/// - `field`: consults [`FieldPresence`](crate::FieldPresence), so it may be
///   left out on output and tolerate a missing key on input.
///
/// The record must be a non-generic struct with named fields, all of which
/// are listed. Unknown keys are ignored and repeated keys are rejected.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use vc_field::{Coded, Immutable, Optional, coding::EpochSeconds};
///
/// struct Event {
///     id: Immutable<u32>,
///     date: Coded<EpochSeconds>,
///     comment: Optional<String>,
/// }
///
/// vc_field::impl_keyed_serde! {
///     Event {
///         id: Immutable<u32> => value,
///         date: Coded<EpochSeconds> => value,
///         comment: Optional<String> => field,
///     }
/// }
///
/// let event = Event {
///     id: Immutable::new(1),
///     date: Coded::new(UNIX_EPOCH + Duration::from_secs(590277534)),
///     comment: Optional::none(),
/// };
/// let json = serde_json::to_string(&event).unwrap();
/// assert_eq!(json, r#"{"id":1,"date":590277534}"#);
///
/// let back: Event = serde_json::from_str(&json).unwrap();
/// assert_eq!(*back.date, *event.date);
/// ```
#[macro_export]
macro_rules! impl_keyed_serde {
    (@len value, $value:expr) => {
        1usize
    };
    (@len field, $value:expr) => {
        usize::from(!$crate::keyed::FieldPresence::is_omitted($value))
    };
    (@encode value, $encoder:ident, $key:expr, $value:expr) => {
        $encoder.encode($key, $value)?
    };
    (@encode field, $encoder:ident, $key:expr, $value:expr) => {
        $encoder.encode_field($key, $value)?
    };
    (@finish value, $slot:ident, $err:ty) => {
        $slot.require::<$err>()
    };
    (@finish field, $slot:ident, $err:ty) => {
        $slot.finish::<$err>()
    };
    (
        $name:ident {
            $( $field:ident : $ty:ty => $kind:ident ),+ $(,)?
        }
    ) => {
        impl $crate::__macro_exports::serde_core::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__macro_exports::serde_core::Serializer,
            {
                let len = 0usize $( + $crate::impl_keyed_serde!(@len $kind, &self.$field) )+;
                let mut encoder =
                    $crate::keyed::KeyedEncoder::begin(serializer, ::core::stringify!($name), len)?;
                $( $crate::impl_keyed_serde!(@encode $kind, encoder, ::core::stringify!($field), &self.$field); )+
                encoder.end()
            }
        }

        impl<'de> $crate::__macro_exports::serde_core::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__macro_exports::serde_core::Deserializer<'de>,
            {
                const FIELDS: &[&str] = &[ $( ::core::stringify!($field) ),+ ];

                struct KeyedVisitor;

                impl<'de> $crate::__macro_exports::serde_core::de::Visitor<'de> for KeyedVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                        formatter.write_str(::core::concat!("struct ", ::core::stringify!($name)))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::core::result::Result<$name, A::Error>
                    where
                        A: $crate::__macro_exports::serde_core::de::MapAccess<'de>,
                    {
                        $( let mut $field = $crate::keyed::FieldSlot::<$ty>::new(::core::stringify!($field)); )+

                        while let ::core::option::Option::Some(key) =
                            map.next_key::<$crate::keyed::FieldKey>()?
                        {
                            match key.as_str() {
                                $( ::core::stringify!($field) => $field.fill(&mut map)?, )+
                                _ => $crate::keyed::skip_value(&mut map)?,
                            }
                        }

                        ::core::result::Result::Ok($name {
                            $( $field: $crate::impl_keyed_serde!(@finish $kind, $field, A::Error)?, )+
                        })
                    }
                }

                deserializer.deserialize_struct(::core::stringify!($name), FIELDS, KeyedVisitor)
            }
        }
    };
}
