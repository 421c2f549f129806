// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serde support for [`ZString`]. On the wire a `ZString` is a plain string — the
//! terminator is an in-memory representation detail and never serialized. The impls
//! are written by hand (instead of derived) because deserialization must re-validate
//! the no-interior-`NUL` invariant: serialized string data can legally contain `\0`,
//! the buffer cannot.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use super::ZString;

impl Serialize for ZString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ZString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        ZString::try_from_str(&string).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_serialize_as_plain_string() {
        let s = ZString::try_from_str("Hi📦").unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"Hi📦\"");
    }

    #[test]
    fn test_round_trip() {
        let original = ZString::try_from_str("round trip 🙏🏽").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let back: ZString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_deserialize_rejects_interior_nul() {
        /* JSON string data can legally contain an escaped NUL; the buffer cannot */
        let result: Result<ZString, _> = serde_json::from_str("\"a\\u0000b\"");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("interior NUL byte found at byte position 1"));
    }

    #[test]
    fn test_as_struct_field() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Named {
            name: ZString,
            id: usize,
        }

        let value = Named {
            name: ZString::try_from_str("worker-1").unwrap(),
            id: 42,
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "{\"name\":\"worker-1\",\"id\":42}");

        let back: Named = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
