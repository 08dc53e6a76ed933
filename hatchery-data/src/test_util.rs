use core::fmt::Debug;

use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Tests that a value serializes to the expected string.
pub fn test_string_serialization<T>(value: T, want: &str)
where
    T: Serialize,
{
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{want}\"")
    );
}

/// Tests that a string deserializes to the expected value.
pub fn test_string_deserialization<T>(value: &str, want: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    assert_eq!(
        serde_json::from_str::<T>(&format!("\"{value}\"")).unwrap(),
        want
    );
}
