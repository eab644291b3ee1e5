//! Typed Ids

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// String identifier tagged with the resource it names.
///
/// The backend hands out opaque string ids; the tag stops a product id from
/// being passed where a customer id is expected.
pub struct TypedId<T>(String, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the raw identifier.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Borrow<str> for TypedId<T> {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<T> From<&str> for TypedId<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<String> for TypedId<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    struct Tag;

    #[test]
    fn serializes_as_plain_string() -> TestResult {
        let id = TypedId::<Tag>::new("p-1");

        assert_eq!(serde_json::to_string(&id)?, "\"p-1\"");
        assert_eq!(serde_json::from_str::<TypedId<Tag>>("\"p-1\"")?, id);

        Ok(())
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(TypedId::<Tag>::new("abc").to_string(), "abc");
    }
}
