//! Typed identifiers for stored documents.
//!
//! Ids cross the API boundary as 24-character hex strings but are kept as the
//! store's native [`ObjectId`] everywhere inside the crate.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::RepositoryError;

macro_rules! object_id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(ObjectId);

        impl $name {
            /// Generates a fresh identifier.
            pub fn new() -> Self {
                $name(ObjectId::new())
            }

            /// Parses the hex form used at the API boundary.
            pub fn parse(s: &str) -> Result<Self, RepositoryError> {
                ObjectId::parse_str(s)
                    .map($name)
                    .map_err(|_| RepositoryError::InvalidId(s.to_string()))
            }

            pub fn as_object_id(&self) -> ObjectId {
                self.0
            }

            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<ObjectId> for $name {
            fn from(oid: ObjectId) -> Self {
                $name(oid)
            }
        }

        impl From<$name> for ObjectId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = RepositoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.to_hex())
            }
        }
    };
}

object_id_type!(
    /// Identifier of a document in the `song` collection.
    SongId
);

object_id_type!(
    /// Identifier of a document in the `lyric` collection.
    LyricId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_hex() {
        let id = SongId::parse("5f8f8c44b54764421b7156c3").unwrap();
        assert_eq!(id.to_hex(), "5f8f8c44b54764421b7156c3");
        assert_eq!(id.to_string(), "5f8f8c44b54764421b7156c3");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "xyz", "5f8f8c44b54764421b7156c", "5f8f8c44b54764421b7156c3ff", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            match LyricId::parse(bad) {
                Err(RepositoryError::InvalidId(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidId for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = LyricId::new();
        let b = LyricId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_str_matches_parse() {
        let id: SongId = "5f8f8c44b54764421b7156c3".parse().unwrap();
        assert_eq!(id, SongId::parse("5f8f8c44b54764421b7156c3").unwrap());
    }
}
