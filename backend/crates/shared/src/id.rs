//! Common ID Types
//!
//! Type-safe numeric ID wrappers for catalog entities.
//! Catalog keys are strictly positive integers; zero and negatives never
//! reach the network layer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU32;

/// Error when constructing an [`Id`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("ID must be a positive integer (got {0})")]
    NotPositive(i64),

    #[error("ID is out of range (got {0})")]
    OutOfRange(i64),
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::Id;
///
/// enum Pokemon {}
/// type PokemonId = Id<Pokemon>;
///
/// let id = PokemonId::new(25).unwrap();
/// assert_eq!(id.get(), 25);
/// assert!(PokemonId::new(0).is_err());
/// ```
pub struct Id<T> {
    value: NonZeroU32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Validate and wrap a raw value
    pub fn new(value: i64) -> Result<Self, IdError> {
        if value < 1 {
            return Err(IdError::NotPositive(value));
        }
        let raw = u32::try_from(value).map_err(|_| IdError::OutOfRange(value))?;
        let value = NonZeroU32::new(raw).ok_or(IdError::NotPositive(value))?;
        Ok(Self::from_nonzero(value))
    }

    /// Wrap a value that is positive by construction
    pub const fn from_nonzero(value: NonZeroU32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub fn get(&self) -> u32 {
        self.value.get()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value.get())
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
