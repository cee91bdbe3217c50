use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::{Builder, Uuid};

/// Typed identity wrapper around a UUID.
///
/// The phantom tag keeps identities of different entities apart at compile time,
/// e.g. a [`SlotId`] can never be passed where a [`CargoUnitId`] is expected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Id<T> {
    pub id: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Creates a fresh random (v4) identity.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Id { id, _marker: PhantomData }
    }

    /// Builds a v4 identity from caller supplied random bytes, used to derive
    /// reproducible identities from a seeded generator.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self::from_uuid(Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id.hyphenated())
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Id::from_uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct CargoUnitTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct SlotTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct SectionTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct VesselTag;

pub type CargoUnitId = Id<CargoUnitTag>;
pub type SlotId = Id<SlotTag>;
pub type SectionId = Id<SectionTag>;
pub type VesselId = Id<VesselTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical_uuid() {
        let id = SlotId::from_uuid(Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef));
        assert_eq!(id.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
        assert_eq!(id.to_string().parse::<SlotId>().unwrap(), id);
    }

    #[test]
    fn test_debug_names_the_entity() {
        let id = CargoUnitId::from_uuid(Uuid::nil());
        assert_eq!(format!("{:?}", id), "CargoUnitId: 00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_from_random_bytes_is_deterministic_v4() {
        let a = CargoUnitId::from_random_bytes([7; 16]);
        let b = CargoUnitId::from_random_bytes([7; 16]);
        assert_eq!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<SlotId>().is_err());
    }
}
