//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony. The inner integer is `pub`
//! to allow direct indexing, but callers should prefer `.index()` for
//! clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a city in the road graph. Valid range is `[0, MAX_CITIES)`.
    pub struct CityId(u16);
}

typed_id! {
    /// Index of a rider in the fixed fleet.
    pub struct RiderId(u16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_is_default() {
        assert_eq!(CityId::default(), CityId::INVALID);
        assert_eq!(RiderId::default(), RiderId::INVALID);
    }

    #[test]
    fn index_round_trips() {
        let id = CityId(3);
        assert_eq!(id.index(), 3);
    }
}
