//! Typed Identifiers
//!
//! Type-safe identifiers for entities the engine hands out by value.
//! Each domain has its own ID type to prevent accidental mixing.

/// Macro to create type-safe IDs
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create a new ID with specific value
            #[inline]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw value
            #[inline]
            pub const fn raw(&self) -> u64 {
                self.0
            }

            /// Null/invalid ID
            pub const NULL: Self = Self(0);

            /// Check if null
            #[inline]
            pub const fn is_null(&self) -> bool {
                self.0 == 0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}-{:06}", $prefix, self.0)
            }
        }
    };
}

define_id!(ModelId, "model", "Generated model identifier (one per cycle)");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_null() {
        let id = ModelId::NULL;
        assert!(id.is_null());
        assert_eq!(id.raw(), 0);
    }

    #[test]
    fn test_id_display() {
        let id = ModelId::new(42);
        assert_eq!(alloc::format!("{}", id), "model-000042");
    }

    #[test]
    fn test_id_ordering() {
        assert!(ModelId::new(1) < ModelId::new(2));
    }
}
