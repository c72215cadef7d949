//! Cognitive trait names.

/// The three internally-evolving state variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraitKind {
    Focus,
    Resilience,
    Adaptability,
}

impl TraitKind {
    /// All traits in canonical order
    pub const ALL: [TraitKind; 3] = [
        TraitKind::Focus,
        TraitKind::Resilience,
        TraitKind::Adaptability,
    ];

    /// Trait name as reported
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Resilience => "resilience",
            Self::Adaptability => "adaptability",
        }
    }

    /// Index into fixed-size per-trait tables
    #[inline(always)]
    pub const fn index(&self) -> usize {
        match self {
            Self::Focus => 0,
            Self::Resilience => 1,
            Self::Adaptability => 2,
        }
    }

    /// Resolve a trait name (ASCII case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl core::fmt::Display for TraitKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_index_matches_order() {
        for (i, kind) in TraitKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_trait_lookup() {
        assert_eq!(TraitKind::from_name("Focus"), Some(TraitKind::Focus));
        assert_eq!(TraitKind::from_name("curiosity"), None);
    }
}
