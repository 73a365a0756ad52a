/// How a probe relates to a stored sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The probe is exactly the stored sequence
    ExactMatch,
    /// The stored sequence starts with the probe and continues after it
    Contains,
    /// The probe occurs inside the stored sequence, but not at its start
    IsContained,
    /// The probe only occurs with some substituted symbols
    Partial,
}

impl MatchKind {
    /// Classifies an occurrence of a probe of `probe_length` symbols that starts at `start` in a
    /// sequence of `sequence_length` symbols (terminator excluded)
    pub fn classify(start: usize, probe_length: usize, sequence_length: usize) -> MatchKind {
        match (start, probe_length == sequence_length) {
            (0, true) => MatchKind::ExactMatch,
            (0, false) => MatchKind::Contains,
            _ => MatchKind::IsContained,
        }
    }

    fn strength(self) -> u8 {
        match self {
            MatchKind::ExactMatch => 3,
            MatchKind::Contains => 2,
            MatchKind::IsContained => 1,
            MatchKind::Partial => 0,
        }
    }

    /// The strongest of both kinds, used when a sequence is reached through several suffixes
    pub fn strongest(self, other: MatchKind) -> MatchKind {
        if other.strength() > self.strength() {
            other
        } else {
            self
        }
    }

    /// The kind that describes a complete result. Only exact walk hits count when there are any;
    /// the result is an exact match if every one of them is, `Contains` as soon as one of them is a
    /// prefix of its sequence and `IsContained` otherwise. Without exact walk hits the result is `Partial`.
    pub fn aggregate(kinds: impl IntoIterator<Item = MatchKind>) -> Option<MatchKind> {
        let mut result: Option<MatchKind> = None;
        let mut all_exact = true;
        for kind in kinds {
            if kind != MatchKind::ExactMatch && kind != MatchKind::Partial {
                all_exact = false;
            }
            result = Some(result.map_or(kind, |current| current.strongest(kind)));
        }

        match result {
            Some(MatchKind::ExactMatch) if !all_exact => Some(MatchKind::Contains),
            other => other,
        }
    }
}
