use crate::core::entities::Candidate;
use std::fmt;

/// Identifier used when Garmin could not tell which exercise was performed.
pub const UNKNOWN_EXERCISE: &str = "UNKNOWN";

/// Outcome of picking one exercise out of a set's candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A Garmin exercise identifier such as `BARBELL_BACK_SQUAT`.
    Identified(&'a str),
    /// No usable candidate: empty list, nothing above zero probability, or a
    /// winner without name and category. Garmin's own `UNKNOWN` category
    /// also lands here.
    Unknown,
}

impl<'a> Selection<'a> {
    pub fn identifier(&self) -> &'a str {
        match *self {
            Selection::Identified(name) => name,
            Selection::Unknown => UNKNOWN_EXERCISE,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Selection::Unknown)
    }
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Pick the candidate with the strictly highest probability.
///
/// The first candidate reaching the maximum wins ties. A probability of zero
/// never wins. A winner with an empty name is identified by its category.
pub fn select_exercise(candidates: &[Candidate]) -> Selection<'_> {
    let mut best: Option<&Candidate> = None;
    let mut best_probability = 0.0;

    for candidate in candidates {
        if candidate.probability > best_probability {
            best_probability = candidate.probability;
            best = Some(candidate);
        }
    }

    let Some(winner) = best else {
        return Selection::Unknown;
    };

    let identifier = if winner.name.is_empty() {
        winner.category.as_str()
    } else {
        winner.name.as_str()
    };

    if identifier.is_empty() || identifier == UNKNOWN_EXERCISE {
        Selection::Unknown
    } else {
        Selection::Identified(identifier)
    }
}
