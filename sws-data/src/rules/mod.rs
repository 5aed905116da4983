//! Prioritized rule chains.
//!
//! A [`Waterfall`] is an ordered list of (predicate, outcome) pairs. The
//! first rule whose predicate holds decides the outcome; if none holds,
//! the fallback applies. Rules are never combined or scored.

pub mod drought;
pub mod stress;

/// One step of a waterfall.
pub struct Rule<I, O> {
    /// Short description of the condition, used in explanations
    pub name: &'static str,
    pub predicate: fn(&I) -> bool,
    pub outcome: O,
}

/// Ordered, first-match-wins rule chain.
pub struct Waterfall<'a, I, O> {
    pub rules: &'a [Rule<I, O>],
    pub fallback: O,
}

impl<I, O: Copy> Waterfall<'_, I, O> {
    /// The first rule matching `input`, if any.
    pub fn first_match(&self, input: &I) -> Option<&Rule<I, O>> {
        self.rules.iter().find(|rule| (rule.predicate)(input))
    }

    pub fn evaluate(&self, input: &I) -> O {
        self.first_match(input)
            .map(|rule| rule.outcome)
            .unwrap_or(self.fallback)
    }
}
