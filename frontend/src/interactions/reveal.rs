use std::collections::HashSet;

/// Cards and steps that fade in the first time they scroll into view.
pub const OBSERVED_SELECTOR: &str = ".service-card, .pricing-card, .testimonial-card, .step";

/// Attribute the observer reads to tell elements apart.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Elements that have animated in. Only ever grows: nothing is hidden again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    /// Returns true the first time a key is seen.
    pub fn reveal(&mut self, key: &str) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn class(&self, key: &str) -> &'static str {
        if self.is_revealed(key) {
            "reveal animate-in"
        } else {
            "reveal"
        }
    }
}
