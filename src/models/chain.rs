use std::collections::HashMap;

/// Priority of a chain missing from the table; also the exclusion threshold
pub const UNKNOWN_CHAIN_PRIORITY: i32 = -99;

/// Whether a priority belongs to a listed chain
pub fn is_recognized_priority(priority: i32) -> bool {
    priority > UNKNOWN_CHAIN_PRIORITY
}

/// Chain name to display priority. Higher sorts first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPriorities {
    priorities: HashMap<String, i32>,
}

impl ChainPriorities {
    /// Create a table from explicit entries
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            priorities: entries
                .into_iter()
                .map(|(chain, priority)| (chain.into(), priority))
                .collect(),
        }
    }

    /// Empty table; every chain is unrecognized
    pub fn empty() -> Self {
        Self {
            priorities: HashMap::new(),
        }
    }

    /// Copy of this table with one entry set
    pub fn with(mut self, chain: impl Into<String>, priority: i32) -> Self {
        self.priorities.insert(chain.into(), priority);
        self
    }

    /// Priority for a chain, or the sentinel when unlisted
    pub fn priority_of(&self, chain: &str) -> i32 {
        self.priorities
            .get(chain)
            .copied()
            .unwrap_or(UNKNOWN_CHAIN_PRIORITY)
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

impl Default for ChainPriorities {
    fn default() -> Self {
        Self::new([
            ("Osmosis", 100),
            ("Ethereum", 50),
            ("Arbitrum", 30),
            ("Zilliqa", 20),
            ("Neo", 20),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_known_chains() {
        let table = ChainPriorities::default();
        assert_eq!(table.priority_of("Osmosis"), 100);
        assert_eq!(table.priority_of("Ethereum"), 50);
        assert_eq!(table.priority_of("Arbitrum"), 30);
        assert_eq!(table.priority_of("Zilliqa"), 20);
        assert_eq!(table.priority_of("Neo"), 20);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn unlisted_chain_gets_sentinel() {
        let table = ChainPriorities::default();
        assert_eq!(table.priority_of("UnknownChain"), UNKNOWN_CHAIN_PRIORITY);
        // lookups are case sensitive
        assert_eq!(table.priority_of("ethereum"), UNKNOWN_CHAIN_PRIORITY);
        assert!(!is_recognized_priority(table.priority_of("UnknownChain")));
        assert!(is_recognized_priority(table.priority_of("Neo")));
        assert!(!is_recognized_priority(UNKNOWN_CHAIN_PRIORITY));
        assert!(is_recognized_priority(UNKNOWN_CHAIN_PRIORITY + 1));
    }

    #[test]
    fn entries_can_be_substituted() {
        let table = ChainPriorities::empty().with("Solana", 70);
        assert_eq!(table.priority_of("Solana"), 70);
        assert!(!is_recognized_priority(table.priority_of("Ethereum")));
    }
}
