/// Number of moves a random walk may take before giving up.
pub const DEFAULT_STEP_BUDGET: usize = 1000;
/// Iterative deepening stops raising its bound once it reaches this value.
pub const DEFAULT_DEPTH_CEILING: u32 = 1_000_000;

/// Limits and seeding for a [SearchEngine](crate::engine::SearchEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub step_budget: usize,
    pub depth_ceiling: u32,
    /// Seed for the random walk. [None] draws one from the operating system per engine.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            step_budget: DEFAULT_STEP_BUDGET,
            depth_ceiling: DEFAULT_DEPTH_CEILING,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
