//! Configuration for a planning session.

/// Starting class shown when no other is requested.
pub const DEFAULT_STARTING_CLASS: &str = "wretch";

/// Item discovery of a build with zero arcane, before class offsets.
pub const DEFAULT_BASE_DISCOVERY: u32 = 100;

/// Configuration for a planner and the builds it creates.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Name of the class the planner opens with.
    pub starting_class: String,
    /// Item discovery before arcane is added.
    pub base_discovery: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            starting_class: DEFAULT_STARTING_CLASS.to_string(),
            base_discovery: DEFAULT_BASE_DISCOVERY,
        }
    }
}

impl PlannerConfig {
    /// Set the class the planner opens with.
    pub fn with_starting_class(mut self, name: impl Into<String>) -> Self {
        self.starting_class = name.into();
        self
    }

    /// Set the item discovery before arcane is added.
    pub fn with_base_discovery(mut self, base: u32) -> Self {
        self.base_discovery = base;
        self
    }
}
