//! Reconciliation services for the Café POS costing platform

pub mod alerts;
pub mod consumption;
pub mod conversion;
pub mod costing;
pub mod matching;
pub mod recipe;
pub mod rules;

pub use alerts::{evaluate_alerts, StockAlert, TriggeredAlert};
pub use consumption::{
    ConsumptionCalculator, ConsumptionEntry, ConsumptionMode, ConsumptionReport,
    MissingIngredient,
};
pub use conversion::convert;
pub use costing::{CostEdit, CostHistory, CostingService};
pub use matching::{IngredientMatcher, ScoredMatch};
pub use recipe::{CreateVersionInput, RecipeStore, SeedReport};
pub use rules::{categorize, default_category_rules, MatchRule, RuleTable};
