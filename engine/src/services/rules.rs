//! Declarative keyword rule tables
//!
//! Catalog intake needs keyword-driven classification (item name to
//! category, item name to preferred supplier). Instead of scattered
//! literal maps, the domain knowledge lives in ordered rule tables
//! evaluated by one generic matcher, testable independently of the code
//! that consumes the outcome.

use shared::InventoryItem;

use super::matching::IngredientMatcher;

/// One keyword rule: when `pattern` occurs in a normalized name, the rule
/// yields `outcome`; higher priority wins, authoring order breaks ties
#[derive(Debug, Clone)]
pub struct MatchRule<T> {
    pub pattern: String,
    pub outcome: T,
    pub priority: i32,
}

impl<T> MatchRule<T> {
    pub fn new(pattern: &str, outcome: T, priority: i32) -> Self {
        Self {
            pattern: pattern.to_string(),
            outcome,
            priority,
        }
    }
}

/// Ordered rule table evaluated by substring match on normalized names
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    rules: Vec<MatchRule<T>>,
}

impl<T> RuleTable<T> {
    pub fn new(mut rules: Vec<MatchRule<T>>) -> Self {
        // stable sort keeps authoring order within a priority band
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority));
        Self { rules }
    }

    /// Outcome of the highest-priority rule whose pattern occurs in the
    /// normalized name, or None when no rule applies
    pub fn lookup(&self, name: &str) -> Option<&T> {
        let name = IngredientMatcher::normalize(name);
        self.rules
            .iter()
            .find(|rule| {
                let pattern = IngredientMatcher::normalize(&rule.pattern);
                !pattern.is_empty() && name.contains(&pattern)
            })
            .map(|rule| &rule.outcome)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Default category rules for café inventory intake
pub fn default_category_rules() -> RuleTable<String> {
    let rule = |pattern: &str, outcome: &str, priority: i32| {
        MatchRule::new(pattern, outcome.to_string(), priority)
    };

    RuleTable::new(vec![
        // Non-dairy alternatives outrank the generic milk rule
        rule("oat milk", "alt_dairy", 10),
        rule("almond milk", "alt_dairy", 10),
        rule("soy milk", "alt_dairy", 10),
        rule("milk", "dairy", 0),
        rule("cream", "dairy", 0),
        rule("half and half", "dairy", 0),
        rule("butter", "dairy", 0),
        rule("espresso", "coffee", 0),
        rule("coffee", "coffee", 0),
        rule("bean", "coffee", 0),
        rule("cold brew", "coffee", 5),
        rule("tea", "tea", 0),
        rule("chai", "tea", 0),
        rule("matcha", "tea", 0),
        rule("syrup", "flavoring", 0),
        rule("sauce", "flavoring", 0),
        rule("powder", "flavoring", 0),
        rule("croissant", "bakery", 0),
        rule("muffin", "bakery", 0),
        rule("scone", "bakery", 0),
        rule("bagel", "bakery", 0),
        rule("lemon", "produce", 0),
        rule("banana", "produce", 0),
        rule("avocado", "produce", 0),
        rule("cup", "packaging", 0),
        rule("lid", "packaging", 0),
        rule("sleeve", "packaging", 0),
        rule("straw", "packaging", 0),
        rule("napkin", "packaging", 0),
    ])
}

/// Assign categories to uncategorized catalog items, returning the number
/// of items assigned
pub fn categorize(items: &mut [InventoryItem], table: &RuleTable<String>) -> usize {
    let mut assigned = 0;
    for item in items.iter_mut().filter(|item| item.category.is_none()) {
        if let Some(category) = table.lookup(&item.name) {
            item.category = Some(category.clone());
            assigned += 1;
        }
    }
    if assigned > 0 {
        tracing::debug!(assigned, "categorized inventory items from rule table");
    }
    assigned
}
