//! Category auto-suggestion
//!
//! Suggests a transaction type and category from a free-text description
//! using an ordered, data-driven keyword table. Matching is case-insensitive
//! substring containment and the first rule in table order wins; there is no
//! scoring and no longest-match preference.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::TransactionType;

/// Suggested categories for income transactions
pub const INCOME_CATEGORIES: &[&str] = &[
    "Rent",
    "Late Fee",
    "Security Deposit",
    "Parking",
    "Laundry",
    "Other Income",
];

/// Suggested categories for expense transactions
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Repairs",
    "Maintenance",
    "Landscaping",
    "Cleaning",
    "Utilities",
    "Insurance",
    "Mortgage",
    "Property Tax",
    "Management Fees",
    "Legal & Professional",
    "Advertising",
    "Supplies",
    "Other Expense",
];

/// The conventional category set for a transaction type
pub fn suggested_categories(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// The type whose suggested set contains `category` (case-insensitive)
pub fn type_of_category(category: &str) -> Option<TransactionType> {
    let category = category.trim();
    [TransactionType::Income, TransactionType::Expense]
        .into_iter()
        .find(|&t| {
            suggested_categories(t)
                .iter()
                .any(|c| c.eq_ignore_ascii_case(category))
        })
}

/// One row of the keyword table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl CategoryRule {
    pub fn new(keywords: &[&str], category: &str, transaction_type: TransactionType) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: category.to_string(),
            transaction_type,
        }
    }

    /// Check whether any keyword occurs in an already lower-cased description
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| {
            let keyword = keyword.trim().to_lowercase();
            !keyword.is_empty() && lowered.contains(&keyword)
        })
    }
}

/// A classification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub transaction_type: TransactionType,
    pub category: String,
    /// True when the suggested type differs from the caller's current type
    pub type_changed: bool,
}

/// The built-in keyword table, in evaluation order
pub fn default_rules() -> Vec<CategoryRule> {
    use TransactionType::{Expense, Income};

    vec![
        CategoryRule::new(
            &["repair", "plumb", "handyman", "leak", "broken", "fixing"],
            "Repairs",
            Expense,
        ),
        CategoryRule::new(
            &["maintenance", "hvac", "service call", "inspection", "pest"],
            "Maintenance",
            Expense,
        ),
        CategoryRule::new(
            &[
                "landscap", "lawn", "garden", "snow removal", "tree service", "tree trimming",
                "tree removal",
            ],
            "Landscaping",
            Expense,
        ),
        CategoryRule::new(&["cleaning", "cleaner", "janitor", "carpet"], "Cleaning", Expense),
        CategoryRule::new(
            &[
                "electric", "water", "sewer", "trash", "internet", "utility", "utilities",
                "gas bill", "energy",
            ],
            "Utilities",
            Expense,
        ),
        CategoryRule::new(&["insurance", "premium"], "Insurance", Expense),
        CategoryRule::new(&["mortgage", "loan payment", "escrow"], "Mortgage", Expense),
        CategoryRule::new(
            &["property tax", "tax bill", "council tax", "county tax"],
            "Property Tax",
            Expense,
        ),
        CategoryRule::new(
            &["management fee", "property manager", "letting agent"],
            "Management Fees",
            Expense,
        ),
        CategoryRule::new(
            &["lawyer", "attorney", "legal", "accountant", "eviction"],
            "Legal & Professional",
            Expense,
        ),
        CategoryRule::new(
            &["advertis", "listing fee", "zillow", "craigslist"],
            "Advertising",
            Expense,
        ),
        CategoryRule::new(
            &["tesco", "lidl", "home depot", "lowe's", "lowes", "hardware", "b&q", "ikea", "supplies"],
            "Supplies",
            Expense,
        ),
        CategoryRule::new(&["late fee"], "Late Fee", Income),
        CategoryRule::new(
            &["rent", "zelle", "venmo", "cash app", "tenant payment", "e-transfer"],
            "Rent",
            Income,
        ),
        CategoryRule::new(&["security deposit", "deposit"], "Security Deposit", Income),
        CategoryRule::new(&["parking"], "Parking", Income),
        CategoryRule::new(&["laundry"], "Laundry", Income),
    ]
}

/// Keyword-based classifier over an ordered rule table
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl CategoryClassifier {
    /// Create a classifier from an explicit rule table
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Built-in table with custom rules evaluated first
    pub fn with_custom_rules(custom: &[CategoryRule]) -> Self {
        let mut rules = custom.to_vec();
        rules.extend(default_rules());
        Self::new(rules)
    }

    /// The rule table, in evaluation order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Classify a description
    ///
    /// Returns None when nothing matches; callers keep their prior selection.
    pub fn classify(
        &self,
        description: &str,
        current_type: Option<TransactionType>,
    ) -> Option<Suggestion> {
        let lowered = description.to_lowercase();
        if lowered.trim().is_empty() {
            return None;
        }

        let rule = self.rules.iter().find(|rule| rule.matches(&lowered))?;
        debug!(category = %rule.category, "classified description");

        Some(Suggestion {
            transaction_type: rule.transaction_type,
            category: rule.category.clone(),
            type_changed: current_type.is_some_and(|t| t != rule.transaction_type),
        })
    }
}

/// Form-level state for reactive categorization
///
/// Suggestions are applied only from description changes and only until the
/// user picks a category by hand.
#[derive(Debug, Clone)]
pub struct CategorySuggester<'a> {
    classifier: &'a CategoryClassifier,
    transaction_type: Option<TransactionType>,
    category: Option<String>,
    category_locked: bool,
    type_locked: bool,
}

impl<'a> CategorySuggester<'a> {
    pub fn new(classifier: &'a CategoryClassifier) -> Self {
        Self {
            classifier,
            transaction_type: None,
            category: None,
            category_locked: false,
            type_locked: false,
        }
    }

    /// Handle an edit of the description field
    ///
    /// Returns the suggestion that was applied, if any.
    pub fn on_description_changed(&mut self, description: &str) -> Option<Suggestion> {
        if self.category_locked {
            return None;
        }

        let suggestion = self
            .classifier
            .classify(description, self.transaction_type)?;

        if self.type_locked && suggestion.type_changed {
            return None;
        }

        self.transaction_type = Some(suggestion.transaction_type);
        self.category = Some(suggestion.category.clone());
        Some(suggestion)
    }

    /// The user picked a category directly; suggestions stop applying
    pub fn set_category_manually(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
        self.category_locked = true;
    }

    /// The user picked a type directly; suggestions of another type are ignored
    pub fn set_type_manually(&mut self, transaction_type: TransactionType) {
        self.transaction_type = Some(transaction_type);
        self.type_locked = true;
    }

    pub fn transaction_type(&self) -> Option<TransactionType> {
        self.transaction_type
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_category_manual(&self) -> bool {
        self.category_locked
    }
}
