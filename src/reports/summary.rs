//! Financial aggregation
//!
//! Income/expense totals, monthly series and category and property breakdowns
//! over a transaction snapshot. All functions are pure; an empty input yields
//! zero totals and empty series.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Money, Property, PropertyId, Transaction, TransactionType, UnitId, YearMonth};

/// Which properties a report covers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PropertyScope {
    #[default]
    All,
    Property(PropertyId),
}

impl PropertyScope {
    /// Parse a property filter; "all" (any case) or blank means no filter
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Property(PropertyId::from(value))
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Transaction filter; bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReportFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub property: PropertyScope,
    pub unit: Option<UnitId>,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn for_property(mut self, property: PropertyScope) -> Self {
        self.property = property;
        self
    }

    pub fn for_unit(mut self, unit: UnitId) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.start.is_some_and(|start| transaction.date < start) {
            return false;
        }
        if self.end.is_some_and(|end| transaction.date > end) {
            return false;
        }
        if let PropertyScope::Property(id) = &self.property {
            if &transaction.property_id != id {
                return false;
            }
        }
        if let Some(unit) = &self.unit {
            if transaction.unit_id.as_ref() != Some(unit) {
                return false;
            }
        }
        true
    }

    /// Transactions passing the filter
    pub fn apply<'a>(&'a self, transactions: &'a [Transaction]) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |t| self.matches(t))
    }
}

/// Income and expense totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    pub transaction_count: usize,
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyPoint {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

/// Totals for one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTotals {
    pub address: String,
    pub income: Money,
    pub expenses: Money,
}

impl PropertyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Address shown for transactions whose property is not in the snapshot
pub const UNKNOWN_PROPERTY: &str = "(unknown property)";

/// Aggregation over transaction snapshots
pub struct FinancialAggregator;

impl FinancialAggregator {
    /// Totals; net profit is income minus expenses, exactly
    pub fn summarize<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Summary {
        let mut summary = Summary::default();
        for txn in transactions {
            match txn.transaction_type {
                TransactionType::Income => summary.total_income += txn.amount,
                TransactionType::Expense => summary.total_expenses += txn.amount,
            }
            summary.transaction_count += 1;
        }
        summary.net_profit = summary.total_income - summary.total_expenses;
        summary
    }

    /// Per-month totals in chronological order
    pub fn monthly_series<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Vec<MonthlyPoint> {
        // BTreeMap keyed by YearMonth keeps (year, month) order, not label order
        let mut months: BTreeMap<YearMonth, (Money, Money)> = BTreeMap::new();
        for txn in transactions {
            let entry = months.entry(YearMonth::of(txn.date)).or_default();
            match txn.transaction_type {
                TransactionType::Income => entry.0 += txn.amount,
                TransactionType::Expense => entry.1 += txn.amount,
            }
        }

        months
            .into_iter()
            .map(|(month, (income, expenses))| MonthlyPoint {
                month,
                label: month.label(),
                income,
                expenses,
            })
            .collect()
    }

    /// Totals per category for one type, largest first
    pub fn category_breakdown<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        transaction_type: TransactionType,
    ) -> Vec<CategoryAmount> {
        let mut totals: HashMap<&str, Money> = HashMap::new();
        for txn in transactions {
            if txn.transaction_type == transaction_type {
                *totals.entry(txn.category.as_str()).or_default() += txn.amount;
            }
        }

        let mut breakdown: Vec<CategoryAmount> = totals
            .into_iter()
            .map(|(category, amount)| CategoryAmount {
                category: category.to_string(),
                amount,
            })
            .collect();
        breakdown.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        breakdown
    }

    /// Totals per property; every known property appears, even with no activity
    pub fn property_breakdown<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        properties: &[Property],
    ) -> BTreeMap<PropertyId, PropertyTotals> {
        let mut breakdown: BTreeMap<PropertyId, PropertyTotals> = properties
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    PropertyTotals {
                        address: p.address.clone(),
                        income: Money::zero(),
                        expenses: Money::zero(),
                    },
                )
            })
            .collect();

        for txn in transactions {
            let totals = breakdown
                .entry(txn.property_id.clone())
                .or_insert_with(|| PropertyTotals {
                    address: UNKNOWN_PROPERTY.to_string(),
                    income: Money::zero(),
                    expenses: Money::zero(),
                });
            match txn.transaction_type {
                TransactionType::Income => totals.income += txn.amount,
                TransactionType::Expense => totals.expenses += txn.amount,
            }
        }

        breakdown
    }
}

/// Every aggregate for one filter, as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialReport {
    pub filter: ReportFilter,
    pub summary: Summary,
    pub monthly: Vec<MonthlyPoint>,
    pub income_by_category: Vec<CategoryAmount>,
    pub expenses_by_category: Vec<CategoryAmount>,
    /// Present only for the all-properties scope
    pub by_property: Option<BTreeMap<PropertyId, PropertyTotals>>,
}

impl FinancialReport {
    pub fn generate(transactions: &[Transaction], properties: &[Property], filter: &ReportFilter) -> Self {
        let selected: Vec<&Transaction> = filter.apply(transactions).collect();

        let by_property = filter
            .property
            .is_all()
            .then(|| FinancialAggregator::property_breakdown(selected.iter().copied(), properties));

        Self {
            filter: filter.clone(),
            summary: FinancialAggregator::summarize(selected.iter().copied()),
            monthly: FinancialAggregator::monthly_series(selected.iter().copied()),
            income_by_category: FinancialAggregator::category_breakdown(
                selected.iter().copied(),
                TransactionType::Income,
            ),
            expenses_by_category: FinancialAggregator::category_breakdown(
                selected.iter().copied(),
                TransactionType::Expense,
            ),
            by_property,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.transaction_count == 0
    }
}
