// src/mock_data.rs
//
// Fixed demo data for the dashboard sections. The backend owns the real
// figures; these rows exist so the terminal views render without it.
// Derived figures (values, gains, totals) are computed from the rows.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct StockHolding {
    pub ticker: &'static str,
    pub company: &'static str,
    pub shares: u32,
    pub avg_cost: f64,
    pub current_price: f64,
    pub sector: &'static str,
}

impl StockHolding {
    pub fn value(&self) -> f64 {
        f64::from(self.shares) * self.current_price
    }

    pub fn gain(&self) -> f64 {
        f64::from(self.shares) * (self.current_price - self.avg_cost)
    }
}

#[derive(Debug, Clone)]
pub struct FundHolding {
    pub name: &'static str,
    pub ticker: &'static str,
    pub units: u32,
    pub purchase_nav: f64,
    pub current_nav: f64,
    pub category: &'static str,
}

impl FundHolding {
    pub fn value(&self) -> f64 {
        f64::from(self.units) * self.current_nav
    }

    pub fn gain(&self) -> f64 {
        f64::from(self.units) * (self.current_nav - self.purchase_nav)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CashPosition {
    pub savings: f64,
    pub checking: f64,
    pub emergency_fund: f64,
}

impl CashPosition {
    pub fn total(&self) -> f64 {
        self.savings + self.checking + self.emergency_fund
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Debit,
    Credit,
    Investment,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
            TransactionKind::Investment => "investment",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub date: NaiveDate,
    pub merchant: &'static str,
    pub category: &'static str,
    /// Signed amount: negative for money out.
    pub amount: f64,
    pub kind: TransactionKind,
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: &'static str,
    pub age: u8,
    pub risk_tolerance: &'static str,
    pub investment_horizon: &'static str,
    pub monthly_salary: f64,
    pub monthly_budget: f64,
    pub goals: [&'static str; 4],
}

pub fn stock_holdings() -> Vec<StockHolding> {
    vec![
        StockHolding {
            ticker: "AAPL",
            company: "Apple Inc.",
            shares: 50,
            avg_cost: 150.25,
            current_price: 189.50,
            sector: "Technology",
        },
        StockHolding {
            ticker: "MSFT",
            company: "Microsoft Corp.",
            shares: 30,
            avg_cost: 320.50,
            current_price: 378.85,
            sector: "Technology",
        },
        StockHolding {
            ticker: "GOOGL",
            company: "Alphabet Inc.",
            shares: 25,
            avg_cost: 125.75,
            current_price: 142.65,
            sector: "Technology",
        },
        StockHolding {
            ticker: "JNJ",
            company: "Johnson & Johnson",
            shares: 40,
            avg_cost: 155.00,
            current_price: 158.75,
            sector: "Healthcare",
        },
        StockHolding {
            ticker: "V",
            company: "Visa Inc.",
            shares: 20,
            avg_cost: 245.30,
            current_price: 268.90,
            sector: "Financial Services",
        },
        StockHolding {
            ticker: "TSLA",
            company: "Tesla Inc.",
            shares: 15,
            avg_cost: 245.60,
            current_price: 242.84,
            sector: "Automotive",
        },
    ]
}

pub fn fund_holdings() -> Vec<FundHolding> {
    vec![
        FundHolding {
            name: "Vanguard Total Stock Market",
            ticker: "VTSAX",
            units: 180,
            purchase_nav: 110.50,
            current_nav: 123.45,
            category: "Large Cap Blend",
        },
        FundHolding {
            name: "Fidelity 500 Index Fund",
            ticker: "FXAIX",
            units: 120,
            purchase_nav: 165.25,
            current_nav: 178.92,
            category: "Large Cap Blend",
        },
        FundHolding {
            name: "Vanguard Emerging Markets",
            ticker: "VEIEX",
            units: 95,
            purchase_nav: 32.80,
            current_nav: 34.15,
            category: "Diversified Emerging Markets",
        },
    ]
}

pub fn cash_position() -> CashPosition {
    CashPosition {
        savings: 25_000.0,
        checking: 5_500.0,
        emergency_fund: 30_000.0,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    // all literals below are valid calendar dates
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn recent_transactions() -> Vec<Transaction> {
    use TransactionKind::*;
    vec![
        Transaction {
            date: day(2025, 11, 20),
            merchant: "Whole Foods",
            category: "Groceries",
            amount: -125.50,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 19),
            merchant: "Shell Gas",
            category: "Transportation",
            amount: -52.30,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 18),
            merchant: "Netflix",
            category: "Entertainment",
            amount: -15.99,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 17),
            merchant: "Chipotle",
            category: "Dining",
            amount: -23.75,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 16),
            merchant: "Amazon",
            category: "Shopping",
            amount: -89.99,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 15),
            merchant: "Direct Deposit",
            category: "Income",
            amount: 8_500.00,
            kind: Credit,
        },
        Transaction {
            date: day(2025, 11, 14),
            merchant: "Starbucks",
            category: "Dining",
            amount: -12.50,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 13),
            merchant: "Electric Company",
            category: "Utilities",
            amount: -145.80,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 12),
            merchant: "Target",
            category: "Shopping",
            amount: -67.45,
            kind: Debit,
        },
        Transaction {
            date: day(2025, 11, 11),
            merchant: "Stock Purchase - AAPL",
            category: "Investment",
            amount: -1_500.00,
            kind: Investment,
        },
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Alex Thompson",
        age: 34,
        risk_tolerance: "moderate",
        investment_horizon: "long-term",
        monthly_salary: 8_500.0,
        monthly_budget: 5_200.0,
        goals: [
            "Build emergency fund of $50,000 by end of 2025",
            "Save for down payment on house ($150,000) in 3 years",
            "Grow retirement portfolio to $500,000 by age 50",
            "Generate passive income of $2,000/month",
        ],
    }
}

/// Market value of all holdings, cash included.
pub fn portfolio_total(
    stocks: &[StockHolding],
    funds: &[FundHolding],
    cash: &CashPosition,
) -> f64 {
    let stock_value: f64 = stocks.iter().map(StockHolding::value).sum();
    let fund_value: f64 = funds.iter().map(FundHolding::value).sum();
    stock_value + fund_value + cash.total()
}

/// Unrealized gain across all holdings.
pub fn total_gain(stocks: &[StockHolding], funds: &[FundHolding]) -> f64 {
    let stock_gain: f64 = stocks.iter().map(StockHolding::gain).sum();
    let fund_gain: f64 = funds.iter().map(FundHolding::gain).sum();
    stock_gain + fund_gain
}

/// Sum of money going out through debits, as a positive figure.
pub fn monthly_spending(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Debit)
        .map(|t| -t.amount)
        .sum()
}

/// Debit totals grouped by category, largest first.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<(&'static str, f64)> {
    let mut totals: Vec<(&'static str, f64)> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Debit)
    {
        match totals.iter_mut().find(|(cat, _)| *cat == txn.category) {
            Some((_, total)) => *total += -txn.amount,
            None => totals.push((txn.category, -txn.amount)),
        }
    }
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn holding_value_and_gain_derive_from_prices() {
        let aapl = &stock_holdings()[0];
        assert!(close(aapl.value(), 9_475.0));
        assert!(close(aapl.gain(), 1_962.5));

        let tsla = &stock_holdings()[5];
        assert!(tsla.gain() < 0.0);
    }

    #[test]
    fn portfolio_total_includes_cash() {
        let stocks = stock_holdings();
        let funds = fund_holdings();
        let cash = cash_position();
        let total = portfolio_total(&stocks, &funds, &cash);

        assert!(close(cash.total(), 60_500.0));
        assert!(close(total, 39_777.35 + 46_935.65 + 60_500.0));
    }

    #[test]
    fn monthly_spending_sums_debits_only() {
        let txns = recent_transactions();
        // credits and investments are excluded
        assert!(close(monthly_spending(&txns), 533.28));
    }

    #[test]
    fn spending_by_category_is_sorted_descending() {
        let by_category = spending_by_category(&recent_transactions());
        assert_eq!(by_category[0].0, "Shopping");
        assert!(close(by_category[0].1, 157.44));
        for pair in by_category.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert!(!by_category.iter().any(|(cat, _)| *cat == "Income"));
    }

    #[test]
    fn money_formatting_groups_thousands() {
        assert_eq!(format_money(9475.0), "$9,475.00");
        assert_eq!(format_money(-41.4), "-$41.40");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1_234_567.89), "$1,234,567.89");
    }
}
