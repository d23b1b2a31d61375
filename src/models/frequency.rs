use rust_decimal::Decimal;

/// How often the customer's budget renews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Single,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single Amount",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Parse a frequency token. Unrecognized or empty input falls back
    /// to `Single`, matching the forgiving form boundary.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Self::Daily,
            "weekly" | "week" => Self::Weekly,
            "monthly" | "month" => Self::Monthly,
            "yearly" | "year" | "annual" => Self::Yearly,
            _ => Self::Single,
        }
    }

    pub fn all() -> &'static [Frequency] {
        &[
            Self::Single,
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
            Self::Yearly,
        ]
    }

    /// Scale a raw budget to a common monthly basis: daily budgets assume
    /// a 30-day month, weekly budgets 4 weeks, yearly budgets one twelfth.
    pub fn monthly_amount(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Single | Self::Monthly => amount,
            Self::Daily => amount * Decimal::from(30),
            Self::Weekly => amount * Decimal::from(4),
            Self::Yearly => amount / Decimal::from(12),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
