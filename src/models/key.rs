use chrono::NaiveDate;
use std::fmt;

/// Grouping identity shared by the aggregator and the pivot.
///
/// Ordering is by date first, then user, which is also the order of the
/// output rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AggregateKey {
    pub date: NaiveDate,
    pub user: String,
}

impl AggregateKey {
    pub fn new(date: NaiveDate, user: &str) -> Self {
        Self {
            date,
            user: user.to_string(),
        }
    }
}

impl fmt::Display for AggregateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.date.format("%Y-%m-%d"), self.user)
    }
}
