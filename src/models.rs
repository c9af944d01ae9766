/// Shape of a single line inside a transaction block, decided by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Amount,
    Date,
    Text,
}

impl Candidate {
    pub fn classify(line: &str) -> Self {
        if line.contains('$') {
            Self::Amount
        } else if line.contains('/') {
            Self::Date
        } else {
            Self::Text
        }
    }
}

/// YNAB's import columns, in the order `NormalizedRecord::fields` returns.
pub const CSV_HEADER: [&str; 4] = ["Date", "Payee", "Memo", "Amount"];

/// One transaction in YNAB column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub date: String,
    pub payee: String,
    pub memo: String,
    pub amount: String,
}

impl NormalizedRecord {
    pub fn fields(&self) -> [&str; 4] {
        [&self.date, &self.payee, &self.memo, &self.amount]
    }

    pub fn is_inflow(&self) -> bool {
        !self.amount.starts_with('-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_content() {
        assert_eq!(Candidate::classify("-$4.99"), Candidate::Amount);
        assert_eq!(Candidate::classify("03/14/2024"), Candidate::Date);
        assert_eq!(Candidate::classify("Coffee Shop"), Candidate::Text);
    }

    #[test]
    fn test_amount_wins_over_date_shape() {
        assert_eq!(Candidate::classify("$10 / month"), Candidate::Amount);
    }

    #[test]
    fn test_is_inflow() {
        let mut rec = NormalizedRecord {
            date: "03/14/2024".into(),
            payee: "Payment".into(),
            memo: "Thank you".into(),
            amount: "$50.00".into(),
        };
        assert!(rec.is_inflow());
        rec.amount = "-$50.00".into();
        assert!(!rec.is_inflow());
    }
}
