use chrono::{DateTime, Utc};

use super::category::Category;
use crate::utils::helper::percentage;

/// Per-category transaction counts for one slot
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryTally {
    counts: [usize; 6],
}

impl CategoryTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one transaction in `category`
    pub fn record(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Sum of all category counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of `category` in the tally, 0.0 when the tally is empty
    pub fn percentage(&self, category: Category) -> f64 {
        percentage(self.count(category), self.total())
    }

    /// Categories with their counts, in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.count(*c)))
    }
}

/// Result of one report cycle
#[derive(Debug, Clone)]
pub struct SlotReport {
    pub timestamp: DateTime<Utc>,
    pub slot: u64,
    pub tally: CategoryTally,
    /// Signatures listed in the slot
    pub signatures: usize,
    /// Transactions that executed with an error
    pub failed: usize,
    /// Transactions whose details could not be fetched
    pub unavailable: usize,
}

impl SlotReport {
    /// Create a report with no transactions counted yet
    pub fn new(slot: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            slot,
            tally: CategoryTally::new(),
            signatures: 0,
            failed: 0,
            unavailable: 0,
        }
    }

    /// Successful transactions counted in the tally
    pub fn total(&self) -> usize {
        self.tally.total()
    }

    /// Plain-text message sent to the chat
    pub fn format_message(&self) -> String {
        let total = self.total();
        let mut lines = Vec::with_capacity(Category::ALL.len() + 1);

        lines.push(format!("Transactions processed in slot {}: {}", self.slot, total));
        for (category, count) in self.tally.iter() {
            lines.push(format!(
                "{}: {} ({:.2}%)",
                category.display_name(),
                count,
                percentage(count, total)
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(counts: &[(Category, usize)]) -> CategoryTally {
        let mut tally = CategoryTally::new();
        for (category, n) in counts {
            for _ in 0..*n {
                tally.record(*category);
            }
        }
        tally
    }

    #[test]
    fn total_is_sum_of_counts() {
        let tally = tally_of(&[
            (Category::Generic, 4),
            (Category::VoteProgram, 10),
            (Category::TokenProgram, 2),
        ]);
        assert_eq!(tally.total(), 16);
        assert_eq!(tally.count(Category::VoteProgram), 10);
        assert_eq!(tally.count(Category::StakeProgram), 0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let samples: &[&[(Category, usize)]] = &[
            &[(Category::Generic, 1), (Category::TokenProgram, 1), (Category::StakeProgram, 1)],
            &[(Category::VoteProgram, 997), (Category::Generic, 2), (Category::OrderBookProgram, 1)],
            &[(Category::Other, 7)],
        ];

        for counts in samples {
            let tally = tally_of(counts);
            let sum: f64 = Category::ALL.iter().map(|c| tally.percentage(*c)).sum();
            assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
        }
    }

    #[test]
    fn empty_tally_reports_zero_percent() {
        let report = SlotReport::new(42);
        assert!(report.tally.is_empty());

        let message = report.format_message();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[0], "Transactions processed in slot 42: 0");
        assert_eq!(lines.len(), 7);
        for line in &lines[1..] {
            assert!(line.ends_with(": 0 (0.00%)"), "unexpected line {:?}", line);
        }
    }

    #[test]
    fn message_lists_every_category_in_order() {
        let mut report = SlotReport::new(7);
        report.tally = tally_of(&[
            (Category::Generic, 1),
            (Category::TokenProgram, 1),
            (Category::StakeProgram, 1),
        ]);

        assert_eq!(
            report.format_message(),
            "Transactions processed in slot 7: 3\n\
             Solana: 1 (33.33%)\n\
             SPL Token: 1 (33.33%)\n\
             Serum: 0 (0.00%)\n\
             Stake: 1 (33.33%)\n\
             Vote: 0 (0.00%)\n\
             Other: 0 (0.00%)"
        );
    }
}
