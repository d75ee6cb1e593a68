use std::fmt;

/// Category assigned to a transaction by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Generic,
    TokenProgram,
    OrderBookProgram,
    StakeProgram,
    VoteProgram,
    Other,
}

impl Category {
    /// All categories, in report order
    pub const ALL: [Category; 6] = [
        Category::Generic,
        Category::TokenProgram,
        Category::OrderBookProgram,
        Category::StakeProgram,
        Category::VoteProgram,
        Category::Other,
    ];

    /// Stable machine label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::TokenProgram => "token-program",
            Category::OrderBookProgram => "order-book-program",
            Category::StakeProgram => "stake-program",
            Category::VoteProgram => "vote-program",
            Category::Other => "other",
        }
    }

    /// Name shown in the report message
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Generic => "Solana",
            Category::TokenProgram => "SPL Token",
            Category::OrderBookProgram => "Serum",
            Category::StakeProgram => "Stake",
            Category::VoteProgram => "Vote",
            Category::Other => "Other",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Generic => 0,
            Category::TokenProgram => 1,
            Category::OrderBookProgram => 2,
            Category::StakeProgram => 3,
            Category::VoteProgram => 4,
            Category::Other => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
