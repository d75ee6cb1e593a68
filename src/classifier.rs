//! Transaction classification by invoked program

use crate::models::{Category, TransactionSummary};

pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
pub const ORDER_BOOK_PROGRAM_ID: &str = "DESVgJVGajEgKGXhb6XmqDHGz3VjdgP7rEVESBgxmroY";
pub const STAKE_PROGRAM_ID: &str = "Stake11111111111111111111111111111111111111";
pub const VOTE_PROGRAM_ID: &str = "Vote111111111111111111111111111111111111111";

/// Programs with a dedicated category
pub const KNOWN_PROGRAMS: [(&str, Category); 4] = [
    (TOKEN_PROGRAM_ID, Category::TokenProgram),
    (ORDER_BOOK_PROGRAM_ID, Category::OrderBookProgram),
    (STAKE_PROGRAM_ID, Category::StakeProgram),
    (VOTE_PROGRAM_ID, Category::VoteProgram),
];

fn known_category(program_id: &str) -> Option<Category> {
    KNOWN_PROGRAMS
        .iter()
        .find(|(id, _)| *id == program_id)
        .map(|(_, category)| *category)
}

/// Classify by the first instruction whose program is known.
///
/// Instructions are scanned in order and the first known program decides the
/// category, even when later instructions invoke other known programs. A
/// transaction with no known program is [`Category::Generic`].
pub fn classify<I, S>(program_ids: I) -> Category
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    program_ids
        .into_iter()
        .find_map(|id| known_category(id.as_ref()))
        .unwrap_or(Category::Generic)
}

pub fn classify_transaction(tx: &TransactionSummary) -> Category {
    classify(&tx.program_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";
    const COMPUTE_BUDGET_ID: &str = "ComputeBudget111111111111111111111111111111";

    #[test]
    fn empty_instruction_list_is_generic() {
        assert_eq!(classify(Vec::<String>::new()), Category::Generic);
    }

    #[test]
    fn unknown_programs_are_generic() {
        assert_eq!(
            classify([SYSTEM_PROGRAM_ID, COMPUTE_BUDGET_ID]),
            Category::Generic
        );
    }

    #[test]
    fn each_known_program_maps_to_its_category() {
        for (id, category) in KNOWN_PROGRAMS {
            assert_eq!(classify([id]), category);
        }
    }

    #[test]
    fn token_program_wins_when_first_known() {
        let ids = [
            COMPUTE_BUDGET_ID,
            TOKEN_PROGRAM_ID,
            VOTE_PROGRAM_ID,
            STAKE_PROGRAM_ID,
        ];
        assert_eq!(classify(ids), Category::TokenProgram);
    }

    #[test]
    fn first_match_wins_over_later_matches() {
        assert_eq!(
            classify([STAKE_PROGRAM_ID, TOKEN_PROGRAM_ID]),
            Category::StakeProgram
        );
    }

    #[test]
    fn match_is_exact() {
        let lowercase = TOKEN_PROGRAM_ID.to_lowercase();
        let prefixed = format!(" {}", TOKEN_PROGRAM_ID);
        assert_eq!(classify([lowercase, prefixed]), Category::Generic);
    }

    #[test]
    fn classifies_transaction_summary() {
        let tx = TransactionSummary::new(
            "sig",
            true,
            vec![SYSTEM_PROGRAM_ID.to_string(), VOTE_PROGRAM_ID.to_string()],
        );
        assert_eq!(classify_transaction(&tx), Category::VoteProgram);
    }
}
