// Property-based tests for ticket balances

use chrono::Utc;
use proptest::prelude::*;
use shared::{ContractType, TokenInfo};
use tokens::{Address, Erc721Ticket, Token, U256};

fn ticket_from(ids: &[u64]) -> Erc721Ticket {
    Erc721Ticket::new(
        TokenInfo::new(Address::repeat_byte(0x01), "Tickets", "TKT", 1),
        Address::repeat_byte(0x02),
        ids.iter().map(|id| U256::from(*id)).collect(),
        Utc::now(),
        "Ethereum",
        ContractType::Erc721Ticket,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The count never includes zeroed slots
    #[test]
    fn prop_count_excludes_zero(ids in prop::collection::vec(0u64..4, 0..32)) {
        let ticket = ticket_from(&ids);
        let expected = ids.iter().filter(|id| **id != 0).count();
        prop_assert_eq!(ticket.ticket_count(), expected);
        prop_assert_eq!(ticket.has_positive_balance(), expected > 0);
    }

    /// A balance compared against a copy of itself never reports a change
    #[test]
    fn prop_identical_balance_unchanged(ids in prop::collection::vec(any::<u64>(), 0..32)) {
        let ticket = ticket_from(&ids);
        let same: Vec<U256> = ids.iter().map(|id| U256::from(*id)).collect();
        prop_assert!(!ticket.check_balance_change(&same));
    }

    /// Any length difference is a change
    #[test]
    fn prop_length_change_detected(
        ids in prop::collection::vec(any::<u64>(), 0..32),
        extra in any::<u64>(),
    ) {
        let ticket = ticket_from(&ids);
        let mut longer: Vec<U256> = ids.iter().map(|id| U256::from(*id)).collect();
        longer.push(U256::from(extra));
        prop_assert!(ticket.check_balance_change(&longer));

        if !ids.is_empty() {
            let shorter = &longer[1..ids.len()];
            prop_assert!(ticket.check_balance_change(shorter));
        }
    }

    /// Transfers of more than one token are refused
    #[test]
    fn prop_batch_transfer_refused(ids in prop::collection::vec(1u64..1000, 2..10)) {
        let ticket = ticket_from(&ids);
        let token_ids: Vec<U256> = ids.iter().map(|id| U256::from(*id)).collect();
        let result = ticket.transfer_function(Address::ZERO, &token_ids);
        prop_assert!(
            matches!(result, Err(shared::Error::BatchTransferUnsupported(_))),
            "expected batch transfer to be refused"
        );
    }
}
