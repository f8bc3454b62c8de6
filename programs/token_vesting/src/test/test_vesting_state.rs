use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::state::{ClaimRequest, FunderNonce, GrantTerms, VestingState, VestingStatus};

const T: i64 = 1_717_804_800;

fn terms(amount: u64, vesting_end: i64) -> GrantTerms {
    GrantTerms {
        funder: Pubkey::new_unique(),
        recipient: Pubkey::new_unique(),
        vesting_state: Pubkey::new_unique(),
        token_mint: Pubkey::new_unique(),
        token_vault: Pubkey::new_unique(),
        amount,
        vesting_end,
    }
}

fn pending_grant(amount: u64, vesting_end: i64) -> VestingState {
    VestingState::new(&terms(amount, vesting_end), T, 1, 254).unwrap()
}

/// Claims into a fresh token account owned by `owner`, with a fully funded vault.
fn claim_as(
    grant: &mut VestingState,
    owner: Pubkey,
    now: i64,
) -> Result<u64, VestingError> {
    let vault_amount = grant.amount;
    grant.claim(&ClaimRequest {
        destination: Pubkey::new_unique(),
        destination_owner: owner,
        vault_amount,
        now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grant_is_pending() {
        let terms = terms(500, T + 60);
        let grant = VestingState::new(&terms, T, 7, 253).unwrap();

        assert_eq!(grant.status, VestingStatus::Pending);
        assert!(grant.is_initialized());
        assert_eq!(grant.funder, terms.funder);
        assert_eq!(grant.recipient, terms.recipient);
        assert_eq!(grant.token_mint, terms.token_mint);
        assert_eq!(grant.token_vault, terms.token_vault);
        assert_eq!(grant.amount, 500);
        assert_eq!(grant.vesting_start, T);
        assert_eq!(grant.vesting_end, T + 60);
        assert_eq!(grant.nonce, 7);
        assert_eq!(grant.bump, 253);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = VestingState::new(&terms(0, T + 60), T, 1, 255).unwrap_err();
        assert!(matches!(err, VestingError::InvalidAmount));
    }

    #[test]
    fn test_deadline_must_be_in_the_future() {
        let err = VestingState::new(&terms(1, T), T, 1, 255).unwrap_err();
        assert!(matches!(err, VestingError::InvalidDeadline));

        let err = VestingState::new(&terms(1, T - 1), T, 1, 255).unwrap_err();
        assert!(matches!(err, VestingError::InvalidDeadline));

        assert!(VestingState::new(&terms(1, T + 1), T, 1, 255).is_ok());
    }

    #[test]
    fn test_default_recipient_rejected() {
        let mut terms = terms(10, T + 60);
        terms.recipient = Pubkey::default();

        let err = VestingState::new(&terms, T, 1, 255).unwrap_err();
        assert!(matches!(err, VestingError::InvalidRecipient));
    }

    #[test]
    fn test_claim_before_maturity() {
        let mut grant = pending_grant(1_000, T + 60);
        let recipient = grant.recipient;

        let err = claim_as(&mut grant, recipient, T + 30).unwrap_err();
        assert!(matches!(err, VestingError::NotMatured));
        assert_eq!(grant.status, VestingStatus::Pending);
    }

    #[test]
    fn test_maturity_boundary_is_inclusive() {
        let mut grant = pending_grant(1_000, T + 60);
        let recipient = grant.recipient;

        assert!(!grant.is_matured(T + 59));
        let err = claim_as(&mut grant, recipient, T + 59).unwrap_err();
        assert!(matches!(err, VestingError::NotMatured));

        assert!(grant.is_matured(T + 60));
        assert_eq!(claim_as(&mut grant, recipient, T + 60).unwrap(), 1_000);
        assert_eq!(grant.status, VestingStatus::Settled);
        assert!(!grant.is_initialized());
    }

    #[test]
    fn test_second_claim_is_already_settled() {
        let mut grant = pending_grant(42, T + 60);
        let recipient = grant.recipient;

        assert_eq!(claim_as(&mut grant, recipient, T + 61).unwrap(), 42);

        // A settled grant reports AlreadySettled whatever the retry looks like
        let err = claim_as(&mut grant, recipient, T + 62).unwrap_err();
        assert!(matches!(err, VestingError::AlreadySettled));

        let err = claim_as(&mut grant, Pubkey::new_unique(), T + 62).unwrap_err();
        assert!(matches!(err, VestingError::AlreadySettled));

        let err = claim_as(&mut grant, recipient, T).unwrap_err();
        assert!(matches!(err, VestingError::AlreadySettled));

        assert_eq!(grant.status, VestingStatus::Settled);
    }

    #[test]
    fn test_recipient_mismatch_keeps_grant_pending() {
        let mut grant = pending_grant(42, T + 60);

        let err = claim_as(&mut grant, Pubkey::new_unique(), T + 61).unwrap_err();
        assert!(matches!(err, VestingError::RecipientMismatch));
        assert_eq!(grant.status, VestingStatus::Pending);

        // Wrong account is reported before the time gate
        let funder = grant.funder;
        let err = claim_as(&mut grant, funder, T).unwrap_err();
        assert!(matches!(err, VestingError::RecipientMismatch));
    }

    #[test]
    fn test_terms_are_not_changed_by_claim() {
        let mut grant = pending_grant(9, T + 60);
        let before = grant.clone();
        let recipient = grant.recipient;

        claim_as(&mut grant, recipient, T + 100).unwrap();

        assert_eq!(grant.funder, before.funder);
        assert_eq!(grant.recipient, before.recipient);
        assert_eq!(grant.token_vault, before.token_vault);
        assert_eq!(grant.amount, before.amount);
        assert_eq!(grant.vesting_start, before.vesting_start);
        assert_eq!(grant.vesting_end, before.vesting_end);
    }

    #[test]
    fn test_program_owned_recipient_rejected() {
        let mut own_state = terms(10, T + 60);
        own_state.recipient = own_state.vesting_state;
        let err = VestingState::new(&own_state, T, 1, 255).unwrap_err();
        assert!(matches!(err, VestingError::InvalidRecipient));

        let mut own_vault = terms(10, T + 60);
        own_vault.recipient = own_vault.token_vault;
        let err = VestingState::new(&own_vault, T, 1, 255).unwrap_err();
        assert!(matches!(err, VestingError::InvalidRecipient));
    }

    #[test]
    fn test_claim_into_vault_rejected() {
        let mut grant = pending_grant(77, T + 60);
        let request = ClaimRequest {
            destination: grant.token_vault,
            destination_owner: grant.recipient,
            vault_amount: 77,
            now: T + 61,
        };

        let err = grant.claim(&request).unwrap_err();
        assert!(matches!(err, VestingError::RecipientMismatch));
        assert_eq!(grant.status, VestingStatus::Pending);
    }

    #[test]
    fn test_claim_against_short_vault() {
        let mut grant = pending_grant(1_000, T + 60);
        let request = ClaimRequest {
            destination: Pubkey::new_unique(),
            destination_owner: grant.recipient,
            vault_amount: 999,
            now: T + 61,
        };

        let err = grant.claim(&request).unwrap_err();
        assert!(matches!(err, VestingError::InsufficientVaultBalance));
        assert_eq!(grant.status, VestingStatus::Pending);

        // Time gate is reported before the vault balance
        let early = ClaimRequest { now: T, ..request };
        assert!(matches!(
            grant.claim(&early).unwrap_err(),
            VestingError::NotMatured
        ));

        let funded = ClaimRequest { vault_amount: 1_000, ..request };
        assert_eq!(grant.claim(&funded).unwrap(), 1_000);
    }

    #[test]
    fn test_check_funded() {
        let grant = pending_grant(500, T + 60);

        assert!(grant.check_funded(500).is_ok());
        assert!(matches!(
            grant.check_funded(495).unwrap_err(),
            VestingError::FundingMismatch
        ));
        assert!(matches!(
            grant.check_funded(501).unwrap_err(),
            VestingError::FundingMismatch
        ));
    }

    #[test]
    fn test_pda_derivation() {
        let funder = Pubkey::new_unique();

        let (first, _) = VestingState::find_address(&funder, 1);
        let (first_again, _) = VestingState::find_address(&funder, 1);
        let (second, _) = VestingState::find_address(&funder, 2);
        let (other_funder, _) = VestingState::find_address(&Pubkey::new_unique(), 1);

        assert_eq!(first, first_again);
        assert_ne!(first, second);
        assert_ne!(first, other_funder);

        let (vault, _) = VestingState::find_vault_address(&first);
        let (other_vault, _) = VestingState::find_vault_address(&second);
        assert_ne!(vault, first);
        assert_ne!(vault, other_vault);
    }

    #[test]
    fn test_funder_nonce() {
        let nonce = FunderNonce::default();
        assert_eq!(nonce.next().unwrap(), 1);

        let nonce = FunderNonce { nonce: 41 };
        assert_eq!(nonce.next().unwrap(), 42);

        let exhausted = FunderNonce { nonce: u32::MAX };
        assert!(matches!(
            exhausted.next().unwrap_err(),
            VestingError::ArithmeticOverflow
        ));
    }
}
