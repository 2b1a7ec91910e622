use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::error::BettingError;
use crate::helpers::{check_program_owner, check_signer, check_vault, check_writable, relocate_lamports};
use crate::state::{Bet, Race};

/// Pay a winning bet its share of the pool out of the vault.
///
/// Accounts:
/// 0. `[]`                 Race
/// 1. `[writable]`         Bet
/// 2. `[writable, signer]` Bettor recorded on the bet
/// 3. `[writable]`         Vault PDA `["vault", race]`
pub fn process_claim_winnings(accounts: &[AccountInfo]) -> ProgramResult {
    let [race_ai, bet_ai, bettor_ai, vault_ai, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(bettor_ai)?;
    check_writable(bet_ai)?;
    check_writable(bettor_ai)?;
    check_writable(vault_ai)?;
    check_program_owner(race_ai)?;
    check_program_owner(bet_ai)?;
    check_program_owner(vault_ai)?;

    let payout = {
        let race_raw = race_ai.try_borrow_data()?;
        let race = Race::load(&race_raw)?;
        check_vault(vault_ai, race_ai.key(), race.vault_bump())?;

        let mut bet_raw = bet_ai.try_borrow_mut_data()?;
        let bet = Bet::load_mut(&mut bet_raw)?;
        if bet.bettor() != bettor_ai.key() {
            return Err(BettingError::Unauthorized.into());
        }
        if bet.race() != race_ai.key() {
            return Err(BettingError::BetRaceMismatch.into());
        }

        let payout = race.payout(bet)?;
        bet.mark_claimed()?;
        payout
    };

    relocate_lamports(vault_ai, bettor_ai, payout)?;

    log!("claim_winnings: paid {} lamports", payout);
    Ok(())
}
