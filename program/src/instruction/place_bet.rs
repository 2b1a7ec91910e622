use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;

use crate::error::BettingError;
use crate::helpers::{
    check_program_owner, check_signer, check_system_program, check_vault, check_writable,
    create_program_account,
};
use crate::instruction::payload::{finish, take_u64, take_u8};
use crate::state::{Bet, Race};

/// `hamster_index u8 | amount u64`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceBetData {
    pub hamster_index: u8,
    pub amount: u64,
}

impl PlaceBetData {
    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        let mut data = payload;
        let hamster_index = take_u8(&mut data)?;
        let amount = take_u64(&mut data)?;
        finish(data)?;
        Ok(Self {
            hamster_index,
            amount,
        })
    }
}

/// Stake lamports on a hamster.
///
/// Accounts:
/// 0. `[writable]`         Race
/// 1. `[writable, signer]` Bet account (new keypair)
/// 2. `[writable, signer]` Bettor, funds the stake and the bet account rent
/// 3. `[writable]`         Vault PDA `["vault", race]`
/// 4. `[]`                 System program
pub fn process_place_bet(accounts: &[AccountInfo], data: PlaceBetData) -> ProgramResult {
    let [race_ai, bet_ai, bettor_ai, vault_ai, system_program_ai, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(bet_ai)?;
    check_signer(bettor_ai)?;
    check_writable(race_ai)?;
    check_writable(bet_ai)?;
    check_writable(bettor_ai)?;
    check_writable(vault_ai)?;
    check_program_owner(race_ai)?;
    check_system_program(system_program_ai)?;

    // Validate against the race before any lamports move; the borrow must end before CPI.
    let vault_bump = {
        let raw = race_ai.try_borrow_data()?;
        let race = Race::load(&raw)?;
        race.check_accepts_bet(data.hamster_index)?;
        race.vault_bump()
    };
    if data.amount == 0 {
        return Err(BettingError::InvalidBetAmount.into());
    }
    check_vault(vault_ai, race_ai.key(), vault_bump)?;

    Transfer {
        from: bettor_ai,
        to: vault_ai,
        lamports: data.amount,
    }
    .invoke()?;

    create_program_account(bettor_ai, bet_ai, Bet::LEN, &[])?;
    Bet::load_uninitialized_mut(&mut bet_ai.try_borrow_mut_data()?)?.initialize(
        bettor_ai.key(),
        race_ai.key(),
        data.hamster_index,
        data.amount,
    );

    Race::load_mut(&mut race_ai.try_borrow_mut_data()?)?
        .record_bet(data.hamster_index, data.amount)?;

    log!(
        "place_bet: {} lamports on hamster {}",
        data.amount,
        data.hamster_index
    );
    Ok(())
}
