use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::helpers::{check_program_owner, check_signer, check_writable};
use crate::instruction::payload::{finish, take_u8};
use crate::state::Race;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetWinnerData {
    pub winner_index: u8,
}

impl SetWinnerData {
    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        let mut data = payload;
        let winner_index = take_u8(&mut data)?;
        finish(data)?;
        Ok(Self { winner_index })
    }
}

/// Declare the winning hamster and finish the race.
///
/// Accounts:
/// 0. `[writable]` Race
/// 1. `[signer]`   Race admin
pub fn process_set_winner(accounts: &[AccountInfo], data: SetWinnerData) -> ProgramResult {
    let [race_ai, admin_ai, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(admin_ai)?;
    check_writable(race_ai)?;
    check_program_owner(race_ai)?;

    let mut raw = race_ai.try_borrow_mut_data()?;
    let race = Race::load_mut(&mut raw)?;
    race.check_admin(admin_ai.key())?;
    race.set_winner(data.winner_index)?;

    log!(
        "set_winner: hamster {} of pool {}",
        data.winner_index,
        race.total_pool()
    );
    Ok(())
}
