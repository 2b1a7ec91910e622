use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

use crate::helpers::{check_program_owner, check_signer, check_writable};
use crate::state::Race;

/// Move an upcoming race to live.
///
/// Accounts:
/// 0. `[writable]` Race
/// 1. `[signer]`   Race admin
pub fn process_stop_betting(accounts: &[AccountInfo]) -> ProgramResult {
    let [race_ai, admin_ai, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(admin_ai)?;
    check_writable(race_ai)?;
    check_program_owner(race_ai)?;

    let mut raw = race_ai.try_borrow_mut_data()?;
    let race = Race::load_mut(&mut raw)?;
    race.check_admin(admin_ai.key())?;
    race.stop_betting()
}
