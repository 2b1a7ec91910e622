use pinocchio::{account_info::AccountInfo, ProgramResult};
use pinocchio_log::log;

/// Program health check: takes no accounts, changes nothing, and succeeds so
/// the caller gets a transaction signature back.
pub fn process_initialize(accounts: &[AccountInfo]) -> ProgramResult {
    log!("Greetings from hamster_betting ({} accounts)", accounts.len() as u64);
    Ok(())
}
