use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{create_program_address, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::CreateAccount;

use crate::error::BettingError;
use crate::helpers::constant::VAULT_SEED;
use crate::ID;

#[inline]
pub fn check_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline]
pub fn check_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

#[inline]
pub fn check_program_owner(account: &AccountInfo) -> ProgramResult {
    if !account.is_owned_by(&ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    Ok(())
}

pub fn check_system_program(account: &AccountInfo) -> ProgramResult {
    if account.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Re-derive `["vault", race, bump]` and compare it with the supplied account.
///
/// Any bump yielding an off-curve address is accepted, not only the canonical
/// one: the bump chosen at `create_race` is stored on the race and every later
/// check uses that stored value.
pub fn check_vault(vault: &AccountInfo, race_key: &Pubkey, bump: u8) -> ProgramResult {
    let bump_seed = [bump];
    let expected = create_program_address(&[VAULT_SEED, &race_key[..], &bump_seed], &ID)
        .map_err(|_| BettingError::InvalidVault)?;
    if vault.key() != &expected {
        return Err(BettingError::InvalidVault.into());
    }
    Ok(())
}

/// Fund and assign a fresh program-owned account of `space` bytes.
///
/// `signer_seeds` is empty for keypair accounts (the new account signs the
/// transaction itself) and carries the PDA seeds otherwise.
pub fn create_program_account(
    payer: &AccountInfo,
    new_account: &AccountInfo,
    space: usize,
    signer_seeds: &[Seed],
) -> ProgramResult {
    let lamports = Rent::get()?.minimum_balance(space);
    let create = CreateAccount {
        from: payer,
        to: new_account,
        lamports,
        space: space as u64,
        owner: &ID,
    };
    if signer_seeds.is_empty() {
        create.invoke()
    } else {
        create.invoke_signed(&[Signer::from(signer_seeds)])
    }
}

// Move lamports between two accounts (checked)
pub fn relocate_lamports(
    source_account_info: &AccountInfo,
    destination_account_info: &AccountInfo,
    lamports: u64,
) -> ProgramResult {
    {
        let mut source_lamports = source_account_info.try_borrow_mut_lamports()?;
        *source_lamports = source_lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
    }
    {
        let mut destination_lamports = destination_account_info.try_borrow_mut_lamports()?;
        *destination_lamports = destination_lamports
            .checked_add(lamports)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }
    Ok(())
}

#[inline]
pub(crate) fn read_u64(bytes: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*bytes)
}
