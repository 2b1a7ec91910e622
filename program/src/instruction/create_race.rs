use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;

use crate::helpers::{
    check_signer, check_system_program, check_vault, check_writable, create_program_account,
    VAULT_SEED, VAULT_SPACE,
};
use crate::instruction::payload::{finish, take_str, take_u8};
use crate::state::Race;

/// Parsed `CreateRace` payload:
/// `vault_bump u8 | title str | livestream str | count u8 | count × name str`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateRaceData<'a> {
    pub vault_bump: u8,
    pub title: &'a str,
    pub livestream: &'a str,
    hamster_count: u8,
    hamsters: &'a [u8],
}

impl<'a> CreateRaceData<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        let mut data = payload;
        let vault_bump = take_u8(&mut data)?;
        let title = take_str(&mut data)?;
        let livestream = take_str(&mut data)?;
        let hamster_count = take_u8(&mut data)?;

        // Walk the names once so `hamsters()` can hand them out infallibly.
        let hamsters = data;
        for _ in 0..hamster_count {
            take_str(&mut data)?;
        }
        finish(data)?;

        Ok(Self {
            vault_bump,
            title,
            livestream,
            hamster_count,
            hamsters,
        })
    }

    pub fn hamsters(&self) -> HamsterNames<'a> {
        HamsterNames {
            remaining: self.hamsters,
            left: self.hamster_count,
        }
    }
}

/// Iterator over the length-prefixed hamster names of a validated payload.
pub struct HamsterNames<'a> {
    remaining: &'a [u8],
    left: u8,
}

impl<'a> Iterator for HamsterNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        take_str(&mut self.remaining).ok()
    }
}

/// Create a race and its vault.
///
/// Accounts:
/// 0. `[writable, signer]` Race account (new keypair)
/// 1. `[writable, signer]` Admin, pays rent for race and vault
/// 2. `[writable]`         Vault PDA `["vault", race]`
/// 3. `[]`                 System program
pub fn process_create_race(accounts: &[AccountInfo], data: CreateRaceData) -> ProgramResult {
    let [race_ai, admin_ai, vault_ai, system_program_ai, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(race_ai)?;
    check_signer(admin_ai)?;
    check_writable(race_ai)?;
    check_writable(admin_ai)?;
    check_writable(vault_ai)?;
    check_system_program(system_program_ai)?;
    check_vault(vault_ai, race_ai.key(), data.vault_bump)?;

    create_program_account(admin_ai, race_ai, Race::LEN, &[])?;

    let bump_seed = [data.vault_bump];
    let vault_seeds = [
        Seed::from(VAULT_SEED),
        Seed::from(&race_ai.key()[..]),
        Seed::from(&bump_seed[..]),
    ];
    create_program_account(admin_ai, vault_ai, VAULT_SPACE, &vault_seeds)?;

    let mut raw = race_ai.try_borrow_mut_data()?;
    let race = Race::load_uninitialized_mut(&mut raw)?;
    race.initialize(
        admin_ai.key(),
        data.vault_bump,
        data.title,
        data.livestream,
        data.hamsters(),
    )?;

    log!("create_race: {} hamsters", race.hamster_count() as u64);
    Ok(())
}
