use core::mem::size_of;

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::BettingError;
use crate::helpers::{read_u64, MAX_HAMSTERS, MAX_HAMSTER_NAME_LEN, MAX_LIVESTREAM_LEN, MAX_TITLE_LEN};
use crate::state::account_kind::{check_layout, AccountKind};
use crate::state::{Bet, RaceStatus};

// Aliases keep the array lengths tied to the constants while presenting shank's
// derive with plain path types (it cannot parse const or nested array lengths).
type TitleBytes = [u8; MAX_TITLE_LEN];
type LivestreamBytes = [u8; MAX_LIVESTREAM_LEN];
type HamsterNameLens = [u8; MAX_HAMSTERS];
type HamsterNames = [[u8; MAX_HAMSTER_NAME_LEN]; MAX_HAMSTERS];
type HamsterPools = [[u8; 8]; MAX_HAMSTERS];

/// A race and its betting pools.
///
/// Every field is a byte or byte array, so the struct has alignment 1 and can
/// be read in place from account data. Integers are little-endian.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct Race {
    discriminator: u8,
    status: u8,
    has_winner: u8,
    winner_index: u8,
    vault_bump: u8,
    hamster_count: u8,
    title_len: u8,
    livestream_len: u8,
    admin: Pubkey,
    total_pool: [u8; 8],
    title: TitleBytes,
    livestream: LivestreamBytes,
    hamster_name_lens: HamsterNameLens,
    hamsters: HamsterNames,
    hamster_pools: HamsterPools,
}

impl Race {
    pub const LEN: usize = size_of::<Race>();

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        check_layout(data, Self::LEN, AccountKind::Race)?;
        // SAFETY: length checked above; alignment is 1 and any byte pattern is valid.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        check_layout(data, Self::LEN, AccountKind::Race)?;
        // SAFETY: as in `load`.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// View freshly allocated (all-zero) account data as a race to be initialized.
    pub fn load_uninitialized_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        check_layout(data, Self::LEN, AccountKind::Uninitialized)?;
        // SAFETY: as in `load`.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn initialize<'a, I>(
        &mut self,
        admin: &Pubkey,
        vault_bump: u8,
        title: &str,
        livestream: &str,
        hamsters: I,
    ) -> Result<(), ProgramError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if title.len() > MAX_TITLE_LEN || livestream.len() > MAX_LIVESTREAM_LEN {
            return Err(BettingError::InvalidRaceData.into());
        }

        let mut count = 0usize;
        for name in hamsters {
            if count == MAX_HAMSTERS || name.is_empty() || name.len() > MAX_HAMSTER_NAME_LEN {
                return Err(BettingError::InvalidRaceData.into());
            }
            self.hamsters[count] = [0; MAX_HAMSTER_NAME_LEN];
            self.hamsters[count][..name.len()].copy_from_slice(name.as_bytes());
            self.hamster_name_lens[count] = name.len() as u8;
            self.hamster_pools[count] = [0; 8];
            count += 1;
        }
        if count == 0 {
            return Err(BettingError::InvalidRaceData.into());
        }

        self.discriminator = AccountKind::Race as u8;
        self.status = RaceStatus::Upcoming as u8;
        self.has_winner = 0;
        self.winner_index = 0;
        self.vault_bump = vault_bump;
        self.hamster_count = count as u8;
        self.admin = *admin;
        self.total_pool = [0; 8];
        self.title = [0; MAX_TITLE_LEN];
        self.title[..title.len()].copy_from_slice(title.as_bytes());
        self.title_len = title.len() as u8;
        self.livestream = [0; MAX_LIVESTREAM_LEN];
        self.livestream[..livestream.len()].copy_from_slice(livestream.as_bytes());
        self.livestream_len = livestream.len() as u8;
        Ok(())
    }

    pub fn admin(&self) -> &Pubkey {
        &self.admin
    }

    pub fn vault_bump(&self) -> u8 {
        self.vault_bump
    }

    pub fn status(&self) -> Result<RaceStatus, ProgramError> {
        RaceStatus::try_from(self.status)
    }

    pub fn winner(&self) -> Option<u8> {
        (self.has_winner != 0).then_some(self.winner_index)
    }

    pub fn title(&self) -> &str {
        core::str::from_utf8(&self.title[..self.title_len as usize]).unwrap_or_default()
    }

    pub fn livestream(&self) -> &str {
        core::str::from_utf8(&self.livestream[..self.livestream_len as usize]).unwrap_or_default()
    }

    pub fn hamster_count(&self) -> usize {
        self.hamster_count as usize
    }

    pub fn hamster_name(&self, index: usize) -> Option<&str> {
        if index >= self.hamster_count() {
            return None;
        }
        let len = self.hamster_name_lens[index] as usize;
        core::str::from_utf8(&self.hamsters[index][..len]).ok()
    }

    pub fn total_pool(&self) -> u64 {
        read_u64(&self.total_pool)
    }

    pub fn hamster_pool(&self, index: usize) -> Option<u64> {
        (index < self.hamster_count()).then(|| read_u64(&self.hamster_pools[index]))
    }

    pub fn check_admin(&self, key: &Pubkey) -> Result<(), ProgramError> {
        if &self.admin != key {
            return Err(BettingError::Unauthorized.into());
        }
        Ok(())
    }

    /// Upcoming -> Live.
    pub fn stop_betting(&mut self) -> Result<(), ProgramError> {
        if self.status()? != RaceStatus::Upcoming {
            return Err(BettingError::RaceNotUpcoming.into());
        }
        self.status = RaceStatus::Live as u8;
        Ok(())
    }

    /// Checks run before any lamports move for a new bet.
    pub fn check_accepts_bet(&self, hamster_index: u8) -> Result<(), ProgramError> {
        if hamster_index as usize >= self.hamster_count() {
            return Err(BettingError::InvalidHamster.into());
        }
        if !self.status()?.accepts_bets() {
            return Err(BettingError::RaceClosed.into());
        }
        Ok(())
    }

    /// Add a bet to the total and per-hamster pools. Nothing is written on overflow.
    pub fn record_bet(&mut self, hamster_index: u8, amount: u64) -> Result<(), ProgramError> {
        self.check_accepts_bet(hamster_index)?;
        let index = hamster_index as usize;

        let total = self
            .total_pool()
            .checked_add(amount)
            .ok_or(BettingError::Overflow)?;
        let pool = read_u64(&self.hamster_pools[index])
            .checked_add(amount)
            .ok_or(BettingError::Overflow)?;

        self.total_pool = total.to_le_bytes();
        self.hamster_pools[index] = pool.to_le_bytes();
        Ok(())
    }

    pub fn set_winner(&mut self, winner_index: u8) -> Result<(), ProgramError> {
        if winner_index as usize >= self.hamster_count() {
            return Err(BettingError::InvalidHamster.into());
        }
        if self.status()? == RaceStatus::Finished {
            return Err(BettingError::WinnerAlreadySet.into());
        }
        self.status = RaceStatus::Finished as u8;
        self.has_winner = 1;
        self.winner_index = winner_index;
        Ok(())
    }

    /// Share of the whole pool owed to `bet`: `amount * total_pool / winner_pool`, rounded down.
    pub fn payout(&self, bet: &Bet) -> Result<u64, ProgramError> {
        if self.status()? != RaceStatus::Finished {
            return Err(BettingError::RaceNotFinished.into());
        }
        if bet.is_claimed() {
            return Err(BettingError::AlreadyClaimed.into());
        }
        let winner = self.winner().ok_or(BettingError::WinnerNotSet)?;
        if bet.hamster_index() != winner {
            return Err(BettingError::NotWinner.into());
        }

        let winner_pool = self
            .hamster_pool(winner as usize)
            .ok_or(BettingError::InvalidHamster)?;
        if winner_pool == 0 {
            return Err(BettingError::MathError.into());
        }

        let payout = (bet.amount() as u128)
            .checked_mul(self.total_pool() as u128)
            .ok_or(BettingError::Overflow)?
            .checked_div(winner_pool as u128)
            .ok_or(BettingError::MathError)?;
        u64::try_from(payout).map_err(|_| BettingError::Overflow.into())
    }
}
