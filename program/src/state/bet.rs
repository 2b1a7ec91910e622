use core::mem::size_of;

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::BettingError;
use crate::helpers::read_u64;
use crate::state::account_kind::{check_layout, AccountKind};

/// One bettor's stake on one hamster of one race.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct Bet {
    discriminator: u8,
    hamster_index: u8,
    claimed: u8,
    bettor: Pubkey,
    race: Pubkey,
    amount: [u8; 8],
}

impl Bet {
    pub const LEN: usize = size_of::<Bet>();

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        check_layout(data, Self::LEN, AccountKind::Bet)?;
        // SAFETY: length checked above; alignment is 1 and any byte pattern is valid.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        check_layout(data, Self::LEN, AccountKind::Bet)?;
        // SAFETY: as in `load`.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn load_uninitialized_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        check_layout(data, Self::LEN, AccountKind::Uninitialized)?;
        // SAFETY: as in `load`.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn initialize(&mut self, bettor: &Pubkey, race: &Pubkey, hamster_index: u8, amount: u64) {
        self.discriminator = AccountKind::Bet as u8;
        self.hamster_index = hamster_index;
        self.claimed = 0;
        self.bettor = *bettor;
        self.race = *race;
        self.amount = amount.to_le_bytes();
    }

    pub fn bettor(&self) -> &Pubkey {
        &self.bettor
    }

    pub fn race(&self) -> &Pubkey {
        &self.race
    }

    pub fn hamster_index(&self) -> u8 {
        self.hamster_index
    }

    pub fn amount(&self) -> u64 {
        read_u64(&self.amount)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed != 0
    }

    pub fn mark_claimed(&mut self) -> Result<(), ProgramError> {
        if self.is_claimed() {
            return Err(BettingError::AlreadyClaimed.into());
        }
        self.claimed = 1;
        Ok(())
    }
}
