use pinocchio::program_error::ProgramError;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RaceStatus {
    /// Created, taking bets.
    Upcoming = 0,
    /// Running on the livestream. Bets are still accepted.
    Live = 1,
    /// Winner declared, claims open.
    Finished = 2,
}

impl RaceStatus {
    pub const fn accepts_bets(self) -> bool {
        matches!(self, RaceStatus::Upcoming | RaceStatus::Live)
    }
}

impl TryFrom<u8> for RaceStatus {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RaceStatus::Upcoming),
            1 => Ok(RaceStatus::Live),
            2 => Ok(RaceStatus::Finished),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}
