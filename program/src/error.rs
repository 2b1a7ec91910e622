use pinocchio::program_error::ProgramError;

/// Program-specific failures, surfaced to clients as `ProgramError::Custom(code)`.
///
/// Codes start at 6000 so they match the numbering clients already decode for
/// this program's IDL.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BettingError {
    Unauthorized = 6000,
    RaceNotFinished,
    WinnerNotSet,
    AlreadyClaimed,
    NotWinner,
    InvalidHamster,
    MathError,
    Overflow,
    RaceClosed,
    RaceNotUpcoming,
    InvalidRaceData,
    InvalidVault,
    BetRaceMismatch,
    InvalidBetAmount,
    WinnerAlreadySet,
}

impl BettingError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            BettingError::Unauthorized => "You are not authorized to perform this action.",
            BettingError::RaceNotFinished => "Race not finished yet.",
            BettingError::WinnerNotSet => "Winner not set yet.",
            BettingError::AlreadyClaimed => "This bet already claimed.",
            BettingError::NotWinner => "Your hamster did not win.",
            BettingError::InvalidHamster => "Invalid hamster index.",
            BettingError::MathError => "Math error.",
            BettingError::Overflow => "Overflow occurred.",
            BettingError::RaceClosed => "Race is closed for betting.",
            BettingError::RaceNotUpcoming => "Race is not in upcoming state.",
            BettingError::InvalidRaceData => "Race data exceeds limits or is malformed.",
            BettingError::InvalidVault => "Vault address does not match the race.",
            BettingError::BetRaceMismatch => "Bet does not belong to this race.",
            BettingError::InvalidBetAmount => "Bet amount must be greater than zero.",
            BettingError::WinnerAlreadySet => "Race already has a winner.",
        }
    }
}

impl TryFrom<u32> for BettingError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        let err = match code {
            6000 => BettingError::Unauthorized,
            6001 => BettingError::RaceNotFinished,
            6002 => BettingError::WinnerNotSet,
            6003 => BettingError::AlreadyClaimed,
            6004 => BettingError::NotWinner,
            6005 => BettingError::InvalidHamster,
            6006 => BettingError::MathError,
            6007 => BettingError::Overflow,
            6008 => BettingError::RaceClosed,
            6009 => BettingError::RaceNotUpcoming,
            6010 => BettingError::InvalidRaceData,
            6011 => BettingError::InvalidVault,
            6012 => BettingError::BetRaceMismatch,
            6013 => BettingError::InvalidBetAmount,
            6014 => BettingError::WinnerAlreadySet,
            _ => return Err(ProgramError::InvalidArgument),
        };
        Ok(err)
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: BettingError) -> ProgramError {
    pinocchio::msg!(err.message());
    ProgramError::Custom(err.code())
}

impl From<BettingError> for ProgramError {
    fn from(err: BettingError) -> Self {
        to_program_error(err)
    }
}
