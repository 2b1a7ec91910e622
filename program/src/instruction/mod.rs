use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod payload;

pub mod initialize;
pub use initialize::*;

pub mod create_race;
pub use create_race::*;

pub mod stop_betting;
pub use stop_betting::*;

pub mod place_bet;
pub use place_bet::*;

pub mod set_winner;
pub use set_winner::*;

pub mod claim_winnings;
pub use claim_winnings::*;

/// Instruction discriminator: the first byte of instruction data.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum BettingInstruction {
    /// Greets the caller. No accounts, no payload.
    Initialize,

    #[account(0, writable, signer, name = "race", desc = "New race account")]
    #[account(1, writable, signer, name = "admin", desc = "Race admin, pays rent")]
    #[account(2, writable, name = "vault", desc = "Vault PDA of the race")]
    #[account(3, name = "system_program", desc = "System program")]
    CreateRace,

    #[account(0, writable, name = "race", desc = "Race to move to live")]
    #[account(1, signer, name = "admin", desc = "Race admin")]
    StopBetting,

    #[account(0, writable, name = "race", desc = "Race being bet on")]
    #[account(1, writable, signer, name = "bet", desc = "New bet account")]
    #[account(2, writable, signer, name = "bettor", desc = "Bettor, pays stake and rent")]
    #[account(3, writable, name = "vault", desc = "Vault PDA of the race")]
    #[account(4, name = "system_program", desc = "System program")]
    PlaceBet,

    #[account(0, writable, name = "race", desc = "Race to settle")]
    #[account(1, signer, name = "admin", desc = "Race admin")]
    SetWinner,

    #[account(0, name = "race", desc = "Finished race")]
    #[account(1, writable, name = "bet", desc = "Winning bet")]
    #[account(2, writable, signer, name = "bettor", desc = "Bettor recorded on the bet")]
    #[account(3, writable, name = "vault", desc = "Vault PDA of the race")]
    ClaimWinnings,
}

impl TryFrom<&u8> for BettingInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(BettingInstruction::Initialize),
            1 => Ok(BettingInstruction::CreateRace),
            2 => Ok(BettingInstruction::StopBetting),
            3 => Ok(BettingInstruction::PlaceBet),
            4 => Ok(BettingInstruction::SetWinner),
            5 => Ok(BettingInstruction::ClaimWinnings),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
