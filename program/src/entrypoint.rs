use crate::instruction::{
    self, payload::finish, BettingInstruction, CreateRaceData, PlaceBetData, SetWinnerData,
};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match BettingInstruction::try_from(disc)? {
        BettingInstruction::Initialize => {
            msg!("Instruction: Initialize");
            finish(payload)?;
            instruction::initialize::process_initialize(accounts)
        }

        // --------------------------------------------------------------------
        // Race administration
        // --------------------------------------------------------------------
        BettingInstruction::CreateRace => {
            msg!("Instruction: CreateRace");
            let data = CreateRaceData::parse(payload)?;
            instruction::create_race::process_create_race(accounts, data)
        }
        BettingInstruction::StopBetting => {
            msg!("Instruction: StopBetting");
            finish(payload)?;
            instruction::stop_betting::process_stop_betting(accounts)
        }
        BettingInstruction::SetWinner => {
            msg!("Instruction: SetWinner");
            let data = SetWinnerData::parse(payload)?;
            instruction::set_winner::process_set_winner(accounts, data)
        }

        // --------------------------------------------------------------------
        // Bettors
        // --------------------------------------------------------------------
        BettingInstruction::PlaceBet => {
            msg!("Instruction: PlaceBet");
            let data = PlaceBetData::parse(payload)?;
            instruction::place_bet::process_place_bet(accounts, data)
        }
        BettingInstruction::ClaimWinnings => {
            msg!("Instruction: ClaimWinnings");
            finish(payload)?;
            instruction::claim_winnings::process_claim_winnings(accounts)
        }
    }
}
