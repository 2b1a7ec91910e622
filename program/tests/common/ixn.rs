use hamster_betting::instruction::BettingInstruction;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use super::program_id;

pub fn vault_address(race: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault", race.as_ref()], &program_id())
}

fn push_str(data: &mut Vec<u8>, s: &str) {
    data.push(u8::try_from(s.len()).unwrap());
    data.extend_from_slice(s.as_bytes());
}

pub fn initialize() -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: vec![BettingInstruction::Initialize as u8],
    }
}

pub fn create_race_with_bump(
    race: &Pubkey,
    admin: &Pubkey,
    vault: &Pubkey,
    vault_bump: u8,
    title: &str,
    livestream: &str,
    hamsters: &[&str],
) -> Instruction {
    let mut data = vec![BettingInstruction::CreateRace as u8, vault_bump];
    push_str(&mut data, title);
    push_str(&mut data, livestream);
    data.push(u8::try_from(hamsters.len()).unwrap());
    for name in hamsters {
        push_str(&mut data, name);
    }
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*race, true),
            AccountMeta::new(*admin, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

pub fn create_race(
    race: &Pubkey,
    admin: &Pubkey,
    title: &str,
    livestream: &str,
    hamsters: &[&str],
) -> Instruction {
    let (vault, bump) = vault_address(race);
    create_race_with_bump(race, admin, &vault, bump, title, livestream, hamsters)
}

pub fn stop_betting(race: &Pubkey, admin: &Pubkey) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*race, false),
            AccountMeta::new_readonly(*admin, true),
        ],
        data: vec![BettingInstruction::StopBetting as u8],
    }
}

pub fn place_bet(
    race: &Pubkey,
    bet: &Pubkey,
    bettor: &Pubkey,
    hamster_index: u8,
    amount: u64,
) -> Instruction {
    let (vault, _) = vault_address(race);
    let mut data = Vec::with_capacity(1 + 1 + 8);
    data.push(BettingInstruction::PlaceBet as u8);
    data.push(hamster_index);
    data.extend_from_slice(&amount.to_le_bytes());
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*race, false),
            AccountMeta::new(*bet, true),
            AccountMeta::new(*bettor, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

pub fn set_winner(race: &Pubkey, admin: &Pubkey, winner_index: u8) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*race, false),
            AccountMeta::new_readonly(*admin, true),
        ],
        data: vec![BettingInstruction::SetWinner as u8, winner_index],
    }
}

pub fn claim_winnings(race: &Pubkey, bet: &Pubkey, bettor: &Pubkey) -> Instruction {
    let (vault, _) = vault_address(race);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(*race, false),
            AccountMeta::new(*bet, false),
            AccountMeta::new(*bettor, true),
            AccountMeta::new(vault, false),
        ],
        data: vec![BettingInstruction::ClaimWinnings as u8],
    }
}
