#![allow(dead_code)]

use solana_program_test::{BanksClientError, ProgramTest};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    instruction::InstructionError,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

use hamster_betting::{
    error::BettingError,
    state::{Bet, Race},
};

// Instruction builders matching the on-chain wire format
pub mod ixn;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(hamster_betting::ID)
}

/// Boot a bank with the SBF build of the program registered under its declared id.
///
/// The artifact is looked up in `BPF_OUT_DIR`, falling back to the workspace
/// `target/deploy`.
pub fn program_test() -> ProgramTest {
    let deploy_dir = env::var("BPF_OUT_DIR")
        .unwrap_or_else(|_| format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR")));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("hamster_betting.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("hamster_betting", &program_id());
    pt
}

pub async fn start() -> ProgramTestContext {
    program_test().start_with_context().await
}

/// Send `ixs` with the context payer covering fees.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[solana_sdk::instruction::Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(ixs, Some(&ctx.payer.pubkey()), &all, ctx.last_blockhash);
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

/// Like `send`, but `fee_payer` pays. Used to resend an instruction without
/// producing a byte-identical transaction.
pub async fn send_from(
    ctx: &mut ProgramTestContext,
    fee_payer: &Keypair,
    ixs: &[solana_sdk::instruction::Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = vec![fee_payer];
    all.extend(signers.iter().copied().filter(|k| k.pubkey() != fee_payer.pubkey()));
    let tx = Transaction::new_signed_with_payer(ixs, Some(&fee_payer.pubkey()), &all, ctx.last_blockhash);
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let ix = system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount);
    send(ctx, &[ix], &[]).await.unwrap();
}

/// A keypair holding `lamports`.
pub async fn funded_keypair(ctx: &mut ProgramTestContext, lamports: u64) -> Keypair {
    let kp = Keypair::new();
    transfer(ctx, &kp.pubkey(), lamports).await;
    kp
}

pub async fn balance(ctx: &mut ProgramTestContext, key: &Pubkey) -> u64 {
    ctx.banks_client.get_balance(*key).await.unwrap()
}

pub async fn fetch_race(ctx: &mut ProgramTestContext, key: &Pubkey) -> Race {
    let account = ctx.banks_client.get_account(*key).await.unwrap().expect("race account");
    assert_eq!(account.owner, program_id());
    *Race::load(&account.data).unwrap()
}

pub async fn fetch_bet(ctx: &mut ProgramTestContext, key: &Pubkey) -> Bet {
    let account = ctx.banks_client.get_account(*key).await.unwrap().expect("bet account");
    assert_eq!(account.owner, program_id());
    *Bet::load(&account.data).unwrap()
}

/// Create a race with the given hamsters; returns the race keypair.
pub async fn create_race(
    ctx: &mut ProgramTestContext,
    admin: &Keypair,
    hamsters: &[&str],
) -> Keypair {
    let race = Keypair::new();
    let ix = ixn::create_race(
        &race.pubkey(),
        &admin.pubkey(),
        "Friday Night Sprint",
        "https://example.tv/hamsters",
        hamsters,
    );
    send(ctx, &[ix], &[&race, admin]).await.unwrap();
    race
}

/// Place a bet; returns the bet keypair.
pub async fn place_bet(
    ctx: &mut ProgramTestContext,
    race: &Pubkey,
    bettor: &Keypair,
    hamster_index: u8,
    amount: u64,
) -> Keypair {
    let bet = Keypair::new();
    let ix = ixn::place_bet(race, &bet.pubkey(), &bettor.pubkey(), hamster_index, amount);
    send(ctx, &[ix], &[&bet, bettor]).await.unwrap();
    bet
}

pub fn instruction_error(err: BanksClientError) -> InstructionError {
    match err.unwrap() {
        TransactionError::InstructionError(_, ie) => ie,
        other => panic!("unexpected transaction error: {:?}", other),
    }
}

pub fn assert_betting_error<T: std::fmt::Debug>(res: Result<T, BanksClientError>, expected: BettingError) {
    let err = res.expect_err("transaction should fail");
    assert_eq!(
        instruction_error(err),
        InstructionError::Custom(expected.code()),
        "expected {:?}",
        expected
    );
}
