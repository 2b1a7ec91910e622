/// Seed prefix of the per-race vault PDA: `["vault", race]`.
pub const VAULT_SEED: &[u8] = b"vault";

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_LIVESTREAM_LEN: usize = 200;
pub const MAX_HAMSTERS: usize = 16;
pub const MAX_HAMSTER_NAME_LEN: usize = 32;

// The vault only ever carries lamports.
pub const VAULT_SPACE: usize = 0;
