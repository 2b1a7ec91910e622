use pinocchio::program_error::ProgramError;

/// First byte of every account this program owns.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccountKind {
    Uninitialized = 0,
    Race = 1,
    Bet = 2,
}

impl TryFrom<u8> for AccountKind {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountKind::Uninitialized),
            1 => Ok(AccountKind::Race),
            2 => Ok(AccountKind::Bet),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

/// Size and discriminator check shared by the zero-copy loaders.
#[inline]
pub(crate) fn check_layout(data: &[u8], len: usize, kind: AccountKind) -> Result<(), ProgramError> {
    if data.len() < len {
        return Err(ProgramError::InvalidAccountData);
    }
    if AccountKind::try_from(data[0])? != kind {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}
