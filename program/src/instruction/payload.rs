//! Readers for the packed little-endian instruction payloads.
//!
//! Each reader advances the slice it is given; `finish` rejects trailing bytes.

use pinocchio::program_error::ProgramError;

pub fn take_u8(data: &mut &[u8]) -> Result<u8, ProgramError> {
    let (first, rest) = data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    *data = rest;
    Ok(*first)
}

pub fn take_u64(data: &mut &[u8]) -> Result<u64, ProgramError> {
    if data.len() < 8 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (head, rest) = data.split_at(8);
    let mut buf = [0u8; 8];
    buf.copy_from_slice(head);
    *data = rest;
    Ok(u64::from_le_bytes(buf))
}

/// `u8 length || utf-8 bytes`
pub fn take_str<'a>(data: &mut &'a [u8]) -> Result<&'a str, ProgramError> {
    let len = take_u8(data)? as usize;
    if data.len() < len {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (head, rest) = data.split_at(len);
    *data = rest;
    core::str::from_utf8(head).map_err(|_| ProgramError::InvalidInstructionData)
}

pub fn finish(data: &[u8]) -> Result<(), ProgramError> {
    if !data.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok(())
}
