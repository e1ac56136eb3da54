use super::encryption::{KdfParams, NONCE_LEN, SALT_LEN};
use crate::errors::CoreError;

/// Magic bytes identifying a WTPF (WealthTrack Portfolio File).
pub const MAGIC: &[u8; 4] = b"WTPF";

/// Current container version.
pub const CURRENT_VERSION: u16 = 1;

/// Fixed header size in bytes:
/// magic(4) + version(2) + kdf(12) + salt(16) + nonce(12) + ciphertext_len(8)
pub const HEADER_LEN: usize = 4 + 2 + 12 + SALT_LEN + NONCE_LEN + 8;

/// Parsed header of an encrypted .wtpf container.
#[derive(Debug)]
pub struct FileHeader {
    pub version: u16,
    pub kdf_params: KdfParams,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext_len: u64,
}

/// Assemble a complete container from its parts.
///
/// Layout (all integers little-endian):
/// ```text
/// [WTPF: 4B] [version: 2B] [memory_cost: 4B] [time_cost: 4B]
/// [parallelism: 4B] [salt: 16B] [nonce: 12B] [ciphertext_len: 8B]
/// [ciphertext + GCM tag: variable]
/// ```
pub fn write_container(
    version: u16,
    kdf_params: &KdfParams,
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + ciphertext.len());

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(&kdf_params.memory_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.time_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.parallelism.to_le_bytes());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(&(ciphertext.len() as u64).to_le_bytes());
    buf.extend_from_slice(ciphertext);

    buf
}

/// Parse a container, returning the header and the ciphertext slice.
///
/// KDF parameters are range-checked before any work is done with them: a
/// crafted header must not be able to demand gigabytes of Argon2 memory.
pub fn read_container(data: &[u8]) -> Result<(FileHeader, &[u8]), CoreError> {
    if data.len() < HEADER_LEN {
        return Err(CoreError::InvalidFileFormat(
            "File too small to be a WTPF container".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "Missing WTPF magic bytes".into(),
        ));
    }

    let mut offset = 4;

    let version = u16::from_le_bytes([data[offset], data[offset + 1]]);
    offset += 2;

    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let memory_cost = read_u32_le(data, &mut offset);
    let time_cost = read_u32_le(data, &mut offset);
    let parallelism = read_u32_le(data, &mut offset);

    // Bounds: memory 8 KiB..1 GiB, up to 20 passes, up to 16 lanes.
    if !(8..=1_048_576).contains(&memory_cost) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF memory_cost out of range: {memory_cost} KiB"
        )));
    }
    if !(1..=20).contains(&time_cost) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF time_cost out of range: {time_cost}"
        )));
    }
    if !(1..=16).contains(&parallelism) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF parallelism out of range: {parallelism}"
        )));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&data[offset..offset + SALT_LEN]);
    offset += SALT_LEN;

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&data[offset..offset + NONCE_LEN]);
    offset += NONCE_LEN;

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&data[offset..offset + 8]);
    let ciphertext_len = u64::from_le_bytes(len_bytes);
    offset += 8;

    let end = offset
        .checked_add(ciphertext_len as usize)
        .ok_or_else(|| CoreError::InvalidFileFormat("Ciphertext length overflow".into()))?;
    if data.len() < end {
        return Err(CoreError::InvalidFileFormat(format!(
            "File truncated: expected {} ciphertext bytes, found {}",
            ciphertext_len,
            data.len() - offset
        )));
    }

    let header = FileHeader {
        version,
        kdf_params: KdfParams {
            memory_cost,
            time_cost,
            parallelism,
        },
        salt,
        nonce,
        ciphertext_len,
    };

    Ok((header, &data[offset..end]))
}

/// Read a little-endian u32 and advance the cursor. Callers have already
/// bounds-checked against `HEADER_LEN`.
fn read_u32_le(data: &[u8], offset: &mut usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[*offset..*offset + 4]);
    *offset += 4;
    u32::from_le_bytes(bytes)
}
