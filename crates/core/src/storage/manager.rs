use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

use super::encryption::{self, KdfParams};
use super::format;

/// High-level snapshot persistence: portfolio ⇄ encrypted .wtpf bytes.
///
/// Flow on save: Portfolio → bincode → AES-256-GCM(Argon2id(password)) →
/// WTPF container. Load runs the same pipeline backwards, re-deriving the
/// key from the password and the header's stored salt and KDF parameters.
pub struct PortfolioStore;

impl PortfolioStore {
    /// Serialize and encrypt a portfolio into portable container bytes.
    /// The caller owns writing them wherever they live (file, browser
    /// storage, sync target).
    pub fn save_to_bytes(portfolio: &Portfolio, password: &str) -> Result<Vec<u8>, CoreError> {
        let plaintext = bincode::serialize(portfolio)
            .map_err(|e| CoreError::Serialization(format!("Portfolio encoding failed: {e}")))?;

        // Fresh salt and nonce every save; both travel in the header.
        let salt = encryption::random_bytes()?;
        let nonce = encryption::random_bytes()?;

        let kdf_params = KdfParams::default();
        let key = encryption::derive_key(password, &salt, &kdf_params)?;
        let ciphertext = encryption::encrypt(&plaintext, &key, &nonce)?;

        Ok(format::write_container(
            format::CURRENT_VERSION,
            &kdf_params,
            &salt,
            &nonce,
            &ciphertext,
        ))
    }

    /// Decrypt and deserialize a portfolio from container bytes.
    pub fn load_from_bytes(data: &[u8], password: &str) -> Result<Portfolio, CoreError> {
        let (header, ciphertext) = format::read_container(data)?;

        let key = encryption::derive_key(password, &header.salt, &header.kdf_params)?;
        let plaintext = encryption::decrypt(ciphertext, &key, &header.nonce)?;

        bincode::deserialize(&plaintext)
            .map_err(|e| CoreError::Deserialization(format!("Portfolio decoding failed: {e}")))
    }

    /// Save to an encrypted file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(
        portfolio: &Portfolio,
        path: &str,
        password: &str,
    ) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(portfolio, password)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load from an encrypted file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<Portfolio, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes, password)
    }
}
