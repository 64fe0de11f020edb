//! Optional cipher hook.
//!
//! A cipher is a caller-supplied symmetric pair of byte transforms. The codec
//! never checks that `decrypt` inverts `encrypt`; a mismatched pair simply
//! shows up as a corrupt stream on decode.

pub trait Cipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8]) -> anyhow::Result<Vec<u8>>;
    fn decrypt(&self, ciphertext: &[u8]) -> anyhow::Result<Vec<u8>>;
}

/// Identity cipher, the default when no hook is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCipher;

impl Cipher for NoCipher {
    fn encrypt(&self, plaintext: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(plaintext.to_vec())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(ciphertext.to_vec())
    }
}

/// Cipher built from two infallible closures.
pub struct FnCipher<E, D> {
    encrypt: E,
    decrypt: D,
}

impl<E, D> FnCipher<E, D>
where
    E: Fn(&[u8]) -> Vec<u8> + Send + Sync,
    D: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    pub fn new(encrypt: E, decrypt: D) -> Self {
        Self { encrypt, decrypt }
    }
}

impl<E, D> Cipher for FnCipher<E, D>
where
    E: Fn(&[u8]) -> Vec<u8> + Send + Sync,
    D: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn encrypt(&self, plaintext: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok((self.encrypt)(plaintext))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok((self.decrypt)(ciphertext))
    }
}

/// Shorthand for [`FnCipher::new`].
pub fn from_fns<E, D>(encrypt: E, decrypt: D) -> FnCipher<E, D>
where
    E: Fn(&[u8]) -> Vec<u8> + Send + Sync,
    D: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    FnCipher::new(encrypt, decrypt)
}
