use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use rand_core::OsRng;

use crate::error::SecretError;
use crate::strkey;

/// Ed25519 identity of the bundler account. The secret side only ever leaves
/// this type strkey-serialized, for the persistent store.
#[derive(Clone)]
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    pub fn random() -> Self {
        Self {
            signing: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn from_secret(secret: &str) -> Result<Self, SecretError> {
        let seed = strkey::decode_secret_seed(secret)?;
        Ok(Self {
            signing: SigningKey::from_bytes(&seed),
        })
    }

    /// The strkey-serialized secret seed (`S...`).
    pub fn secret(&self) -> String {
        strkey::encode_secret_seed(&self.signing.to_bytes())
    }

    /// The strkey-serialized public key (`G...`).
    pub fn public_key(&self) -> String {
        strkey::encode_public_key(&self.signing.verifying_key().to_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }

    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        let signature = Signature::from_bytes(signature);
        self.signing
            .verifying_key()
            .verify(message, &signature)
            .is_ok()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish()
    }
}
