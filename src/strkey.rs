use data_encoding::BASE32_NOPAD;
use thiserror::Error;

// SEP-23 version bytes for the two key kinds the bundler uses
const VERSION_ED25519_PUBLIC_KEY: u8 = 6 << 3;
const VERSION_ED25519_SECRET_SEED: u8 = 18 << 3;

const PAYLOAD_LEN: usize = 32;
// version byte + payload + 2 checksum bytes
const RAW_LEN: usize = PAYLOAD_LEN + 3;
const ENCODED_LEN: usize = 56;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrkeyError {
    #[error("Invalid base32: `{0}`")]
    Base32(String),
    #[error("Invalid strkey length: `{0}`")]
    Length(usize),
    #[error("Unexpected version byte: `{0}`")]
    Version(u8),
    #[error("Checksum mismatch")]
    Checksum,
}

pub fn encode_public_key(key: &[u8; PAYLOAD_LEN]) -> String {
    encode(VERSION_ED25519_PUBLIC_KEY, key)
}

pub fn encode_secret_seed(seed: &[u8; PAYLOAD_LEN]) -> String {
    encode(VERSION_ED25519_SECRET_SEED, seed)
}

pub fn decode_public_key(encoded: &str) -> Result<[u8; PAYLOAD_LEN], StrkeyError> {
    decode(VERSION_ED25519_PUBLIC_KEY, encoded)
}

pub fn decode_secret_seed(encoded: &str) -> Result<[u8; PAYLOAD_LEN], StrkeyError> {
    decode(VERSION_ED25519_SECRET_SEED, encoded)
}

fn encode(version: u8, payload: &[u8; PAYLOAD_LEN]) -> String {
    let mut data = Vec::with_capacity(RAW_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = crc16(&data);
    data.extend_from_slice(&checksum.to_le_bytes());
    BASE32_NOPAD.encode(&data)
}

fn decode(version: u8, encoded: &str) -> Result<[u8; PAYLOAD_LEN], StrkeyError> {
    if encoded.len() != ENCODED_LEN {
        return Err(StrkeyError::Length(encoded.len()));
    }
    let data = BASE32_NOPAD
        .decode(encoded.as_bytes())
        .map_err(|e| StrkeyError::Base32(e.to_string()))?;
    if data.len() != RAW_LEN {
        return Err(StrkeyError::Length(encoded.len()));
    }
    if data[0] != version {
        return Err(StrkeyError::Version(data[0]));
    }
    let (body, checksum) = data.split_at(RAW_LEN - 2);
    if checksum != crc16(body).to_le_bytes() {
        return Err(StrkeyError::Checksum);
    }
    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&body[1..]);
    Ok(payload)
}

// CRC16-XModem: poly 0x1021, zero initial value
fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
