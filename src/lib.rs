pub mod bootstrap;
pub mod code;
pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod faucet;
pub mod holder;
pub mod keypair;
pub mod platform;
pub mod store;
pub mod strkey;
