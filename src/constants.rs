// Persistent store
pub const STORAGE_KEY: &str = "sp:bundler";
pub const STORE_FILE_NAME: &str = "store.json";

// Faucet
pub const FRIENDBOT_PATH: &str = "friendbot";
