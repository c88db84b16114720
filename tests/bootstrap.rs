use std::collections::HashMap;
use std::fs;
use std::path::Path;

use stellar_wallet_bootstrap::bootstrap::{BootstrapOutcome, Bootstrapper};
use stellar_wallet_bootstrap::constants::{STORAGE_KEY, STORE_FILE_NAME};
use stellar_wallet_bootstrap::error::Error;
use stellar_wallet_bootstrap::faucet::FaucetClient;
use stellar_wallet_bootstrap::holder::KeyHolder;
use stellar_wallet_bootstrap::keypair::Keypair;
use stellar_wallet_bootstrap::platform::Platform;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Minimal friendbot stand-in: answers every request with 200 and forwards
/// the raw request text to the test.
async fn friendbot_stub() -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok",
                    )
                    .await;
                let _ = tx.send(request);
            });
        }
    });

    (format!("http://{addr}"), rx)
}

fn read_store(base_dir: &Path) -> HashMap<String, String> {
    let data = fs::read_to_string(base_dir.join(STORE_FILE_NAME)).unwrap();
    serde_json::from_str(&data).unwrap()
}

fn write_store(base_dir: &Path, secret: &str) {
    let entries = HashMap::from([(STORAGE_KEY.to_string(), secret.to_string())]);
    fs::write(
        base_dir.join(STORE_FILE_NAME),
        serde_json::to_string_pretty(&entries).unwrap(),
    )
    .unwrap();
}

#[tokio::test]
async fn headless_leaves_everything_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (faucet_url, mut requests) = friendbot_stub().await;

    let holder = KeyHolder::default();
    let bootstrapper = Bootstrapper::new(
        Platform::Headless,
        dir.path(),
        FaucetClient::new(faucet_url),
    );

    let outcome = bootstrapper.run(&holder).await.unwrap();

    assert!(matches!(outcome, BootstrapOutcome::Skipped));
    assert!(holder.get().is_none());
    assert!(!dir.path().join(STORE_FILE_NAME).exists());
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn fresh_store_generates_persists_and_funds() {
    let dir = tempfile::tempdir().unwrap();
    let (faucet_url, mut requests) = friendbot_stub().await;

    let holder = KeyHolder::default();
    let bootstrapper =
        Bootstrapper::new(Platform::Browser, dir.path(), FaucetClient::new(faucet_url));

    let outcome = bootstrapper.run(&holder).await.unwrap();
    let BootstrapOutcome::Created { funding } = outcome else {
        panic!("expected a fresh keypair")
    };
    funding.await.unwrap();

    let keypair = holder.get().expect("holder should be set");
    let public_key = keypair.public_key();

    // the persisted secret reconstructs the published keypair
    let entries = read_store(dir.path());
    let secret = entries.get(STORAGE_KEY).expect("secret should be stored");
    let restored = Keypair::from_secret(secret).unwrap();
    assert_eq!(restored.public_key(), public_key);

    // exactly one funding request, for that public key
    let request = requests.recv().await.unwrap();
    assert!(request.starts_with(&format!("GET /friendbot?addr={public_key} ")));
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn existing_secret_is_restored_without_funding() {
    let dir = tempfile::tempdir().unwrap();
    let (faucet_url, mut requests) = friendbot_stub().await;

    let keypair = Keypair::random();
    write_store(dir.path(), &keypair.secret());
    let before = fs::read_to_string(dir.path().join(STORE_FILE_NAME)).unwrap();

    let holder = KeyHolder::default();
    let bootstrapper =
        Bootstrapper::new(Platform::Browser, dir.path(), FaucetClient::new(faucet_url));

    let outcome = bootstrapper.run(&holder).await.unwrap();

    assert!(matches!(outcome, BootstrapOutcome::Restored));
    assert_eq!(
        holder.get().map(|kp| kp.public_key()),
        Some(keypair.public_key())
    );

    let after = fs::read_to_string(dir.path().join(STORE_FILE_NAME)).unwrap();
    assert_eq!(before, after);
    assert!(requests.try_recv().is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn binary_lets_funding_finish_before_exit() {
    let dir = tempfile::tempdir().unwrap();
    let (faucet_url, mut requests) = friendbot_stub().await;

    let base_dir = dir.path().join("wallet");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "faucet_url = \"{faucet_url}\"\nbase_dir = \"{}\"\n",
            base_dir.display()
        ),
    )
    .unwrap();

    let status = std::process::Command::new(env!("CARGO_BIN_EXE_stellar-wallet-bootstrap"))
        .arg("--config")
        .arg(&config_path)
        .status()
        .unwrap();
    assert!(status.success());

    // the request left the process before it exited
    let entries = read_store(&base_dir);
    let secret = entries.get(STORAGE_KEY).expect("secret should be stored");
    let public_key = Keypair::from_secret(secret).unwrap().public_key();

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with(&format!("GET /friendbot?addr={public_key} ")));
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn malformed_secret_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (faucet_url, mut requests) = friendbot_stub().await;

    write_store(dir.path(), "garbage");

    let holder = KeyHolder::default();
    let bootstrapper =
        Bootstrapper::new(Platform::Browser, dir.path(), FaucetClient::new(faucet_url));

    let err = bootstrapper.run(&holder).await.unwrap_err();

    assert!(matches!(err, Error::MalformedSecret(_)));
    assert!(holder.get().is_none());
    assert!(requests.try_recv().is_err());
}
