use clap::Parser;
use stellar_wallet_bootstrap::bootstrap::{BootstrapOutcome, Bootstrapper};
use stellar_wallet_bootstrap::code::Code;
use stellar_wallet_bootstrap::config::{AppConfig, Args};
use stellar_wallet_bootstrap::date;
use stellar_wallet_bootstrap::holder::KeyHolder;
use stellar_wallet_bootstrap::platform::Platform;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let code = inner_main().await;

    code.output_logs();

    if code.is_fatal() {
        std::process::exit(code.code());
    }

    // the detached faucet request has to leave the process before the
    // runtime goes away; its outcome stays ignored
    if let Code::Success(BootstrapOutcome::Created { funding }) = code {
        let _ = funding.await;
    }

    // wallet is ready, holder is published
    std::process::exit(0);
}

async fn inner_main() -> Code {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .without_time()
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let config = match AppConfig::load(args.config) {
        Ok(config) => config,
        Err(e) => return Code::ConfigFatal(e.to_string()),
    };
    tracing::info!("Using config: {:#?}", config);
    tracing::info!("Sha commit: {}", env!("VERGEN_GIT_SHA").to_string());
    tracing::info!("Session date: {}", date::today());

    let platform = Platform::detect(args.headless);
    tracing::info!("Platform is: {platform}");

    let holder = KeyHolder::default();
    let bootstrapper = Bootstrapper::from_config(platform, &config);

    Code::from_result(bootstrapper.run(&holder).await)
}
