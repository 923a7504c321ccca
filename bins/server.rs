use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env first so RUST_LOG and LOG_FORMAT apply
    dotenv().ok();
    let format = std::env::var("LOG_FORMAT").ok();
    common::utils::logging::init_logging_from_format(format.as_deref());
}

fn install_panic_hook(instance_id: Uuid) {
    std::panic::set_hook(Box::new(move |info| {
        error!(event = "panic", %instance_id, message = %info, "unhandled panic");
    }));
}

fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

fn main() -> ExitCode {
    init_logging();
    let instance_id = Uuid::new_v4();
    install_panic_hook(instance_id);

    // Loaded once; the server receives the validated copy.
    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(event = "config_invalid", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(cfg.server.worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        event = "start",
        %instance_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "vehicles api starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(event = "stop", %instance_id, "vehicles api stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "run_failed", %instance_id, error = %e, "vehicles api exited with error");
            ExitCode::FAILURE
        }
    }
}
