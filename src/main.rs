use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Errors are already logged by the runtime.
    match platformer_sim::run_with_config().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
