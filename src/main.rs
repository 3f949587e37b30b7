mod cli;
mod runner;

use std::process::ExitCode;

use panel_hunter::output::console;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse_cli();
    match runner::run_from_cli(cli).await {
        Ok(runner::RunOutcome::Completed) => ExitCode::SUCCESS,
        Ok(runner::RunOutcome::Interrupted) => {
            console::print_interrupted();
            ExitCode::from(1)
        }
        Err(e) => {
            console::print_error(&e);
            ExitCode::from(1)
        }
    }
}
