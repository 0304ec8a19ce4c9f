//! `prscore` 바이너리 진입점.

use prscore::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("{}", msg.trim_end());
            std::process::exit(1);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Score(options) => {
            let adapters = match composition.prepare_scoring() {
                Ok(adapters) => adapters,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };

            match composition.score_usecase(&adapters).execute(&options).await {
                Ok(report) if report.exit_code != 0 => std::process::exit(report.exit_code),
                Ok(_) => {}
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
    }
}
