use fit_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: failed to render output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
