mod cli;
mod config;
mod emit;
mod error;
mod git;
mod manifest;
mod output;
mod runner;
mod types;
mod ui;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse_args();

    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let config = match config::build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let report = match runner::run(&config) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let types::Outcome::Degraded { cause, .. } = &report.outcome {
        ui::print_warning(&format!("{}; generated placeholder revision", cause));
    }

    if args.json {
        match serde_json::to_string_pretty(&report.outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ui::print_error(&format!("Failed to serialize revision info: {}", e));
                std::process::exit(1);
            }
        }
    } else if config.dry_run {
        print!("{}", report.source);
    }

    ui::status(&ui::summary_line(&report));
}
