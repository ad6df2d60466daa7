use clap::Parser;
use picdump::{Cli, OutputFormatter, OutputMode, PicDump, PicDumpError, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    if !cli.has_files() {
        Cli::print_help();
        return PicDumpError::Usage.exit_code();
    }

    let picdump = match PicDump::from_cli(&cli) {
        Ok(picdump) => picdump,
        Err(e) => {
            print_startup_error(&e);
            return e.exit_code();
        }
    };

    match picdump.extract(&cli.files) {
        Ok(report) => {
            picdump.output_formatter().print_extraction_summary(&report);

            if report.has_failures() {
                2 // Some files were skipped under --keep-going
            } else {
                0
            }
        }
        Err(e) => {
            picdump.handle_error(&e);
            e.exit_code()
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(picdump::config::default_config_path);

    match PicDump::generate_sample_config(&config_path) {
        Ok(()) => {
            println!(
                "Generated sample configuration file: {}",
                config_path.display()
            );
            println!("\nTo use this configuration:");
            println!("  picdump <files>... --config {}", config_path.display());
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &PicDumpError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
