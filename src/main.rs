use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Render a generated specification report into a paginated PDF.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Report text file, or `-` for stdin.
    input: PathBuf,

    /// Output PDF path. Defaults to the input path with a .pdf extension.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let raw = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("error: failed to read stdin: {e}");
            return ExitCode::FAILURE;
        }
        buf
    } else {
        match std::fs::read_to_string(&args.input) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: failed to read {}: {e}", args.input.display());
                return ExitCode::FAILURE;
            }
        }
    };

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("pdf"));

    match specsheet_pdf::render_report_to_file(&raw, &output) {
        Ok(()) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
