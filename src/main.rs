use std::process::ExitCode;

fn main() -> ExitCode {
    match plot_style::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
