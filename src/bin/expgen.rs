use std::process::ExitCode;

fn main() -> ExitCode {
    match expplot::app::run_generate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
