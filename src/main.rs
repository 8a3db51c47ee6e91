use std::process::ExitCode;

fn main() -> ExitCode {
    match imagenet_fewshot::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
