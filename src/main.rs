use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(prettyzone::run(prettyzone::env::RealEnv))
}
