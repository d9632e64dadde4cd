pub mod args;
pub mod commands;
pub mod env;
pub mod error;
pub mod log;
pub mod parse;
pub mod zone;

use clap::Parser;

pub use args::Args;
use env::Env;
use error::Error;

/// Parses the command line of the environment.
pub fn parse_args(env: impl Env) -> Result<Args, Error> {
    Ok(Args::try_parse_from(env.args_os())?)
}

/// Runs the program in the given environment and returns the exit code.
pub fn run(env: impl Env) -> u8 {
    let args = match parse_args(&env) {
        Ok(args) => args,
        Err(err) => {
            err.pretty_print(&env);
            return err.exit_code();
        }
    };

    let _guard = log::init(&env, args.log_level());
    match args.execute(&env) {
        Ok(()) => 0,
        Err(err) => {
            err.pretty_print(&env);
            err.exit_code()
        }
    }
}
