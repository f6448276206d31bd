#![allow(clippy::module_inception)]
pub mod board;
pub mod cli;
pub mod moves;
pub mod types;

use env_logger::Env;

fn main() {
    let env = Env::default().filter_or("HANLANDIA_LOG", "info");
    env_logger::Builder::from_env(env).init();

    cli::main_loop();
}
