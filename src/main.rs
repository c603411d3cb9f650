#![allow(nonstandard_style)]

mod commands;
mod error_handling;
mod evaluating;
mod formatting;
mod lexing;
mod number_theory;
mod repl;
mod scanning;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    repl::run(stdin.lock(), &mut stdout)
}
