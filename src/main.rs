mod calc;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::as_tui(),
        2.. => run::as_cli(&args),
        _ => {
            eprintln!("Usage: mandhitui [command]");
            Ok(())
        }
    }
}
