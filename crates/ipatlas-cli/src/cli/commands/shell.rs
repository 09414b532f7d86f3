//! `ipatlas shell` - Interactive prompt mode.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::lookup::render_outcome;
use super::Context;
use crate::education::Explain;

pub async fn execute(ctx: Context) -> Result<()> {
    if ctx.explain {
        Explain::shell().print();
    }

    println!("Welcome to the {} interactive prompt!", "ipatlas".bold());
    println!(
        "Enter an IP address or domain name per line; {} or {} to quit.",
        "exit".red(),
        "quit".red()
    );
    println!();

    let runner = ctx.runner()?;
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("ipatlas> ") {
            Ok(line) => {
                let query = line.trim();

                if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
                    break;
                }

                if query.is_empty() {
                    // Warning only; nothing goes on the wire.
                    println!(
                        "{}",
                        "Please enter an IP address or domain name.".yellow()
                    );
                    continue;
                }

                let _ = rl.add_history_entry(query);

                // One query runs to completion before the next prompt.
                let outcome = runner.run(query).await;
                render_outcome(&ctx, &outcome);
                println!();
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}
