//! Mathspan CLI - render $$-delimited math segments embedded in plain text

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use mathspan::{
    contains_math,
    diagnostics::{check_markup, format_diagnostics, has_errors},
    MathspanError, MathspanResult, MitexTypesetter, SegmentRenderer,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathspan")]
#[command(version)]
#[command(about = "Render $$-delimited math segments embedded in plain text", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Only probe the input and print whether it carries math markup
    #[arg(long)]
    detect: bool,

    /// Check mode - report markup problems without rendering
    #[arg(long)]
    check: bool,

    /// Disable colored output (for check mode)
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "cli")]
fn main() -> MathspanResult<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => {
            fs::read_to_string(path).map_err(|e| MathspanError::io_at(path.as_str(), e))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // If detect mode, just print whether the input is math-bearing and exit
    if cli.detect {
        if contains_math(&input) {
            println!("math");
        } else {
            println!("plain");
        }
        return Ok(());
    }

    // If check mode, report markup problems and exit
    if cli.check {
        let diagnostics = check_markup(&input);
        println!("{}", format_diagnostics(&diagnostics, !cli.no_color));
        if has_errors(&diagnostics) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Render. `ok == false` means the input carries no renderable markup,
    // so the raw text passes through unchanged.
    let outcome = SegmentRenderer::new(MitexTypesetter::new()).render(Some(&input), true);
    let result = match outcome.output {
        Some(rendered) => rendered,
        None if outcome.ok => String::new(),
        None => input,
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file =
                fs::File::create(&path).map_err(|e| MathspanError::io_at(path.as_str(), e))?;
            writeln!(file, "{}", result).map_err(|e| MathspanError::io_at(path.as_str(), e))?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathspan --features cli");
    eprintln!("  mathspan [OPTIONS] [INPUT_FILE]");
}
