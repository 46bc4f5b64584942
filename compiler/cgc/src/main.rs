//! Codegen CLI

use cgc::{init_tracing, parse_run_args, run, SCOPE_ENV};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let env_scope = std::env::var(SCOPE_ENV).ok();
            let config = match parse_run_args(&args[2..], env_scope) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            };

            init_tracing();
            match run(&config) {
                Ok(stats) => {
                    println!(
                        "generated {} declaration(s) from {} input declaration(s)",
                        stats.generated, stats.visited
                    );
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Codegen - AST processor engine");
    println!();
    println!("Usage: cgc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run      Generate builder classes from a model file");
    println!("  help     Show this message");
    println!();
    println!("Options for run:");
    println!("  --input=<model.json>    Input declarations (JSON array)");
    println!("  --output=<out.json>     Generated declarations (must differ from input)");
    println!("  --scope=<prefix>        Qualified-name prefix to process (or CG_SCOPE)");
    println!("  --suffix=<suffix>       Builder name suffix (default: Builder)");
    println!("  --strict                Fail on setters without a body");
}
