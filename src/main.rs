//! judgegen CLI - Command-line interface
//!
//! Commands:
//!   extract  - Recover the entry-method signature from a solution
//!   gen      - Generate the harness program next to the solution
//!   check    - Validate encoded test records against the signature
//!   dispose  - Remove the include line inserted into the solution

use judgegen::cli::{cmd_check, cmd_dispose, cmd_extract, cmd_gen};
use judgegen::VERSION;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "extract" => cmd_extract(&args[2..]),
        "gen" => cmd_gen(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "dispose" => cmd_dispose(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("judgegen {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
judgegen - structural test harness compiler

USAGE:
    judgegen <COMMAND> [OPTIONS]

COMMANDS:
    extract <solution.cpp>           Recover the entry-method signature
    gen <solution.cpp>               Generate harness next to the solution
    check <solution.cpp>             Validate encoded records from stdin
    dispose <solution.cpp>           Remove the inserted include line
    version                          Print version

OPTIONS:
    --json                           JSON output (extract)
    --template <file>                Code template to extract from (gen)
    --template-store <dir>           Lookup template by problem id (gen)
    --problem <id>                   Problem id for --template-store (gen)
    --template-dir <dir>             Override embedded templates (gen)
    --input <file>                   Read records from a file (check)
"#
    );
}
