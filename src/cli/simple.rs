//! CLI commands: extract, gen, check, dispose

use std::fs;
use std::io::Read;
use std::path::Path;

use super::util::{has_flag, parse_path_arg, parse_value_arg};
use crate::codec::{decode_record, Shape, TreeArena};
use crate::emit::{EmitConfig, Emitter};
use crate::error::Result;
use crate::lifecycle::{self, FileTemplateProvider, TemplateProvider};
use crate::signature::{self, MethodSignature};

pub fn cmd_extract(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err("Usage: judgegen extract <solution.cpp> [--json]".into());
    }

    let source = fs::read_to_string(&args[0])?;
    let signature = signature::extract(&source)?;

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&signature)?);
    } else {
        print_signature(&signature);
    }
    Ok(())
}

pub fn cmd_gen(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(
            "Usage: judgegen gen <solution.cpp> [--template <file>] [--template-dir <dir>]".into(),
        );
    }

    let solution_path = Path::new(&args[0]);
    let source = fs::read_to_string(solution_path)?;
    let template = if let Some(store) = parse_path_arg(args, "--template-store") {
        let problem_id: u64 = parse_value_arg(args, "--problem")
            .ok_or("--template-store requires --problem <id>")?
            .parse()
            .map_err(|_| "--problem expects a numeric id")?;
        FileTemplateProvider::new(store).code_template(problem_id, "cpp")?
    } else if let Some(path) = parse_path_arg(args, "--template") {
        fs::read_to_string(path)?
    } else {
        source.clone()
    };

    let signature = signature::extract(&template)?;
    let emitter = Emitter::with_config(EmitConfig {
        template_dir: parse_path_arg(args, "--template-dir"),
    });
    let artifact = emitter.emit(&signature, &source, solution_path)?;

    println!("shared definitions: {}", artifact.shared_defs_path.display());
    println!("generated program:  {}", artifact.program_path.display());
    Ok(())
}

pub fn cmd_check(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err("Usage: judgegen check <solution.cpp> [--input <file>]".into());
    }

    let source = fs::read_to_string(&args[0])?;
    let signature = signature::extract(&source)?;
    let shapes = signature
        .arguments
        .iter()
        .map(|a| Shape::from_cpp_type(&a.cpp_type))
        .collect::<Result<Vec<_>>>()?;

    let input = match parse_path_arg(args, "--input") {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut arena = TreeArena::new();
    let mut failures = 0usize;
    let mut records = 0usize;
    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records += 1;
        match decode_record(&shapes, line, &mut arena) {
            Ok(_) => println!("record {}: ok", i + 1),
            Err(e) => {
                println!("record {}: {}", i + 1, e);
                failures += 1;
            }
        }
        arena.clear();
    }

    if failures > 0 {
        return Err(format!("{} of {} record(s) malformed", failures, records).into());
    }
    eprintln!("{} record(s) ok", records);
    Ok(())
}

pub fn cmd_dispose(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err("Usage: judgegen dispose <solution.cpp>".into());
    }

    if lifecycle::remove_defs_include(Path::new(&args[0]))? {
        eprintln!("removed inserted include from {}", args[0]);
    } else {
        eprintln!("nothing to restore in {}", args[0]);
    }
    Ok(())
}

fn print_signature(signature: &MethodSignature) {
    let args: Vec<String> = signature
        .arguments
        .iter()
        .map(|a| format!("{} {}", a.cpp_type, a.name))
        .collect();
    println!("class:  {}", signature.class_name);
    println!(
        "method: {} {}({})",
        signature.return_type,
        signature.method_name,
        args.join(", ")
    );
}
