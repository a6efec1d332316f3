//! Interactive console calculator.
//!
//! Reads an expression per line, prompts for a value for each free variable
//! it finds, and prints the result or the error. Type `exit` to quit.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use calc_rs::{Real, builtin_functions, evaluate, find_variables};

fn main() -> io::Result<()> {
    let names: Vec<&str> = builtin_functions().into_iter().collect();

    println!("=== Expression calculator ===");
    println!("Available functions: {}", names.join(", "));
    println!("Example expressions:");
    println!("  (2 + x) * 4 - 5");
    println!("  sqrt(25) + pow(2, 3)");
    println!("  log10(100) * sin(x)");
    println!("Type 'exit' to quit\n");

    let stdin = io::stdin();
    loop {
        print!("\nEnter an expression: ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let expression = line?.trim().to_string();
        if expression.eq_ignore_ascii_case("exit") {
            break;
        }

        let mut values = HashMap::new();
        for name in find_variables(&expression) {
            let value = read_value(&stdin, &name)?;
            values.insert(name, value);
        }

        match evaluate(&expression, &values) {
            Ok(result) => println!("Result: {result}"),
            Err(err) => println!("Error: {err}"),
        }
    }

    println!("Calculator finished.");
    Ok(())
}

fn read_value(stdin: &io::Stdin, name: &str) -> io::Result<Real> {
    loop {
        print!("Enter a value for {name}: ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while reading a variable value",
            ));
        };
        match line?.trim().parse::<Real>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Error: not a valid number, try again."),
        }
    }
}
