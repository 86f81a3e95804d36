use palisade_enum_errors::{catalog, EnumError, MessageCatalog, Result};

/// Catalog for a config loader: negative codes are errors, positive are warnings.
fn loader_catalog() -> MessageCatalog {
    catalog![
        "file not found",            // -3
        "permission denied",         // -2
        "syntax error",              // -1
        "unclassified failure",      //  0
        "deprecated key ignored",    //  1
        "default value substituted", //  2
    ]
}

fn parse(text: &str) -> Result<EnumError> {
    let parse = EnumError::checked_new(3, "parse", loader_catalog())?;
    if text.contains("legacy") {
        return parse.try_set(1);
    }
    if text.trim().is_empty() {
        return parse.try_set(-1);
    }
    Ok(parse)
}

fn load_configuration(path: &str, text: &str) -> Result<EnumError> {
    let load = EnumError::checked_new(3, "load_configuration", loader_catalog())?;
    if path.is_empty() {
        return load.try_set(-3);
    }

    // Fold the sub-operation's code into ours and keep its name as context.
    let parsed = parse(text)?;
    Ok(load.try_add(Some(&parsed), 0)?.wrap(&parsed))
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    for (path, text) in [
        ("app.toml", "legacy = true"),
        ("app.toml", "   "),
        ("", "ignored"),
        ("app.toml", "key = 1"),
    ] {
        match load_configuration(path, text) {
            Ok(outcome) => {
                println!("path={:?} text={:?}", path, text);
                println!("   rendered:  {}", outcome);
                println!("   severity:  {}", outcome.severity());
                println!("   frames:    {:?}", outcome.frames().collect::<Vec<_>>());

                let mut line = String::new();
                if outcome.diagnostic_log().write_to(&mut line).is_ok() {
                    println!("   log:       {}", line);
                }
            }
            Err(violation) => println!("   violation: {} ({})", violation, violation.to_public()),
        }
        println!();
    }

    // A code past either edge of the catalog is rejected, never rendered.
    let base = EnumError::new(3, "demo", loader_catalog());
    if let Err(violation) = base.try_set(7) {
        println!("rejected: {}", violation);
    }
}
