//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::error::{CliError, Result};
use std::io::{self, Read};

/// Execute the clean command.
pub fn execute_clean(args: CleanArgs) -> Result<()> {
    let text = read_text(args)?;
    println!("{}", sift_processor::clean(text.as_str()));
    Ok(())
}

fn read_text(args: CleanArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(text) = args.text {
        Ok(text)
    } else {
        Err(CliError::InvalidInput(
            "Must specify either TEXT or --stdin".to_string(),
        ))
    }
}
