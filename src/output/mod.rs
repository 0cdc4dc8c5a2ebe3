pub mod table;

use anyhow::Result;
use serde::Serialize;

/// Pretty-print any serializable report as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
