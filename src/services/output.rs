use crate::domain::models::JsonOut;
use serde::Serialize;
use std::path::Path;

/// Wrap `data` in the stable `{ ok, data }` envelope used by every `--json`
/// output of the tool.
pub fn to_json_envelope<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

/// Send rendered output to `--output` or stdout. Stdout output always ends
/// with a newline.
pub fn write_out(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None if rendered.ends_with('\n') => print!("{rendered}"),
        None => println!("{rendered}"),
    }
    Ok(())
}
