pub mod config;
pub mod event;
pub mod remind;
pub mod schedule;
pub mod session;
pub mod time;
pub mod triage;

use std::io::Read;
use std::path::Path;

/// Read the whole input from `file`, or from stdin when absent or `-`.
pub fn read_input(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
