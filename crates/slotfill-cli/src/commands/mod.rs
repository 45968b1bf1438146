pub mod config;
pub mod free;
pub mod queue;
pub mod schedule;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use slotfill_core::ScheduleRequest;

/// `--input` argument shared by request-reading commands.
#[derive(Args)]
pub struct InputArgs {
    /// Request JSON file ("-" or omitted reads stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read and parse the request from the file, or stdin when absent or `-`.
    pub fn read_request(&self) -> Result<ScheduleRequest, Box<dyn std::error::Error>> {
        let json = match self.input.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        Ok(ScheduleRequest::from_json(&json)?)
    }
}

/// Print `value` as JSON, pretty or compact.
pub fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
