use clap::Args;
use slotfill_core::{CalendarEventsGroup, Config, GroupBacking};

use super::{print_json, InputArgs};

#[derive(Args)]
pub struct FreeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Interval container for free time: array or linked
    #[arg(long)]
    pub backing: Option<GroupBacking>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let request = args.input.read_request()?;
    let (work_start, work_end) = request.work_window()?;

    let calendar = CalendarEventsGroup::new(request.calendar_events(), work_start, work_end);
    let backing = args.backing.unwrap_or(config.scheduler.interval_backing);
    let free = calendar.free_time_group(backing);
    tracing::debug!(%backing, ranges = free.len(), "computed free time");

    if args.json {
        return print_json(&free.ranges(), config.output.pretty);
    }

    if free.is_empty() {
        println!("No free time.");
        return Ok(());
    }
    for range in free.iter() {
        println!("{range}  ({} min)", range.duration().num_minutes());
    }
    println!("Total: {} min", free.total_duration().num_minutes());
    Ok(())
}
