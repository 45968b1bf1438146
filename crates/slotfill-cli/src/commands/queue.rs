use clap::Args;
use slotfill_core::{Config, TaskPayload, TaskQueue};

use super::{print_json, InputArgs};

#[derive(Args)]
pub struct QueueArgs {
    /// Ordering strategy (e.g. HIGHEST_PRIORITY_FIRST)
    #[arg(long, short)]
    pub strategy: String,
    #[command(flatten)]
    pub input: InputArgs,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: QueueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let request = args.input.read_request()?;
    let tasks = request.domain_tasks()?;
    let queue = TaskQueue::from_selector(Some(tasks), Some(args.strategy.as_str()))?;

    if args.json {
        let ordered: Vec<TaskPayload> = queue.map(|task| TaskPayload::from(&task)).collect();
        return print_json(&ordered, config.output.pretty);
    }

    for (i, task) in queue.enumerate() {
        println!(
            "{:>3}. {}  {} min  priority {}",
            i + 1,
            task.name(),
            task.duration().num_minutes(),
            task.priority()
        );
    }
    Ok(())
}
