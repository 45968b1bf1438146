use clap::Args;
use slotfill_core::{handle_schedule_request, Config, GroupBacking, SchedulingAlgorithm};

use super::{print_json, InputArgs};

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Override the request's algorithm (e.g. LONGEST_TASK_FIRST)
    #[arg(long, short)]
    pub algorithm: Option<SchedulingAlgorithm>,
    /// Interval container for free time: array or linked
    #[arg(long)]
    pub backing: Option<GroupBacking>,
    /// Pretty-print the response (defaults to output.pretty)
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,
    /// Print the response on a single line
    #[arg(long)]
    pub compact: bool,
}

impl ScheduleArgs {
    /// Flags win over `output.pretty`.
    fn pretty_output(&self, configured: bool) -> bool {
        if self.compact {
            false
        } else {
            self.pretty || configured
        }
    }
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut request = args.input.read_request()?;

    if let Some(algorithm) = args.algorithm {
        request.algorithm_type = Some(algorithm.to_string());
    }
    let mut settings = config.scheduler;
    if let Some(backing) = args.backing {
        settings.interval_backing = backing;
    }

    tracing::debug!(
        algorithm = request.algorithm_type.as_deref().unwrap_or("default"),
        backing = %settings.interval_backing,
        events = request.events.len(),
        "handling schedule request"
    );
    let response = handle_schedule_request(&request, &settings)?;
    print_json(&response, args.pretty_output(config.output.pretty))
}
