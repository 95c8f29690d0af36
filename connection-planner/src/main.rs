use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, NaiveTime, Utc};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use connection_planner::config::Config;
use connection_planner::domain::{StopId, local_to_utc, parse_hhmm};
use connection_planner::planner::Planner;
use connection_planner::ptv::PtvClient;
use connection_planner::report::render_plan;

/// Estimates connections at the interchange station for direct services.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Departure time for the first train (HH:MM, local time)
    #[arg(value_parser = parse_hhmm)]
    departure_time: NaiveTime,

    /// Stop id the first train departs from
    departure_station: StopId,

    /// Configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Travel date (YYYY-MM-DD); defaults to today in the configured zone
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = Config::load(&args.config)?;
    config.apply_env();

    let planner_config = config.planner_config()?;
    let client = PtvClient::new(config.ptv_config()?)?;

    let tz = planner_config.timezone;
    let date = args
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&tz).date_naive());
    let departure_time = local_to_utc(date, args.departure_time, &tz)?;
    info!(
        local = %date.and_time(args.departure_time),
        utc = %departure_time,
        origin = %args.departure_station,
        "planning"
    );

    let planner = Planner::new(&client, &planner_config);
    let plan = planner.plan(departure_time, args.departure_station).await?;

    Ok(render_plan(&plan, &tz))
}
