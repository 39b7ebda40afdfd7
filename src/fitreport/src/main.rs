#[macro_use]
extern crate log;

use std::{io::Write, path::PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fitreport::{Analysis, BatchRunner, UsersFile};
use fitreport_algos::{ReportConfig, TrendForecaster};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
pub struct FitReportCli {
    #[arg(env, long, default_value = "users.json")]
    pub users_file: PathBuf,
    /// Seed for workout and duration picks, random when unset
    #[arg(env = "FITREPORT_SEED", long)]
    pub seed: Option<u64>,
    /// Only process the user with this exact name
    #[arg(long)]
    pub user: Option<String>,
    #[clap(subcommand)]
    pub subcommand: Option<FitReportCommand>,
}

#[derive(Subcommand)]
pub enum FitReportCommand {
    ///
    /// Print the full recommendation report for every user
    ///
    Report {
        #[arg(long, default_value_t = TrendForecaster::DEFAULT_HORIZON_DAYS)]
        horizon_days: u32,
    },
    ///
    /// Print the step forecast only
    ///
    Forecast {
        #[arg(long, default_value_t = TrendForecaster::DEFAULT_HORIZON_DAYS)]
        horizon_days: u32,
    },
    ///
    /// Compare calories burned across workout types
    ///
    Calories,
    ///
    /// Paired t-test on consecutive weight logs
    ///
    Effectiveness,
    ///
    /// Print all time totals
    ///
    Stats,
}

impl FitReportCommand {
    fn analysis(self) -> Analysis {
        match self {
            FitReportCommand::Report { horizon_days } => Analysis::Report(ReportConfig {
                horizon_days,
                ..ReportConfig::default()
            }),
            FitReportCommand::Forecast { horizon_days } => Analysis::Forecast { horizon_days },
            FitReportCommand::Calories => Analysis::Calories,
            FitReportCommand::Effectiveness => Analysis::Effectiveness,
            FitReportCommand::Stats => Analysis::Stats,
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = FitReportCli::parse();

    let mut plans = UsersFile::new(cli.users_file).load()?;
    if let Some(name) = cli.user.as_deref() {
        plans.retain(|plan| plan.name == name);
        if plans.is_empty() {
            bail!("User `{}` not found", name);
        }
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let analysis = cli
        .subcommand
        .unwrap_or(FitReportCommand::Report {
            horizon_days: TrendForecaster::DEFAULT_HORIZON_DAYS,
        })
        .analysis();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = BatchRunner::new(analysis, rng).run(&plans, &mut out)?;
    out.flush()?;

    if summary.failed > 0 {
        warn!(
            "{} of {} users could not be processed",
            summary.failed,
            summary.failed + summary.succeeded
        );
    }

    Ok(())
}
