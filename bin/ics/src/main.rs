use std::{env, path::PathBuf, process};

use anyhow::anyhow;
use clap::Parser;
use ics::{
    cli::{Cli, Commands, assess::AssessConfig, eligibility::EligibilityConfig},
    reports::{fetch_remote_frames, load_local_frames, log_frame_span},
    startup_message::startup_message,
};
use ics_assessment::resolution::resolve;
use ics_eligibility::{
    EligibilityWindow,
    frames::{discover_operators, sort_frames},
};
use ics_performance::frame::PerformanceFrame;
use ics_report_fetcher::{ipfs::IpfsClient, retry::RetryConfig};
use ics_storage::{
    dir::setup_data_dir,
    eligible_set::{DEFAULT_ELIGIBLE_FILE, write_eligible_set},
    frames::write_frames_meta,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "ics";

/// Entry point. Initializes logging, parses CLI arguments and runs the selected command.
/// Exits non-zero if the command fails or is interrupted with Ctrl-C.
fn main() {
    let cli = Cli::parse();

    // Set the default log level based on verbosity flag or RUST_LOG env var
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(cli.verbosity.directive()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    info!("\n{}", startup_message());

    let result = match cli.command {
        Commands::Eligibility(config) => run_async(run_eligibility(*config, cli.data_dir)),
        Commands::Assess(config) => run_assess(config),
    };

    if let Err(err) = result {
        error!("{err:?}");
        process::exit(1);
    }
}

fn run_async(task: impl Future<Output = anyhow::Result<()>>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => Err(anyhow!("Ctrl-C received, aborting")),
            result = task => result,
        }
    })
}

/// Collects the performance frames, folds each operator's verdicts over them and writes
/// the eligible operators.
pub async fn run_eligibility(
    config: EligibilityConfig,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if config.reports.is_empty() && config.cids.is_empty() {
        return Err(anyhow!("No reports given, pass at least one --report or --cid"));
    }
    info!(
        "Evaluating a {}-day eligibility window on {}",
        config.min_days, config.network.network
    );

    let mut frames = load_local_frames(&config.reports)?;
    if !config.cids.is_empty() {
        let client = IpfsClient::new(
            config.ipfs_gateway.clone(),
            config.request_timeout,
            RetryConfig::new(config.fetch_attempts, config.fetch_retry_delay),
        )?;
        frames.extend(fetch_remote_frames(&client, &config.cids).await?);
    }

    sort_frames(&mut frames);
    log_frame_span(&frames, &config.network);

    let window = EligibilityWindow::new(config.min_days, config.network.clock());
    let operators = discover_operators(&frames);
    let eligible = window.evaluate(&frames, &operators);
    info!(
        "{} of {} operators reached {} days of good performance",
        eligible.len(),
        operators.len(),
        config.min_days
    );

    let output = match config.output {
        Some(output) => output,
        None => setup_data_dir(APP_NAME, data_dir)?.join(DEFAULT_ELIGIBLE_FILE),
    };
    write_eligible_set(&output, &eligible)?;

    if let Some(frames_output) = config.frames_output {
        let frames_meta: Vec<_> = frames.iter().map(PerformanceFrame::meta).collect();
        write_frames_meta(frames_output, &frames_meta)?;
    }

    Ok(())
}

pub fn run_assess(config: AssessConfig) -> anyhow::Result<()> {
    let resolution = resolve(&config.experience, &config.humanity, &config.engagement);

    for score in &resolution.scores {
        info!(
            "Total {} score: {} (limits: min={}, max={})",
            score.policy.category, score.score, score.policy.min_score, score.policy.max_score
        );
    }
    info!("Sum of all scores: {}", resolution.total);

    if resolution.is_eligible() {
        info!("Eligible: minimum criteria met in all categories");
    } else {
        let missing: Vec<_> = resolution
            .missing
            .iter()
            .map(ToString::to_string)
            .collect();
        info!(
            "Not eligible: requirements not met in category(ies): {}",
            missing.join(", ")
        );
    }

    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use serde_json::json;

    use super::*;

    fn write_report(dir: &Path, name: &str, report: serde_json::Value) -> String {
        let path = dir.join(name);
        fs::write(&path, report.to_string()).expect("write report");
        path.display().to_string()
    }

    fn eligibility_config(args: &[&str]) -> EligibilityConfig {
        let cli = Cli::parse_from(["program", "eligibility"].iter().chain(args));
        match cli.command {
            Commands::Eligibility(config) => *config,
            Commands::Assess(_) => panic!("expected the eligibility command"),
        }
    }

    #[tokio::test]
    async fn test_run_eligibility_writes_sorted_output() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let good = json!({ "validators": { "v": { "perf": { "assigned": 10, "included": 10 } } } });
        let bad = json!({ "validators": { "v": { "perf": { "assigned": 10, "included": 1 } } } });
        let v1 = write_report(
            dir.path(),
            "v1.json",
            json!({
                "frame": [0, 225],
                "threshold": 0.9,
                "operators": { "2": good, "10": good, "5": bad }
            }),
        );
        let v2 = write_report(
            dir.path(),
            "v2.json",
            json!([{
                "frame": [225, 450],
                "operators": {
                    "2": { "validators": { "v": { "distributed_rewards": 7 } } },
                    "10": { "validators": { "v": { "distributed_rewards": 3 } } },
                    "5": { "validators": { "v": { "distributed_rewards": 9 } } }
                }
            }]),
        );
        let output = dir.path().join("eligible.json");
        let frames_output = dir.path().join("frames.json");

        let config = eligibility_config(&[
            "--report",
            &v2,
            "--report",
            &v1,
            "--min-days",
            "2",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--frames-output",
            frames_output.to_str().expect("utf-8 path"),
        ]);
        run_eligibility(config, None)
            .await
            .expect("evaluation should succeed");

        assert_eq!(
            fs::read_to_string(&output).expect("read output"),
            r#"["10","2"]"#
        );
        let frames: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&frames_output).expect("read frames"))
                .expect("valid json");
        assert_eq!(frames[0]["version"], "v1");
        assert_eq!(frames[1]["version"], "v2");
    }

    #[tokio::test]
    async fn test_run_eligibility_without_reports_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = eligibility_config(&[]);

        let result = run_eligibility(config, Some(dir.path().to_path_buf())).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_run_assess() {
        let config = AssessConfig {
            experience: vec![6],
            humanity: vec![4],
            engagement: vec![2],
        };

        assert!(run_assess(config).is_ok());
    }
}
