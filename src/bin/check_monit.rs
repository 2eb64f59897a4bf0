use clap::Parser;
use clap::error::ErrorKind;
use status_checks::{
    check::run_check,
    config::{EndpointOpts, ThresholdOpts},
    evaluate::Verdict,
    feeds::FeedKind,
};
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BASE_URL: &str = "http://localhost:2812";
const DEFAULT_STATUS_URI: &str = "_status?format=xml&level=summary";

/// Check Monit - Icinga/Nagios plugin to check a remote Monit instance
#[derive(Debug, Clone, Parser)]
#[command(name = "check-monit")]
struct Args {
    #[command(flatten)]
    thresholds: ThresholdOpts,

    #[command(flatten)]
    endpoint: EndpointOpts,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    debug: bool,
}

fn init(debug: bool) {
    let level = if debug {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    let filter = filter::Targets::new().with_targets(vec![
        ("status_checks", level),
        ("check_monit", level),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // Help exits 0; any argument error is an UNKNOWN verdict for the
    // scheduler, not clap's usual exit code 2 (that would read as CRIT).
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(Verdict::Ok.exit_code());
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(Verdict::Unknown.exit_code());
        }
    };
    init(args.debug);
    trace!("started with args: {args:?}");

    let endpoint =
        args.endpoint
            .endpoint(DEFAULT_BASE_URL, DEFAULT_STATUS_URI, args.thresholds.timeout);
    let thresholds = args.thresholds.thresholds();

    match run_check(&endpoint, FeedKind::Monit, &thresholds, &args.thresholds.exclude).await {
        Ok((verdict, message)) => {
            println!("{verdict}: {message}");
            std::process::exit(verdict.exit_code());
        }
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(Verdict::Unknown.exit_code());
        }
    }
}
