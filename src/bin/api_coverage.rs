//! `api-coverage`: report vendor operations the client never issues.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use elevenlabs_client::audit::{self, AuditOptions, OperationFilter};
use elevenlabs_client::telemetry::{SubscriberConfig, init_subscriber};

#[derive(Parser, Debug)]
#[command(name = "api-coverage")]
#[command(about = "Compare the vendor OpenAPI document against the operations the client issues")]
#[command(version)]
struct Args {
    /// OpenAPI document (JSON)
    #[arg(long, default_value = "openapi_pretty.json")]
    spec: PathBuf,

    /// Client source file or directory
    #[arg(long, default_value = "src/client")]
    client: PathBuf,

    /// Only consider operations with one of these tags (comma-separated; `untagged` matches none)
    #[arg(long, default_value = "")]
    include_tags: String,

    /// Drop operations carrying any of these tags (comma-separated)
    #[arg(long, default_value = "")]
    exclude_tags: String,

    /// Only consider these HTTP methods (comma-separated)
    #[arg(long, default_value = "")]
    methods: String,

    /// Print the full list of missing operations
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    details: bool,

    /// Prefix added to client paths that lack it
    #[arg(long, default_value = "/v1")]
    path_prefix: String,

    /// Request constructor to look for in the client source
    #[arg(long, default_value = "ApiRequest::new")]
    constructor: String,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match SubscriberConfig::builder().log_level_str(&args.log_level) {
        Ok(builder) => init_subscriber(builder.build()).unwrap_or_else(|e| {
            eprintln!("api-coverage: {e}");
            None
        }),
        Err(e) => {
            eprintln!("api-coverage: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = AuditOptions {
        spec: args.spec,
        client: args.client,
        filter: OperationFilter::from_csv(&args.methods, &args.include_tags, &args.exclude_tags),
        path_prefix: args.path_prefix,
        constructor: args.constructor,
    };

    match audit::run(&options) {
        Ok(report) => {
            print!("{}", report.render(args.details));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("api-coverage: {e}");
            ExitCode::FAILURE
        }
    }
}
