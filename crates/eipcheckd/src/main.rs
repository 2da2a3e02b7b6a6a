// # eipcheckd - Unattached Elastic IP report job
//
// This binary is a THIN integration layer: all audit logic lives in
// eipcheck-core. It is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Building the EC2 lister and SNS notifier from the AWS default chain
// 4. Running one audit and printing the response
//
// The job runs once and exits; scheduling is left to the invoker
// (cron, EventBridge, a Kubernetes CronJob, ...).
//
// ## Configuration
//
// - `EIPCHECK_TOPIC_ARN`: SNS topic ARN receiving the report (required)
// - `EIPCHECK_REGION`: Region override (default: AWS SDK provider chain)
// - `EIPCHECK_DRY_RUN`: `true`/`1`/`yes` logs the report instead of publishing
// - `EIPCHECK_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
// - `EIPCHECK_EVENT`: Optional JSON trigger payload (accepted, ignored)
//
// Credentials are resolved by the AWS SDK (environment, profile, IMDS, ...).
//
// ## Example
//
// ```bash
// export EIPCHECK_TOPIC_ARN=arn:aws:sns:ap-southeast-2:123456789012:EIPCheckNotifier
// export EIPCHECK_REGION=ap-southeast-2
//
// eipcheckd
// {"statusCode":200}
// ```

use anyhow::{Context, Result};
use eipcheck_core::{AddressAuditor, AuditOutcome, AuditorConfig};
use eipcheck_lister_ec2::Ec2AddressLister;
use eipcheck_notifier_sns::SnsNotifier;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Audit completed (with or without a report)
/// - 1: Configuration or startup error
/// - 2: Runtime error (listing or publishing failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EipcheckExitCode {
    /// Audit completed
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (provider call failed)
    RuntimeError = 2,
}

impl From<EipcheckExitCode> for ExitCode {
    fn from(code: EipcheckExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
#[derive(Debug)]
struct Config {
    topic_arn: String,
    region: Option<String>,
    dry_run: bool,
    log_level: String,
    event: serde_json::Value,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let topic_arn = lookup("EIPCHECK_TOPIC_ARN").unwrap_or_default();

        let dry_run = match lookup("EIPCHECK_DRY_RUN") {
            Some(value) => parse_flag(&value).with_context(|| {
                format!("EIPCHECK_DRY_RUN must be true or false. Got: '{}'", value)
            })?,
            None => false,
        };

        let event = match lookup("EIPCHECK_EVENT") {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
                .context("EIPCHECK_EVENT must be valid JSON")?,
            _ => serde_json::Value::Null,
        };

        Ok(Self {
            topic_arn,
            region: lookup("EIPCHECK_REGION").filter(|r| !r.trim().is_empty()),
            dry_run,
            log_level: lookup("EIPCHECK_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            event,
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.topic_arn.is_empty() {
            anyhow::bail!(
                "EIPCHECK_TOPIC_ARN is required. \
                Set it via: export EIPCHECK_TOPIC_ARN=arn:aws:sns:<region>:<account>:<topic>"
            );
        }

        self.auditor_config().validate()?;

        if parse_level(&self.log_level).is_none() {
            anyhow::bail!(
                "EIPCHECK_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        Ok(())
    }

    /// Core auditor configuration
    fn auditor_config(&self) -> AuditorConfig {
        AuditorConfig::new(&self.topic_arn).with_dry_run(self.dry_run)
    }
}

/// Parse a boolean environment flag
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Parse a log level name
fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return EipcheckExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return EipcheckExitCode::ConfigError.into();
    }

    // Initialize tracing (stdout is reserved for the response)
    let log_level = parse_level(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return EipcheckExitCode::ConfigError.into();
    }

    info!("Starting eipcheckd");
    info!(
        "Reporting to {}{}",
        config.topic_arn,
        if config.dry_run { " (dry-run)" } else { "" }
    );

    // Fetch and publish are sequential; one thread is enough
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return EipcheckExitCode::RuntimeError.into();
        }
    };

    let code = rt.block_on(async {
        let sdk_config = load_sdk_config(config.region.as_deref()).await;
        match require_region(&sdk_config) {
            Ok(region) => info!("Auditing region {}", region),
            Err(e) => {
                error!("{}", e);
                return EipcheckExitCode::ConfigError;
            }
        }

        match run_audit(config, &sdk_config).await {
            Ok(outcome) => {
                match serde_json::to_string(&outcome.response()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => error!("Failed to serialize response: {}", e),
                }
                EipcheckExitCode::Success
            }
            Err(e) => {
                error!("Audit failed: {:#}", e);
                exit_code_for(&e)
            }
        }
    });

    code.into()
}

/// Load shared AWS configuration, applying the region override if any
async fn load_sdk_config(region: Option<&str>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(aws_config::Region::new(region.to_string()));
    }
    loader.load().await
}

/// The region the audit will run against; missing is a configuration error
fn require_region(sdk_config: &aws_config::SdkConfig) -> eipcheck_core::Result<String> {
    sdk_config
        .region()
        .map(|region| region.to_string())
        .ok_or_else(|| {
            eipcheck_core::Error::config(
                "No AWS region configured. Set EIPCHECK_REGION or AWS_REGION",
            )
        })
}

/// Map a failed audit onto an exit code
fn exit_code_for(err: &anyhow::Error) -> EipcheckExitCode {
    match err.downcast_ref::<eipcheck_core::Error>() {
        Some(core) if core.is_config() => EipcheckExitCode::ConfigError,
        _ => EipcheckExitCode::RuntimeError,
    }
}

/// Build the AWS-backed auditor and run one audit
async fn run_audit(config: Config, sdk_config: &aws_config::SdkConfig) -> Result<AuditOutcome> {
    let auditor = AddressAuditor::new(
        Box::new(Ec2AddressLister::from_conf(sdk_config)),
        Box::new(SnsNotifier::from_conf(sdk_config)),
        config.auditor_config(),
    )?;

    let outcome = auditor.handle(&config.event).await?;

    match &outcome {
        AuditOutcome::Clean => info!("Audit complete: nothing to report"),
        AuditOutcome::DryRun { unattached } => {
            info!("Audit complete: {} unattached EIP(s), not published (dry-run)", unattached)
        }
        AuditOutcome::Published { unattached, .. } => {
            info!("Audit complete: reported {} unattached EIP(s)", unattached)
        }
    }

    Ok(outcome)
}
