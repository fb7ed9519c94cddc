use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrconsole_console::api::ApiClient;
use hrconsole_console::data_source::RestDataSource;
use hrconsole_console::export::records_to_csv;
use hrconsole_console::notifier::TerminalNotifier;
use hrconsole_console::render::{render_page, render_statistics, Tabular};
use hrconsole_core::config::ConsoleConfig;
use hrconsole_core::models::{
    ApprovalRequest, AttendanceRequest, Branch, Decision, Deputation, Employee, LeaveApplication,
    LeaveType, Record, RecordKind, Transfer,
};
use hrconsole_core::record_set::RecordSetView;
use hrconsole_core::screen::{ApprovalScreen, ListScreen};
use hrconsole_core::services::seed::Seeded;
use hrconsole_core::services::{DataSource, DecisionSource, InMemoryDataSource, Notifier};
use hrconsole_core::RecordId;

#[derive(Parser, Debug)]
#[command(
    name = "hrconsole",
    about = "Browse and decide HR records from the terminal",
    version
)]
struct Cli {
    /// Where records come from
    #[arg(long, value_enum, default_value_t = SourceKind::Seed, global = true)]
    source: SourceKind,
    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SourceKind {
    /// Built-in demo data
    Seed,
    /// The REST back end at HRCONSOLE_API_BASE_URL
    Rest,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one page of a record kind
    List(ListArgs),
    /// Show request statistics for an approval kind
    Stats {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
    },
    /// Approve or reject a pending request
    Decide(DecideArgs),
    /// Write every record matching the filters as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug, Default, Clone)]
struct FilterArgs {
    /// Case-insensitive text matched against the searchable fields
    #[arg(long)]
    search: Option<String>,
    /// Field filter such as `status=pending`; `key=all` clears the key
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, String)>,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(value_parser = parse_kind)]
    kind: RecordKind,
    #[command(flatten)]
    filter: FilterArgs,
    /// 1-based page number; out-of-range values are clamped
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,
    /// Overrides HRCONSOLE_PAGE_SIZE
    #[arg(long, allow_negative_numbers = true)]
    page_size: Option<i64>,
}

#[derive(Args, Debug)]
struct DecideArgs {
    #[arg(value_parser = parse_kind)]
    kind: RecordKind,
    id: String,
    #[arg(value_parser = parse_decision)]
    decision: Decision,
    /// Audit note stored with the decision
    #[arg(long)]
    note: Option<String>,
    /// Revised requested value as JSON, e.g. a shortened leave period
    #[arg(long)]
    revised: Option<String>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(value_parser = parse_kind)]
    kind: RecordKind,
    #[command(flatten)]
    filter: FilterArgs,
    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_kind(raw: &str) -> Result<RecordKind, String> {
    raw.parse()
}

fn parse_decision(raw: &str) -> Result<Decision, String> {
    raw.parse()
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing filter key in `{}`", raw));
    }
    Ok((key.to_ascii_lowercase(), value.trim().to_string()))
}

/// Builds the data sources for the selected back end.
enum Backend {
    Seed,
    Rest(Arc<ApiClient>),
}

impl Backend {
    fn from_cli(kind: SourceKind, config: &ConsoleConfig) -> anyhow::Result<Self> {
        match kind {
            SourceKind::Seed => Ok(Backend::Seed),
            SourceKind::Rest => {
                let client = ApiClient::from_config(config)?;
                tracing::info!(base_url = %client.base_url(), "Using REST back end");
                Ok(Backend::Rest(Arc::new(client)))
            }
        }
    }

    fn is_seed(&self) -> bool {
        matches!(self, Backend::Seed)
    }

    fn list_source<R: Seeded>(&self) -> Arc<dyn DataSource<R>> {
        match self {
            Backend::Seed => Arc::new(InMemoryDataSource::<R>::seeded()),
            Backend::Rest(client) => Arc::new(RestDataSource::<R>::new(client.clone())),
        }
    }

    fn decision_source<R: Seeded + ApprovalRequest>(&self) -> Arc<dyn DecisionSource<R>> {
        match self {
            Backend::Seed => Arc::new(InMemoryDataSource::<R>::seeded()),
            Backend::Rest(client) => Arc::new(RestDataSource::<R>::new(client.clone())),
        }
    }
}

struct App {
    config: ConsoleConfig,
    backend: Backend,
    notifier: Arc<dyn Notifier>,
}

fn apply_filters<R: Record>(
    view: &mut RecordSetView<R>,
    filter: &FilterArgs,
) {
    if let Some(search) = &filter.search {
        view.set_search_text(search.clone());
    }
    for (key, value) in &filter.filters {
        view.set_field_filter(key.clone(), value.clone());
    }
}

async fn load<R: Seeded>(app: &App) -> anyhow::Result<ListScreen<R>> {
    let mut screen = ListScreen::new(
        app.backend.list_source::<R>(),
        app.notifier.clone(),
        &app.config.screen_defaults(R::KIND),
    )?;
    screen.refresh().await?;
    Ok(screen)
}

async fn list<R: Seeded + Tabular>(app: &App, args: &ListArgs) -> anyhow::Result<()> {
    let mut screen = load::<R>(app).await?;
    let view = screen.view_mut();
    apply_filters(view, &args.filter);
    if let Some(page_size) = args.page_size {
        view.set_page_size(page_size)?;
    }
    view.set_page(args.page);

    print!(
        "{}",
        render_page(
            R::KIND.label(),
            &view.current_page_records(),
            &view.pagination_summary()
        )
    );
    Ok(())
}

async fn export<R: Seeded + Tabular>(app: &App, args: &ExportArgs) -> anyhow::Result<()> {
    let mut screen = load::<R>(app).await?;
    apply_filters(screen.view_mut(), &args.filter);
    let view = screen.view();
    let csv = records_to_csv(&view.filtered_records());

    match &args.output {
        Some(path) => {
            std::fs::write(path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                kind = %R::KIND,
                rows = view.filtered_count(),
                path = %path.display(),
                "Exported records"
            );
        }
        None => print!("{}", csv),
    }
    Ok(())
}

async fn approval_screen<R: Seeded + ApprovalRequest>(
    app: &App,
) -> anyhow::Result<ApprovalScreen<R>> {
    let mut screen = ApprovalScreen::new(
        app.backend.decision_source::<R>(),
        app.notifier.clone(),
        &app.config.screen_defaults(R::KIND),
    )?;
    screen.refresh().await?;
    Ok(screen)
}

async fn stats<R: Seeded + ApprovalRequest>(app: &App) -> anyhow::Result<()> {
    let screen = approval_screen::<R>(app).await?;
    print!(
        "{}",
        render_statistics(R::KIND.label(), &screen.statistics())
    );
    Ok(())
}

async fn decide<R: Seeded + ApprovalRequest>(app: &App, args: &DecideArgs) -> anyhow::Result<()> {
    let revised = args
        .revised
        .as_deref()
        .map(|raw| serde_json::from_str::<R::Value>(raw))
        .transpose()
        .context("Invalid --revised value")?;

    let mut screen = approval_screen::<R>(app).await?;
    let id = resolve_id(screen.view(), &args.id);
    screen
        .submit_decision(&id, args.decision, revised, args.note.as_deref())
        .await?;
    if app.backend.is_seed() {
        tracing::warn!("Seed data is not persisted between runs");
    }
    Ok(())
}

/// Matches the command-line id against loaded ids so numeric ids resolve.
fn resolve_id<R: Record>(view: &RecordSetView<R>, raw: &str) -> RecordId {
    view.records()
        .iter()
        .map(|record| record.id())
        .find(|id| id.to_string() == raw)
        .cloned()
        .unwrap_or_else(|| RecordId::from(raw))
}

async fn run(cli: Cli, app: App) -> anyhow::Result<()> {
    match cli.command {
        Command::List(args) => match args.kind {
            RecordKind::Branch => list::<Branch>(&app, &args).await,
            RecordKind::LeaveType => list::<LeaveType>(&app, &args).await,
            RecordKind::Employee => list::<Employee>(&app, &args).await,
            RecordKind::Deputation => list::<Deputation>(&app, &args).await,
            RecordKind::Transfer => list::<Transfer>(&app, &args).await,
            RecordKind::AttendanceRequest => list::<AttendanceRequest>(&app, &args).await,
            RecordKind::LeaveApplication => list::<LeaveApplication>(&app, &args).await,
        },
        Command::Export(args) => match args.kind {
            RecordKind::Branch => export::<Branch>(&app, &args).await,
            RecordKind::LeaveType => export::<LeaveType>(&app, &args).await,
            RecordKind::Employee => export::<Employee>(&app, &args).await,
            RecordKind::Deputation => export::<Deputation>(&app, &args).await,
            RecordKind::Transfer => export::<Transfer>(&app, &args).await,
            RecordKind::AttendanceRequest => export::<AttendanceRequest>(&app, &args).await,
            RecordKind::LeaveApplication => export::<LeaveApplication>(&app, &args).await,
        },
        Command::Stats { kind } => match kind {
            RecordKind::AttendanceRequest => stats::<AttendanceRequest>(&app).await,
            RecordKind::LeaveApplication => stats::<LeaveApplication>(&app).await,
            other => bail!("{} have no approval statistics", other.label()),
        },
        Command::Decide(args) => match args.kind {
            RecordKind::AttendanceRequest => decide::<AttendanceRequest>(&app, &args).await,
            RecordKind::LeaveApplication => decide::<LeaveApplication>(&app, &args).await,
            other => bail!("{} cannot be approved or rejected", other.label()),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrconsole_core=info,hrconsole_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ConsoleConfig::load()?;
    tracing::debug!(
        api_base_url = %config.api_base_url,
        api_token_set = config.api_token.is_some(),
        page_size = config.page_size,
        request_timeout_secs = config.request_timeout_secs,
        "Loaded configuration from environment/.env"
    );

    let app = App {
        backend: Backend::from_cli(cli.source, &config)?,
        config,
        notifier: Arc::new(TerminalNotifier),
    };
    run(cli, app).await
}
