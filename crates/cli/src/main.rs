use clap::Parser;
use sqlzone_application::ports::QueryBackend;
use sqlzone_application::use_cases::{ResolveQueryUseCase, StaticResolveUseCase};
use sqlzone_domain::StaticRecordSet;
use sqlzone_infrastructure::dns::server::DnsServerHandler;
use sqlzone_infrastructure::repositories::SqliteZoneRepository;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "sqlzone")]
#[command(version)]
#[command(about = "sqlzone - authoritative DNS server backed by a SQL zone store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = bootstrap::load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }
    if let Some(database) = cli.database {
        config.database.path = database;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    bootstrap::init_logging(&config);

    info!("Starting sqlzone v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, config.database.max_connections).await?;

    let zones = Arc::new(SqliteZoneRepository::new(pool));

    // Static config must validate before any query is served.
    let backend: Arc<dyn QueryBackend> = match &config.static_zone {
        Some(static_cfg) => {
            let records = StaticRecordSet::try_from(static_cfg)?;
            info!("Using static zone backend");
            Arc::new(StaticResolveUseCase::new(zones, records))
        }
        None => Arc::new(ResolveQueryUseCase::new(zones)),
    };

    let handler = DnsServerHandler::new(backend);
    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    server::dns::start_dns_server(&bind_addr, handler).await
}
