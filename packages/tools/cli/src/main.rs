//! rowgate CLI (`rowgate`)
//!
//! 임의의 MySQL 테이블을 조회, 검색, 편집하는 Operator 도구입니다.
//! 결과는 stdout, 로그는 stderr로 나갑니다.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rowgate_store::Store;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "rowgate")]
#[command(author, version, about = "rowgate - schema-driven MySQL data access", long_about = None)]
struct Cli {
    /// Database URL (overrides ROWGATE_DATABASE_URL and the config file)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Schema
    // ─────────────────────────────────────────────────────────────────────────
    /// List tables in the current database
    Tables,

    /// List searchable columns of a table
    Columns {
        table: String,

        /// Only text columns
        #[arg(long)]
        text_only: bool,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Read
    // ─────────────────────────────────────────────────────────────────────────
    /// Show rows of a table
    View {
        table: String,
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Show the most recent rows by key column
    Recent {
        table: String,

        /// Key column to order by (descending)
        #[arg(long)]
        pk: Option<String>,

        #[arg(long)]
        limit: Option<u64>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Search one table by text, number or date
    Search { table: String, term: String },

    /// Search every table in the database
    SearchAll { term: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────
    /// Generate the next sequential code for a column
    NextId {
        table: String,
        column: String,
        prefix: String,
    },

    /// Insert a row
    Insert {
        table: String,

        /// Column assignment (column=value, empty value is NULL)
        #[arg(long = "set", required = true)]
        sets: Vec<String>,

        /// Key column to fill with a generated code when omitted
        #[arg(long, requires = "prefix")]
        pk: Option<String>,

        /// Prefix for the generated code
        #[arg(long, requires = "pk")]
        prefix: Option<String>,
    },

    /// Update rows matching a key
    Update {
        table: String,

        /// Key column (column=value, repeat for composite keys)
        #[arg(long = "key", required = true)]
        keys: Vec<String>,

        #[arg(long = "set", required = true)]
        sets: Vec<String>,
    },

    /// Delete rows matching a key
    Delete {
        table: String,

        #[arg(long = "key", required = true)]
        keys: Vec<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Match records
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage paired-competitor records
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand enums
// ─────────────────────────────────────────────────────────────────────────────

#[derive(clap::Args)]
struct MatchColumnArgs {
    /// First participant column
    #[arg(long, default_value = "player1_id")]
    first: String,

    /// Second participant column
    #[arg(long, default_value = "player2_id")]
    second: String,

    /// Winner column
    #[arg(long, default_value = "winner_id")]
    winner: String,
}

#[derive(Subcommand)]
enum MatchAction {
    /// Insert a match after checking the winner
    Insert {
        table: String,

        #[command(flatten)]
        columns: MatchColumnArgs,

        #[arg(long = "set", required = true)]
        sets: Vec<String>,

        /// Columns that must be present (comma-separated)
        #[arg(long, value_delimiter = ',')]
        required: Vec<String>,
    },

    /// Set the winner of an existing match
    SetWinner {
        table: String,

        #[command(flatten)]
        columns: MatchColumnArgs,

        #[arg(long = "key", required = true)]
        keys: Vec<String>,

        /// Winner value (empty clears it)
        winner: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 로깅 초기화 (stdout은 결과 전용)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rowgate=info,rowgate_store=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 설정 로드 (--database-url > 환경변수 > 설정 파일)
    let config = CliConfig::load()?;
    let store_config = config.store_config(cli.database_url.as_deref())?;
    tracing::debug!("store config: {:?}", store_config);

    let store = Store::connect(&store_config).await?;
    let format = cli.format;
    let limit = |given: Option<u64>| given.unwrap_or_else(|| config.default_limit());

    // 명령 실행
    match cli.command {
        Commands::Tables => commands::schema::tables(&store, format).await,
        Commands::Columns { table, text_only } => {
            commands::schema::columns(&store, format, &table, text_only).await
        }

        Commands::View { table, limit: n } => {
            commands::records::view(&store, format, &table, limit(n)).await
        }
        Commands::Recent { table, pk, limit: n } => {
            commands::records::recent(&store, format, &table, pk.as_deref(), limit(n)).await
        }

        Commands::Search { table, term } => {
            commands::search::search(&store, format, &table, &term).await
        }
        Commands::SearchAll { term } => commands::search::search_all(&store, format, &term).await,

        Commands::NextId {
            table,
            column,
            prefix,
        } => commands::ids::next_id(&store, format, &table, &column, &prefix).await,

        Commands::Insert {
            table,
            sets,
            pk,
            prefix,
        } => {
            commands::records::insert(&store, format, &table, &sets, pk.as_deref(), prefix.as_deref())
                .await
        }
        Commands::Update { table, keys, sets } => {
            commands::records::update(&store, format, &table, &keys, &sets).await
        }
        Commands::Delete { table, keys } => {
            commands::records::delete(&store, format, &table, &keys).await
        }

        Commands::Match { action } => match action {
            MatchAction::Insert {
                table,
                columns,
                sets,
                required,
            } => {
                let columns = columns.resolve()?;
                commands::matches::insert(&store, format, &table, &columns, &sets, &required).await
            }
            MatchAction::SetWinner {
                table,
                columns,
                keys,
                winner,
            } => {
                let columns = columns.resolve()?;
                commands::matches::set_winner(&store, format, &table, &columns, &keys, &winner)
                    .await
            }
        },
    }
}

impl MatchColumnArgs {
    fn resolve(&self) -> anyhow::Result<rowgate_core::matches::MatchColumns> {
        Ok(rowgate_core::matches::MatchColumns::new(
            &self.first,
            &self.second,
            &self.winner,
        )?)
    }
}
