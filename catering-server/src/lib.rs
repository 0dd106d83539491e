//! Catering Order Server - 宴席订菜配置服务
//!
//! # Architecture overview
//!
//! The server owns one wizard run: a dish catalog, an order book of
//! per-session selections, and the derived procurement summary.
//!
//! - **Order aggregation** (`orders`): the order book, the summary engine
//!   and the wizard stage machine
//! - **Services** (`services`): catalog cache with push updates and
//!   fallback, fire-and-forget archive sink
//! - **HTTP API** (`api`): axum routes for the wizard UI
//! - **Core** (`core`): configuration, application state, server lifecycle
//!
//! # Module structure
//!
//! ```text
//! catering-server/src/
//! ├── core/          # Config, AppState, Server
//! ├── orders/        # aggregation engine, summary cache, wizard stages
//! ├── services/      # catalog service/watcher, archive worker
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging setup, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use self::core::{AppState, Channels, Config, Server};
pub use orders::{SummaryCache, WizardStage, compute_summary};
pub use services::{ArchiveSink, CatalogService, CatalogSource};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______      __           _
  / ____/___ _/ /____  _____(_)___  ____ _
 / /   / __ `/ __/ _ \/ ___/ / __ \/ __ `/
/ /___/ /_/ / /_/  __/ /  / / / / / /_/ /
\____/\__,_/\__/\___/_/  /_/_/ /_/\__, /
                                 /____/
    "#
    );
}

/// Set up the process environment: dotenv and logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
