use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use vortex_dns_api::ApiServer;
use vortex_dns_core::{Analytics, ListManager, RefreshSignal};
use vortex_dns_db::SqliteDb;

use crate::list_files::FileListStore;
use crate::refresh::{CommandRefresh, NoopRefresh};
use crate::Args;

pub struct App;

impl App {
    pub async fn run_until_completion(args: Args, config_dir: PathBuf) -> anyhow::Result<()> {
        let sqlite_db = SqliteDb::new(&config_dir.join("query_log.db"))
            .await
            .context("failed to establish an SQLite DB connection")?;

        sqlite_db
            .init_tables()
            .await
            .context("failed to initialize DB tables")?;

        let refresher: Arc<dyn RefreshSignal> = match args.refresh_command.as_deref() {
            Some(command) => {
                Arc::new(CommandRefresh::new(command).context("invalid refresh command")?)
            }
            None => Arc::new(NoopRefresh),
        };

        let persistence = Arc::new(FileListStore::new(config_dir));
        let lists = ListManager::load(persistence, refresher)
            .await
            .context("failed to load the domain lists")?;

        let analytics = Analytics::new(Arc::new(sqlite_db));

        let api_bind_addr = SocketAddr::new(args.host, args.api_port);
        ApiServer::new(Arc::new(lists), analytics)
            .serve(api_bind_addr)
            .await
    }
}
