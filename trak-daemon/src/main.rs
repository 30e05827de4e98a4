use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::Level;
use trak_daemon::{api, store::TaskStore};

#[derive(Debug, Parser)]
struct Cli {
    #[clap(
        long,
        env = "TRAKD_LISTEN",
        default_value = "127.0.0.1:1337",
        help = "API endpoint to listen on"
    )]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .pretty()
        .init();

    let store = Arc::new(TaskStore::new());
    api::run(args.listen, store).await
}
