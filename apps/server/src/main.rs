use anyhow::Context;
use nhub_kernel::config::{ApiConfig, load_config};
use nhub_logger::Logger;
use nhub_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME"));
    if let Some(dir) = &cfg.log.dir {
        logger = logger.path(dir);
        if cfg.log.json {
            logger = logger.json();
        }
    }
    if let Some(filter) = &cfg.log.filter {
        logger = logger.env_filter(filter.clone());
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build().await?.run().await
}
