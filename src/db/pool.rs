use anyhow::anyhow;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use std::str::FromStr;
use tokio_postgres::NoTls;

use super::Db;

impl Db {
    /// Build a connection pool for the given database url. `pool_size`
    /// caps the number of concurrent connections; every room write holds
    /// one for the duration of its transaction.
    pub fn new(url: &str, pool_size: usize) -> anyhow::Result<Self> {
        let cfg = tokio_postgres::Config::from_str(url)?;
        let mgr = Manager::from_config(
            cfg,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );
        let pool = Pool::builder(mgr)
            .max_size(pool_size)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| anyhow!(e))?;

        tracing::debug!(pool_size, "database pool ready");
        Ok(Self { pool })
    }
}
