//! Loading the bank table in the background

use routing_common::directory::BankDirectory;
use routing_common::loader;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// **Starts the one-time load of the bank table**
///
/// Parsing runs on the blocking thread pool, so the server can accept requests meanwhile;
/// they are answered with 503 until the table is published.
///
/// The table is published even if loading fails, in which case it's empty.
pub fn spawn_loader(csv_path: PathBuf, directory: Arc<BankDirectory>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let table = loader::load_or_empty(&csv_path);
        directory.publish(table);
    })
}
