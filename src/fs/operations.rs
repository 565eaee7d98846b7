use std::path::Path;

use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{self, AsyncReadExt},
};
use tracing::debug;

/// Reads the whole file while holding a shared lock on it, so that a writer holding an
/// exclusive lock can't hand us a half written document.
pub async fn read_shared(path: &Path) -> Result<String, io::Error> {
    debug!("Reading {path:?}");
    let mut file = File::open(path).await?;
    file.lock_shared()?;

    let mut content = String::new();
    let result = file.read_to_string(&mut content).await;

    file.unlock_async().await?;
    result.map(|_| content)
}
