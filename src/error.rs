// Every variant states *where* things went wrong.
// Canvas operations themselves never fail; only the host and the export path do.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Snapshot error: {0}")]
    Snapshot(String), // Converting the raster into an image buffer failed
}

static_assertions::assert_impl_all!(Error: std::error::Error, Send, Sync);
