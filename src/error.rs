use thiserror::Error;

/// Errors raised before any OS call is made.
///
/// OS-level failures never surface here: the facility's calls either succeed
/// or fail, and the bridge reports failure as `false` or `None`. The only
/// thing that can go wrong locally is caller input that never reaches the OS.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
