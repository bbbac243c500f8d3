use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The classified block sequence was empty — nothing to render. The only
    /// failure the renderer itself raises; malformed block content is
    /// tolerated, not rejected.
    #[error("report contains no renderable content")]
    EmptyReport,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
