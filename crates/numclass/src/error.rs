#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The facts API could not be reached at all.
    #[error("Facts transport error: {0}")]
    Transport(String),

    /// The facts API answered but its body could not be read.
    #[error("Facts read error: {0}")]
    Read(String),
}
