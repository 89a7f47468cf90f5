use rogue_core::EnvError;

use crate::session::ObjectId;

/// Runtime errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// No chest or breakable registered under this id.
    #[error("unknown world object {0:?}")]
    UnknownObject(ObjectId),
    /// A core collaborator was missing (configuration error).
    #[error(transparent)]
    Env(#[from] EnvError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
