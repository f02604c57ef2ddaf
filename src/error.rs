use sea_orm::DbErr;
use std::fmt;
use thiserror::Error;

/// An error from an unsuccessful soft delete
#[derive(Error, Debug)]
pub enum SoftDeleteErr {
    /// A hook refused the soft delete. Nothing has been written.
    #[error("{hook} hook failed: {failure}")]
    HookFailed {
        /// The hook that refused
        hook: SoftDeleteHook,
        /// Why it refused
        failure: HookFailure,
    },
    /// A behavior was requested that the entity does not provide
    #[error("`{0}` is not implemented")]
    NotImplemented(&'static str),
    /// An error from the database or raised by a hook, passed through as is
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SoftDeleteErr {
    /// The hook that refused the soft delete, if any
    pub fn failed_hook(&self) -> Option<SoftDeleteHook> {
        match self {
            Self::HookFailed { hook, .. } => Some(*hook),
            _ => None,
        }
    }
}

/// The hooks of the soft delete pipeline, named like the methods of
/// [`SoftDeleteBehavior`](crate::SoftDeleteBehavior)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SoftDeleteHook {
    BeforeSoftDelete,
    AroundSoftDelete,
    AfterSoftDelete,
}

/// Why a hook refused the soft delete
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookFailure {
    /// `soft_deletion_blockers` returned a non-empty list
    Blocked(Vec<SoftDeletionBlocker>),
    /// `before_soft_delete` returned `false`
    Refused,
    /// `around_soft_delete` returned without running the soft delete
    NotProceeded,
}

impl fmt::Display for HookFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Blocked(blockers) => {
                write!(f, "{} deletion blocker(s)", blockers.len())?;
                for (i, blocker) in blockers.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { ", " };
                    write!(f, "{sep}{blocker}")?;
                }
                Ok(())
            }
            Self::Refused => write!(f, "hook returned false"),
            Self::NotProceeded => write!(f, "soft delete was not proceeded"),
        }
    }
}

/// A reason that prevents a row from being soft deleted
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoftDeletionBlocker(String);

impl SoftDeletionBlocker {
    /// Describe a blocker
    pub fn new<S>(reason: S) -> Self
    where
        S: Into<String>,
    {
        Self(reason.into())
    }

    /// The description given to [`SoftDeletionBlocker::new`]
    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoftDeletionBlocker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SoftDeletionBlocker {
    fn from(reason: &str) -> Self {
        Self::new(reason)
    }
}

impl From<String> for SoftDeletionBlocker {
    fn from(reason: String) -> Self {
        Self::new(reason)
    }
}
