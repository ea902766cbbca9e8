use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Decline,
}

/// Answers "may this existing file be overwritten?". `None` means no answer
/// could be obtained, e.g. there is no terminal to ask on.
pub trait Confirm {
    fn confirm_overwrite(&self, path: &Path) -> Option<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&Path) -> Option<bool>,
{
    fn confirm_overwrite(&self, path: &Path) -> Option<bool> {
        self(path)
    }
}

/// Fixed answers for non-interactive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    AlwaysProceed,
    AlwaysDecline,
}

impl Confirm for Policy {
    fn confirm_overwrite(&self, _path: &Path) -> Option<bool> {
        Some(matches!(self, Policy::AlwaysProceed))
    }
}

#[derive(Debug, Clone)]
pub struct ConflictResolver<C> {
    confirm: C,
}

impl<C: Confirm> ConflictResolver<C> {
    pub fn new(confirm: C) -> Self {
        Self { confirm }
    }

    /// Only called for paths that already exist. Never touches the filesystem.
    pub fn resolve(&self, existing: &Path) -> Decision {
        match self.confirm.confirm_overwrite(existing) {
            Some(true) => Decision::Proceed,
            Some(false) => Decision::Decline,
            None => {
                tracing::debug!(path = %existing.display(), "no overwrite answer available, declining");
                Decision::Decline
            }
        }
    }
}
