use serde::Serialize;

/// Status of a git working tree, as reported by
/// `git status --porcelain=v2 --branch -z`.
///
/// Paths are kept exactly as git printed them, except that bytes which aren't
/// valid UTF-8 become U+FFFD. Strict parsing fails on those instead.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub num_added: usize,
    pub num_deleted: usize,
    pub num_updated: usize,
    pub num_renamed: usize,
    pub num_copied: usize,
    pub num_conflicts: usize,
    pub num_untracked: usize,
    pub num_ignored: usize,

    /// Hash of the current commit, empty before the first commit.
    pub commit: String,
    /// Empty when HEAD is detached.
    pub local_branch: String,
    /// Upstream of the local branch, empty when none is configured.
    pub remote_branch: String,
    pub ahead: u32,
    pub behind: u32,
    pub stash_count: u32,

    /// No commit has been made yet.
    pub is_initial: bool,
    /// HEAD does not point to a branch.
    pub is_detached: bool,

    pub untracked: Vec<String>,
    pub ignored: Vec<String>,
    pub conflicted: Vec<String>,
    pub renames: Vec<Rename>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub kind: RenameKind,
    /// Similarity between source and target, 0 to 100.
    pub score: u8,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenameKind {
    Renamed,
    Copied,
}

impl Status {
    pub fn is_clean(&self) -> bool {
        self.num_added == 0
            && self.num_deleted == 0
            && self.num_updated == 0
            && self.num_renamed == 0
            && self.num_copied == 0
            && self.num_conflicts == 0
            && self.num_untracked == 0
    }

    pub(crate) fn count_change(&mut self, code: char) {
        match code {
            'A' => self.num_added += 1,
            'D' => self.num_deleted += 1,
            'M' | 'T' => self.num_updated += 1,
            'R' => self.num_renamed += 1,
            'C' => self.num_copied += 1,
            '.' => (),
            other => log::debug!("Ignoring unknown change code {:?}", other),
        }
    }

    pub(crate) fn push_untracked(&mut self, path: &str) {
        self.untracked.push(path.to_string());
        self.num_untracked += 1;
    }

    pub(crate) fn push_ignored(&mut self, path: &str) {
        self.ignored.push(path.to_string());
        self.num_ignored += 1;
    }

    pub(crate) fn push_conflicted(&mut self, path: &str) {
        self.conflicted.push(path.to_string());
        self.num_conflicts += 1;
    }
}
