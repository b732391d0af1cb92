//! Workspace snapshot and status-line formatting.
//!
//! A [`WorkspaceSnapshot`] is the transient view of the window manager's
//! workspaces at the moment of one invocation.  It is validated on
//! construction (ids must be unique) and then rendered into a single line
//! by [`format_status`], e.g. `1 [2] 3`.

use std::collections::HashSet;
use std::fmt;

/// One workspace as reported by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceEntry {
    /// Numeric workspace id.
    pub id: i32,
    /// Whether this workspace currently receives input.
    pub focused: bool,
}

impl WorkspaceEntry {
    pub fn new(id: i32, focused: bool) -> Self {
        Self { id, focused }
    }
}

/// Errors from building a [`WorkspaceSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("duplicate workspace id {0}")]
    DuplicateId(i32),
}

/// How the focused workspace was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusResolution {
    /// Exactly one workspace is focused.
    Single(i32),
    /// No workspace claims focus.  Nothing is highlighted.
    None,
    /// Several workspaces claim focus; the first in query order wins.
    Multiple { chosen: i32, count: usize },
}

impl FocusResolution {
    /// The id that should be highlighted, if any.
    pub fn focused_id(&self) -> Option<i32> {
        match *self {
            FocusResolution::Single(id) => Some(id),
            FocusResolution::None => None,
            FocusResolution::Multiple { chosen, .. } => Some(chosen),
        }
    }

    /// `true` when the snapshot did not have exactly one focused entry.
    pub fn is_ambiguous(&self) -> bool {
        !matches!(self, FocusResolution::Single(_))
    }
}

impl fmt::Display for FocusResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusResolution::Single(id) => write!(f, "workspace {} focused", id),
            FocusResolution::None => write!(f, "no workspace focused"),
            FocusResolution::Multiple { chosen, count } => {
                write!(f, "{} workspaces claim focus, using {}", count, chosen)
            }
        }
    }
}

/// Ordered list of workspaces with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    entries: Vec<WorkspaceEntry>,
}

impl WorkspaceSnapshot {
    /// Build a snapshot, rejecting duplicate ids.
    ///
    /// Query order is preserved; sorting happens only when formatting.
    pub fn new(entries: Vec<WorkspaceEntry>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(SnapshotError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WorkspaceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Determine the focused workspace.
    pub fn focus(&self) -> FocusResolution {
        let mut focused = self.entries.iter().filter(|e| e.focused);
        match focused.next() {
            None => FocusResolution::None,
            Some(first) => {
                let rest = focused.count();
                if rest == 0 {
                    FocusResolution::Single(first.id)
                } else {
                    FocusResolution::Multiple {
                        chosen: first.id,
                        count: rest + 1,
                    }
                }
            }
        }
    }

    /// All ids in ascending numeric order.
    pub fn sorted_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.entries.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids
    }
}

/// Render the snapshot as a single line, e.g. `1 [2] 3`.
///
/// Ids appear in ascending order separated by single spaces.  The focused
/// id (see [`WorkspaceSnapshot::focus`]) is wrapped in square brackets.
/// An empty snapshot yields an empty string.
pub fn format_status(snapshot: &WorkspaceSnapshot) -> String {
    let focused = snapshot.focus().focused_id();
    let line = snapshot
        .sorted_ids()
        .into_iter()
        .map(|id| {
            if Some(id) == focused {
                format!("[{}]", id)
            } else {
                id.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[(i32, bool)]) -> WorkspaceSnapshot {
        WorkspaceSnapshot::new(
            entries
                .iter()
                .map(|&(id, focused)| WorkspaceEntry::new(id, focused))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn middle_workspace_focused() {
        let s = snapshot(&[(1, false), (2, true), (3, false)]);
        assert_eq!(format_status(&s), "1 [2] 3");
    }

    #[test]
    fn single_focused_workspace() {
        let s = snapshot(&[(5, true)]);
        assert_eq!(format_status(&s), "[5]");
    }

    #[test]
    fn ids_are_sorted_numerically_not_lexically() {
        let s = snapshot(&[(10, false), (2, true), (1, false), (9, false)]);
        assert_eq!(format_status(&s), "1 [2] 9 10");
    }

    #[test]
    fn each_id_appears_once_with_one_bracket() {
        let s = snapshot(&[(7, false), (3, false), (4, true), (1, false), (12, false)]);
        let out = format_status(&s);
        let tokens: Vec<&str> = out.split(' ').collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens.iter().filter(|t| t.starts_with('[')).count(), 1);
        let ids: Vec<i32> = tokens
            .iter()
            .map(|t| t.trim_matches(|c| c == '[' || c == ']').parse().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3, 4, 7, 12]);
    }

    #[test]
    fn formatting_is_idempotent() {
        let s = snapshot(&[(3, false), (1, true), (2, false)]);
        assert_eq!(format_status(&s), format_status(&s));
    }

    #[test]
    fn empty_snapshot_formats_to_empty_string() {
        let s = snapshot(&[]);
        assert!(s.is_empty());
        assert_eq!(format_status(&s), "");
        assert_eq!(s.focus(), FocusResolution::None);
    }

    #[test]
    fn no_focus_means_no_brackets() {
        let s = snapshot(&[(1, false), (2, false)]);
        assert_eq!(format_status(&s), "1 2");
        assert!(s.focus().is_ambiguous());
    }

    #[test]
    fn multiple_focus_picks_first_in_query_order() {
        let s = snapshot(&[(4, true), (2, true), (1, false)]);
        assert_eq!(
            s.focus(),
            FocusResolution::Multiple {
                chosen: 4,
                count: 2
            }
        );
        assert_eq!(format_status(&s), "1 2 [4]");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = WorkspaceSnapshot::new(vec![
            WorkspaceEntry::new(1, false),
            WorkspaceEntry::new(1, true),
        ])
        .unwrap_err();
        assert_eq!(err, SnapshotError::DuplicateId(1));
    }

    #[test]
    fn negative_ids_sort_first() {
        let s = snapshot(&[(2, false), (-3, true)]);
        assert_eq!(format_status(&s), "[-3] 2");
    }

    #[test]
    fn single_focus_is_not_ambiguous() {
        let s = snapshot(&[(1, true), (2, false)]);
        assert_eq!(s.focus(), FocusResolution::Single(1));
        assert!(!s.focus().is_ambiguous());
        assert_eq!(s.focus().to_string(), "workspace 1 focused");
    }
}
