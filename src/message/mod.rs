// Message module - conventional commit assembly
//
// Holds the form snapshot and the template that turns it into a commit
// message. The template is a pure function: equal snapshots always produce
// the same string, so the preview can be rebuilt at any time without
// tracking what changed.

use std::fmt;

/// Shown in the preview while the form has no content at all
pub const EMPTY_PLACEHOLDER: &str = "(Start typing or select a type to generate...)";

/// Stand-in for a breaking change the user has not described yet
pub const BREAKING_PLACEHOLDER: &str = "<explain what changed>";

/// Commit types accepted by the form's type select
///
/// The list matches the conventional-commit vocabulary; the select also
/// allows an empty choice, which callers model as `Option<CommitType>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitType {
    #[default]
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// All selectable types, in display order
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
        ]
    }

    /// The literal that appears in the commit header
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Revert => "revert",
            CommitType::Chore => "chore",
        }
    }

    /// Cycle forward through the select, passing through the empty choice
    ///
    /// `None` -> first type, last type -> `None`.
    pub fn cycle_next(current: Option<CommitType>) -> Option<CommitType> {
        let all = Self::all();
        match current {
            None => Some(all[0]),
            Some(t) => {
                let idx = all.iter().position(|&c| c == t).unwrap_or(0);
                if idx + 1 < all.len() {
                    Some(all[idx + 1])
                } else {
                    None
                }
            }
        }
    }

    /// Cycle backward through the select, passing through the empty choice
    pub fn cycle_prev(current: Option<CommitType>) -> Option<CommitType> {
        let all = Self::all();
        match current {
            None => Some(all[all.len() - 1]),
            Some(t) => {
                let idx = all.iter().position(|&c| c == t).unwrap_or(0);
                if idx == 0 {
                    None
                } else {
                    Some(all[idx - 1])
                }
            }
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the form at one instant
///
/// Free-text fields are stored trimmed; the reader that produces this
/// snapshot is responsible for the trimming. There is no identity and no
/// validation - an untouched form is simply all-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub commit_type: Option<CommitType>,
    pub scope: String,
    pub subject: String,
    pub body: String,
    pub footer: String,
    pub breaking: bool,
    pub breaking_detail: String,
}

impl FormState {
    /// Whether anything would appear in the rendered message
    ///
    /// The breaking-detail text deliberately does not count: the field is
    /// hidden while the flag is off, so stale detail text alone keeps the
    /// preview on the placeholder.
    pub fn has_content(&self) -> bool {
        self.commit_type.is_some()
            || !self.scope.is_empty()
            || !self.subject.is_empty()
            || !self.body.is_empty()
            || !self.footer.is_empty()
            || self.breaking
    }
}

/// Render a form snapshot into the commit message shown in the preview
///
/// Header grammar: `type(scope)!: subject`, where every piece is optional.
/// The `: ` separator appears when a type is present, or when there is a
/// subject without a type. The body follows after a blank line, then the
/// footer block (breaking-change line plus free-form footer) after another.
pub fn build_message(form: &FormState) -> String {
    if !form.has_content() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut header = String::new();
    if let Some(commit_type) = form.commit_type {
        header.push_str(commit_type.as_str());
    }
    if !form.scope.is_empty() {
        header.push('(');
        header.push_str(&form.scope);
        header.push(')');
    }
    if form.breaking {
        header.push('!');
    }
    if form.commit_type.is_some() || !form.subject.is_empty() {
        header.push_str(": ");
    }
    header.push_str(&form.subject);

    let mut message = header;

    if !form.body.is_empty() {
        message.push_str("\n\n");
        message.push_str(&form.body);
    }

    let mut footer_lines: Vec<String> = Vec::new();
    if form.breaking {
        let detail = if form.breaking_detail.is_empty() {
            BREAKING_PLACEHOLDER
        } else {
            &form.breaking_detail
        };
        footer_lines.push(format!("BREAKING CHANGE: {detail}"));
    }
    if !form.footer.is_empty() {
        footer_lines.push(form.footer.clone());
    }

    if !footer_lines.is_empty() {
        message.push_str("\n\n");
        message.push_str(&footer_lines.join("\n"));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::default()
    }

    #[test]
    fn empty_form_renders_placeholder() {
        assert_eq!(build_message(&form()), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn stale_breaking_detail_alone_is_not_content() {
        // The detail field is hidden while the flag is off; text left in it
        // must not resurrect the preview.
        let mut f = form();
        f.breaking_detail = "dropped the v1 endpoint".to_string();
        assert!(!f.has_content());
        assert_eq!(build_message(&f), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn full_header_with_scope_and_breaking_marker() {
        let mut f = form();
        f.commit_type = Some(CommitType::Feat);
        f.scope = "ui".to_string();
        f.breaking = true;
        f.subject = "add button".to_string();
        let message = build_message(&f);
        assert!(message.starts_with("feat(ui)!: add button"));
    }

    #[test]
    fn subject_without_type_keeps_separator() {
        let mut f = form();
        f.subject = "fix typo".to_string();
        assert_eq!(build_message(&f), ": fix typo");
    }

    #[test]
    fn empty_scope_emits_no_parentheses() {
        let mut f = form();
        f.commit_type = Some(CommitType::Fix);
        f.subject = "close leak".to_string();
        assert_eq!(build_message(&f), "fix: close leak");
    }

    #[test]
    fn scope_without_type_or_subject_has_no_separator() {
        let mut f = form();
        f.scope = "core".to_string();
        assert_eq!(build_message(&f), "(core)");
    }

    #[test]
    fn breaking_without_detail_uses_placeholder_phrase() {
        let mut f = form();
        f.commit_type = Some(CommitType::Refactor);
        f.subject = "rework config".to_string();
        f.breaking = true;
        let message = build_message(&f);
        assert_eq!(
            message,
            format!("refactor!: rework config\n\nBREAKING CHANGE: {BREAKING_PLACEHOLDER}")
        );
    }

    #[test]
    fn breaking_detail_replaces_placeholder_phrase() {
        let mut f = form();
        f.commit_type = Some(CommitType::Feat);
        f.subject = "new auth".to_string();
        f.breaking = true;
        f.breaking_detail = "tokens are now opaque".to_string();
        let message = build_message(&f);
        assert!(message.ends_with("BREAKING CHANGE: tokens are now opaque"));
        assert!(!message.contains(BREAKING_PLACEHOLDER));
    }

    #[test]
    fn body_and_footer_form_two_blocks_after_header() {
        let mut f = form();
        f.commit_type = Some(CommitType::Docs);
        f.subject = "expand readme".to_string();
        f.body = "Cover the new install flow.".to_string();
        f.footer = "Refs: #42".to_string();
        let message = build_message(&f);
        let blocks: Vec<&str> = message.split("\n\n").collect();
        assert_eq!(
            blocks,
            vec![
                "docs: expand readme",
                "Cover the new install flow.",
                "Refs: #42"
            ]
        );
    }

    #[test]
    fn breaking_line_and_footer_share_one_block() {
        let mut f = form();
        f.commit_type = Some(CommitType::Feat);
        f.subject = "swap wire format".to_string();
        f.breaking = true;
        f.breaking_detail = "payloads are binary now".to_string();
        f.footer = "Refs: #7".to_string();
        let message = build_message(&f);
        assert!(message.contains("BREAKING CHANGE: payloads are binary now\nRefs: #7"));
    }

    #[test]
    fn builder_is_pure() {
        let mut f = form();
        f.commit_type = Some(CommitType::Perf);
        f.scope = "cache".to_string();
        f.subject = "batch lookups".to_string();
        f.body = "Coalesce adjacent reads.".to_string();
        assert_eq!(build_message(&f), build_message(&f.clone()));
    }

    #[test]
    fn cycle_next_wraps_through_empty_choice() {
        let mut current = None;
        for expected in CommitType::all() {
            current = CommitType::cycle_next(current);
            assert_eq!(current, Some(*expected));
        }
        assert_eq!(CommitType::cycle_next(current), None);
    }

    #[test]
    fn cycle_prev_is_inverse_of_cycle_next() {
        let mut current = None;
        for _ in 0..=CommitType::all().len() {
            let next = CommitType::cycle_next(current);
            assert_eq!(CommitType::cycle_prev(next), current);
            current = next;
        }
    }
}
