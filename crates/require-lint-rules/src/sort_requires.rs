//! Rule to keep grouped `require` declarations sorted by module name.
//!
//! # Rationale
//!
//! Files that open with a block of `require` declarations are easier to
//! scan when each block is alphabetized. The rule checks each run of
//! consecutive top-level declarations (a "group"); a blank line ends the
//! group, so logically separate blocks stay independent.
//!
//! # Configuration
//!
//! - `severity`: severity of reported violations (default: error)

use once_cell::sync::Lazy;
use regex::Regex;
use require_lint_core::source::{Node, NodeData};
use require_lint_core::{NodeVisitor, Rule, RuleContext, Severity};

/// Rule code for sort-requires.
pub const CODE: &str = "RL001";

/// Rule name for sort-requires.
pub const NAME: &str = "sort-requires";

/// Message attached to every violation this rule reports.
///
/// Exported so embedding hosts and harnesses can assert on it by equality.
pub const MESSAGE: &str =
    "Variables within a declaration group should be sorted by the require name.";

/// Matches a `require(...)` call shape anywhere in rendered initializer
/// text. The capture is the raw text between the parentheses, up to the
/// first `)`.
static REQUIRE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"require\(\s*([^)]+)\s*\)").expect("Invalid regex"));

/// Requires consecutive top-level `require` declarations within a
/// declaration group to be sorted by the required module name.
#[derive(Debug, Clone)]
pub struct SortRequires {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SortRequires {
    fn default() -> Self {
        Self::new()
    }
}

impl SortRequires {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for SortRequires {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires grouped require declarations to be sorted by module name"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn visitor(&self) -> Box<dyn NodeVisitor> {
        Box::new(SortRequiresVisitor {
            last_require: None,
            last_line: None,
        })
    }
}

/// Per-unit traversal state: the import key of the last accepted
/// declaration in the current group, and the line the last tracked node
/// (declaration or comment) ends on.
struct SortRequiresVisitor {
    last_require: Option<String>,
    last_line: Option<usize>,
}

impl SortRequiresVisitor {
    /// A group ends when at least one blank line separates the previous
    /// tracked node from `node`.
    fn starts_new_group(&self, node: &Node) -> bool {
        self.last_line
            .is_some_and(|prev_end| node.span.start_line.saturating_sub(prev_end) > 1)
    }

    /// Comments shift the adjacency reference without touching the stored
    /// import key.
    fn track_comment(&mut self, node: &Node) {
        if node.scope_depth != 0 {
            return;
        }
        self.last_line = Some(node.span.end_line);
    }
}

impl NodeVisitor for SortRequiresVisitor {
    fn visit_variable_declaration(&mut self, node: &Node, ctx: &mut RuleContext) {
        if node.scope_depth != 0 {
            // Only the outermost scope participates in require grouping.
            return;
        }

        let NodeData::VariableDeclaration { declarators } = &node.data else {
            return;
        };

        // Multi-binding statements are a separate rule's business; they
        // neither update state nor end the current group.
        let [declarator] = declarators.as_slice() else {
            return;
        };

        let Some(init) = &declarator.init else {
            return;
        };

        let Some(captures) = REQUIRE_CALL.captures(init) else {
            return;
        };
        let require_val = captures[1].to_string();

        if let Some(last_require) = &self.last_require {
            if self.starts_new_group(node) {
                // A blank line ended the previous group; this declaration
                // opens the next one as its baseline, uncompared.
                self.last_require = Some(require_val);
                self.last_line = Some(node.span.end_line);
                return;
            }

            if last_require.as_str() > require_val.as_str() {
                ctx.report(node, MESSAGE);
            }
        }

        self.last_require = Some(require_val);
        self.last_line = Some(node.span.end_line);
    }

    fn visit_line_comment(&mut self, node: &Node, _ctx: &mut RuleContext) {
        self.track_comment(node);
    }

    fn visit_block_comment(&mut self, node: &Node, _ctx: &mut RuleContext) {
        self.track_comment(node);
    }
}
