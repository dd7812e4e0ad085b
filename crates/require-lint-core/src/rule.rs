//! Rule traits for defining lint rules.

use crate::source::{Node, SourceUnit};
use crate::types::{Location, Severity, Violation};

/// A lint rule driven by node-kind callbacks.
///
/// Implement this trait to create rules. A rule itself is stateless
/// configuration; per-traversal state lives in the [`NodeVisitor`] it
/// creates, so one rule instance can safely serve any number of source
/// units, sequentially or concurrently.
///
/// # Example
///
/// ```ignore
/// use require_lint_core::{NodeVisitor, Rule, RuleContext};
/// use require_lint_core::source::Node;
///
/// pub struct NoTopLevelComments;
///
/// impl Rule for NoTopLevelComments {
///     fn name(&self) -> &'static str { "no-top-level-comments" }
///     fn code(&self) -> &'static str { "RL999" }
///
///     fn visitor(&self) -> Box<dyn NodeVisitor> {
///         Box::new(CommentVisitor)
///     }
/// }
///
/// struct CommentVisitor;
///
/// impl NodeVisitor for CommentVisitor {
///     fn visit_line_comment(&mut self, node: &Node, ctx: &mut RuleContext) {
///         ctx.report(node, "Top-level comments are not allowed");
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "sort-requires").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "RL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Creates a fresh visitor holding this rule's per-unit state.
    ///
    /// The driver calls this once per source unit, so state never leaks
    /// from one traversal into the next.
    fn visitor(&self) -> Box<dyn NodeVisitor>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Per-kind callbacks invoked by the driver, in source order.
///
/// This is the registration surface for rules: implement the methods for
/// the node kinds the rule cares about and leave the rest defaulted to
/// no-ops.
pub trait NodeVisitor {
    /// Called for each `var`/`let`/`const` declaration statement.
    fn visit_variable_declaration(&mut self, _node: &Node, _ctx: &mut RuleContext) {}

    /// Called for each `//` comment.
    fn visit_line_comment(&mut self, _node: &Node, _ctx: &mut RuleContext) {}

    /// Called for each `/* ... */` comment.
    fn visit_block_comment(&mut self, _node: &Node, _ctx: &mut RuleContext) {}
}

/// Reporting context for one (rule, unit) traversal.
///
/// Carries the rule's identity and effective severity so visitors only
/// name the offending node and the message.
pub struct RuleContext<'a> {
    rule_code: &'static str,
    rule_name: &'static str,
    severity: Severity,
    unit: &'a SourceUnit,
    violations: Vec<Violation>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for one traversal of `unit`.
    #[must_use]
    pub fn new(rule: &dyn Rule, severity: Severity, unit: &'a SourceUnit) -> Self {
        Self {
            rule_code: rule.code(),
            rule_name: rule.name(),
            severity,
            unit,
            violations: Vec::new(),
        }
    }

    /// Returns the unit being traversed.
    #[must_use]
    pub fn unit(&self) -> &SourceUnit {
        self.unit
    }

    /// Reports a violation on `node` with the given message.
    ///
    /// Reporting never stops the traversal; the driver keeps dispatching
    /// subsequent nodes.
    pub fn report(&mut self, node: &Node, message: impl Into<String>) {
        let location = Location::new(
            self.unit.path.clone(),
            node.span.start_line,
            node.span.start_column,
        )
        .with_span(node.span.offset, node.span.length);

        self.violations.push(Violation::new(
            self.rule_code,
            self.rule_name,
            self.severity,
            location,
            message,
        ));
    }

    /// Consumes the context, yielding the collected violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Span;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn visitor(&self) -> Box<dyn NodeVisitor> {
            Box::new(ReportEverything)
        }
    }

    struct ReportEverything;

    impl NodeVisitor for ReportEverything {
        fn visit_line_comment(&mut self, node: &Node, ctx: &mut RuleContext) {
            ctx.report(node, "Test violation");
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn report_locates_violation_at_node_start() {
        let rule = TestRule;
        let unit = SourceUnit::new("app.js")
            .with_node(Node::line_comment(Span::new(3, 5, 3).with_byte_range(40, 6), 0));

        let mut ctx = RuleContext::new(&rule, rule.default_severity(), &unit);
        let mut visitor = rule.visitor();
        visitor.visit_line_comment(&unit.nodes[0], &mut ctx);

        let violations = ctx.into_violations();
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, "TEST001");
        assert_eq!(v.location.line, 3);
        assert_eq!(v.location.column, 5);
        assert_eq!(v.location.offset, 40);
    }
}
