//! Lint driver: dispatches host-supplied nodes to registered rules.

use crate::config::Config;
use crate::rule::{Rule, RuleBox, RuleContext};
use crate::source::{NodeData, SourceUnit};
use crate::types::{LintResult, Severity, Violation};

use tracing::{debug, info};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered rules over host-supplied source units.
///
/// The linter holds no per-unit state itself: every rule gets a fresh
/// visitor per unit, so units can be linted in any order, repeatedly,
/// with identical results.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints a single source unit.
    ///
    /// Nodes are dispatched to each enabled rule in the order the host
    /// supplied them, which must be source order.
    #[must_use]
    pub fn lint_unit(&self, unit: &SourceUnit) -> LintResult {
        debug!("Linting {}", unit.path.display());

        let mut violations: Vec<Violation> = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            violations.extend(self.run_rule(rule.as_ref(), unit));
        }

        // Sort violations by line, then column
        violations.sort_by(|a, b| {
            a.location
                .line
                .cmp(&b.location.line)
                .then(a.location.column.cmp(&b.location.column))
        });

        LintResult {
            violations,
            units_checked: 1,
        }
    }

    /// Lints several source units and folds the results.
    #[must_use]
    pub fn lint_units<'a, I>(&self, units: I) -> LintResult
    where
        I: IntoIterator<Item = &'a SourceUnit>,
    {
        let mut result = LintResult::new();
        for unit in units {
            result.extend(self.lint_unit(unit));
        }

        info!(
            "Lint complete: {} violations in {} unit(s)",
            result.violations.len(),
            result.units_checked
        );

        result
    }

    /// Runs one rule over one unit with a fresh visitor.
    fn run_rule(&self, rule: &dyn Rule, unit: &SourceUnit) -> Vec<Violation> {
        let severity = self.effective_severity(rule);
        let mut ctx = RuleContext::new(rule, severity, unit);
        let mut visitor = rule.visitor();

        for node in &unit.nodes {
            match node.data {
                NodeData::VariableDeclaration { .. } => {
                    visitor.visit_variable_declaration(node, &mut ctx);
                }
                NodeData::LineComment => visitor.visit_line_comment(node, &mut ctx),
                NodeData::BlockComment => visitor.visit_block_comment(node, &mut ctx),
            }
        }

        ctx.into_violations()
    }

    /// Resolves the severity for a rule, honoring config overrides.
    fn effective_severity(&self, rule: &dyn Rule) -> Severity {
        self.config
            .rule_severity(rule.name())
            .unwrap_or_else(|| rule.default_severity())
    }
}
