//! Ordered, named rule chains.
//!
//! Rules are registered by name and positioned relative to each other with
//! `before` / `after`. Each rule can declare the alternate chains it belongs
//! to: a block rule listed under `"paragraph"` may interrupt a paragraph,
//! one listed under `"list"` may end a list, and so on.
//!
//! All ordering is resolved once by [`Ruler::compile`] when the pipeline is
//! built; parsing only ever walks the compiled function lists.

use std::collections::HashMap;

use crate::error::PipelineError;

#[derive(Debug, Clone)]
struct Rule<F> {
    name: &'static str,
    run: F,
    alt: Vec<&'static str>,
}

/// Mutable rule list used while a pipeline is being assembled.
#[derive(Debug, Clone)]
pub struct Ruler<F> {
    rules: Vec<Rule<F>>,
}

impl<F: Copy> Ruler<F> {
    /// Creates a ruler from a fixed set of built-in rules, in order.
    pub fn with_rules(rules: &[(&'static str, F, &[&'static str])]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|&(name, run, alt)| Rule {
                    name,
                    run,
                    alt: alt.to_vec(),
                })
                .collect(),
        }
    }

    /// Rule names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Appends a rule at the end of the chain.
    pub fn push(
        &mut self,
        name: &'static str,
        run: F,
        alt: &[&'static str],
    ) -> Result<(), PipelineError> {
        self.ensure_unique(name)?;
        self.rules.push(Rule {
            name,
            run,
            alt: alt.to_vec(),
        });
        Ok(())
    }

    /// Inserts a rule immediately before `anchor`.
    pub fn before(
        &mut self,
        anchor: &str,
        name: &'static str,
        run: F,
        alt: &[&'static str],
    ) -> Result<(), PipelineError> {
        self.ensure_unique(name)?;
        let at = self.position(anchor, name)?;
        self.rules.insert(
            at,
            Rule {
                name,
                run,
                alt: alt.to_vec(),
            },
        );
        Ok(())
    }

    /// Inserts a rule immediately after `anchor`.
    pub fn after(
        &mut self,
        anchor: &str,
        name: &'static str,
        run: F,
        alt: &[&'static str],
    ) -> Result<(), PipelineError> {
        self.ensure_unique(name)?;
        let at = self.position(anchor, name)?;
        self.rules.insert(
            at + 1,
            Rule {
                name,
                run,
                alt: alt.to_vec(),
            },
        );
        Ok(())
    }

    /// Resolves the main chain and every alternate chain.
    pub fn compile(&self) -> RuleChains<F> {
        let main = self.rules.iter().map(|r| r.run).collect();
        let mut alt: HashMap<&'static str, Vec<F>> = HashMap::new();
        for rule in &self.rules {
            for chain in &rule.alt {
                alt.entry(*chain).or_default().push(rule.run);
            }
        }
        RuleChains { main, alt }
    }

    fn position(&self, anchor: &str, rule: &str) -> Result<usize, PipelineError> {
        self.rules
            .iter()
            .position(|r| r.name == anchor)
            .ok_or_else(|| PipelineError::UnknownAnchor {
                anchor: anchor.to_string(),
                rule: rule.to_string(),
            })
    }

    fn ensure_unique(&self, name: &str) -> Result<(), PipelineError> {
        if self.rules.iter().any(|r| r.name == name) {
            return Err(PipelineError::DuplicateRule(name.to_string()));
        }
        Ok(())
    }
}

/// Compiled, immutable rule lists.
#[derive(Debug, Clone)]
pub struct RuleChains<F> {
    main: Vec<F>,
    alt: HashMap<&'static str, Vec<F>>,
}

impl<F> RuleChains<F> {
    /// All rules, in execution order.
    pub fn main(&self) -> &[F] {
        &self.main
    }

    /// Rules that declared membership of `chain`, in execution order.
    pub fn alt(&self, chain: &str) -> &[F] {
        self.alt.get(chain).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type Probe = fn() -> u8;

    fn one() -> u8 {
        1
    }
    fn two() -> u8 {
        2
    }
    fn three() -> u8 {
        3
    }

    const PARAGRAPH: &[&str] = &["paragraph"];
    const NONE: &[&str] = &[];

    fn ruler() -> Ruler<Probe> {
        Ruler::with_rules(&[("one", one as Probe, PARAGRAPH), ("three", three as Probe, NONE)])
    }

    #[test]
    fn before_and_after_position_rules() {
        let mut r = ruler();
        r.before("three", "two", two, &[]).unwrap();
        assert_eq!(r.names(), vec!["one", "two", "three"]);

        let mut r = ruler();
        r.after("one", "two", two, &[]).unwrap();
        assert_eq!(r.names(), vec!["one", "two", "three"]);
    }

    #[test]
    fn unknown_anchor_is_an_error() {
        let mut r = ruler();
        let err = r.before("escape", "two", two, &[]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownAnchor {
                anchor: "escape".into(),
                rule: "two".into(),
            }
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut r = ruler();
        assert_eq!(
            r.push("one", two, &[]).unwrap_err(),
            PipelineError::DuplicateRule("one".into())
        );
    }

    #[test]
    fn compile_builds_alt_chains_in_order() {
        let mut r = ruler();
        r.after("one", "two", two, &["paragraph", "list"]).unwrap();
        let chains = r.compile();

        let main: Vec<u8> = chains.main().iter().map(|f| f()).collect();
        assert_eq!(main, vec![1, 2, 3]);

        let para: Vec<u8> = chains.alt("paragraph").iter().map(|f| f()).collect();
        assert_eq!(para, vec![1, 2]);
        assert_eq!(chains.alt("list").len(), 1);
        assert!(chains.alt("reference").is_empty());
    }
}
