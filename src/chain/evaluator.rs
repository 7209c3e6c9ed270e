// In: src/chain/evaluator.rs

//! The single-pass, first-match-wins evaluator for a `ConditionChain`.
//!
//! State carried from branch to branch is one boolean mask, `resolved`, with
//! one entry per element. For each branch, in declaration order:
//!
//! 1. `matched  = predicate(element)` for every source element
//! 2. `active   = matched AND NOT resolved`
//! 3. `current  = current.map_when(action, active)`
//! 4. `resolved = resolved OR active`
//!
//! Finally `otherwise` is applied where `resolved` is still false.

use super::node::{Node, ROOT};
use super::ConditionChain;
use crate::error::JablError;
use crate::kernels::mask;
use crate::sequence::Sequence;
use crate::types::{Action, Predicate};

/// A chain flattened into its branches and default action.
struct Plan<'a, T> {
    branches: Vec<(&'a Predicate<T>, &'a Action<T>)>,
    default: &'a Action<T>,
}

impl<T> ConditionChain<T> {
    /// Walks the arena from the root, checking that every `when` has a `then`
    /// and that the chain ends in `otherwise`.
    fn plan(&self) -> Result<Plan<'_, T>, JablError> {
        let mut branches = Vec::new();
        let mut cursor = Some(ROOT);

        while let Some(id) = cursor {
            match self.nodes.get(id) {
                Some(Node::When { predicate, then }) => {
                    let then_id = then.ok_or_else(|| {
                        JablError::Structural(format!(
                            "branch {} has a `when` without a `then`",
                            branches.len()
                        ))
                    })?;
                    match self.nodes.get(then_id) {
                        Some(Node::Then { action, next }) => {
                            branches.push((predicate, action));
                            cursor = *next;
                        }
                        other => {
                            return Err(JablError::Structural(format!(
                                "`when` must be followed by `then`, found {}",
                                other.map_or("nothing", Node::kind)
                            )))
                        }
                    }
                }
                Some(Node::Otherwise { action }) => {
                    return Ok(Plan {
                        branches,
                        default: action,
                    })
                }
                other => {
                    return Err(JablError::Structural(format!(
                        "expected `when` or `otherwise`, found {}",
                        other.map_or("nothing", Node::kind)
                    )))
                }
            }
        }

        Err(JablError::Structural(
            "`then` must be followed by `when` or `otherwise`".to_string(),
        ))
    }
}

impl<T: Clone> ConditionChain<T> {
    /// Evaluates the chain against `data`.
    ///
    /// Structure and argument lengths are checked before any predicate runs.
    /// A failing predicate or action aborts the whole evaluation with the
    /// element's index.
    pub fn eval(&self, data: &Sequence<T>) -> Result<Sequence<T>, JablError> {
        let plan = self.plan()?;
        for (predicate, action) in &plan.branches {
            predicate.check_len("when", data.len())?;
            action.check_len("then", data.len())?;
        }
        plan.default.check_len("otherwise", data.len())?;

        let mut current = data.clone();
        let mut resolved = vec![false; data.len()];

        for (rank, (predicate, action)) in plan.branches.iter().enumerate() {
            let matched = predicate.resolve("when", data)?;
            let active = mask::and_not(matched.as_slice(), &resolved);
            resolved = mask::or(&resolved, &active);

            let claimed = active.iter().filter(|&&hit| hit).count();
            log::trace!("condition chain: branch {} claimed {} element(s)", rank, claimed);

            if claimed > 0 {
                current = current.map_when(action, &Predicate::Mask(Sequence::new(active)))?;
            }
        }

        let remaining = mask::not(&resolved);
        log::debug!(
            "condition chain: {} branch(es) resolved {} of {} element(s)",
            plan.branches.len(),
            data.len() - remaining.iter().filter(|&&open| open).count(),
            data.len()
        );
        current.map_when(plan.default, &Predicate::Mask(Sequence::new(remaining)))
    }
}
