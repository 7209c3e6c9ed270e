// In: src/chain/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Condition Chain
// ====================================================================================
//
// A condition chain rewrites a sequence element by element according to an
// ordered list of (predicate, action) branches and one default action:
//
//   when(p1).then(a1)
//       .when(p2).then(a2)
//       ...
//       .otherwise(default)
//       .eval(&data)
//
// Builder stages (each wraps the same node arena):
//
//   1. [When]      -> only `.then(action)` is available
//   2. [Then]      -> `.when(predicate)` continues, `.otherwise(action)` terminates
//   3. [Otherwise] -> the finished chain; `.eval(&data)` succeeds
//
// `eval` exists on every stage. On an unterminated chain it reports a
// `Structural` error instead of evaluating.
//
// Evaluation (see `evaluator.rs`) is a single top-down pass carrying a
// `resolved` mask. An earlier branch always wins over a later one and over
// `otherwise` for any element several predicates match.
//
// ====================================================================================

mod evaluator;
mod node;


use crate::error::JablError;
use crate::sequence::Sequence;
use crate::types::{Action, Predicate};
use node::{Node, NodeId, ROOT};

//==================================================================================
// 1. The Node Arena
//==================================================================================

/// The linked When/Then/Otherwise structure, stored as an arena of nodes.
///
/// Built through `When`, `Then` and `Otherwise`. Evaluation never mutates the
/// chain, so one chain can be evaluated against any number of inputs.
#[derive(Debug)]
pub struct ConditionChain<T> {
    nodes: Vec<Node<T>>,
    tail: NodeId,
}

impl<T: Clone> Clone for ConditionChain<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            tail: self.tail,
        }
    }
}

impl<T> ConditionChain<T> {
    fn rooted_at(predicate: Predicate<T>) -> Self {
        Self {
            nodes: vec![Node::When {
                predicate,
                then: None,
            }],
            tail: ROOT,
        }
    }

    /// Appends `node` as the child of the current tail.
    fn append(mut self, node: Node<T>) -> Self {
        let id = self.nodes.len();
        match &mut self.nodes[self.tail] {
            Node::When { then, .. } => *then = Some(id),
            Node::Then { next, .. } => *next = Some(id),
            // The builder types never expose an append after `otherwise`.
            Node::Otherwise { .. } => {
                unreachable!("cannot append a {} node to a terminated chain", node.kind())
            }
        }
        self.nodes.push(node);
        self.tail = id;
        self
    }

    /// Number of `when` branches in the chain.
    pub fn branch_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::When { .. }))
            .count()
    }

    /// True once the chain ends in `otherwise`.
    pub fn is_terminated(&self) -> bool {
        matches!(self.nodes.get(self.tail), Some(Node::Otherwise { .. }))
    }
}

//==================================================================================
// 2. Builder Stages
//==================================================================================

/// A chain whose last node is a `when` still waiting for its `then`.
#[derive(Debug)]
pub struct When<T> {
    chain: ConditionChain<T>,
}

/// A chain whose last node is a `then`; continue with `when` or finish with
/// `otherwise`.
#[derive(Debug)]
pub struct Then<T> {
    chain: ConditionChain<T>,
}

/// A terminated chain, ready to evaluate.
#[derive(Debug)]
pub struct Otherwise<T> {
    chain: ConditionChain<T>,
}

/// Starts a chain with a per-element test.
pub fn when<T, F>(f: F) -> When<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    When::new(Predicate::func(f))
}

impl<T> When<T> {
    /// Starts a chain whose first branch is guarded by `predicate`.
    pub fn new(predicate: Predicate<T>) -> Self {
        Self {
            chain: ConditionChain::rooted_at(predicate),
        }
    }

    pub fn then(self, action: Action<T>) -> Then<T> {
        Then {
            chain: self.chain.append(Node::Then { action, next: None }),
        }
    }

    pub fn chain(&self) -> &ConditionChain<T> {
        &self.chain
    }
}

impl<T> Then<T> {
    /// Adds a lower-priority branch.
    pub fn when(self, predicate: Predicate<T>) -> When<T> {
        When {
            chain: self.chain.append(Node::When {
                predicate,
                then: None,
            }),
        }
    }

    /// Like `when`, taking the per-element test directly.
    pub fn when_fn<F>(self, f: F) -> When<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.when(Predicate::func(f))
    }

    /// Terminates the chain with the action for every unclaimed position.
    pub fn otherwise(self, action: Action<T>) -> Otherwise<T> {
        Otherwise {
            chain: self.chain.append(Node::Otherwise { action }),
        }
    }

    pub fn chain(&self) -> &ConditionChain<T> {
        &self.chain
    }
}

impl<T> Otherwise<T> {
    pub fn chain(&self) -> &ConditionChain<T> {
        &self.chain
    }

    pub fn into_chain(self) -> ConditionChain<T> {
        self.chain
    }
}

impl<T: Clone> Clone for Otherwise<T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

//==================================================================================
// 3. Evaluation Entry Points
//==================================================================================

impl<T: Clone> When<T> {
    /// Always fails: a chain ending in `when` has no action for its last branch.
    pub fn eval(&self, data: &Sequence<T>) -> Result<Sequence<T>, JablError> {
        self.chain.eval(data)
    }
}

impl<T: Clone> Then<T> {
    /// Always fails: a chain ending in `then` has no `otherwise`.
    pub fn eval(&self, data: &Sequence<T>) -> Result<Sequence<T>, JablError> {
        self.chain.eval(data)
    }
}

impl<T: Clone> Otherwise<T> {
    /// Evaluates the chain against `data`, returning a new sequence.
    pub fn eval(&self, data: &Sequence<T>) -> Result<Sequence<T>, JablError> {
        self.chain.eval(data)
    }
}
