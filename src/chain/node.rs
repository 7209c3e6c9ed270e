// In: src/chain/node.rs

//! Arena storage for condition-chain nodes.
//!
//! Nodes live in a flat `Vec` and point at their single child by index. The
//! chain is strictly linear: `When -> Then -> (When -> Then ->)* Otherwise`.

use crate::types::{Action, Predicate};

pub(crate) type NodeId = usize;

/// The root node is always the first one pushed.
pub(crate) const ROOT: NodeId = 0;

#[derive(Debug)]
pub(crate) enum Node<T> {
    When {
        predicate: Predicate<T>,
        then: Option<NodeId>,
    },
    Then {
        action: Action<T>,
        next: Option<NodeId>,
    },
    Otherwise {
        action: Action<T>,
    },
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        match self {
            Node::When { predicate, then } => Node::When {
                predicate: predicate.clone(),
                then: *then,
            },
            Node::Then { action, next } => Node::Then {
                action: action.clone(),
                next: *next,
            },
            Node::Otherwise { action } => Node::Otherwise {
                action: action.clone(),
            },
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::When { .. } => "when",
            Node::Then { .. } => "then",
            Node::Otherwise { .. } => "otherwise",
        }
    }
}
