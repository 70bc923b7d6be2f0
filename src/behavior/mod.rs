//! Static decision-tree descriptors

pub mod tree;

pub use tree::{
    diplomatic_decision_tree, economic_decision_tree, BehaviorNode, NodeKind,
};
