//! Decision-tree descriptors for the diplomacy and economy views
//!
//! These trees are nominal data: the simulator never evaluates them
//! against world state. They exist so a front-end can draw the shape of
//! the decision making; the actual transitions live in `sim::diplomacy`.

use std::fmt;

/// Role of a node in the descriptor tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Selector,
    Sequence,
    Condition,
    Action,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Selector => "selector",
            NodeKind::Sequence => "sequence",
            NodeKind::Condition => "condition",
            NodeKind::Action => "action",
        };
        write!(f, "{}", label)
    }
}

/// A node in a static descriptor tree
#[derive(Debug)]
pub struct BehaviorNode {
    pub kind: NodeKind,
    pub name: &'static str,
    pub children: &'static [BehaviorNode],
}

impl BehaviorNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Render the subtree as an indented plain-text outline
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&format!("[{}] {}\n", self.kind, self.name));
        for child in self.children {
            child.write_outline(out, depth + 1);
        }
    }
}

static DIPLOMATIC_TREE: BehaviorNode = BehaviorNode {
    kind: NodeKind::Selector,
    name: "Diplomatic Decisions",
    children: &[
        BehaviorNode {
            kind: NodeKind::Sequence,
            name: "Consider War",
            children: &[
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Military Advantage > 30%",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Trust < 20",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Action,
                    name: "Declare War",
                    children: &[],
                },
            ],
        },
        BehaviorNode {
            kind: NodeKind::Sequence,
            name: "Consider Alliance",
            children: &[
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Trust > 70",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Trade Value > 50",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Action,
                    name: "Form Alliance",
                    children: &[],
                },
            ],
        },
        BehaviorNode {
            kind: NodeKind::Sequence,
            name: "Improve Relations",
            children: &[
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Trust < 50",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Action,
                    name: "Send Gift",
                    children: &[],
                },
            ],
        },
    ],
};

static ECONOMIC_TREE: BehaviorNode = BehaviorNode {
    kind: NodeKind::Selector,
    name: "Economic Decisions",
    children: &[
        BehaviorNode {
            kind: NodeKind::Sequence,
            name: "Resource Crisis",
            children: &[
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Food < 200",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Action,
                    name: "Prioritize Agriculture",
                    children: &[],
                },
            ],
        },
        BehaviorNode {
            kind: NodeKind::Sequence,
            name: "Trade Opportunity",
            children: &[
                BehaviorNode {
                    kind: NodeKind::Condition,
                    name: "Excess Resources",
                    children: &[],
                },
                BehaviorNode {
                    kind: NodeKind::Action,
                    name: "Establish Trade Route",
                    children: &[],
                },
            ],
        },
        BehaviorNode {
            kind: NodeKind::Action,
            name: "Balanced Growth",
            children: &[],
        },
    ],
};

/// The diplomacy descriptor tree
pub fn diplomatic_decision_tree() -> &'static BehaviorNode {
    &DIPLOMATIC_TREE
}

/// The economy descriptor tree
pub fn economic_decision_tree() -> &'static BehaviorNode {
    &ECONOMIC_TREE
}
