use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::schema::TableDef;

/// FK dependency ordering of a set of table definitions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DependencyReport {
    pub nodes: usize,
    pub edges: usize,
    /// Tables with parents before children, when the graph is acyclic.
    pub order: Option<Vec<&'static str>>,
    /// Tables left unresolved by a cycle.
    pub cycle: Option<Vec<&'static str>>,
}

impl DependencyReport {
    /// Position of `table` in the dependency order.
    pub fn rank(&self, table: &str) -> Option<usize> {
        self.order
            .as_ref()
            .and_then(|order| order.iter().position(|name| *name == table))
    }
}

/// Build a deterministic parent-first ordering for the given tables.
///
/// Self-references count as cycles.
pub fn dependency_order(tables: &[TableDef]) -> DependencyReport {
    let graph = build_adjacency(tables);
    let nodes = graph.len();
    let edges = graph.values().map(|children| children.len()).sum();

    match toposort(&graph) {
        Ok(order) => DependencyReport {
            nodes,
            edges,
            order: Some(order),
            cycle: None,
        },
        Err(cycle) => DependencyReport {
            nodes,
            edges,
            order: None,
            cycle: Some(cycle),
        },
    }
}

// parent -> children
fn build_adjacency(tables: &[TableDef]) -> BTreeMap<&'static str, BTreeSet<&'static str>> {
    let mut graph: BTreeMap<&'static str, BTreeSet<&'static str>> = BTreeMap::new();

    for table in tables {
        graph.entry(table.name).or_default();
        for parent in table.parents() {
            graph.entry(parent).or_default().insert(table.name);
        }
    }

    graph
}

fn toposort(
    graph: &BTreeMap<&'static str, BTreeSet<&'static str>>,
) -> Result<Vec<&'static str>, Vec<&'static str>> {
    let mut indegree: BTreeMap<&'static str, usize> =
        graph.keys().map(|node| (*node, 0)).collect();
    for children in graph.values() {
        for child in children {
            *indegree.entry(*child).or_insert(0) += 1;
        }
    }

    let mut ready: BTreeSet<&'static str> = indegree
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(node, _)| *node)
        .collect();
    let mut order = Vec::with_capacity(graph.len());

    while let Some(node) = ready.pop_first() {
        order.push(node);
        if let Some(children) = graph.get(node) {
            for child in children {
                if let Some(count) = indegree.get_mut(child) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(*child);
                    }
                }
            }
        }
    }

    if order.len() == graph.len() {
        Ok(order)
    } else {
        Err(indegree
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(node, _)| node)
            .collect())
    }
}
