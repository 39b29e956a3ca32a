use alloc::{collections::BTreeSet, vec::Vec};

use crate::{
    any::TypeInfo,
    candidates::Candidates,
    constructor::select,
    dependency::Dependency,
    errors::CycleErrorKind,
};

/// Candidates and the candidates their selected constructors depend on.
///
/// A capability parameter points at the first candidate binding it, the one the capability resolver picks.
/// Parameters nothing can satisfy add no edge.
pub(crate) struct DependencyGraph {
    nodes: Vec<(TypeInfo, Vec<usize>)>,
}

impl DependencyGraph {
    pub(crate) fn new(candidates: &Candidates) -> Self {
        let mut nodes = Vec::with_capacity(candidates.len());
        for candidate in candidates.iter() {
            let edges = match select(&candidate.descriptor) {
                Ok(plan) => plan
                    .dependencies()
                    .iter()
                    .filter_map(|Dependency { type_info, .. }| match candidates.get(type_info) {
                        Some(dependency) => Some(dependency.order),
                        None => candidates.implementations(type_info).next().map(|dependency| dependency.order),
                    })
                    .collect(),
                Err(_) => Vec::new(),
            };
            nodes.push((candidate.descriptor.type_info(), edges));
        }
        Self { nodes }
    }

    /// Every node after the nodes it depends on, ties kept in scan order.
    pub(crate) fn topological_order(&self) -> Result<Vec<TypeInfo>, CycleErrorKind> {
        let mut visited = BTreeSet::new();
        let mut stack = Vec::new();
        let mut order = Vec::with_capacity(self.nodes.len());

        for node in 0..self.nodes.len() {
            if let Some(start) = self.dfs_visit(node, &mut visited, &mut stack, &mut order) {
                let mut cycle = stack.split_off(start).into_iter().map(|node| self.nodes[node].0);
                let Some(head) = cycle.next() else {
                    continue;
                };
                let mut path = cycle.collect::<Vec<_>>();
                path.push(head);
                return Err(CycleErrorKind::CyclicDependency {
                    graph: (head, path.into_boxed_slice()),
                });
            }
        }
        Ok(order.into_iter().map(|node| self.nodes[node].0).collect())
    }

    /// Returns where the cycle starts on `stack` when `node` closes one.
    fn dfs_visit(&self, node: usize, visited: &mut BTreeSet<usize>, stack: &mut Vec<usize>, order: &mut Vec<usize>) -> Option<usize> {
        if visited.contains(&node) {
            return None;
        }
        if let Some(start) = stack.iter().position(|&on_stack| on_stack == node) {
            return Some(start);
        }
        stack.push(node);

        for &dependency in &self.nodes[node].1 {
            if let Some(start) = self.dfs_visit(dependency, visited, stack, order) {
                return Some(start);
            }
        }

        stack.pop();
        visited.insert(node);
        order.push(node);
        None
    }
}
