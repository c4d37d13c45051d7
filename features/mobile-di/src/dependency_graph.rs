use std::{
    any::TypeId,
    collections::{BTreeMap, HashSet},
};

use thiserror::Error;

use crate::{
    builder::GraphBuilder,
    types::{DependencyInfo, TypeKey},
};

/// Every binding of a graph and what it depends on
///
/// Checked before any provider runs, so a bad binding never yields a
/// partially built graph.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    map: BTreeMap<TypeId, DependencyGraphEntry>,
    duplicates: Vec<TypeKey>,
}
impl DependencyGraph {
    pub fn new(builder: &GraphBuilder) -> Self {
        let mut graph = Self::default();
        graph.duplicates.extend(builder.rebound.iter().copied());

        for instance in builder.instances.values() {
            graph.add(instance.key, vec![]);
        }

        for provider in &builder.providers {
            graph.add(provider.provides(), provider.dependencies());
        }

        graph
    }

    pub fn add(&mut self, key: TypeKey, dependencies: Vec<DependencyInfo>) {
        if let Some(existing) = self
            .map
            .insert(key.type_id, DependencyGraphEntry { key, dependencies })
        {
            self.duplicates.push(existing.key);
        }
    }

    /// All bound keys
    pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.map.values().map(|entry| entry.key)
    }

    /// Declared dependencies of a bound type, None if it is not bound
    pub fn dependencies_of<T: 'static + ?Sized>(&self) -> Option<Vec<TypeKey>> {
        self.map
            .get(&TypeId::of::<T>())
            .map(|entry| entry.dependencies.iter().map(|dep| dep.key).collect())
    }

    /// Validate the graph
    ///
    /// Returns every issue found, not just the first
    pub fn check(&self) -> Result<(), DependencyGraphErrors> {
        let mut errors: Vec<DependencyGraphError> = self
            .duplicates
            .iter()
            .map(|key| DependencyGraphError::Duplicate(*key))
            .collect();

        let mut checked = HashSet::new();
        for entry in self.map.values() {
            let mut chain = Vec::new();
            check_recurse(self, &mut checked, &mut errors, &mut chain, entry);
        }

        if !errors.is_empty() {
            return Err(DependencyGraphErrors { errors });
        }

        return Ok(());

        fn check_recurse(
            graph: &DependencyGraph,
            checked: &mut HashSet<TypeId>,
            errors: &mut Vec<DependencyGraphError>,
            chain: &mut Vec<TypeKey>,
            entry: &DependencyGraphEntry,
        ) {
            if let Some(start) = chain.iter().position(|key| *key == entry.key) {
                let mut cycle = chain[start..].to_vec();
                cycle.push(entry.key);

                errors.push(DependencyGraphError::CircularDependency {
                    from: chain[start],
                    to: chain[chain.len() - 1],
                    chain: cycle,
                });
                return;
            }

            if !checked.insert(entry.key.type_id) {
                return;
            };

            chain.push(entry.key);

            for dependency in &entry.dependencies {
                let Some(next_entry) = graph.map.get(&dependency.key.type_id) else {
                    errors.push(DependencyGraphError::MissingDependency {
                        dependency: dependency.key,
                        required_by: entry.key,
                    });
                    continue;
                };

                check_recurse(graph, checked, errors, chain, next_entry);
            }

            chain.pop();
        }
    }
}

#[derive(Debug)]
struct DependencyGraphEntry {
    key: TypeKey,
    dependencies: Vec<DependencyInfo>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyGraphError {
    #[error("A type has been bound twice: '{0}'")]
    Duplicate(TypeKey),
    #[error("'{required_by}' needs '{dependency}' but it is not bound")]
    MissingDependency {
        dependency: TypeKey,
        required_by: TypeKey,
    },
    #[error("A circular dependency exists between '{from}' and '{to}' through {chain:?}")]
    CircularDependency {
        from: TypeKey,
        to: TypeKey,
        chain: Vec<TypeKey>,
    },
}

#[derive(Error, Debug, Clone)]
pub struct DependencyGraphErrors {
    pub errors: Vec<DependencyGraphError>,
}
impl std::fmt::Display for DependencyGraphErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut display = Vec::new();
        display.push("The dependency graph had one or more errors:".to_string());
        for error in &self.errors {
            display.push(format!("- {}", error));
        }
        f.write_str(&display.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Battery;
    struct Processor;
    struct Mobile;

    fn deps<T: 'static>() -> DependencyInfo {
        DependencyInfo::of::<T>()
    }

    #[test]
    fn complete_graph_passes() {
        let mut graph = DependencyGraph::default();
        graph.add(TypeKey::of::<Battery>(), vec![]);
        graph.add(TypeKey::of::<Processor>(), vec![]);
        graph.add(
            TypeKey::of::<Mobile>(),
            vec![deps::<Battery>(), deps::<Processor>()],
        );

        assert!(graph.check().is_ok());
        assert_eq!(
            graph.dependencies_of::<Mobile>(),
            Some(vec![TypeKey::of::<Battery>(), TypeKey::of::<Processor>()])
        );
        assert_eq!(graph.keys().count(), 3);
    }

    #[test]
    fn missing_dependency_names_the_requiring_type() {
        let mut graph = DependencyGraph::default();
        graph.add(TypeKey::of::<Battery>(), vec![]);
        graph.add(
            TypeKey::of::<Mobile>(),
            vec![deps::<Battery>(), deps::<Processor>()],
        );

        let errors = graph.check().unwrap_err().errors;

        assert_eq!(
            errors,
            vec![DependencyGraphError::MissingDependency {
                dependency: TypeKey::of::<Processor>(),
                required_by: TypeKey::of::<Mobile>(),
            }]
        );
    }

    #[test]
    fn duplicate_binding_is_reported() {
        let mut graph = DependencyGraph::default();
        graph.add(TypeKey::of::<Battery>(), vec![]);
        graph.add(TypeKey::of::<Battery>(), vec![]);

        let errors = graph.check().unwrap_err().errors;

        assert_eq!(
            errors,
            vec![DependencyGraphError::Duplicate(TypeKey::of::<Battery>())]
        );
    }

    #[test]
    fn cycle_is_reported_with_its_chain() {
        let mut graph = DependencyGraph::default();
        graph.add(TypeKey::of::<Mobile>(), vec![deps::<Battery>()]);
        graph.add(TypeKey::of::<Battery>(), vec![deps::<Mobile>()]);

        let errors = graph.check().unwrap_err().errors;

        assert_eq!(errors.len(), 1);
        match &errors[0] {
            DependencyGraphError::CircularDependency { chain, .. } => {
                assert_eq!(chain.len(), 3);
                assert_eq!(chain.first(), chain.last());
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn all_issues_are_collected() {
        let mut graph = DependencyGraph::default();
        graph.add(TypeKey::of::<Battery>(), vec![]);
        graph.add(TypeKey::of::<Battery>(), vec![]);
        graph.add(TypeKey::of::<Mobile>(), vec![deps::<Processor>()]);

        let errors = graph.check().unwrap_err();

        assert_eq!(errors.errors.len(), 2);
        assert!(errors
            .to_string()
            .starts_with("The dependency graph had one or more errors:"));
    }
}
