//! Class emission order within a module.
//!
//! With inheritance ordering enabled, a class is emitted after its base
//! whenever the base is emitted in the same run. Bases that are not part of
//! the run never hold a class back:
//!
//! - bases the catalog does not know (external or unregistered),
//! - bases in the no-codegen marker module,
//! - bases owned by another module.

use std::collections::{HashMap, VecDeque};

use qtbind_ir::Catalog;

use crate::error::CycleError;

/// Emission order of the classes owned by `module`.
///
/// Without inheritance ordering this is the lexical order of the class
/// names. With it, the result is a topological order over in-module base
/// edges; ties are broken by lexical order so the output is deterministic.
///
/// # Errors
///
/// Returns [`CycleError`] when base references inside the module form a
/// cycle.
pub fn order(
    catalog: &Catalog,
    module: &str,
    use_inheritance_order: bool,
) -> Result<Vec<String>, CycleError> {
    let mut names: Vec<&str> = catalog
        .classes_in(module)
        .map(|class| class.name.as_str())
        .collect();
    names.sort_unstable();

    if !use_inheritance_order {
        return Ok(names.into_iter().map(str::to_string).collect());
    }

    let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, n)| (*n, i)).collect();

    // parents[i] is the in-run base of names[i]
    let parents: Vec<Option<usize>> = names
        .iter()
        .map(|name| {
            let base = catalog.get(name)?.base.as_deref()?;
            if catalog.is_marker(base) {
                return None;
            }
            index.get(base).copied()
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); names.len()];
    for (child, parent) in parents.iter().enumerate() {
        if let Some(parent) = parent {
            children[*parent].push(child);
        }
    }

    let mut queue: VecDeque<usize> = (0..names.len()).filter(|i| parents[*i].is_none()).collect();
    let mut placed = vec![false; names.len()];
    let mut output = Vec::with_capacity(names.len());

    while let Some(next) = queue.pop_front() {
        placed[next] = true;
        output.push(names[next].to_string());
        queue.extend(children[next].iter().copied());
    }

    if output.len() < names.len() {
        return Err(cycle_error(module, &names, &parents, &placed));
    }

    tracing::debug!(module, classes = output.len(), "ordered classes by inheritance");
    Ok(output)
}

/// Split the unplaced classes into cycle members and classes blocked behind
/// a cycle.
fn cycle_error(
    module: &str,
    names: &[&str],
    parents: &[Option<usize>],
    placed: &[bool],
) -> CycleError {
    #[derive(Clone, Copy, PartialEq)]
    enum Walk {
        Unseen,
        OnPath,
        Finished,
    }

    let mut walk = vec![Walk::Unseen; names.len()];
    let mut on_cycle = vec![false; names.len()];

    for start in (0..names.len()).filter(|i| !placed[*i]) {
        let mut path = Vec::new();
        let mut current = Some(start);
        while let Some(node) = current {
            match walk[node] {
                Walk::Finished => break,
                Walk::OnPath => {
                    let from = path.iter().position(|n| *n == node).unwrap_or(0);
                    for member in &path[from..] {
                        on_cycle[*member] = true;
                    }
                    break;
                }
                Walk::Unseen => {
                    walk[node] = Walk::OnPath;
                    path.push(node);
                    current = parents[node];
                }
            }
        }
        for node in path {
            walk[node] = Walk::Finished;
        }
    }

    let mut members = Vec::new();
    let mut blocked = Vec::new();
    for (i, name) in names.iter().enumerate() {
        if placed[i] {
            continue;
        }
        if on_cycle[i] {
            members.push(name.to_string());
        } else {
            blocked.push(name.to_string());
        }
    }

    tracing::debug!(module, ?members, ?blocked, "inheritance cycle");
    CycleError {
        module: module.to_string(),
        members,
        blocked,
    }
}

/// Classes of `module` whose base the catalog does not know, as
/// `(class, base)` pairs in lexical class order.
///
/// Such bases are treated as already satisfied by [`order`]; this lists them
/// so a misspelled base can be reported.
pub fn unresolved_bases<'a>(catalog: &'a Catalog, module: &str) -> Vec<(&'a str, &'a str)> {
    let mut unresolved: Vec<(&str, &str)> = catalog
        .classes_in(module)
        .filter_map(|class| {
            let base = class.base.as_deref()?;
            (!catalog.contains(base)).then_some((class.name.as_str(), base))
        })
        .collect();
    unresolved.sort_unstable();
    unresolved
}
