use tracing::debug;

use super::glob::GlobPattern;
use super::node::Node;
use super::path::{self, ArchivePath};

/// Expand one path specification into every concrete path it names.
///
/// Literal segments are followed directly; a wildcard segment is matched
/// against the children of the directory reached so far and each match is
/// resolved further with the remaining segments. Matches are produced
/// depth-first in children-map order. An empty result means nothing matched.
pub fn resolve(spec: &str, root: &Node) -> Vec<String> {
    let segments: Vec<&str> = path::split(spec).collect();
    let mut matches = Vec::new();
    resolve_from(root, ArchivePath::root(), &segments, &mut matches);
    matches
}

fn resolve_from(node: &Node, mut anchor: ArchivePath, rest: &[&str], out: &mut Vec<String>) {
    let mut node = node;
    let mut rest = rest;

    // Descend through the literal prefix
    while let Some((segment, tail)) = rest.split_first() {
        let pattern = GlobPattern::compile(segment);
        if !pattern.is_literal() {
            let Some(children) = node.children() else {
                return;
            };
            for (name, child) in children {
                if pattern.matches(name) {
                    resolve_from(child, anchor.child(name), tail, out);
                }
            }
            return;
        }

        match node.children().and_then(|c| c.get(*segment)) {
            Some(child) => {
                node = child;
                anchor = anchor.child(segment);
                rest = tail;
            }
            None => return,
        }
    }

    out.push(anchor.to_string());
}

/// Expand every path specification, keeping a spec verbatim when it
/// matched nothing so it can be reported as missing later on.
pub fn expand<S: AsRef<str>>(specs: &[S], root: &Node) -> Vec<String> {
    let mut expanded = Vec::new();
    for spec in specs {
        let spec = path::normalize_spec(spec.as_ref());
        let matches = resolve(&spec, root);
        debug!(spec = %spec, matches = matches.len(), "resolved path specification");
        if matches.is_empty() {
            expanded.push(spec);
        } else {
            expanded.extend(matches);
        }
    }
    expanded
}
