//! Join operators.
//!
//! - `join`: nested-loop equi-join keeping the columns of both sides
//! - `hash_join`: equi-join over a transient hash index of the build side
//! - `index_join`: equi-join over a transient index of a chosen backend
//! - `natural_join`: equi-join over every attribute name the tables share
//!
//! Hash and index joins materialize one side (the build side) into an index keyed
//! by its join columns and scan the other (the probe side). The join columns of the
//! build side are dropped from the result, since they repeat the probe side's.

mod hash;
mod index;
mod natural;
mod nested;

use crate::table::Table;
use hashbrown::HashMap;
use minirel_core::schema::attribute_list;
use minirel_core::{KeyType, Schema, Tuple};
use minirel_index::Index;
use tracing::warn;

/// Index over the build side: join key to the build tuples, join columns removed.
pub(crate) type BuildIndex = Box<dyn Index<KeyType, Vec<Tuple>> + Send + Sync>;

/// Resolves both attribute lists of an equi-join to column positions.
fn resolve_columns(
    left: &Table,
    left_attrs: &[String],
    right: &Table,
    right_attrs: &[String],
) -> Option<(Vec<usize>, Vec<usize>)> {
    if left_attrs.is_empty() || left_attrs.len() != right_attrs.len() {
        warn!(
            table = %left.name(),
            other = %right.name(),
            left = left_attrs.len(),
            right = right_attrs.len(),
            "join attribute lists differ in length"
        );
        return None;
    }
    let resolve = |table: &Table, attrs: &[String]| match table.schema().cols(attrs) {
        Ok(cols) => {
            if let Some(i) = (1..cols.len()).find(|&i| cols[..i].contains(&cols[i])) {
                warn!(table = %table.name(), attribute = %attrs[i], "join attribute repeated");
                return None;
            }
            Some(cols)
        }
        Err(unknown) => {
            warn!(table = %table.name(), attribute = %unknown, "join on unknown attribute");
            None
        }
    };
    Some((resolve(left, left_attrs)?, resolve(right, right_attrs)?))
}

/// Joins through a transient index of the build side.
///
/// `this` probes and `other` builds, unless `attributes1` is exactly this table's
/// key while `attributes2` is not other's key; then the roles swap so that the
/// build side is the one keyed by its primary key. A probe tuple without a match
/// is padded with absent values.
fn build_probe_join(
    this: &Table,
    attributes1: &str,
    attributes2: &str,
    other: &Table,
    mut index: BuildIndex,
) -> Option<Table> {
    let attrs1 = attribute_list(attributes1);
    let attrs2 = attribute_list(attributes2);

    let swap = this.schema().is_key(attrs1.as_slice()) && !other.schema().is_key(attrs2.as_slice());
    let (probe, probe_attrs, build, build_attrs) = if swap {
        (other, attrs2, this, attrs1)
    } else {
        (this, attrs1, other, attrs2)
    };

    let (probe_cols, build_cols) = resolve_columns(probe, &probe_attrs, build, &build_attrs)?;

    let mut groups: HashMap<KeyType, Vec<Tuple>> = HashMap::new();
    for t in build.tuples() {
        groups
            .entry(t.key(&build_cols))
            .or_default()
            .push(t.without(&build_cols));
    }
    for (key, tuples) in groups {
        index.put(key, tuples);
    }

    let filler = Tuple::absent(build.schema().arity() - build_cols.len());
    let mut tuples = Vec::with_capacity(probe.len());
    for t in probe.tuples() {
        match index.get(&t.key(&probe_cols)) {
            Some(matches) => tuples.extend(matches.iter().map(|m| t.concat(m))),
            None => tuples.push(t.concat(&filler)),
        }
    }

    let schema = joined_schema(probe, build, &build_cols);
    Some(probe.derive(schema, tuples))
}

/// Schema of `left` followed by `right` without the columns in `dropped`.
/// The key is left's key.
fn joined_schema(left: &Table, right: &Table, dropped: &[usize]) -> Schema {
    let kept = |i: &usize| !dropped.contains(i);
    let mut attributes = left.attributes().to_vec();
    let mut domains = left.domains().to_vec();
    for i in (0..right.schema().arity()).filter(kept) {
        attributes.push(right.attributes()[i].clone());
        domains.push(right.domains()[i]);
    }
    Schema::from_parts(attributes, domains, left.key().to_vec())
}
