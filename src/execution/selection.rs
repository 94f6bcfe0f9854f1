//! The selection collector (C7): flatten fragment spreads and inline
//! fragments into an ordered list of fields, merging repeated response
//! keys' sub-selections as the GraphQL collection algorithm does.

use std::collections::{HashMap, HashSet};

use crate::ast::{AstValue, Definition, Document, Selection};
use crate::error::GraphQLError;

/// One response-key slot to resolve: the first occurrence's name/arguments
/// win, but every matching field's sub-selection is merged in, in order.
pub struct CollectedField<'a> {
    pub response_key: String,
    pub field_name: String,
    pub arguments: &'a [(String, AstValue)],
    pub selection_set: Vec<&'a Selection>,
}

/// Collect fields from `selections`, keeping only spreads/inline fragments
/// whose type condition is in `applicable_types` (the concrete object's own
/// name plus every interface/union it belongs to).
pub fn collect_fields<'a, I>(
    selections: I,
    applicable_types: &HashSet<String>,
    document: &'a Document,
) -> Result<Vec<CollectedField<'a>>, GraphQLError>
where
    I: IntoIterator<Item = &'a Selection>,
{
    let mut order = Vec::new();
    let mut by_key: HashMap<String, CollectedField<'a>> = HashMap::new();
    let mut visiting = HashSet::new();
    collect_into(selections, applicable_types, document, &mut order, &mut by_key, &mut visiting)?;
    Ok(order.into_iter().map(|key| by_key.remove(&key).expect("collected key missing from map")).collect())
}

fn collect_into<'a, I>(
    selections: I,
    applicable_types: &HashSet<String>,
    document: &'a Document,
    order: &mut Vec<String>,
    by_key: &mut HashMap<String, CollectedField<'a>>,
    visiting: &mut HashSet<String>,
) -> Result<(), GraphQLError>
where
    I: IntoIterator<Item = &'a Selection>,
{
    for selection in selections {
        match selection {
            Selection::Field(f) => {
                let key = f.response_key().to_string();
                match by_key.get_mut(&key) {
                    Some(existing) => existing.selection_set.extend(f.selection_set.iter()),
                    None => {
                        order.push(key.clone());
                        by_key.insert(
                            key.clone(),
                            CollectedField {
                                response_key: key,
                                field_name: f.name.clone(),
                                arguments: &f.arguments,
                                selection_set: f.selection_set.iter().collect(),
                            },
                        );
                    }
                }
            }
            Selection::FragmentSpread(spread) => {
                if visiting.contains(&spread.name) {
                    return Err(GraphQLError::ValidationError(format!(
                        "Fragment \"{}\" forms a cycle",
                        spread.name
                    )));
                }
                let fragment = document
                    .definitions
                    .iter()
                    .find_map(|d| match d {
                        Definition::Fragment(fd) if fd.name == spread.name => Some(fd),
                        _ => None,
                    })
                    .ok_or_else(|| GraphQLError::ValidationError(format!("Unknown fragment \"{}\"", spread.name)))?;
                if applicable_types.contains(&fragment.type_condition) {
                    visiting.insert(spread.name.clone());
                    collect_into(fragment.selection_set.iter(), applicable_types, document, order, by_key, visiting)?;
                    visiting.remove(&spread.name);
                }
            }
            Selection::InlineFragment(inline) => {
                let matches = match &inline.type_condition {
                    Some(cond) => applicable_types.contains(cond),
                    None => true,
                };
                if matches {
                    collect_into(inline.selection_set.iter(), applicable_types, document, order, by_key, visiting)?;
                }
            }
        }
    }
    Ok(())
}
