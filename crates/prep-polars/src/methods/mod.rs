mod columns;
mod multi_group;
mod two_group;

pub use multi_group::{extract_groups, extract_groups_with_sink, GroupedData};
pub use two_group::{extract_two_groups, extract_two_groups_with_sink};

#[cfg(test)]
pub(crate) use columns::numeric_values;
