//! Turns the panel's raw field strings into an adjacency matrix.

use thiserror::Error;

use crate::components::circle_graph::AdjacencyMatrix;

/// A field token that could not be read as a node number.
///
/// Out-of-range numbers are dropped silently; only non-numeric input is an
/// error, reported against the 1-based node row it came from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("node {node}: \"{token}\" is not a node number")]
pub struct ParseError {
	/// 1-based row the bad token was typed into.
	pub node: usize,
	/// The offending token, verbatim.
	pub token: String,
}

/// Build an `n` x `n` matrix from `n` field strings, one per node slot.
///
/// An empty (or whitespace-only) field connects its node to the next
/// sequential node, dropped without error at the last slot. Any other field
/// is split on whitespace into 1-based target indices; indices `<= 0` or
/// `> n` are silently discarded.
pub fn parse_fields(fields: &[String]) -> Result<AdjacencyMatrix, ParseError> {
	let n = fields.len();
	let mut matrix = AdjacencyMatrix::new(n);

	for (i, raw) in fields.iter().enumerate() {
		let raw = raw.trim();
		if raw.is_empty() {
			if i + 1 < n {
				matrix.set(i, i + 1);
			}
			continue;
		}
		for token in raw.split_whitespace() {
			let target: i64 = token.parse().map_err(|_| ParseError {
				node: i + 1,
				token: token.to_owned(),
			})?;
			if target >= 1 && target as usize <= n {
				matrix.set(i, target as usize - 1);
			}
		}
	}

	Ok(matrix)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fields(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn explicit_targets_set_cells() {
		let m = parse_fields(&fields(&["2 3", "3", "1"])).unwrap();
		assert_eq!(
			m.edges().collect::<Vec<_>>(),
			vec![(0, 1), (0, 2), (1, 2), (2, 0)]
		);
	}

	#[test]
	fn empty_field_connects_to_next_node() {
		let m = parse_fields(&fields(&["", "", ""])).unwrap();
		assert!(m.get(0, 1));
		assert!(m.get(1, 2));
		// last slot has no next node, its edge is dropped
		assert_eq!(m.edge_count(), 2);
	}

	#[test]
	fn worked_example_from_three_slots() {
		let m = parse_fields(&fields(&["2 3", "", ""])).unwrap();
		assert_eq!(m.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
		assert!(m.participates(0));
		assert!(m.participates(1));
		assert!(m.participates(2));
	}

	#[test]
	fn out_of_range_indices_are_dropped() {
		let m = parse_fields(&fields(&["0 4 -2", "1"])).unwrap();
		assert_eq!(m.edges().collect::<Vec<_>>(), vec![(1, 0)]);
	}

	#[test]
	fn self_loop_is_allowed() {
		let m = parse_fields(&fields(&["1"])).unwrap();
		assert!(m.get(0, 0));
	}

	#[test]
	fn whitespace_only_field_counts_as_empty() {
		let m = parse_fields(&fields(&["  \t ", ""])).unwrap();
		assert!(m.get(0, 1));
		assert_eq!(m.edge_count(), 1);
	}

	#[test]
	fn non_numeric_token_reports_its_row() {
		let err = parse_fields(&fields(&["2", "1 x", ""])).unwrap_err();
		assert_eq!(err.node, 2);
		assert_eq!(err.token, "x");
		assert_eq!(err.to_string(), "node 2: \"x\" is not a node number");
	}

	#[test]
	fn no_fields_builds_the_empty_matrix() {
		let m = parse_fields(&[]).unwrap();
		assert_eq!(m.size(), 0);
		assert_eq!(m.edge_count(), 0);
	}

	#[test]
	fn duplicate_targets_collapse_to_one_cell() {
		let m = parse_fields(&fields(&["2 2 2", "1"])).unwrap();
		assert_eq!(m.edge_count(), 2);
		assert!(m.get(0, 1));
		assert!(m.get(1, 0));
	}
}
