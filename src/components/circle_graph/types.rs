/// Square 0/1 adjacency grid over 1-based user-facing node numbers.
///
/// Cell `(i, j)` set means a directed edge from node `i + 1` to node `j + 1`.
/// Stored row-major; rebuilt whole on every draw request, never mutated
/// incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
	size: usize,
	cells: Vec<bool>,
}

impl AdjacencyMatrix {
	/// An all-zero `size` x `size` matrix.
	pub fn new(size: usize) -> Self {
		Self {
			size,
			cells: vec![false; size * size],
		}
	}

	/// Number of node slots (rows/columns).
	pub fn size(&self) -> usize {
		self.size
	}

	/// Set the edge `from -> to` (0-based). Out-of-range pairs are ignored.
	pub fn set(&mut self, from: usize, to: usize) {
		if from < self.size && to < self.size {
			self.cells[from * self.size + to] = true;
		}
	}

	/// Whether the edge `from -> to` is present. Out-of-range reads are false.
	pub fn get(&self, from: usize, to: usize) -> bool {
		from < self.size && to < self.size && self.cells[from * self.size + to]
	}

	/// All set cells as 0-based `(from, to)` pairs, row-major order.
	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.cells
			.iter()
			.enumerate()
			.filter(|&(_, &set)| set)
			.map(|(idx, _)| (idx / self.size, idx % self.size))
	}

	/// Number of set cells.
	pub fn edge_count(&self) -> usize {
		self.cells.iter().filter(|&&set| set).count()
	}

	/// Whether node `i` (0-based) is an endpoint of at least one edge,
	/// as source or target. Isolated nodes are laid out but never drawn.
	pub fn participates(&self, i: usize) -> bool {
		if i >= self.size {
			return false;
		}
		(0..self.size).any(|j| self.get(i, j) || self.get(j, i))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_and_get_round_trip() {
		let mut m = AdjacencyMatrix::new(3);
		m.set(0, 2);
		assert!(m.get(0, 2));
		assert!(!m.get(2, 0));
		assert_eq!(m.edge_count(), 1);
	}

	#[test]
	fn out_of_range_set_is_ignored() {
		let mut m = AdjacencyMatrix::new(2);
		m.set(0, 5);
		m.set(5, 0);
		assert_eq!(m.edge_count(), 0);
	}

	#[test]
	fn edges_iterates_row_major() {
		let mut m = AdjacencyMatrix::new(3);
		m.set(2, 0);
		m.set(0, 1);
		m.set(0, 2);
		assert_eq!(m.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (2, 0)]);
	}

	#[test]
	fn participation_covers_rows_and_columns() {
		let mut m = AdjacencyMatrix::new(3);
		m.set(0, 1);
		assert!(m.participates(0));
		assert!(m.participates(1));
		assert!(!m.participates(2));
	}

	#[test]
	fn self_loop_counts_as_participation() {
		let mut m = AdjacencyMatrix::new(2);
		m.set(1, 1);
		assert!(m.participates(1));
		assert!(!m.participates(0));
	}

	#[test]
	fn empty_matrix_has_no_edges() {
		let m = AdjacencyMatrix::new(0);
		assert_eq!(m.size(), 0);
		assert_eq!(m.edges().count(), 0);
		assert!(!m.participates(0));
	}
}
