use crate::direction::{Axis, Dir};
use crate::position::NodePosition;
use std::fmt::{Display, Formatter, Result};

/// Extents of a 3D mesh. Always non-empty, and every node index fits in a `u32`.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct MeshTopology {
	x: u32,
	y: u32,
	z: u32
}

impl MeshTopology {
	/// Largest supported node count, so that a node index always fits in a `u32`.
	pub const MAX_NODES: u64 = ::std::u32::MAX as u64;

	/// Creates a new topology from the extents along each axis.
	/// Returns `None` if any extent is zero or if the node count exceeds `MAX_NODES`.
	pub fn new(x: u32, y: u32, z: u32) -> Option<Self> {
		if x == 0 || y == 0 || z == 0 {
			return None;
		}

		let nodes = (x as u64).checked_mul(y as u64)?.checked_mul(z as u64)?;

		if nodes > Self::MAX_NODES {
			return None;
		}

		Some(MeshTopology { x, y, z })
	}

	pub fn x(&self) -> u32 {
		self.x
	}

	pub fn y(&self) -> u32 {
		self.y
	}

	pub fn z(&self) -> u32 {
		self.z
	}

	/// Number of nodes in a single layer, `X*Y`.
	pub fn layer_size(&self) -> usize {
		self.x as usize * self.y as usize
	}

	/// Total number of nodes, `X*Y*Z`.
	pub fn node_count(&self) -> usize {
		self.layer_size() * self.z as usize
	}

	/// Linearizes a position: `x + y*X + z*X*Y`.
	pub fn index(&self, position: NodePosition) -> usize {
		debug_assert!(self.contains(position), "position {} outside of mesh {}", position, self);

		position.x() as usize
			+ position.y() as usize * self.x as usize
			+ position.z() as usize * self.layer_size()
	}

	pub fn position(&self, index: usize) -> NodePosition {
		debug_assert!(index < self.node_count(), "node index {} outside of mesh {}", index, self);

		let local = self.layer_index(index);

		NodePosition::new(
			(local % self.x as usize) as u32,
			(local / self.x as usize) as u32,
			self.layer(index)
		)
	}

	pub fn contains(&self, position: NodePosition) -> bool {
		position.x() < self.x && position.y() < self.y && position.z() < self.z
	}

	/// Returns the layer (Z coordinate) of a node.
	pub fn layer(&self, index: usize) -> u32 {
		(index / self.layer_size()) as u32
	}

	/// Returns the index of a node relative to the start of its layer.
	pub fn layer_index(&self, index: usize) -> usize {
		index % self.layer_size()
	}

	/// Returns the linear index of the first node in a layer.
	pub fn layer_start(&self, layer: u32) -> usize {
		layer as usize * self.layer_size()
	}

	/// Returns whether the node has a link in the given direction, that is,
	/// whether it is not on the matching edge of the mesh.
	///
	/// Only index arithmetic is involved:
	///  * `PlusX`: `i mod X < X - 1`
	///  * `PlusY`: `i mod XY < XY - X`
	///  * `Up`: `i < NodeCount - XY`
	///
	/// and the mirrored conditions for the negative directions.
	pub fn has_neighbor(&self, index: usize, dir: Dir) -> bool {
		let x = self.x as usize;
		let xy = self.layer_size();
		let count = self.node_count();

		match dir {
			Dir::PlusX  => index % x < x - 1,
			Dir::MinusX => index % x > 0,
			Dir::PlusY  => index % xy < xy - x,
			Dir::MinusY => index % xy >= x,
			Dir::Up     => index < count - xy,
			Dir::Down   => index >= xy
		}
	}

	/// Returns the index of the neighboring node in the given direction, if there is one.
	pub fn neighbor(&self, index: usize, dir: Dir) -> Option<usize> {
		if !self.has_neighbor(index, dir) {
			return None;
		}

		let stride = self.stride(dir.axis());

		Some(if dir.positive() { index + stride } else { index - stride })
	}

	/// Nodes in the bottom layer (`z == 0`) inject traffic into the mesh.
	pub fn is_source_layer(&self, index: usize) -> bool {
		!self.has_neighbor(index, Dir::Down)
	}

	/// Distance in linear index between two nodes adjacent along an axis.
	pub fn stride(&self, axis: Axis) -> usize {
		match axis {
			Axis::X => 1,
			Axis::Y => self.x as usize,
			Axis::Z => self.layer_size()
		}
	}
}

impl Display for MeshTopology {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({},{},{})", self.x, self.y, self.z)
	}
}
