use std::fmt::{Display, Formatter, Result};

/// Coordinates of a node within a mesh. Bounds are only meaningful together
/// with a `MeshTopology`, see `MeshTopology::index` and `MeshTopology::position`.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct NodePosition {
	x: u32,
	y: u32,
	z: u32
}

impl NodePosition {
	pub fn new(x: u32, y: u32, z: u32) -> Self {
		NodePosition { x, y, z }
	}

	pub fn x(&self) -> u32 {
		self.x
	}

	pub fn y(&self) -> u32 {
		self.y
	}

	/// Returns the layer this node belongs to.
	pub fn z(&self) -> u32 {
		self.z
	}
}

impl Display for NodePosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
	}
}
