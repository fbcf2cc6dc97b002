/// A link direction out of a mesh node.
///
/// `Up` and `Down` cross layers (the Z axis). `PlusX` is the east link and
/// `PlusY` is the north link of a node within its layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Dir {
	Up,
	Down,
	PlusX,
	MinusX,
	PlusY,
	MinusY
}

impl Dir {
	pub const ALL: [Dir; 6] = [Dir::Up, Dir::Down, Dir::PlusX, Dir::MinusX, Dir::PlusY, Dir::MinusY];

	pub const EAST:  Dir = Dir::PlusX;
	pub const NORTH: Dir = Dir::PlusY;

	/// Returns true if moving in this direction increases the linear index.
	pub fn positive(self) -> bool {
		match self {
			Dir::Up | Dir::PlusX | Dir::PlusY => true,
			Dir::Down | Dir::MinusX | Dir::MinusY => false
		}
	}

	pub fn axis(self) -> Axis {
		match self {
			Dir::Up | Dir::Down      => Axis::Z,
			Dir::PlusX | Dir::MinusX => Axis::X,
			Dir::PlusY | Dir::MinusY => Axis::Y
		}
	}
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
	X,
	Y,
	Z
}
