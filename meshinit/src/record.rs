use bit_vec::BitVec;
use bram::{Field, Layout};
use mesh::{Dir, MeshTopology};
use tracing::warn;

/// Cost of a horizontal link that exists.
pub const PENALTY: u32 = 7;

/// Egress code of nodes in the topmost layer, which have no upward link.
pub const EX_TERMINAL: u32 = 16379;
/// Egress code of bottom layer nodes that inject traffic.
pub const EX_SOURCE: u32 = 10;

pub const EX_WIDTH: usize = 14;
pub const WV_WIDTH: usize = 10;
pub const CF_WIDTH: usize = 10;
pub const PN_WIDTH: usize = 4;

const FIELDS: &[Field] = &[
	Field { name: "ex",   width: EX_WIDTH },
	Field { name: "wv",   width: WV_WIDTH },
	Field { name: "cf_9", width: PN_WIDTH },
	Field { name: "cf_7", width: CF_WIDTH },
	Field { name: "cf_5", width: CF_WIDTH },
	Field { name: "cf_3", width: CF_WIDTH },
	Field { name: "cf_2", width: CF_WIDTH },
	Field { name: "cf_1", width: PN_WIDTH }
];

/// Initial routing memory word of a single mesh node.
///
/// Only `ex`, `cf_9`, `cf_2`, and `cf_1` are computed here. The other fields are
/// reserved for the router at runtime and start out as zero.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NodeRecord {
	pub ex: u32,
	pub wv: u32,
	pub cf_9: u32,
	pub cf_7: u32,
	pub cf_5: u32,
	pub cf_3: u32,
	pub cf_2: u32,
	pub cf_1: u32
}

impl NodeRecord {
	/// Field order and widths of the 72 bit memory word.
	pub const LAYOUT: Layout = Layout::new(FIELDS);

	pub fn for_node(topology: &MeshTopology, index: usize) -> Self {
		let upper = topology.has_neighbor(index, Dir::Up);

		let ex = if !upper {
			EX_TERMINAL
		} else if topology.is_source_layer(index) {
			EX_SOURCE
		} else {
			0
		};

		let penalty = |dir| if topology.has_neighbor(index, dir) { PENALTY } else { 0 };

		NodeRecord {
			ex,
			// Node indices always fit in a u32, see MeshTopology::MAX_NODES
			cf_2: if upper { index as u32 } else { 0 },
			cf_9: penalty(Dir::NORTH),
			cf_1: penalty(Dir::EAST),
			..NodeRecord::default()
		}
	}

	/// Field values in layout order.
	pub fn values(&self) -> [i64; 8] {
		[
			self.ex as i64,
			self.wv as i64,
			self.cf_9 as i64,
			self.cf_7 as i64,
			self.cf_5 as i64,
			self.cf_3 as i64,
			self.cf_2 as i64,
			self.cf_1 as i64
		]
	}

	pub fn pack(&self) -> BitVec {
		Self::LAYOUT.pack(&self.values())
	}
}

/// Computes the record of every node in the mesh, indexed by linear node index.
pub fn generate(topology: &MeshTopology) -> Box<[NodeRecord]> {
	let count = topology.node_count();

	// Only nodes below the top layer carry their index in cf_2
	if count - topology.layer_size() > 1 << CF_WIDTH {
		warn!(nodes = count, "cf_2 only holds {} bits, node indices of {} and above are truncated", CF_WIDTH, 1 << CF_WIDTH);
	}

	(0..count)
		.map(|index| NodeRecord::for_node(topology, index))
		.collect::<Vec<_>>()
		.into_boxed_slice()
}
