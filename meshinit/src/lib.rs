#![forbid(unsafe_code)]

//! # `meshinit`: initial routing memory for 3D mesh interconnects
//!
//! Every node of an `X * Y * Z` mesh owns a FIFO/routing block backed by block
//! RAM. Before simulation or bring-up, that RAM needs a deterministic initial
//! word per node. This crate computes those words and writes them out as a
//! list of hardware memory initializer assignments.
//!
//! The pipeline runs in three steps, each one a plain value handed to the next:
//!
//!  * `config`: resolve the topology, from arguments or interactive prompts
//!  * `record`: compute one `NodeRecord` per node from its position in the mesh
//!  * `dump`: pack each record into a 72 bit word and write it out, layer by layer

// Bit sequences for packed memory words
extern crate bit_vec;

pub mod config;
pub mod dump;
pub mod error;
pub mod record;

pub use config::Options;
pub use error::{MeshInitError, Result};
pub use record::NodeRecord;

use std::io::{BufRead, Write};
use tracing::info;

/// Runs the whole pipeline: resolves the topology, generates the records, and
/// writes the dump to `options.output`. Prompts, the topology echo, and the
/// banners go to `console`.
///
/// Returns the number of lines written.
pub fn run<R, W>(options: &Options, input: R, mut console: W) -> Result<usize> where R: BufRead, W: Write {
	let topology = config::resolve_topology(options, input, &mut console)?;

	info!(%topology, nodes = topology.node_count(), "resolved topology");

	let announce = |console: &mut W, text: &str| -> Result<()> {
		if !options.quiet {
			writeln!(console, "{}", text).map_err(|err| MeshInitError::io("console", err))?;
		}

		Ok(())
	};

	announce(&mut console, &format!("(X,Y,Z) = {}", topology))?;

	let records = record::generate(&topology);

	announce(&mut console, "// initial begin")?;

	let lines = {
		let echo: Option<&mut dyn Write> = if options.print { Some(&mut console) } else { None };

		dump::write_file(&topology, &records, &options.output, echo)?
	};

	announce(&mut console, "// end")?;

	Ok(lines)
}
