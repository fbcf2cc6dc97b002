use crate::error::{MeshInitError, Result};
use crate::record::NodeRecord;
use bram::{InitWriter, MemoryPath, Tee};
use mesh::MeshTopology;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Writes one initializer line per node, grouped by layer. Each layer is its own
/// memory block, addressed by the node's index within the layer.
///
/// Returns the output along with the number of lines written.
pub fn write_dump<O>(topology: &MeshTopology, records: &[NodeRecord], out: O) -> io::Result<(O, usize)> where O: Write {
	assert_eq!(records.len(), topology.node_count(), "Record count does not match the mesh {}", topology);

	let layer_size = topology.layer_size();
	let mut writer = InitWriter::new(out, MemoryPath::default(), NodeRecord::LAYOUT.width());

	for layer in 0..topology.z() {
		let start = topology.layer_start(layer);

		for (address, record) in records[start..start + layer_size].iter().enumerate() {
			writer.word(layer, address, &record.pack())?;
		}

		debug!(layer, lines = writer.words(), "wrote layer");
	}

	let lines = writer.words();

	Ok((writer.finish()?, lines))
}

/// Writes the dump to a file, truncating it first. When `echo` is given, every
/// line is copied there as well.
///
/// If writing the file fails midway, the partially written file is removed. A
/// failing `echo` stops the copies but never the file, and is reported once the
/// file is complete.
pub fn write_file(topology: &MeshTopology, records: &[NodeRecord], path: &Path, echo: Option<&mut dyn Write>) -> Result<usize> {
	let file = File::create(path).map_err(|err| MeshInitError::io(path.display(), err))?;

	write_sink(topology, records, path, BufWriter::new(file), echo)
}

/// Writes the dump into `sink`, which was just created at `path`.
fn write_sink<F>(topology: &MeshTopology, records: &[NodeRecord], path: &Path, sink: F, echo: Option<&mut dyn Write>) -> Result<usize> where F: Write {
	let mut echo_error = None;

	let result = match echo {
		Some(echo) => {
			let mut tee = Tee::new(sink, echo);
			let result = write_dump(topology, records, &mut tee).map(|(_, lines)| lines);

			echo_error = tee.take_secondary_error();
			result
		},
		None => write_dump(topology, records, sink).map(|(_, lines)| lines)
	};

	match result {
		Ok(lines) => {
			info!(path = %path.display(), lines, "wrote memory initialization");

			match echo_error {
				Some(err) => Err(MeshInitError::io("console", err)),
				None => Ok(lines)
			}
		},
		Err(err) => {
			if let Err(cleanup) = fs::remove_file(path) {
				warn!(path = %path.display(), "failed to remove partial output: {}", cleanup);
			}

			Err(MeshInitError::io(path.display(), err))
		}
	}
}
