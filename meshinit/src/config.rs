use crate::error::{MeshInitError, Result};
use mesh::MeshTopology;
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "./init.dat";

const EXTENT_NAMES: [&str; 3] = ["X", "Y", "Z"];

/// Settings of a single run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Options {
	/// Unparsed `X Y Z` arguments. When absent, the extents are prompted for.
	pub extents: Option<[String; 3]>,
	pub output: PathBuf,
	/// Suppresses the topology echo and the banners.
	pub quiet: bool,
	/// Copies every emitted line to the console.
	pub print: bool
}

impl Default for Options {
	fn default() -> Self {
		Options {
			extents: None,
			output: PathBuf::from(DEFAULT_OUTPUT),
			quiet: false,
			print: false
		}
	}
}

/// Parses a single base 10 extent. Validation happens in `topology_from_extents`.
pub fn parse_extent(name: &'static str, input: &str) -> Result<i64> {
	input.trim().parse::<i64>().map_err(|err| MeshInitError::parse(name, input, err))
}

pub fn topology_from_extents(x: i64, y: i64, z: i64) -> Result<MeshTopology> {
	if x <= 0 || y <= 0 || z <= 0 {
		return Err(MeshInitError::invalid_topology(x, y, z, "every extent must be positive"));
	}

	let narrow = |value: i64| u32::try_from(value)
		.map_err(|_| MeshInitError::invalid_topology(x, y, z, "extent exceeds the node index range"));

	MeshTopology::new(narrow(x)?, narrow(y)?, narrow(z)?)
		.ok_or_else(|| MeshInitError::invalid_topology(x, y, z, "node count exceeds the node index range"))
}

pub fn topology_from_args<S>(args: &[S; 3]) -> Result<MeshTopology> where S: AsRef<str> {
	let x = parse_extent(EXTENT_NAMES[0], args[0].as_ref())?;
	let y = parse_extent(EXTENT_NAMES[1], args[1].as_ref())?;
	let z = parse_extent(EXTENT_NAMES[2], args[2].as_ref())?;

	topology_from_extents(x, y, z)
}

/// Whitespace separated tokens of a line based input. Several values may share a line.
struct Tokens<R> where R: BufRead {
	input: R,
	pending: VecDeque<String>
}

impl<R> Tokens<R> where R: BufRead {
	fn new(input: R) -> Self {
		Tokens { input, pending: VecDeque::new() }
	}

	fn next(&mut self) -> io::Result<Option<String>> {
		loop {
			if let Some(token) = self.pending.pop_front() {
				return Ok(Some(token));
			}

			let mut line = String::new();

			if self.input.read_line(&mut line)? == 0 {
				return Ok(None);
			}

			self.pending.extend(line.split_whitespace().map(str::to_owned));
		}
	}
}

/// Asks for each extent in turn, with `X = `, `Y = `, and `Z = ` prompts.
pub fn prompt_topology<R, W>(input: R, mut output: W) -> Result<MeshTopology> where R: BufRead, W: Write {
	let console = |err: io::Error| MeshInitError::io("console", err);

	let mut tokens = Tokens::new(input);
	let mut extents = [0i64; 3];

	writeln!(output, "input X Y Z").map_err(console)?;

	for (&name, extent) in EXTENT_NAMES.iter().zip(extents.iter_mut()) {
		write!(output, "{} = ", name).map_err(console)?;
		output.flush().map_err(console)?;

		let token = tokens.next()
			.map_err(console)?
			.ok_or_else(|| MeshInitError::parse(name, "", "unexpected end of input"))?;

		*extent = parse_extent(name, &token)?;
	}

	topology_from_extents(extents[0], extents[1], extents[2])
}

/// Takes the extents from the arguments if they were given, otherwise prompts for them.
pub fn resolve_topology<R, W>(options: &Options, input: R, output: W) -> Result<MeshTopology> where R: BufRead, W: Write {
	match options.extents {
		Some(ref args) => topology_from_args(args),
		None => prompt_topology(input, output)
	}
}
