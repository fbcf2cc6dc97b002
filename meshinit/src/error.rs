//! Error types for mesh memory initialization

use std::fmt::Display;
use std::io;
use thiserror::Error;

/// Result type alias for mesh memory initialization
pub type Result<T> = std::result::Result<T, MeshInitError>;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum MeshInitError {
	/// An extent is not positive, or the mesh has more nodes than can be indexed
	#[error("invalid topology ({x},{y},{z}): {reason}")]
	InvalidTopology {
		x: i64,
		y: i64,
		z: i64,
		reason: &'static str
	},

	/// A value could not be read as a base 10 integer
	#[error("cannot parse {name} from {input:?}: {reason}")]
	Parse {
		/// Which extent was being read
		name: &'static str,
		input: String,
		reason: String
	},

	/// The console or the output file failed
	#[error("I/O error on {target}: {source}")]
	Io {
		target: String,
		source: io::Error
	}
}

impl MeshInitError {
	pub fn invalid_topology(x: i64, y: i64, z: i64, reason: &'static str) -> Self {
		MeshInitError::InvalidTopology { x, y, z, reason }
	}

	pub fn parse(name: &'static str, input: impl Into<String>, reason: impl Display) -> Self {
		MeshInitError::Parse {
			name,
			input: input.into(),
			reason: reason.to_string()
		}
	}

	pub fn io(target: impl Display, source: io::Error) -> Self {
		MeshInitError::Io {
			target: target.to_string(),
			source
		}
	}
}
