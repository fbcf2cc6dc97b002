extern crate clap;
extern crate meshinit;

use clap::{App, AppSettings, Arg, ArgMatches};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use meshinit::config::{Options, DEFAULT_OUTPUT};

fn options_from(matches: &ArgMatches) -> Options {
	let mut options = Options::default();

	options.quiet = matches.is_present("quiet");
	options.print = matches.is_present("print");

	if let Some(output) = matches.value_of("output") {
		options.output = PathBuf::from(output);
	}

	// Anything short of all three extents falls back to the prompts
	options.extents = matches.values_of("extents").and_then(|values| {
		let values: Vec<&str> = values.collect();

		match values.as_slice() {
			&[x, y, z] => Some([x.to_owned(), y.to_owned(), z.to_owned()]),
			_ => None
		}
	});

	options
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.with_writer(io::stderr)
		.init();

	let matches = App::new("meshinit")
		.version("0.1.0")
		.about("Generates the initial block RAM contents of a 3D mesh interconnect's routing memory")
		.setting(AppSettings::AllowNegativeNumbers)
		.arg(Arg::with_name("extents")
			.value_name("X Y Z")
			.help("Mesh extents along each axis, prompted for interactively unless all three are given")
			.multiple(true)
			.max_values(3)
		)
		.arg(Arg::with_name("output")
			.short("o")
			.long("output")
			.value_name("FILE")
			.help("Sets the output file, which is overwritten")
			.default_value(DEFAULT_OUTPUT)
			.takes_value(true)
		)
		.arg(Arg::with_name("quiet")
			.short("q")
			.long("quiet")
			.help("Suppresses the topology echo and the banners")
		)
		.arg(Arg::with_name("print")
			.long("print")
			.help("Also prints every initializer line to the console")
		)
		.get_matches();

	let options = options_from(&matches);

	let stdin = io::stdin();
	let stdout = io::stdout();

	if let Err(err) = meshinit::run(&options, stdin.lock(), stdout.lock()) {
		eprintln!("error: {}", err);
		process::exit(1);
	}
}
