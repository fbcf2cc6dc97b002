use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_meshinit(args: &[&str], output: &Path, stdin: &str) -> Output {
	let exe = env!("CARGO_BIN_EXE_meshinit");

	let mut child = Command::new(exe)
		.arg("-o")
		.arg(output)
		.args(args)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("spawn meshinit");

	child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();

	child.wait_with_output().expect("run meshinit")
}

#[test]
fn two_by_two_single_layer() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("init.dat");

	let output = run_meshinit(&["2", "2", "1"], &path, "");

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(String::from_utf8_lossy(&output.stdout), "(X,Y,Z) = (2,2,1)\n// initial begin\n// end\n");

	let text = fs::read_to_string(&path).unwrap();
	let lines: Vec<&str> = text.lines().collect();

	assert_eq!(lines.len(), 4);
	assert_eq!(
		lines[0],
		format!("BRAM_FIFO_blk[0].FIFO.RAM.RAM[0] <= 72'b11111111111011{}0111{}0111;", "0".repeat(10), "0".repeat(40))
	);
	assert_eq!(
		lines[3],
		format!("BRAM_FIFO_blk[0].FIFO.RAM.RAM[3] <= 72'b11111111111011{};", "0".repeat(58))
	);
}

#[test]
fn interactive_prompts() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("init.dat");

	let output = run_meshinit(&[], &path, "3\n3\n3\n");

	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).starts_with("input X Y Z\nX = Y = Z = (X,Y,Z) = (3,3,3)"));
	assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 27);
}

#[test]
fn partial_arguments_fall_back_to_prompts() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("init.dat");

	let output = run_meshinit(&["5", "5"], &path, "1 1 2\n");

	assert!(output.status.success());
	assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
}

#[test]
fn quiet_print() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("init.dat");

	let output = run_meshinit(&["-q", "--print", "3", "1", "2"], &path, "");

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), fs::read_to_string(&path).unwrap());
}

#[test]
fn failures_exit_nonzero() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("init.dat");

	for args in [["0", "2", "2"], ["-1", "2", "2"], ["2", "b", "2"]].iter() {
		let output = run_meshinit(args, &path, "");

		assert_eq!(output.status.code(), Some(1), "args {:?}", args);
		assert!(String::from_utf8_lossy(&output.stderr).contains("error: "));
		assert!(!path.exists());
	}

	let missing = dir.path().join("missing").join("init.dat");
	let output = run_meshinit(&["2", "2", "2"], &missing, "");

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: I/O error"));
}
