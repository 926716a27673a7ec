use {
	::clap::{Parser, Subcommand},
	::miette::{Diagnostic, Report},
	::serde_json::json,
	::std::io::Read,
	::tracing::error_span,
	::xmlmarkup::{document::render_document, MarkupError},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
	/// emit machine-readable JSON information to stderr
	#[arg(long, global = true)]
	json: bool,
	/// do not emit status updates
	#[arg(long, global = true)]
	no_status: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// check that the JSON document on stdin renders, without printing it
	Check,
	/// render the JSON document on stdin and output the markup to stdout
	Render,
}

fn status_update(stage: &'static str, status: &'static str, json: bool) {
	if json {
		eprintln!(
			"{}",
			json!({
				"kind": "status-update",
				"stage": stage,
				"status": status,
			})
		);
	} else {
		eprintln!("[{stage}] {status}");
	}
}

fn report(error: MarkupError, json: bool) {
	let _traced = error_span!("diagnostic", ?error).entered();

	if json {
		let message = error.to_string();
		let code = error.code().map(|code| code.to_string());
		let help = error.help().map(|help| help.to_string());
		let rendered = format!("{:?}", Report::from(error));

		eprintln!(
			"{}",
			json!({
				"kind": "diagnostic",
				"message": message,
				"code": code,
				"help": help,
				"rendered": rendered,
			})
		);
	} else {
		eprintln!("{:?}", Report::from(error));
	}
}

fn run(args: &Cli, stage: &mut &'static str) -> Result<(), MarkupError> {
	*stage = "read";
	let mut src = String::new();
	::std::io::stdin().read_to_string(&mut src)?;

	*stage = "parse";
	if !args.no_status {
		status_update("parse", "working", args.json);
	}

	let document = ::serde_json::from_str::<::serde_json::Value>(&src)?;

	if !args.no_status {
		status_update("parse", "success", args.json);
	}

	*stage = "render";
	if !args.no_status {
		status_update("render", "working", args.json);
	}

	let markup = render_document(&document)?;

	if !args.no_status {
		status_update("render", "success", args.json);
	}

	if let Command::Render = args.command {
		println!("{markup}");

		if !args.no_status {
			status_update("render", "written", args.json);
		}
	}

	Ok(())
}

fn main() {
	#[cfg(feature = "cli-trace")]
	{
		::tracing_subscriber::fmt()
			.with_max_level(::tracing::Level::TRACE)
			.with_writer(::std::io::stderr)
			.init();
	}

	let args = Cli::parse();

	let mut stage = "read";
	if let Err(error) = run(&args, &mut stage) {
		if !args.no_status {
			status_update(stage, "failure", args.json);
		}

		report(error, args.json);
		::std::process::exit(1);
	}
}
