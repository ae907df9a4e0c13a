use clap::{ArgAction, ArgGroup, Parser};
use sentdiff::{
    compute_sentence_diff,
    config::{load_config, ConfigOpt},
    input::{check_input_limits, read_file_list, read_literal_pair, read_tab_separated, ProgramInput},
    render::render,
    validate::{print_errors, validate},
    DynResult,
};
use std::io::{stdin, stdout, Write as _};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
#[command(group(ArgGroup::new("input").required(true)))]
struct Args {
    #[command(flatten)]
    config_opt: ConfigOpt,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(group = "input", value_names = ["ORIGINAL1", "CORRECTED1", "ORIGINAL2", "CORRECTED2"])]
    files: Vec<String>,

    #[arg(long, group = "input", num_args = 2, value_names = ["ORIGINAL", "CORRECTED"])]
    text: Vec<String>,

    /// Read `original<TAB>corrected` lines from stdin.
    #[arg(long, group = "input")]
    stdin: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn try_main() -> DynResult<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref(), args.config_opt)?;
    debug!(?config, "effective configuration");

    let input: ProgramInput = if args.stdin {
        read_tab_separated(stdin().lock())?
    } else if !args.text.is_empty() {
        read_literal_pair(&args.text[0], &args.text[1])
    } else {
        read_file_list(&args.files, config.trim_final_newline)?
    };

    if input.is_empty() {
        eprintln!("The input is empty.");
        return Ok(());
    }

    check_input_limits(&input, config.max_input_bytes)?;

    let mut output = stdout().lock();
    for (pair, names) in input.pair_input.iter().zip(input.pair_names.iter()) {
        debug!(original = %names[0], corrected = %names[1], "diffing pair");
        let diff = compute_sentence_diff(&pair[0], &pair[1]);
        if config.validate {
            print_errors(&validate(&diff, [pair[0].as_str(), pair[1].as_str()]));
        }
        render(&diff, &config, &mut output)?;
    }
    output.flush()?;

    Ok(())
}

fn main() {
    // Returning the error from main() would print it with Debug instead of Display.
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
