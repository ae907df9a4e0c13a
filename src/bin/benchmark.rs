use std::{
    ffi::OsStr,
    fs::read_to_string,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use rand::SeedableRng;
use regex::Regex;
use sentdiff::{
    algorithm::benchmark::{random_sentence_pair, run_algorithm, PreprocessedTestcase, RunReport},
    input::trim_final_newline,
};

#[derive(Debug)]
struct Testcase {
    left: PathBuf,
    right: PathBuf,
}

#[derive(Parser)]
struct Args {
    /// Directory with NAME.left / NAME.right pairs.
    testcase_directory: Option<String>,

    #[arg(short, long, default_value_t = String::from(""))]
    filter: String,

    /// Also run this many generated sentence pairs.
    #[arg(long, default_value_t = 0)]
    random: usize,

    #[arg(long, default_value_t = 20)]
    words: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn find_testcases(directory: &Path, regex: &Regex) -> Result<Vec<Testcase>, Box<dyn std::error::Error>> {
    let mut testcases = vec![];
    let files = std::fs::read_dir(directory)?;
    for file in files {
        let path = file?.path();
        if path.extension() != Some(OsStr::new("left")) {
            continue;
        }

        if path
            .file_stem()
            .and_then(OsStr::to_str)
            .map(|s: &str| regex.is_match(s))
            != Some(true)
        {
            continue;
        }
        let left = path;
        let mut right = left.clone();
        right.set_extension("right");
        if !right.exists() {
            continue;
        }

        testcases.push(Testcase { left, right });
    }
    testcases.sort_by(|a, b| a.left.cmp(&b.left));
    Ok(testcases)
}

fn print_report(report: &RunReport) {
    println!(
        "tokens: {:?}, lcs: {}, edits: {} (optimal {}){}, time: {:?}",
        report.token_counts,
        report.lcs_len,
        report.edits,
        report.optimal_edits,
        if report.is_optimal() { "" } else { " NOT OPTIMAL" },
        report.elapsed
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut total = Duration::ZERO;
    let mut runs = 0;
    let mut suboptimal = 0;
    let mut record = |report: &RunReport| {
        print_report(report);
        total += report.elapsed;
        runs += 1;
        if !report.is_optimal() {
            suboptimal += 1;
        }
    };

    if let Some(directory) = &args.testcase_directory {
        let regex = Regex::new(&args.filter)?;
        for testcase in find_testcases(Path::new(directory), &regex)? {
            println!("Compare {:?} vs {:?}", testcase.left, testcase.right);

            let left = trim_final_newline(read_to_string(testcase.left)?);
            let right = trim_final_newline(read_to_string(testcase.right)?);
            record(&run_algorithm(&PreprocessedTestcase::new(&left, &right)));
        }
    }

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(args.seed);
    for _ in 0..args.random {
        let [left, right] = random_sentence_pair(&mut rng, args.words);
        record(&run_algorithm(&PreprocessedTestcase::new(&left, &right)));
    }

    println!("{runs} runs, {suboptimal} not optimal, total time {total:?}");

    Ok(())
}
