//! Accumulator ISA toolchain CLI.
//!
//! Single entry point for the assembler, the disassembler and the execution
//! engine:
//! 1. **assemble:** source text to words, as a listing, hex or JSON.
//! 2. **disassemble:** hex words back to source text.
//! 3. **run / step:** load source and data, then execute in bulk or step by step.
//! 4. **example:** run one of the bundled sample programs.

mod samples;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use accsim_assembler::{assemble_with, AssemblerConfig};
use accsim_disassembler::disassemble;
use accsim_runtime::{ExecutionResult, LoadSummary, RunOutcome, Snapshot, StepOutcome, VMConfig, VM};
use accsim_spec::{Program, Word};

use samples::Sample;

/// Cells shown in the data panel of a state dump
const DATA_ROWS: usize = 16;

/// JSON body printed by `run --json`
#[derive(Serialize)]
struct RunReport<'a> {
    load: &'a LoadSummary,
    result: &'a ExecutionResult,
    state: Snapshot,
}

#[derive(Parser, Debug)]
#[command(
    name = "accsim",
    author,
    version,
    about = "Accumulator machine assembler and simulator",
    long_about = "Assemble, disassemble and execute programs for a 16-bit accumulator ISA.\n\nExamples:\n  accsim run programs/sum.asm --data-file programs/sum.data\n  accsim step programs/sum.asm --data \"3 1 2 3\" --count 5\n  accsim example convolution --json"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file.
    Assemble {
        /// Assembly source file.
        source: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Listing)]
        format: Format,

        /// Write output to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject unknown mnemonics, malformed numbers and undefined jump targets.
        #[arg(long)]
        strict: bool,
    },

    /// Disassemble a file of hex words (whitespace separated, optional 0x prefix).
    Disassemble {
        /// Word file.
        input: PathBuf,
    },

    /// Load a program and run it until it halts or hits the step limit.
    Run {
        /// Assembly source file.
        source: PathBuf,

        #[command(flatten)]
        exec: ExecArgs,

        /// Print the final machine state.
        #[arg(long)]
        show_state: bool,

        /// Print the load summary, run result and final state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Load a program and execute it one instruction at a time, dumping state after each step.
    Step {
        /// Assembly source file.
        source: PathBuf,

        #[command(flatten)]
        exec: ExecArgs,

        /// Number of steps to execute.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,

        /// Emit one JSON snapshot per line.
        #[arg(long)]
        json: bool,
    },

    /// Run a bundled sample program with its data.
    Example {
        #[arg(value_enum)]
        sample: Sample,

        /// Print the source and data instead of running.
        #[arg(long)]
        print: bool,

        /// Print the run result and final state as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ExecArgs {
    /// Data memory contents as whitespace-separated integers.
    #[arg(short, long, conflicts_with = "data_file")]
    data: Option<String>,

    /// File holding data memory contents.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Step ceiling for a bulk run.
    #[arg(long, default_value_t = 1000)]
    max_steps: u64,

    /// Halt on undefined opcodes and bad registers; assemble in strict mode.
    #[arg(long)]
    strict: bool,

    /// Log each executed instruction.
    #[arg(long)]
    trace: bool,
}

impl ExecArgs {
    fn config(&self) -> VMConfig {
        VMConfig {
            max_steps: self.max_steps,
            trace: self.trace,
            strict: self.strict,
            ..VMConfig::default()
        }
    }

    fn data(&self) -> Result<String> {
        match (&self.data, &self.data_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read(path),
            (None, None) => Ok(String::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Annotated listing with labels
    Listing,
    /// One 0xWWWW word per line
    Hex,
    /// Program as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tracing_requested = matches!(
        &cli.command,
        Commands::Run { exec, .. } | Commands::Step { exec, .. } if exec.trace
    );
    init_logging(cli.verbose, tracing_requested);

    match cli.command {
        Commands::Assemble {
            source,
            format,
            output,
            strict,
        } => cmd_assemble(&source, format, output.as_deref(), strict),
        Commands::Disassemble { input } => cmd_disassemble(&input),
        Commands::Run {
            source,
            exec,
            show_state,
            json,
        } => {
            let source = read(&source)?;
            cmd_run(&source, &exec.data()?, exec.config(), show_state, json)
        }
        Commands::Step {
            source,
            exec,
            count,
            json,
        } => {
            let source = read(&source)?;
            cmd_step(&source, &exec.data()?, exec.config(), count, json)
        }
        Commands::Example {
            sample,
            print,
            json,
        } => {
            if print {
                println!("{}", sample.source());
                println!("; data: {}", sample.data().trim());
                return Ok(());
            }
            cmd_run(sample.source(), sample.data(), VMConfig::default(), true, json)
        }
    }
}

fn init_logging(verbose: u8, trace: bool) {
    let level = match verbose {
        0 if trace => "debug",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn cmd_assemble(source: &Path, format: Format, output: Option<&Path>, strict: bool) -> Result<()> {
    let text = read(source)?;
    let program = assemble_with(&text, &AssemblerConfig { strict })
        .with_context(|| format!("failed to assemble {}", source.display()))?;
    debug!(words = program.len(), labels = program.labels.len(), "assembled");

    let rendered = match format {
        Format::Listing => disassemble(&program),
        Format::Hex => program
            .code
            .iter()
            .map(|word| format!("0x{:04X}\n", word))
            .collect(),
        Format::Json => serde_json::to_string_pretty(&program)? + "\n",
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }
    Ok(())
}

fn parse_words(text: &str) -> Result<Vec<Word>> {
    text.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            Word::from_str_radix(digits, 16).with_context(|| format!("invalid word '{}'", token))
        })
        .collect()
}

fn cmd_disassemble(input: &Path) -> Result<()> {
    let words = parse_words(&read(input)?)?;
    print!("{}", disassemble(&Program::new(words)));
    Ok(())
}

fn load(source: &str, data: &str, config: VMConfig) -> Result<(VM, LoadSummary)> {
    let mut vm = VM::new(config);
    let summary = vm.load(source, data).context("failed to load program")?;
    Ok((vm, summary))
}

fn print_result(result: &ExecutionResult) {
    match result.outcome {
        RunOutcome::Halted(reason) => {
            println!("Halted after {} steps: {:?}", result.steps, reason)
        }
        RunOutcome::StepLimitReached { limit } => {
            println!("Stopped at the {}-step limit", limit)
        }
    }
    println!("ACC = {}", result.acc);
}

fn cmd_run(source: &str, data: &str, config: VMConfig, show_state: bool, json: bool) -> Result<()> {
    let (mut vm, summary) = load(source, data, config)?;
    let result = vm.run()?;

    if json {
        let report = RunReport {
            load: &summary,
            result: &result,
            state: vm.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Loaded {} instructions ({} words), {} data values",
        summary.instructions, summary.words, summary.data_values
    );
    print_result(&result);
    if show_state {
        println!();
        println!("{}", vm.snapshot().render(DATA_ROWS));
    }
    Ok(())
}

fn cmd_step(source: &str, data: &str, config: VMConfig, count: u64, json: bool) -> Result<()> {
    if count == 0 {
        bail!("step count must be at least 1");
    }
    let (mut vm, summary) = load(source, data, config)?;
    if !json {
        println!(
            "Loaded {} instructions ({} words), {} data values",
            summary.instructions, summary.words, summary.data_values
        );
    }

    for _ in 0..count {
        let outcome = vm.step()?;
        let snapshot = vm.snapshot();
        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("\n--- step {} ---", snapshot.steps);
            println!("{}", snapshot.render(DATA_ROWS));
        }
        if let StepOutcome::Halted(reason) = outcome {
            if !json {
                println!("\nHalted: {:?}", reason);
            }
            break;
        }
    }
    Ok(())
}
