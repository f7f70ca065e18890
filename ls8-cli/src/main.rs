//! LS-8 command-line front end
//!
//! `ls8 run` loads a `.ls8` image and executes it, streaming PRN output
//! to stdout; `ls8 dis` prints its disassembly listing instead.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ls8_runtime::{Cpu, CpuConfig};
use ls8_spec::Program;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ls8", about = "LS-8 8-bit machine emulator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program image
    Run {
        /// Path to the .ls8 image
        image: PathBuf,

        /// Print a trace line to stderr before every cycle
        #[arg(long)]
        trace: bool,

        /// Stop with an error after this many cycles
        #[arg(long)]
        max_cycles: Option<u64>,
    },

    /// Print the disassembly listing of a program image
    Dis {
        /// Path to the .ls8 image
        image: PathBuf,
    },
}

fn load(path: &Path) -> anyhow::Result<Program> {
    ls8_loader::load_file(path).with_context(|| format!("failed to load {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            image,
            trace,
            max_cycles,
        } => {
            let program = load(&image)?;
            let mut cpu = Cpu::with_config(&program, CpuConfig { max_cycles, trace });
            cpu.set_output(Box::new(std::io::stdout()));
            let result = cpu.run()?;
            tracing::debug!(cycles = result.cycles, "program halted");
        }
        Command::Dis { image } => {
            let program = load(&image)?;
            print!("{}", ls8_trace::disassemble(&program)?);
        }
    }

    Ok(())
}
