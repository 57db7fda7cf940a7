use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output with AES-128 (zero padded, no chaining)
    Encrypt(EncryptArgs),

    /// Encrypt generated data and report throughput
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Input file path. Reads stdin if omitted.
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file path. Writes stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Key file path (16 bytes). If omitted, the first 16 bytes of input are the key.
    #[arg(short = 'k', long = "key")]
    pub key: Option<PathBuf>,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key", requires = "key")]
    pub gen_key: bool,

    /// Write ciphertext as uppercase hex instead of raw bytes
    #[arg(long = "hex")]
    pub hex: bool,

    /// Print cipher parameters, key schedule and states to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Number of 16-byte blocks to encrypt.
    #[arg(short = 'b', long = "blocks", default_value_t = 1_000_000)]
    pub blocks: usize,

    /// Fill key and data with random bytes instead of zeros
    #[arg(long = "random")]
    pub random: bool,
}
