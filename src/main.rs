mod args;

use args::{BenchArgs, Cli, Commands, EncryptArgs};
use clap::Parser;
use rand::RngCore;

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;

use aes128::{BLOCK_LEN, Cipher, KEY_LEN, Key, NB, NK, NR};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input too short to hold a 16-byte key prefix: {len} bytes")]
    MissingKeyPrefix { len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aes128::Error),
}

fn main() {
    if let Err(e) = aes_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => encrypt(enc),
        Commands::Bench(bench) => bench_encrypt(bench),
    }
}

fn encrypt(enc: EncryptArgs) -> Result<(), CliError> {
    // read raw input from file or stdin
    let mut input = match &enc.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };

    // read or generate key, otherwise split it off the front of the input
    let key = match enc.key {
        Some(key_path) if enc.gen_key => {
            let rand_key = Key::rand_key()?;
            fs::write(key_path, rand_key.as_bytes())?;
            rand_key
        }
        Some(key_path) => Key::try_from_slice(&fs::read(key_path)?)?,
        None => {
            if input.len() < KEY_LEN {
                return Err(CliError::MissingKeyPrefix { len: input.len() });
            }
            let plaintext = input.split_off(KEY_LEN);
            let key = Key::try_from_slice(&input)?;
            input = plaintext;
            key
        }
    };
    let plaintext = input;

    let cipher = Cipher::new(&key);
    if enc.verbose {
        dump_schedule(&key, &cipher);
    }

    let start = Instant::now();
    let states = aes128::frame(&plaintext);
    let states_enc = cipher.encrypt_states(states.clone());
    let ciphertext = aes128::unframe(&states_enc);
    let duration = start.elapsed();

    if enc.verbose {
        eprintln!("States:");
        for state in &states {
            eprintln!("{}", to_hex(state, false));
        }
        eprintln!("Encrypted states:");
        for state in &states_enc {
            eprintln!("{}", to_hex(state, false));
        }
    }

    let out = if enc.hex {
        let mut s = to_hex(&ciphertext, true);
        s.push('\n');
        s.into_bytes()
    } else {
        ciphertext
    };

    let summary = format!(
        "Encrypted {} bytes in {} ms",
        plaintext.len(),
        duration.as_millis()
    );
    match enc.output {
        Some(path) => {
            fs::write(path, &out)?;
            println!("{summary}");
        }
        None => {
            // keep stdout clean for the ciphertext
            let mut stdout = io::stdout().lock();
            stdout.write_all(&out)?;
            stdout.flush()?;
            eprintln!("{summary}");
        }
    }

    Ok(())
}

fn bench_encrypt(bench: BenchArgs) -> Result<(), CliError> {
    let mut key_bytes = [0u8; KEY_LEN];
    let mut data = vec![0u8; bench.blocks * BLOCK_LEN];
    if bench.random {
        let mut rng = rand::rng();
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut data);
    }

    let cipher = Cipher::new(&Key::from(key_bytes));

    let start = Instant::now();
    let ciphertext = cipher.encrypt(&data);
    let duration = start.elapsed();

    let secs = duration.as_secs_f64();
    let mib = ciphertext.len() as f64 / (1024.0 * 1024.0);
    println!(
        "Encrypted {} blocks ({} bytes) in {} ms ({:.1} MiB/s)",
        bench.blocks,
        ciphertext.len(),
        duration.as_millis(),
        if secs > 0.0 { mib / secs } else { f64::INFINITY }
    );
    Ok(())
}

fn dump_schedule(key: &Key, cipher: &Cipher) {
    eprintln!("Nb (# state columns): {NB}");
    eprintln!("Nk (# key words):     {NK}");
    eprintln!("Nr (# rounds):        {NR}");
    eprintln!("Key:");
    eprintln!("{}", to_hex(key.as_bytes(), false));
    eprintln!("Expanded key:");
    eprintln!("{}", to_hex(cipher.expanded_key().as_bytes(), false));
}

fn to_hex(bytes: &[u8], upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing to a String cannot fail
        let _ = if upper {
            write!(s, "{b:02X}")
        } else {
            write!(s, "{b:02x}")
        };
    }
    s
}
