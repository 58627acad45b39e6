//! Command-line interface for `eidocrypt`.

#![forbid(unsafe_code)]

use std::io::{self, Read};

use aes_core::{decrypt_block, encrypt_block, expand_key};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use eidocrypt::{
    decrypt_message, encrypt_message, Aes128Key, Error, ErrorKind, Field, KEY_LEN,
};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const KEY_ENV: &str = "EIDOCRYPT_KEY";
const KEY_HEX_ENV: &str = "EIDOCRYPT_KEY_HEX";

/// AES-128-ECB text encryption.
#[derive(Parser)]
#[command(
    name = "eidocrypt",
    version,
    about = "Encrypt and decrypt short text with AES-128-ECB and PKCS#7 padding"
)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Key given on the command line. When neither flag is passed the key is
/// read from `EIDOCRYPT_KEY`, then `EIDOCRYPT_KEY_HEX`.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
struct KeyArgs {
    /// Secret key as exactly 16 bytes of UTF-8 text [env: EIDOCRYPT_KEY].
    #[arg(long, value_name = "TEXT")]
    key: Option<String>,
    /// Secret key as 32 hex characters [env: EIDOCRYPT_KEY_HEX].
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

/// A resolved key, before it is parsed.
#[derive(Debug, PartialEq, Eq)]
enum KeySource {
    Text(String),
    Hex(String),
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message and print the Base64 ciphertext.
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Message words, joined by single spaces. A lone `-` reads stdin.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Decrypt Base64 ciphertext and print the message.
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Base64 ciphertext. A lone `-` reads stdin.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print a random key as 32 hex characters, for use with --key-hex.
    Keygen {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check the cipher against FIPS-197 known answers.
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt { key, message } => {
            let source = key.resolve(env_var)?;
            println!("{}", run_encrypt(&source, &message, io::stdin().lock())?);
            Ok(())
        }
        Commands::Decrypt { key, text } => {
            let source = key.resolve(env_var)?;
            println!("{}", run_decrypt(&source, &text, io::stdin().lock())?);
            Ok(())
        }
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Selftest => cmd_selftest(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Encrypts the message named by `words`, reading `input` for a lone `-`.
fn run_encrypt(source: &KeySource, words: &[String], input: impl Read) -> Result<String> {
    let message = read_message(words, input)?;
    match source {
        KeySource::Text(key) => Ok(eidocrypt::encrypt(&message, key)?),
        KeySource::Hex(hex_str) => {
            if message.is_empty() {
                return Err(Error::Encryption(ErrorKind::InputValidation(Field::Text)).into());
            }
            Ok(encrypt_message(&message, &parse_key_hex(hex_str)?))
        }
    }
}

/// Decrypts the ciphertext named by `words` after trimming surrounding whitespace.
fn run_decrypt(source: &KeySource, words: &[String], input: impl Read) -> Result<String> {
    let joined = read_message(words, input)?;
    let text = joined.trim();
    match source {
        KeySource::Text(key) => Ok(eidocrypt::decrypt(text, key)?),
        KeySource::Hex(hex_str) => {
            if text.is_empty() {
                return Err(Error::Decryption(ErrorKind::InputValidation(Field::Text)).into());
            }
            let key = parse_key_hex(hex_str)?;
            Ok(decrypt_message(text, &key).map_err(Error::Decryption)?)
        }
    }
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    println!("{}", hex::encode(random_key_bytes(&mut rng)));
    Ok(())
}

fn cmd_selftest() -> Result<()> {
    const VECTORS: [(&str, &str, &str); 2] = [
        (
            "00000000000000000000000000000000",
            "00000000000000000000000000000000",
            "66e94bd4ef8a2c3b884cfa59ca342b2e",
        ),
        (
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
    ];

    for (key_hex, plain_hex, cipher_hex) in VECTORS {
        let round_keys = expand_key(&parse_key_hex(key_hex)?);
        let plain = parse_block_hex(plain_hex)?;
        let cipher = encrypt_block(&plain, &round_keys);
        if hex::encode(cipher) != cipher_hex {
            bail!("known-answer mismatch for key {key_hex}");
        }
        if decrypt_block(&cipher, &round_keys) != plain {
            bail!("inverse cipher mismatch for key {key_hex}");
        }
        info!("known answer ok: {cipher_hex}");
    }

    let mut rng = seeded_rng(None);
    let key = Aes128Key::from(random_key_bytes(&mut rng));
    let sample = "eidocrypt selftest ✓";
    let recovered = decrypt_message(&encrypt_message(sample, &key), &key)
        .context("round trip with a random key")?;
    if recovered != sample {
        bail!("round trip returned different text");
    }
    println!("selftest passed");
    Ok(())
}

impl KeyArgs {
    /// Picks the key: `--key`, `--key-hex`, then the `EIDOCRYPT_KEY` and
    /// `EIDOCRYPT_KEY_HEX` variables as seen through `env`. Empty variables are ignored.
    fn resolve(&self, env: impl Fn(&str) -> Option<String>) -> Result<KeySource> {
        let lookup = |name: &str| env(name).filter(|value| !value.is_empty());
        let source = if let Some(text) = &self.key {
            KeySource::Text(text.clone())
        } else if let Some(hex_str) = &self.key_hex {
            KeySource::Hex(hex_str.clone())
        } else if let Some(text) = lookup(KEY_ENV) {
            debug!("using key from {KEY_ENV}");
            KeySource::Text(text)
        } else if let Some(hex_str) = lookup(KEY_HEX_ENV) {
            debug!("using key from {KEY_HEX_ENV}");
            KeySource::Hex(hex_str)
        } else {
            bail!("a key is required: pass --key or --key-hex, or set {KEY_ENV} or {KEY_HEX_ENV}");
        };
        Ok(source)
    }
}

fn read_message(words: &[String], mut input: impl Read) -> Result<String> {
    if let [only] = words {
        if only == "-" {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("read message from stdin")?;
            return Ok(buf.trim_end_matches(['\r', '\n']).to_owned());
        }
    }
    Ok(words.join(" "))
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != KEY_LEN {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    Aes128Key::try_from(bytes.as_slice()).context("build key")
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str).context("decode block hex")?;
    bytes
        .as_slice()
        .try_into()
        .context("block must be 16 bytes")
}

fn random_key_bytes(rng: &mut impl RngCore) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    rng.fill_bytes(&mut key);
    key
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
