//! Command-line harness for the string codec.
//!
//! External caller only: encrypt/decrypt one value, or run the self-test
//! that mirrors the pass/fail harnesses shipped with the sibling
//! implementations. All codec logic lives in crypter-core.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use crypter_core::constants::DEFAULT_STATIC_KEY;
use crypter_core::pipeline::StringCrypter;

/// Envelope produced by the Java implementation; decrypting it proves wire
/// compatibility with the non-Rust siblings.
const JAVA_ENVELOPE: &str =
    "QFRAFW9SAEsWUBdFZl1RTxJVS0U+ClccRQAQQm5eABg8AB8YMEsDCxsIUz4+HQRZEgoBVA8jNVg=";
const JAVA_PLAINTEXT: &str = "Hello from Java for PHP!";

#[derive(Parser, Debug)]
#[command(version, about = "Salted repeating-key XOR string codec", long_about = None)]
struct Args {
    /// Key bytes; defaults to the cross-language interop key
    #[arg(short, long, default_value = DEFAULT_STATIC_KEY)]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt plaintext into a base64 envelope
    Encrypt { text: String },
    /// Decrypt a base64 envelope back into text
    Decrypt { envelope: String },
    /// Run round-trip, salt-variance, and interop checks
    Selftest,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut crypter =
        StringCrypter::new(args.key.as_bytes()).context("invalid key")?;

    match args.command {
        Command::Encrypt { text } => {
            println!("{}", crypter.encrypt(&text));
        }
        Command::Decrypt { envelope } => {
            let plaintext = crypter
                .decrypt_text(&envelope)
                .context("decryption failed")?;
            println!("{}", plaintext);
        }
        Command::Selftest => selftest(&mut crypter)?,
    }

    debug!("telemetry: {}", crypter.snapshot().to_json()?);
    Ok(())
}

fn report(name: &str, passed: bool, failures: &mut u32) {
    if passed {
        println!("{name}: PASS");
    } else {
        println!("{name}: FAIL");
        *failures += 1;
    }
}

fn selftest(crypter: &mut StringCrypter) -> Result<()> {
    let mut failures = 0u32;

    let sample = "This is a secret message.";
    let envelope = crypter.encrypt(sample);
    println!("Original:  {sample}");
    println!("Encrypted: {envelope}");
    let round_trip = crypter
        .decrypt_text(&envelope)
        .map(|decrypted| decrypted == sample)
        .unwrap_or(false);
    report("Round trip", round_trip, &mut failures);

    let varied = crypter.encrypt(sample) != crypter.encrypt(sample);
    report("Salt variance", varied, &mut failures);

    let empty_envelope = crypter_core::pipeline::encrypt(crypter.key(), b"");
    let empty_ok = crypter
        .decrypt_text(&empty_envelope)
        .map(|decrypted| decrypted.is_empty())
        .unwrap_or(false);
    report("Empty plaintext", empty_ok, &mut failures);

    // Interop always runs under the shared static key, whatever --key says.
    let mut interop = StringCrypter::new(DEFAULT_STATIC_KEY)?;
    let interop_ok = interop
        .decrypt_text(JAVA_ENVELOPE)
        .map(|decrypted| decrypted == JAVA_PLAINTEXT)
        .unwrap_or(false);
    report("Java envelope decrypt", interop_ok, &mut failures);

    if failures > 0 {
        bail!("{failures} self-test check(s) failed");
    }
    println!("All self-test checks passed.");
    Ok(())
}
