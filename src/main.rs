//! Command-line driver that replays keypad input.
//!
//! Each argument is one button label; the final display state is
//! printed after the whole script has been pressed:
//!
//! ```text
//! $ tallypad 3 + 5 × 2 =
//! 16
//! ```

use clap::Parser;
use tallypad::{KeyPress, Keypad};

#[derive(Parser)]
#[command(version, about = "Replay keypad input and print the display")]
struct Args {
    /// Button labels to press, in order: 0-9 . + - × ÷ = DEL AC
    /// (ASCII * and / work for the operators)
    #[arg(required = true)]
    keys: Vec<String>,

    /// Print the final readout as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut keypad = Keypad::new();
    for token in &args.keys {
        let Some(key) = KeyPress::from_label(token) else {
            anyhow::bail!("unrecognized key: {token:?}");
        };
        keypad.press(key);
    }

    let readout = keypad.readout();
    if args.json {
        println!("{}", serde_json::to_string(&readout)?);
    } else {
        if !readout.pending.is_empty() {
            println!("{}", readout.pending);
        }
        println!("{}", readout.primary);
    }

    Ok(())
}
