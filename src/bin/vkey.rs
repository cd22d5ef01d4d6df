// Vkey CLI
// Types text or sends key combinations through a virtual uinput keyboard

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use vkey_core::key::entries;
use vkey_core::settings::default_settings_content;
use vkey_core::{
    parse_combo_string, tokenize, Emitter, EventSink, KeyCombo, Modifier, OutputError,
    RecordingSink, Settings, UInputSink,
};

/// Virtual keyboard CLI
#[derive(Parser, Debug)]
#[command(name = "vkey")]
#[command(version)]
#[command(about = "Type text or send key combinations through a virtual keyboard", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/vkey/settings.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the event stream instead of creating a device
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Type a string
    Type {
        /// Text to type, e.g. "hello, world"
        text: String,
    },
    /// Send a key or combination, e.g. enter, ctrl+o, alt+f4
    Key {
        /// Key combination joined with '+'
        combo: String,
    },
    /// List supported keys
    ListKeys,
    /// Print a settings file with every option at its default
    PrintConfig,
}

/// One user-visible action for the emitter
enum Request {
    Combo(KeyCombo),
    Text(String),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };
    match settings.source_path() {
        Some(path) => log::debug!("using settings from {}", path.display()),
        None => log::debug!("no settings file, using defaults"),
    }
    Ok(settings)
}

fn perform<S: EventSink>(emitter: &mut Emitter<S>, request: &Request) -> Result<(), OutputError> {
    match request {
        Request::Combo(combo) => emitter.send(combo),
        Request::Text(text) => {
            let mut tokens = tokenize(text);
            let typed = emitter.type_text(tokens.by_ref())?;
            if tokens.skipped() > 0 {
                log::warn!(
                    "skipped {} character(s) with no key mapping ({} typed)",
                    tokens.skipped(),
                    typed
                );
            }
            Ok(())
        }
    }
}

/// Run a request against the real device, or print it on `--dry-run`
fn dispatch(request: &Request, settings: &Settings, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        let mut emitter = Emitter::new(RecordingSink::new());
        perform(&mut emitter, request)?;
        for record in emitter.sink().events() {
            println!("{}", record);
        }
        return Ok(());
    }

    let sink = UInputSink::open(settings.device_name())?;
    let settle = settings.settle_delay();
    if !settle.is_zero() {
        log::debug!("waiting {:?} for the device to settle", settle);
        std::thread::sleep(settle);
    }

    let mut emitter = Emitter::new(sink).with_char_delay(settings.char_delay());
    let result = perform(&mut emitter, request);
    if result.is_err() {
        let held = emitter.held_keys();
        if !held.is_empty() {
            log::warn!("keys may still be held after the failure: {:?}", held);
        }
    }
    let closed = emitter.close();

    result?;
    closed?;
    Ok(())
}

fn print_key_list() {
    println!("Supported keys:");
    println!();
    for entry in entries() {
        if entry.aliases.is_empty() {
            println!("  {}", entry.name);
        } else {
            println!("  {} ({})", entry.name, entry.aliases.join(", "));
        }
    }
    println!();
    println!("Single characters: a-z, A-Z, 0-9 and US-layout punctuation");
    println!();
    println!("Modifiers:");
    for modifier in Modifier::all() {
        println!("  {}: {}", modifier, modifier.aliases().join(", "));
    }
    println!();
    println!("Combinations:");
    println!("  - Use + to combine: ctrl+c, alt+tab, shift+a");
    println!("  - Examples: ctrl+o, alt+f4, ctrl+shift+esc");
    println!();
    println!("SECURITY: Ctrl+Alt+Del is BLOCKED");
}

fn run(args: &Args) -> anyhow::Result<()> {
    match &args.command {
        Command::ListKeys => {
            print_key_list();
            Ok(())
        }
        Command::PrintConfig => {
            print!("{}", default_settings_content());
            Ok(())
        }
        Command::Key { combo } => {
            // Parse before touching the device
            let parsed = parse_combo_string(combo)?;
            let settings = load_settings(args)?;
            println!("Sending key: {}", combo);
            dispatch(&Request::Combo(parsed), &settings, args.dry_run)
                .context("failed to send key")?;
            println!("Done!");
            Ok(())
        }
        Command::Type { text } => {
            let settings = load_settings(args)?;
            println!("Typing: {:?}", text);
            dispatch(&Request::Text(text.clone()), &settings, args.dry_run)
                .context("failed to type")?;
            println!("Done!");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
