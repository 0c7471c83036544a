use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rootcause::prelude::*;

use dtac::game_constants::load_from_game_constants_file;
use dtac::game_types::GameMode;
use dtac::store::ConstantsStore;

/// Load a GameConstants.xml file and print its damage and armour tables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ruleset whose hardcoded types the file must define
    #[clap(short, long, value_enum, default_value = "foc")]
    mode: GameMode,

    /// Print the loaded constants as JSON instead of a table
    #[clap(long)]
    json: bool,

    /// Pretty-print JSON output
    #[clap(long, requires = "json")]
    pretty: bool,

    /// Path to GameConstants.xml (usually `Data/XML/GameConstants.xml` in the game directory)
    path: PathBuf,
}

#[derive(serde::Serialize)]
struct LoadedConstants<'a> {
    game_mode: GameMode,
    damage_types: &'a [dtac::game_types::Damage],
    armour_types: &'a [dtac::game_types::Armour],
    damage_to_armour: Vec<&'a dtac::damage_to_armour::DamageToArmour>,
}

fn print_table(store: &ConstantsStore, out: &mut impl Write) -> std::io::Result<()> {
    let width = store
        .damage_types()
        .iter()
        .map(|d| d.name().len())
        .max()
        .unwrap_or(0);

    write!(out, "{:width$}", "")?;
    for armour in store.armour_types() {
        write!(out, "  {armour}")?;
    }
    writeln!(out)?;

    for damage in store.damage_types() {
        write!(out, "{damage:width$}")?;
        for armour in store.armour_types() {
            let factor = store
                .damage_to_armour()
                .factor(damage, armour)
                .unwrap_or(f32::NAN);
            write!(out, "  {factor:>w$.2}", w = armour.name().len())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn main() -> Result<(), Report> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut store = ConstantsStore::new(args.mode);
    load_from_game_constants_file(&mut store, &args.path)
        .context("Failed to load game constants")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let loaded = LoadedConstants {
            game_mode: store.game_mode(),
            damage_types: store.damage_types().as_slice(),
            armour_types: store.armour_types().as_slice(),
            damage_to_armour: store.damage_to_armour().iter().collect(),
        };
        if args.pretty {
            serde_json::to_writer_pretty(&mut out, &loaded).context("Failed to write JSON")?;
        } else {
            serde_json::to_writer(&mut out, &loaded).context("Failed to write JSON")?;
        }
        writeln!(out).context("Failed to write output")?;
    } else {
        print_table(&store, &mut out).context("Failed to write output")?;
    }

    Ok(())
}
