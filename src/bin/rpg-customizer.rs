use anyhow::Context as _;
use clap::{Parser, Subcommand};

use rpg_customizer::{seed, sync, CharacterState, HatStyle, HostLocation, MemoryLocation, QueryParams};

#[derive(Parser, Debug)]
#[command(name = "rpg-customizer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a seed or a full query string into character state JSON.
    Decode(DecodeArgs),
    /// Encode attribute values into a seed, query string, and share URL.
    Encode(EncodeArgs),
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Nine-digit character seed.
    #[arg(long, conflicts_with = "query")]
    seed: Option<String>,

    /// Full query string, e.g. "seed=050000003&hat=ninja&fire=true".
    #[arg(long)]
    query: Option<String>,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    #[arg(long, default_value_t = 0)]
    accessories: u8,

    /// Character type (1 or 5).
    #[arg(long, default_value_t = 1)]
    base: u8,

    #[arg(long, default_value_t = 0)]
    face: u8,

    #[arg(long, default_value_t = 0)]
    face_item: u8,

    #[arg(long, default_value_t = 0)]
    hair: u8,

    #[arg(long, default_value_t = 0)]
    pants: u8,

    #[arg(long, default_value_t = 0)]
    shirt: u8,

    #[arg(long, default_value_t = 0)]
    skin: u8,

    #[arg(long, default_value_t = 0)]
    hat_color: u8,

    /// Hat style name (none, bunny, coffee, construction, cowboy,
    /// education, knight, ninja, party, pirate, watermelon).
    #[arg(long, default_value = "none")]
    hat: String,

    #[arg(long)]
    fire: bool,

    #[arg(long)]
    walking: bool,

    #[arg(long)]
    circle: bool,

    /// Origin for the share URL.
    #[arg(long, default_value = "https://example.com")]
    origin: String,

    /// Path for the share URL.
    #[arg(long, default_value = "/")]
    path: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Decode(args) => cmd_decode(args),
        Command::Encode(args) => cmd_encode(args),
    }
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let mut state = CharacterState::default();

    if let Some(value) = &args.seed {
        anyhow::ensure!(
            seed::apply(&mut state, value),
            "seed rejected: expected exactly nine decimal digits, got {value:?}"
        );
    } else if let Some(query) = &args.query {
        sync::load_from_query(&mut state, query.trim_start_matches('?'));
    } else {
        anyhow::bail!("pass --seed or --query");
    }

    println!(
        "{}",
        state.to_json_pretty().context("serialize state JSON")?
    );
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let hat = HatStyle::from_name(&args.hat)
        .with_context(|| format!("unknown hat style '{}'", args.hat))?;

    let state = CharacterState {
        accessories: args.accessories,
        base: args.base,
        face: args.face,
        face_item: args.face_item,
        hair: args.hair,
        pants: args.pants,
        shirt: args.shirt,
        skin: args.skin,
        hat_color: args.hat_color,
        hat,
        fire: args.fire,
        walking: args.walking,
        circle: args.circle,
    };

    let query = QueryParams::from_state(&state).to_query_string();
    let mut location = MemoryLocation::new(args.origin, args.path);
    location.replace_query(&query);

    println!("seed:  {}", state.seed());
    println!("query: {query}");
    println!("share: {}", location.href());
    Ok(())
}
