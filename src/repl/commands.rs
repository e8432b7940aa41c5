//! REPL Commands
//!
//! Command table, argument parsing, and one handler per command.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::repl::catch::attempt_catch;
use crate::repl::session::Session;

/// Help-table row for one command
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command, in the order `help` lists them
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the names of the next location areas",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays the names of the previous location areas",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area>",
        description: "Explore the area and list the Pokemon found there",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throw a Pokeball and try to catch a Pokemon",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows the name, height, weight, stats and type(s) of a caught Pokemon",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "Shows the list of Pokemon you already caught",
    },
];

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

/// Whether the REPL keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Command {
    /// Parses already-normalized words; the first word names the command.
    ///
    /// Extra trailing words are ignored.
    pub fn parse(words: &[String]) -> Result<Self> {
        let Some((name, args)) = words.split_first() else {
            return Err(PokedexError::UnknownCommand(String::new()));
        };
        let arg = |label: &'static str| {
            args.first()
                .cloned()
                .ok_or(PokedexError::MissingArgument(label))
        };

        match name.as_str() {
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            "map" => Ok(Self::Map),
            "mapb" => Ok(Self::MapBack),
            "explore" => Ok(Self::Explore(arg("area")?)),
            "catch" => Ok(Self::Catch(arg("pokemon")?)),
            "inspect" => Ok(Self::Inspect(arg("pokemon")?)),
            "pokedex" => Ok(Self::Pokedex),
            other => Err(PokedexError::UnknownCommand(other.to_string())),
        }
    }
}

/// Runs one command, writing its output to `out`.
pub async fn execute<R, W>(
    command: Command,
    client: &PokeApiClient,
    session: &mut Session,
    rng: &mut R,
    out: &mut W,
) -> Result<Flow>
where
    R: Rng,
    W: Write + ?Sized,
{
    debug!(?command, "Executing command");

    match command {
        Command::Help => help(out)?,
        Command::Exit => {
            writeln!(out, "Closing the Pokedex... Goodbye!")?;
            return Ok(Flow::Exit);
        }
        Command::Map => {
            let next = session.next_page.clone();
            show_page(client, session, next.as_deref(), out).await?;
        }
        Command::MapBack => match session.previous_page.clone() {
            Some(previous) => show_page(client, session, Some(&previous), out).await?,
            None => writeln!(out, "you're on the first page")?,
        },
        Command::Explore(area) => explore(client, session, &area, out).await?,
        Command::Catch(name) => catch(client, session, rng, &name, out).await?,
        Command::Inspect(name) => inspect(session, &name, out)?,
        Command::Pokedex => pokedex(session, out)?,
    }

    Ok(Flow::Continue)
}

fn help<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for info in COMMANDS {
        writeln!(out, "{}: {}", info.usage, info.description)?;
    }
    Ok(())
}

async fn show_page<W: Write + ?Sized>(
    client: &PokeApiClient,
    session: &mut Session,
    page_url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let page = client.list_location_areas(page_url).await?;
    session.record_page(&page);

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

async fn explore<W: Write + ?Sized>(
    client: &PokeApiClient,
    session: &mut Session,
    area: &str,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Exploring {}...", area)?;

    let detail = client.location_area(area).await?;
    session.current_location = detail.name.clone();

    writeln!(out, "Found Pokemon:")?;
    for name in detail.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

async fn catch<R, W>(
    client: &PokeApiClient,
    session: &mut Session,
    rng: &mut R,
    name: &str,
    out: &mut W,
) -> Result<()>
where
    R: Rng,
    W: Write + ?Sized,
{
    let encounters = client.pokemon_encounters(name).await?;
    let in_area = encounters
        .iter()
        .any(|encounter| encounter.location_area.name == session.current_location);
    if !in_area {
        return Err(PokedexError::NotInArea(name.to_string()));
    }

    writeln!(out, "Throwing a Pokeball at {}...", name)?;

    let pokemon = client.pokemon(name).await?;
    if attempt_catch(rng, pokemon.base_experience) {
        writeln!(out, "{} was caught!", name)?;
        session.record_catch(name, pokemon);
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(())
}

fn inspect<W: Write + ?Sized>(session: &Session, name: &str, out: &mut W) -> Result<()> {
    let pokemon = session
        .caught(name)
        .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "    -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "    - {}", kind.kind.name)?;
    }
    Ok(())
}

fn pokedex<W: Write + ?Sized>(session: &Session, out: &mut W) -> Result<()> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your pokedex is empty")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.keys() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pokemon;

    fn words(input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_string).collect()
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(&words("help")).unwrap(), Command::Help);
        assert_eq!(Command::parse(&words("exit")).unwrap(), Command::Exit);
        assert_eq!(Command::parse(&words("map")).unwrap(), Command::Map);
        assert_eq!(Command::parse(&words("mapb")).unwrap(), Command::MapBack);
        assert_eq!(Command::parse(&words("pokedex")).unwrap(), Command::Pokedex);
    }

    #[test]
    fn test_parse_commands_with_argument() {
        assert_eq!(
            Command::parse(&words("explore pastoria-city-area")).unwrap(),
            Command::Explore("pastoria-city-area".to_string())
        );
        assert_eq!(
            Command::parse(&words("catch pikachu extra")).unwrap(),
            Command::Catch("pikachu".to_string())
        );
        assert_eq!(
            Command::parse(&words("inspect pikachu")).unwrap(),
            Command::Inspect("pikachu".to_string())
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = Command::parse(&words("explore")).unwrap_err();
        assert!(matches!(err, PokedexError::MissingArgument("area")));

        let err = Command::parse(&words("catch")).unwrap_err();
        assert!(matches!(err, PokedexError::MissingArgument("pokemon")));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse(&words("fly")).unwrap_err();
        assert!(matches!(err, PokedexError::UnknownCommand(ref name) if name == "fly"));
    }

    #[test]
    fn test_command_table_covers_parser() {
        for info in COMMANDS {
            let mut line = words(info.name);
            line.push("arg".to_string());
            assert!(Command::parse(&line).is_ok(), "{} should parse", info.name);
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut buf = Vec::new();
        help(&mut buf).unwrap();
        let text = output(buf);

        assert!(text.starts_with("Welcome to the Pokedex!"));
        for info in COMMANDS {
            assert!(text.contains(info.usage));
        }
    }

    #[test]
    fn test_pokedex_empty_and_filled() {
        let mut session = Session::new("start");

        let mut buf = Vec::new();
        pokedex(&session, &mut buf).unwrap();
        assert_eq!(output(buf), "Your pokedex is empty\n");

        let pokemon: Pokemon = serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();
        session.record_catch("bulbasaur", pokemon);

        let mut buf = Vec::new();
        pokedex(&session, &mut buf).unwrap();
        assert_eq!(output(buf), "Your Pokedex:\n - bulbasaur\n");
    }

    #[test]
    fn test_inspect_caught_pokemon() {
        let mut session = Session::new("start");
        let pokemon: Pokemon = serde_json::from_str(
            r#"{
                "id": 25, "name": "pikachu", "height": 4, "weight": 60,
                "stats": [{"base_stat": 35, "stat": {"name": "hp", "url": ""}}],
                "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}]
            }"#,
        )
        .unwrap();
        session.record_catch("pikachu", pokemon);

        let mut buf = Vec::new();
        inspect(&session, "pikachu", &mut buf).unwrap();

        assert_eq!(
            output(buf),
            "Name: pikachu\nHeight: 4\nWeight: 60\nStats:\n    -hp: 35\nTypes:\n    - electric\n"
        );
    }

    #[test]
    fn test_inspect_not_caught() {
        let session = Session::new("start");
        let mut buf = Vec::new();

        let err = inspect(&session, "mew", &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "mew is not caught yet!");
    }
}
