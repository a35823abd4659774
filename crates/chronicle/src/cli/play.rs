//! The interactive play loop.
//!
//! Drives the session state machine over stdin/stdout. All game logic lives
//! in `chronicle_story`; this module only collects input and prints render
//! directives.

use anyhow::Context;
use chronicle_models::{ClientConfig, OpenAICompatibleClient};
use chronicle_story::{
    Command, Gender, Genre, MAX_AGE, MIN_AGE, Machine, ORIGINS, RenderDirective, SessionState,
    StoryEngine,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::info;

/// Runs the interactive session until the player quits.
pub async fn run_play(load: Option<PathBuf>, save_dir: PathBuf) -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = OpenAICompatibleClient::new(config)?;
    let engine = StoryEngine::new(client);

    let mut machine = Machine::default();

    println!("=== Mars Chronicles 2035 ===\n");

    if let Some(path) = load {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read save file {}", path.display()))?;
        let directive = machine.handle(Command::LoadSave(bytes));
        render(&directive, &save_dir)?;
        if matches!(directive, RenderDirective::Error(_)) {
            anyhow::bail!("could not load save file {}", path.display());
        }
    }

    loop {
        match machine.state().clone() {
            SessionState::CharacterCreation => {
                let command = collect_character()?;
                let directive = machine.handle(command);
                render(&directive, &save_dir)?;
            }
            SessionState::AwaitingGeneration => {
                println!("Generating the next chapter...\n");
                let command = match engine
                    .generate_segment(machine.session().profile(), machine.session().history())
                    .await
                {
                    Ok(segment) => Command::SegmentReady(segment),
                    Err(e) => Command::GenerationFailed(e.to_string()),
                };
                let directive = machine.handle(command);
                render(&directive, &save_dir)?;
            }
            SessionState::DisplayingSegment => {
                let Some(command) = prompt_choice(&machine)? else {
                    println!("Until next time, colonist.");
                    return Ok(());
                };
                let directive = machine.handle(command);
                render(&directive, &save_dir)?;
            }
            SessionState::DisplayingError { .. } => {
                let answer = read_line("Press Enter to retry, or 'q' to quit: ")?;
                if answer.eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                let directive = machine.handle(Command::RequestSegment);
                render(&directive, &save_dir)?;
            }
        }
    }
}

/// Prints a render directive; the `Saved` directive also writes the file.
fn render(directive: &RenderDirective, save_dir: &Path) -> anyhow::Result<()> {
    match directive {
        RenderDirective::CharacterForm => {}
        RenderDirective::Generating => {}
        RenderDirective::Segment {
            chapter,
            narrative,
            choices,
        } => {
            println!("### Chapter {}\n", chapter);
            println!("{}\n", narrative);
            for (index, choice) in choices.iter().enumerate() {
                println!("  {}. {}", index + 1, choice);
            }
            println!();
        }
        RenderDirective::Error(message) => {
            println!("! {}\n", message);
        }
        RenderDirective::Saved { file_name, json } => {
            let path = save_dir.join(file_name);
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write save file {}", path.display()))?;
            info!(path = %path.display(), "Wrote save file");
            println!("Progress saved to {}\n", path.display());
        }
        RenderDirective::Message(message) => {
            println!("{}\n", message);
        }
    }
    Ok(())
}

/// Collects the character-creation form from stdin.
fn collect_character() -> anyhow::Result<Command> {
    println!("-- Character Profile --");

    let name = loop {
        let name = read_line("Name: ")?;
        if !name.is_empty() {
            break name;
        }
    };

    let genders: Vec<Gender> = Gender::iter().collect();
    let gender = pick("Gender", &genders)?;

    let age = loop {
        let raw = read_line(&format!("Age ({}-{}): ", MIN_AGE, MAX_AGE))?;
        match raw.parse::<u8>() {
            Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => break age,
            _ => println!("Enter a whole number between {} and {}.", MIN_AGE, MAX_AGE),
        }
    };

    let origins: Vec<&str> = ORIGINS.to_vec();
    let origin = pick("Origin", &origins)?;

    let genres: Vec<Genre> = Genre::iter().collect();
    let genre = pick("Story Genre", &genres)?;

    Ok(Command::SubmitCharacter {
        name,
        gender,
        age,
        origin: origin.to_string(),
        genre,
    })
}

/// Prompts for a choice on the displayed segment.
///
/// Returns `None` when the player quits; otherwise a `SelectChoice` or
/// `SaveGame` command.
fn prompt_choice(machine: &Machine) -> anyhow::Result<Option<Command>> {
    let available = machine
        .session()
        .segment()
        .as_ref()
        .map_or(0, |segment| segment.choices().len());

    loop {
        let answer = read_line("Pick a choice number, 's' to save, or 'q' to quit: ")?;
        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if answer.eq_ignore_ascii_case("s") {
            return Ok(Some(Command::SaveGame));
        }
        match answer.parse::<usize>() {
            Ok(number) if (1..=available).contains(&number) => {
                return Ok(Some(Command::SelectChoice(number - 1)));
            }
            _ => println!("Enter a number between 1 and {}.", available),
        }
    }
}

/// Presents a numbered menu and returns the selected item.
fn pick<T: std::fmt::Display + Clone>(label: &str, options: &[T]) -> anyhow::Result<T> {
    println!("{}:", label);
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, option);
    }

    loop {
        let answer = read_line("> ")?;
        match answer.parse::<usize>() {
            Ok(number) if (1..=options.len()).contains(&number) => {
                return Ok(options[number - 1].clone());
            }
            _ => println!("Enter a number between 1 and {}.", options.len()),
        }
    }
}

/// Reads one trimmed line from stdin.
fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer.trim().to_string())
}
