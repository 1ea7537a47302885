//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;

use crate::core::client::TextitClient;
use crate::core::models::{
    Aspect, BatchReply, Case, Form, Gender, Number, NumeralFormat, NumeralRequest, NumeralType,
    PartOfSpeech, Person, TargetForm, Tense, WordResult,
};

/// Commands for the TextIT client
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show correction variants for a misspelled word
    Correct {
        /// Misspelled word (e.g. очепатка)
        word: String,
    },

    /// Suggest the next word for entered text
    Hint {
        /// Up to 30 of the last entered characters (e.g. "я иду д")
        text: String,
    },

    /// Spell out a number as Russian text
    Numeral {
        /// Number to spell out (e.g. 1234)
        number: u64,

        /// Name of the counted object (e.g. рубль)
        word: String,

        /// Case of the result (nominative, genitive, ...)
        #[arg(long, default_value = "nominative")]
        case: String,

        /// Kind of numeral: count, order or union
        #[arg(long, default_value = "count")]
        direct: String,

        /// Abbreviate large orders (тыс., млн)
        #[arg(long)]
        reduce: bool,

        /// Output format: number, number-string or string
        #[arg(long, default_value = "string")]
        format: String,
    },

    /// Check a text for spelling errors
    Speller {
        /// Up to 10 000 characters of text
        text: String,
    },

    /// Show word parts, morphological features and the lemma
    Word {
        /// Word to analyze
        word: String,
    },

    /// Put a word into the requested form
    SetForm {
        /// Word whose form to change
        word: String,

        /// Required part of speech (noun, adjective, verb, ...)
        #[arg(long)]
        part: Option<String>,

        /// Grammatical number (singular, plural)
        #[arg(long)]
        number: Option<String>,

        /// Grammatical gender (masculine, feminine, neuter, common)
        #[arg(long)]
        gender: Option<String>,

        /// Grammatical case (nominative, genitive, ...)
        #[arg(long)]
        case: Option<String>,

        /// Verb tense (present, past, future)
        #[arg(long)]
        tense: Option<String>,

        /// Verb person (first, second, third)
        #[arg(long)]
        person: Option<String>,

        /// Word form (undefined, personal, full, short)
        #[arg(long)]
        form: Option<String>,

        /// Verb aspect (imperfect, perfect)
        #[arg(long)]
        aspect: Option<String>,
    },

    /// List words sharing the same root
    Cognate {
        /// Word to find root relatives for (e.g. делать)
        word: String,
    },

    /// List synonyms of a word
    Synonym {
        /// Word to find synonyms for (e.g. ёмкость)
        word: String,
    },

    /// Convert Latin-layout text to Cyrillic
    LatToCyr {
        /// Text typed in the wrong keyboard layout (e.g. "Ghbvth ntrcnf")
        text: String,
    },

    /// Put every word of a file into the requested form, batched
    Batch {
        /// File with one word per line
        #[arg(short, long)]
        file: PathBuf,

        /// Grammatical case applied to every word
        #[arg(long)]
        case: Option<String>,

        /// Grammatical number applied to every word
        #[arg(long)]
        number: Option<String>,

        /// Part of speech applied to every word
        #[arg(long)]
        part: Option<String>,

        /// Commands sent per network round trip
        #[arg(long, default_value_t = 25)]
        chunk_size: usize,
    },
}

/// Build a [`TargetForm`] from the CLI's string-valued flags.
#[allow(clippy::too_many_arguments)]
fn parse_target_form(
    part: Option<String>,
    number: Option<String>,
    gender: Option<String>,
    case: Option<String>,
    tense: Option<String>,
    person: Option<String>,
    form: Option<String>,
    aspect: Option<String>,
) -> anyhow::Result<TargetForm> {
    let mut target = TargetForm::new();
    if let Some(part) = part {
        target = target.with_part(part.parse::<PartOfSpeech>()?);
    }
    if let Some(number) = number {
        target = target.with_number(number.parse::<Number>()?);
    }
    if let Some(gender) = gender {
        target = target.with_gender(gender.parse::<Gender>()?);
    }
    if let Some(case) = case {
        target = target.with_case(case.parse::<Case>()?);
    }
    if let Some(tense) = tense {
        target = target.with_tense(tense.parse::<Tense>()?);
    }
    if let Some(person) = person {
        target = target.with_person(person.parse::<Person>()?);
    }
    if let Some(form) = form {
        target = target.with_form(form.parse::<Form>()?);
    }
    if let Some(aspect) = aspect {
        target = target.with_aspect(aspect.parse::<Aspect>()?);
    }
    Ok(target)
}

fn print_word_list(words: &[WordResult]) {
    if words.is_empty() {
        println!("(no results)");
        return;
    }
    for word in words {
        match word.part {
            Some(part) => println!("{} ({part})", word.word),
            None => println!("{}", word.word),
        }
    }
}

fn print_word(word: &WordResult) {
    println!("{}", word.word);
    if let Some(lemma) = &word.lemma {
        println!("  lemma: {lemma}");
    }
    if let Some(part) = word.part {
        println!("  part: {part}");
    }
    if let Some(case) = word.case {
        println!("  case: {case}");
    }
    if let Some(number) = word.number {
        println!("  number: {number}");
    }
    if let Some(gender) = word.gender {
        println!("  gender: {gender}");
    }
    let parts: Vec<_> = [
        ("prefix", &word.prefix),
        ("base", &word.base),
        ("interfix", &word.interfix),
        ("suffix", &word.suffix),
        ("ending", &word.ending),
        ("postfix", &word.postfix),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}={v}")))
    .collect();
    if !parts.is_empty() {
        println!("  parts: {}", parts.join(" "));
    }
    if let Some(probability) = word.probability {
        println!("  probability: {probability}");
    }
}

/// Handle the `correct` command
pub async fn handle_correct(word: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    let words = client.correct(&word).await?;
    print_word_list(&words);
    client.close().await;
    Ok(())
}

/// Handle the `hint` command
pub async fn handle_hint(text: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    let words = client.hint(&text).await?;
    print_word_list(&words);
    client.close().await;
    Ok(())
}

/// Handle the `numeral` command
pub async fn handle_numeral(
    number: u64,
    word: String,
    case: String,
    direct: String,
    reduce: bool,
    format: String,
) -> anyhow::Result<()> {
    let request = NumeralRequest::new(number, word)
        .with_case(case.parse::<Case>()?)
        .with_direct(direct.parse::<NumeralType>()?)
        .with_reduce(reduce)
        .with_format(format.parse::<NumeralFormat>()?);

    let client = TextitClient::from_env()?;
    let result = client.numeral(&request).await?;
    println!("{}", result.full_text());
    client.close().await;
    Ok(())
}

/// Handle the `speller` command
pub async fn handle_speller(text: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    match client.speller(&text).await? {
        Some(error) => {
            println!(
                "Misspelled: {} (at position {})",
                error.word, error.position
            );
            if !error.correct.is_empty() {
                println!("Suggestions: {}", error.correct.join(", "));
            }
        }
        None => println!("No errors found"),
    }
    client.close().await;
    Ok(())
}

/// Handle the `word` command
pub async fn handle_word(word: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    let result = client.word_info(&word).await?;
    print_word(&result);
    client.close().await;
    Ok(())
}

/// Handle the `set-form` command
#[allow(clippy::too_many_arguments)]
pub async fn handle_set_form(
    word: String,
    part: Option<String>,
    number: Option<String>,
    gender: Option<String>,
    case: Option<String>,
    tense: Option<String>,
    person: Option<String>,
    form: Option<String>,
    aspect: Option<String>,
) -> anyhow::Result<()> {
    let target = parse_target_form(part, number, gender, case, tense, person, form, aspect)?;
    let client = TextitClient::from_env()?;
    let result = client.set_form(&word, &target).await?;
    println!("{}", result.word);
    client.close().await;
    Ok(())
}

/// Handle the `cognate` command
pub async fn handle_cognate(word: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    let words = client.cognate(&word).await?;
    print_word_list(&words);
    client.close().await;
    Ok(())
}

/// Handle the `synonym` command
pub async fn handle_synonym(word: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    let words = client.synonym(&word).await?;
    print_word_list(&words);
    client.close().await;
    Ok(())
}

/// Handle the `lat-to-cyr` command
pub async fn handle_lat_to_cyr(text: String) -> anyhow::Result<()> {
    let client = TextitClient::from_env()?;
    println!("{}", client.lat_to_cyr(&text).await?);
    client.close().await;
    Ok(())
}

/// Handle the `batch` command: read a word list, defer every word as a
/// `setform` command and flush in chunks.
pub async fn handle_batch(
    file: PathBuf,
    case: Option<String>,
    number: Option<String>,
    part: Option<String>,
    chunk_size: usize,
) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    if chunk_size == 0 {
        anyhow::bail!("chunk_size must be greater than 0");
    }

    let target = parse_target_form(part, number, None, case, None, None, None, None)?;

    let content = std::fs::read_to_string(&file)?;
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if words.is_empty() {
        anyhow::bail!("No words found in {}", file.display());
    }

    info!("Batching {} word(s) from {}", words.len(), file.display());
    let start_time = Instant::now();
    let client = TextitClient::from_env()?;

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut processed = 0;
    let mut failed = 0;

    for chunk in words.chunks(chunk_size) {
        for word in chunk {
            client.defer_set_form(word, &target).await?;
        }

        let replies = client.flush().await?;
        for (word, reply) in chunk.iter().zip(replies) {
            match reply {
                Ok(BatchReply::Word(result)) => {
                    pb.println(format!("{word} -> {}", result.word));
                    processed += 1;
                }
                Ok(other) => {
                    pb.println(format!("{word} -> unexpected reply: {other:?}"));
                    failed += 1;
                }
                Err(e) => {
                    pb.println(format!("{word} -> error: {e}"));
                    failed += 1;
                }
            }
            pb.inc(1);
        }
    }

    pb.finish_with_message("Completed");
    client.close().await;

    let duration = start_time.elapsed();
    info!(
        "Completed: {} processed, {} failed in {:?}",
        processed, failed, duration
    );

    println!("\nBatch completed!");
    println!("   Processed: {processed}");
    println!("   Failed: {failed}");
    println!("   Time: {duration:?}");

    Ok(())
}
