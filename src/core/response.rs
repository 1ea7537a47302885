//! Typed parsing of raw API replies
//!
//! Each reply is a JSON value whose shape depends on the method that
//! produced it: a list of candidates ranked by probability for
//! `word`/`setform`/`numeral`, a plain word list for
//! `correct`/`hint`/`cognate`/`synonym`, a single object (or nothing)
//! for `speller`, and a `text` object for `lattocyr`. A reply missing a
//! required field is a [`TextitError::ParseError`], never a half-empty
//! result.

use serde_json::Value;

use crate::core::errors::{Result, TextitError};
use crate::core::models::{
    Animacy, ApiMethod, Aspect, BatchReply, Case, Form, Gender, Number, NumeralResult,
    PartOfSpeech, Person, SpellerResult, Tense, WordResult, WordType,
};

/// Dispatch a raw reply to the parser for the method that produced it.
pub fn parse_reply(method: ApiMethod, reply: &Value) -> Result<BatchReply> {
    match method {
        ApiMethod::Correct | ApiMethod::Hint | ApiMethod::Cognate | ApiMethod::Synonym => {
            Ok(BatchReply::Words(parse_word_list(reply)?))
        }
        ApiMethod::Word | ApiMethod::SetForm => Ok(BatchReply::Word(parse_candidates(reply)?)),
        ApiMethod::Numeral => Ok(BatchReply::Numeral(parse_numeral(reply)?)),
        ApiMethod::Speller => Ok(BatchReply::Speller(parse_speller(reply)?)),
        ApiMethod::LatToCyr => Ok(BatchReply::Text(parse_text(reply)?)),
    }
}

/// Parse a list-of-words reply. `null` entries are skipped; an empty
/// list is a valid empty result.
pub fn parse_word_list(reply: &Value) -> Result<Vec<WordResult>> {
    match reply {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(parse_word)
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(TextitError::parse(format!(
            "expected a list of words, got: {other}"
        ))),
    }
}

/// Parse a candidate-list reply, keeping the most probable entry.
///
/// When every candidate carries a `probability`, the highest one wins;
/// otherwise the first entry is taken. A bare object is accepted as a
/// single candidate. An empty list is a [`TextitError::ParseError`].
pub fn parse_candidates(reply: &Value) -> Result<WordResult> {
    choose_candidate(reply).and_then(parse_word)
}

/// Parse a `numeral` reply, which carries candidates the same way
/// `word` and `setform` do.
pub fn parse_numeral(reply: &Value) -> Result<NumeralResult> {
    let candidate = choose_candidate(reply)?;
    let number = require_str(candidate, "number")?;
    let text = require_str(candidate, "text")?;
    Ok(NumeralResult {
        number: number.to_string(),
        text: text.to_string(),
    })
}

/// Parse a `speller` reply; `None` means the text had no errors.
pub fn parse_speller(reply: &Value) -> Result<Option<SpellerResult>> {
    let object = match reply {
        Value::Null => return Ok(None),
        Value::Array(items) if items.is_empty() => return Ok(None),
        Value::Array(items) => &items[0],
        other => other,
    };
    if object.is_null() {
        return Ok(None);
    }
    let word = require_str(object, "word")?;
    let position = object
        .get("position")
        .and_then(Value::as_u64)
        .ok_or_else(|| TextitError::parse("speller reply has no position field"))?;
    let correct = match object.get("correct") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| TextitError::parse("speller correction is not a string"))
            })
            .collect::<Result<Vec<_>>>()?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(TextitError::parse(format!(
                "speller corrections are not a list: {other}"
            )))
        }
    };
    Ok(Some(SpellerResult {
        word: word.to_string(),
        position: position as usize,
        correct,
    }))
}

/// Parse a `lattocyr` reply, `[{"text": ...}]` or a bare object.
pub fn parse_text(reply: &Value) -> Result<String> {
    let object = match reply {
        Value::Array(items) => items
            .first()
            .ok_or_else(|| TextitError::parse("empty lattocyr reply"))?,
        other => other,
    };
    require_str(object, "text").map(str::to_string)
}

/// Parse a single word object into a [`WordResult`].
///
/// The `word` field is required; everything else is optional, but a
/// present field with an unknown wire code is rejected.
pub fn parse_word(reply: &Value) -> Result<WordResult> {
    let object = reply
        .as_object()
        .ok_or_else(|| TextitError::parse(format!("expected a word object, got: {reply}")))?;

    let word = require_str(reply, "word")?;
    if word.is_empty() {
        return Err(TextitError::parse(format!(
            "reply has a blank word field: {reply}"
        )));
    }
    let word = word.to_string();

    Ok(WordResult {
        word,
        part: coded_field(object, "part", PartOfSpeech::from_code)?,
        case: coded_field(object, "case", Case::from_code)?,
        form: coded_field(object, "form", Form::from_code)?,
        gender: coded_field(object, "gender", Gender::from_code)?,
        aspect: coded_field(object, "kind", Aspect::from_code)?,
        animacy: coded_field(object, "animate", Animacy::from_code)?,
        number: coded_field(object, "number", Number::from_code)?,
        person: coded_field(object, "person", Person::from_code)?,
        tense: coded_field(object, "tense", Tense::from_code)?,
        prefix: string_field(object, "prefix"),
        base: string_field(object, "base"),
        interfix: string_field(object, "interfix"),
        suffix: string_field(object, "suffix"),
        ending: string_field(object, "ending"),
        postfix: string_field(object, "postfix"),
        initial: string_field(object, "initial"),
        lemma: string_field(object, "lemma"),
        word_type: wire_type_field(object)?,
        probability: object.get("probability").and_then(Value::as_f64),
    })
}

/// Pick the candidate to keep out of a candidate-list reply.
fn choose_candidate(reply: &Value) -> Result<&Value> {
    let candidates = match reply {
        Value::Array(items) => items.iter().filter(|item| !item.is_null()).collect(),
        Value::Object(_) => vec![reply],
        other => {
            return Err(TextitError::parse(format!(
                "expected a candidate list, got: {other}"
            )))
        }
    };
    if candidates.is_empty() {
        return Err(TextitError::parse("empty candidate list"));
    }

    let probabilities: Option<Vec<f64>> = candidates
        .iter()
        .map(|candidate| candidate.get("probability").and_then(Value::as_f64))
        .collect();
    match probabilities {
        Some(probabilities) => {
            let best = probabilities
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(index, _)| index)
                .unwrap_or(0);
            Ok(candidates[best])
        }
        // Not every candidate is ranked, take the first.
        None => Ok(candidates[0]),
    }
}

fn require_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| TextitError::parse(format!("reply has no {field} field: {value}")))
}

fn string_field(object: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn coded_field<T>(
    object: &serde_json::Map<String, Value>,
    field: &str,
    decode: fn(u64) -> Option<T>,
) -> Result<Option<T>> {
    match object.get(field) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => {
            let code = value.as_u64().ok_or_else(|| {
                TextitError::parse(format!("{field} code is not an integer: {value}"))
            })?;
            decode(code)
                .map(Some)
                .ok_or_else(|| TextitError::parse(format!("unknown {field} code: {code}")))
        }
    }
}

fn wire_type_field(object: &serde_json::Map<String, Value>) -> Result<Option<WordType>> {
    match object.get("type") {
        Some(Value::Null) | None => Ok(None),
        Some(value) => {
            let name = value.as_str().ok_or_else(|| {
                TextitError::parse(format!("word type is not a string: {value}"))
            })?;
            WordType::from_wire(name)
                .map(Some)
                .ok_or_else(|| TextitError::parse(format!("unknown word type: {name}")))
        }
    }
}
