//! Request builder: one pure function per API method
//!
//! Builders validate caller input and serialize it into a [`Command`],
//! the JSON object posted inside the payload's `commands` array. They
//! never touch the network; errors raised here are always
//! [`TextitError::InvalidArgument`].

use serde_json::{json, Map, Value};

use crate::core::errors::{Result, TextitError};
use crate::core::models::{ApiMethod, NumeralRequest, TargetForm};

/// Documentation link the API expects to see in every payload.
pub(crate) const HELP_HREF: &str = "https://textit.ego-ai.tech/api/1.0/help";

/// Maximum `hint` text length, in characters.
const MAX_HINT_CHARS: usize = 30;

/// Maximum `speller`/`lattocyr` text length, in characters.
const MAX_TEXT_CHARS: usize = 10_000;

/// A single serialized API command.
///
/// Values of this type are produced by the builder functions of this
/// module, so a `Command` is valid by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    method: ApiMethod,
    args: Map<String, Value>,
}

impl Command {
    fn new(method: ApiMethod) -> Self {
        Self {
            method,
            args: Map::new(),
        }
    }

    fn arg(mut self, key: &str, value: Value) -> Self {
        self.args.insert(key.to_string(), value);
        self
    }

    /// Method this command invokes.
    pub fn method(&self) -> ApiMethod {
        self.method
    }

    /// The JSON object sent to the API for this command.
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.args.len() + 1);
        object.insert("func".to_string(), Value::from(self.method.as_str()));
        for (key, value) in &self.args {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

/// The single word must be non-empty and contain no whitespace; the API
/// does not accept phrases. The word itself is sent exactly as given.
fn check_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(TextitError::invalid_argument("word must not be empty"));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(TextitError::invalid_argument(
            "the API does not support phrases of more than one word",
        ));
    }
    Ok(())
}

/// Texts are limited in characters (not bytes), matching the API caps.
fn check_text(text: &str, max_chars: usize) -> Result<()> {
    if text.is_empty() {
        return Err(TextitError::invalid_argument("text must not be empty"));
    }
    let length = text.chars().count();
    if length > max_chars {
        return Err(TextitError::invalid_argument(format!(
            "maximum length of text is {max_chars} characters, got {length}"
        )));
    }
    Ok(())
}

/// Command requesting correction variants for a misspelled word.
pub fn correct(word: &str) -> Result<Command> {
    check_word(word)?;
    Ok(Command::new(ApiMethod::Correct).arg("word", Value::from(word)))
}

/// Command requesting a next-word suggestion for `text` (up to 30
/// characters of previously entered text).
pub fn hint(text: &str) -> Result<Command> {
    check_text(text, MAX_HINT_CHARS)?;
    Ok(Command::new(ApiMethod::Hint).arg("text", Value::from(text)))
}

/// Command requesting the text representation of a number.
///
/// All parameters are serialized, including the defaults; the `reduce`
/// flag goes on the wire as the strings `"true"`/`"false"`.
pub fn numeral(request: &NumeralRequest) -> Result<Command> {
    check_word(&request.word)?;
    Ok(Command::new(ApiMethod::Numeral)
        .arg("number", Value::from(request.number))
        .arg("word", Value::from(request.word.as_str()))
        .arg("case", Value::from(request.case.code()))
        .arg("direct", Value::from(request.direct.as_str()))
        .arg(
            "reduce",
            Value::from(if request.reduce { "true" } else { "false" }),
        )
        .arg("format", Value::from(request.format.as_str())))
}

/// Command requesting a spell-check of `text` (up to 10 000 characters).
pub fn speller(text: &str) -> Result<Command> {
    check_text(text, MAX_TEXT_CHARS)?;
    Ok(Command::new(ApiMethod::Speller).arg("text", Value::from(text)))
}

/// Command requesting word parts and morphological features of a word.
pub fn word_info(word: &str) -> Result<Command> {
    check_word(word)?;
    Ok(Command::new(ApiMethod::Word).arg("word", Value::from(word)))
}

/// Command requesting `word` in the given target form.
///
/// Only the [`TargetForm`] fields that are set are serialized; the
/// integer-coded enums go on the wire as their codes (dative case is
/// `"case": 3`, plural is `"number": 2`). The aspect is sent under the
/// API's parameter name `kind`.
pub fn set_form(word: &str, form: &TargetForm) -> Result<Command> {
    check_word(word)?;
    let mut command = Command::new(ApiMethod::SetForm).arg("word", Value::from(word));
    if let Some(part) = form.part {
        command = command.arg("part", Value::from(part.code()));
    }
    if let Some(number) = form.number {
        command = command.arg("number", Value::from(number.code()));
    }
    if let Some(gender) = form.gender {
        command = command.arg("gender", Value::from(gender.code()));
    }
    if let Some(case) = form.case {
        command = command.arg("case", Value::from(case.code()));
    }
    if let Some(tense) = form.tense {
        command = command.arg("tense", Value::from(tense.code()));
    }
    if let Some(person) = form.person {
        command = command.arg("person", Value::from(person.code()));
    }
    if let Some(word_form) = form.form {
        command = command.arg("form", Value::from(word_form.code()));
    }
    if let Some(aspect) = form.aspect {
        command = command.arg("kind", Value::from(aspect.code()));
    }
    Ok(command)
}

/// Command requesting words that share the root of `word`.
pub fn cognate(word: &str) -> Result<Command> {
    check_word(word)?;
    Ok(Command::new(ApiMethod::Cognate).arg("word", Value::from(word)))
}

/// Command requesting synonyms of `word`.
pub fn synonym(word: &str) -> Result<Command> {
    check_word(word)?;
    Ok(Command::new(ApiMethod::Synonym).arg("word", Value::from(word)))
}

/// Command converting text typed in the Latin keyboard layout to
/// Cyrillic (up to 10 000 characters).
pub fn lat_to_cyr(text: &str) -> Result<Command> {
    check_text(text, MAX_TEXT_CHARS)?;
    Ok(Command::new(ApiMethod::LatToCyr).arg("text", Value::from(text)))
}

/// The payload posted to the API: the serialized commands plus the
/// documentation link. Works for a single command and for a batch.
pub fn payload(commands: &[Command]) -> Value {
    json!({
        "commands": commands.iter().map(Command::to_value).collect::<Vec<_>>(),
        "href": HELP_HREF,
    })
}

#[cfg(test)]
mod tests {
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    use super::*;
    use crate::core::models::{Case, Number, NumeralFormat, NumeralType, PartOfSpeech};

    #[test]
    fn test_set_form_serializes_only_given_fields() {
        let form = TargetForm::new()
            .with_case(Case::Dative)
            .with_number(Number::Plural);
        let command = set_form("ананас", &form).unwrap();
        assert_eq!(command.method(), ApiMethod::SetForm);
        assert_json_eq!(
            command.to_value(),
            json!({"func": "setform", "word": "ананас", "case": 3, "number": 2})
        );
    }

    #[test]
    fn test_set_form_serializes_every_field() {
        let form = TargetForm::new()
            .with_part(PartOfSpeech::Verb)
            .with_number(Number::Singular)
            .with_gender(crate::core::models::Gender::Feminine)
            .with_case(Case::Nominative)
            .with_tense(crate::core::models::Tense::Past)
            .with_person(crate::core::models::Person::Third)
            .with_form(crate::core::models::Form::Full)
            .with_aspect(crate::core::models::Aspect::Perfect);
        let command = set_form("сделать", &form).unwrap();
        assert_json_eq!(
            command.to_value(),
            json!({
                "func": "setform",
                "word": "сделать",
                "part": 3,
                "number": 1,
                "gender": 2,
                "case": 1,
                "tense": 2,
                "person": 3,
                "form": 3,
                "kind": 2
            })
        );
    }

    #[test]
    fn test_word_is_sent_without_normalization() {
        let command = correct("ОчеПатка").unwrap();
        assert_json_eq!(
            command.to_value(),
            json!({"func": "correct", "word": "ОчеПатка"})
        );
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let err = set_form("", &TargetForm::new()).unwrap_err();
        assert!(matches!(err, TextitError::InvalidArgument { .. }));
    }

    #[test]
    fn test_phrases_are_rejected() {
        for word in ["два слова", "слово ", " слово", "сло\tво"] {
            let err = correct(word).unwrap_err();
            assert!(
                matches!(err, TextitError::InvalidArgument { .. }),
                "{word:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hint_length_cap_counts_characters() {
        // 30 Cyrillic characters are 60 bytes; the cap is in characters.
        let text = "а".repeat(30);
        assert!(hint(&text).is_ok());
        let text = "а".repeat(31);
        let err = hint(&text).unwrap_err();
        assert!(matches!(err, TextitError::InvalidArgument { .. }));
    }

    #[test]
    fn test_speller_length_cap() {
        assert!(speller(&"б".repeat(10_000)).is_ok());
        assert!(speller(&"б".repeat(10_001)).is_err());
        assert!(speller("").is_err());
    }

    #[test]
    fn test_numeral_serializes_all_parameters() {
        let request = NumeralRequest::new(1234, "рубль");
        let command = numeral(&request).unwrap();
        assert_json_eq!(
            command.to_value(),
            json!({
                "func": "numeral",
                "number": 1234,
                "word": "рубль",
                "case": 1,
                "direct": "count",
                "reduce": "false",
                "format": "string"
            })
        );
    }

    #[test]
    fn test_numeral_with_overrides() {
        let request = NumeralRequest::new(21, "рубль")
            .with_case(Case::Genitive)
            .with_direct(NumeralType::Order)
            .with_reduce(true)
            .with_format(NumeralFormat::NumberString);
        let command = numeral(&request).unwrap();
        assert_json_eq!(
            command.to_value(),
            json!({
                "func": "numeral",
                "number": 21,
                "word": "рубль",
                "case": 2,
                "direct": "order",
                "reduce": "true",
                "format": "Number-string"
            })
        );
    }

    #[test]
    fn test_payload_wraps_commands_and_href() {
        let commands = vec![
            correct("очепатка").unwrap(),
            hint("я иду д").unwrap(),
        ];
        assert_json_eq!(
            payload(&commands),
            json!({
                "commands": [
                    {"func": "correct", "word": "очепатка"},
                    {"func": "hint", "text": "я иду д"}
                ],
                "href": "https://textit.ego-ai.tech/api/1.0/help"
            })
        );
    }

    #[test]
    fn test_payload_of_no_commands_is_still_well_formed() {
        assert_json_eq!(
            payload(&[]),
            json!({"commands": [], "href": "https://textit.ego-ai.tech/api/1.0/help"})
        );
    }

    #[test]
    fn test_lat_to_cyr_builds_text_command() {
        let command = lat_to_cyr("Ghbvth ntrcnf").unwrap();
        assert_json_eq!(
            command.to_value(),
            json!({"func": "lattocyr", "text": "Ghbvth ntrcnf"})
        );
    }
}
