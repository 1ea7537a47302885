//! Core data models: API vocabulary, request parameters and typed results

use std::fmt;
use std::str::FromStr;

use crate::core::errors::{Result, TextitError};

/// API methods understood by the TextIT endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// Spelling-correction variants for a misspelled word
    Correct,
    /// Next-word suggestion for entered text
    Hint,
    /// Text representation of a number
    Numeral,
    /// Spell-check of a text fragment
    Speller,
    /// Word breakdown and morphological features
    Word,
    /// Put a word into the requested form
    SetForm,
    /// Words sharing the same root
    Cognate,
    /// Synonyms of a word
    Synonym,
    /// Latin-layout text converted to Cyrillic
    LatToCyr,
}

impl ApiMethod {
    /// Wire name of the method (the `func` field of a command).
    pub fn as_str(self) -> &'static str {
        match self {
            ApiMethod::Correct => "correct",
            ApiMethod::Hint => "hint",
            ApiMethod::Numeral => "numeral",
            ApiMethod::Speller => "speller",
            ApiMethod::Word => "word",
            ApiMethod::SetForm => "setform",
            ApiMethod::Cognate => "cognate",
            ApiMethod::Synonym => "synonym",
            ApiMethod::LatToCyr => "lattocyr",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of speech, in the API's own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    /// Существительное
    Noun = 1,
    /// Прилагательное
    Adjective = 2,
    /// Глагол
    Verb = 3,
    /// Наречие
    Adverb = 4,
    /// Числительное
    Numeral = 5,
    /// Местоимение
    Pronoun = 6,
    /// Предлог
    Preposition = 7,
    /// Союз
    Union = 8,
    /// Частица
    Particle = 9,
    /// Междометие
    Interjection = 10,
    /// Причастие
    Participle = 11,
    /// Деепричастие
    VerbalParticiple = 12,
    /// Сравнительная степень
    Comparative = 13,
    /// Предикатив
    Predicative = 14,
}

impl PartOfSpeech {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(PartOfSpeech::Noun),
            2 => Some(PartOfSpeech::Adjective),
            3 => Some(PartOfSpeech::Verb),
            4 => Some(PartOfSpeech::Adverb),
            5 => Some(PartOfSpeech::Numeral),
            6 => Some(PartOfSpeech::Pronoun),
            7 => Some(PartOfSpeech::Preposition),
            8 => Some(PartOfSpeech::Union),
            9 => Some(PartOfSpeech::Particle),
            10 => Some(PartOfSpeech::Interjection),
            11 => Some(PartOfSpeech::Participle),
            12 => Some(PartOfSpeech::VerbalParticiple),
            13 => Some(PartOfSpeech::Comparative),
            14 => Some(PartOfSpeech::Predicative),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Union => "union",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Participle => "participle",
            PartOfSpeech::VerbalParticiple => "verbal-participle",
            PartOfSpeech::Comparative => "comparative",
            PartOfSpeech::Predicative => "predicative",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "noun" => Ok(PartOfSpeech::Noun),
            "adjective" => Ok(PartOfSpeech::Adjective),
            "verb" => Ok(PartOfSpeech::Verb),
            "adverb" => Ok(PartOfSpeech::Adverb),
            "numeral" => Ok(PartOfSpeech::Numeral),
            "pronoun" => Ok(PartOfSpeech::Pronoun),
            "preposition" => Ok(PartOfSpeech::Preposition),
            "union" => Ok(PartOfSpeech::Union),
            "particle" => Ok(PartOfSpeech::Particle),
            "interjection" => Ok(PartOfSpeech::Interjection),
            "participle" => Ok(PartOfSpeech::Participle),
            "verbal-participle" => Ok(PartOfSpeech::VerbalParticiple),
            "comparative" => Ok(PartOfSpeech::Comparative),
            "predicative" => Ok(PartOfSpeech::Predicative),
            other => Err(TextitError::invalid_argument(format!(
                "unknown part of speech: {other}"
            ))),
        }
    }
}

/// Grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Именительный (кто? что?)
    Nominative = 1,
    /// Родительный (кого? чего?)
    Genitive = 2,
    /// Дательный (кому? чему?)
    Dative = 3,
    /// Винительный (кого? что?)
    Accusative = 4,
    /// Творительный (кем? чем?)
    Instrumental = 5,
    /// Предложный (о ком? о чём?)
    Prepositional = 6,
}

impl Case {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Case::Nominative),
            2 => Some(Case::Genitive),
            3 => Some(Case::Dative),
            4 => Some(Case::Accusative),
            5 => Some(Case::Instrumental),
            6 => Some(Case::Prepositional),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nominative" => Ok(Case::Nominative),
            "genitive" => Ok(Case::Genitive),
            "dative" => Ok(Case::Dative),
            "accusative" => Ok(Case::Accusative),
            "instrumental" => Ok(Case::Instrumental),
            "prepositional" => Ok(Case::Prepositional),
            other => Err(TextitError::invalid_argument(format!(
                "unknown case: {other}"
            ))),
        }
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    /// Единственное число
    Singular = 1,
    /// Множественное число
    Plural = 2,
}

impl Number {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Number::Singular),
            2 => Some(Number::Plural),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Number {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "singular" => Ok(Number::Singular),
            "plural" => Ok(Number::Plural),
            other => Err(TextitError::invalid_argument(format!(
                "unknown number: {other}"
            ))),
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Мужской род
    Masculine = 1,
    /// Женский род
    Feminine = 2,
    /// Средний род
    Neuter = 3,
    /// Общий род (e.g. сирота)
    Common = 4,
}

impl Gender {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Gender::Masculine),
            2 => Some(Gender::Feminine),
            3 => Some(Gender::Neuter),
            4 => Some(Gender::Common),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::Common => "common",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "masculine" => Ok(Gender::Masculine),
            "feminine" => Ok(Gender::Feminine),
            "neuter" => Ok(Gender::Neuter),
            "common" => Ok(Gender::Common),
            other => Err(TextitError::invalid_argument(format!(
                "unknown gender: {other}"
            ))),
        }
    }
}

/// Verb tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    /// Настоящее время
    Present = 1,
    /// Прошедшее время
    Past = 2,
    /// Будущее время
    Future = 3,
}

impl Tense {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Tense::Present),
            2 => Some(Tense::Past),
            3 => Some(Tense::Future),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Future => "future",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tense {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "present" => Ok(Tense::Present),
            "past" => Ok(Tense::Past),
            "future" => Ok(Tense::Future),
            other => Err(TextitError::invalid_argument(format!(
                "unknown tense: {other}"
            ))),
        }
    }
}

/// Grammatical person of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    /// Первое лицо (я, мы)
    First = 1,
    /// Второе лицо (ты, вы)
    Second = 2,
    /// Третье лицо (он, они)
    Third = 3,
}

impl Person {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Person::First),
            2 => Some(Person::Second),
            3 => Some(Person::Third),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Person::First => "first",
            Person::Second => "second",
            Person::Third => "third",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Person {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Person::First),
            "second" => Ok(Person::Second),
            "third" => Ok(Person::Third),
            other => Err(TextitError::invalid_argument(format!(
                "unknown person: {other}"
            ))),
        }
    }
}

/// Form of an adjective or participle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Form is not defined for this word
    Undefined = 1,
    /// Личная форма
    Personal = 2,
    /// Полная форма
    Full = 3,
    /// Краткая форма
    Short = 4,
}

impl Form {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Form::Undefined),
            2 => Some(Form::Personal),
            3 => Some(Form::Full),
            4 => Some(Form::Short),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Form::Undefined => "undefined",
            Form::Personal => "personal",
            Form::Full => "full",
            Form::Short => "short",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Form {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "undefined" => Ok(Form::Undefined),
            "personal" => Ok(Form::Personal),
            "full" => Ok(Form::Full),
            "short" => Ok(Form::Short),
            other => Err(TextitError::invalid_argument(format!(
                "unknown form: {other}"
            ))),
        }
    }
}

/// Verb aspect (вид). The API calls this parameter `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// Несовершенный вид (делать)
    Imperfect = 1,
    /// Совершенный вид (сделать)
    Perfect = 2,
}

impl Aspect {
    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Aspect::Imperfect),
            2 => Some(Aspect::Perfect),
            _ => None,
        }
    }

    /// Lowercase name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Aspect::Imperfect => "imperfect",
            Aspect::Perfect => "perfect",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aspect {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "imperfect" => Ok(Aspect::Imperfect),
            "perfect" => Ok(Aspect::Perfect),
            other => Err(TextitError::invalid_argument(format!(
                "unknown aspect: {other}"
            ))),
        }
    }
}

/// Animacy of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animacy {
    /// Одушевлённое
    Animate = 1,
    /// Неодушевлённое
    Inanimate = 2,
}

impl Animacy {
    pub(crate) fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Animacy::Animate),
            2 => Some(Animacy::Inanimate),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Animacy::Animate => "animate",
            Animacy::Inanimate => "inanimate",
        }
    }
}

impl fmt::Display for Animacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the service recognized a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordType {
    /// Found in the dictionary
    Dictionary,
    /// Recognized as a proper name
    Named,
    /// Not recognized
    Unknown,
}

impl WordType {
    pub(crate) fn from_wire(value: &str) -> Option<Self> {
        match value {
            "dictionary" => Some(WordType::Dictionary),
            "named" => Some(WordType::Named),
            "unknown" => Some(WordType::Unknown),
            _ => None,
        }
    }

    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            WordType::Dictionary => "dictionary",
            WordType::Named => "named",
            WordType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of numeral to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralType {
    /// Количественное (двадцать один)
    Count,
    /// Порядковое (двадцать первый)
    Order,
    /// Собирательное (двое, трое)
    Union,
}

impl NumeralType {
    /// Wire name of the numeral type.
    pub fn as_str(self) -> &'static str {
        match self {
            NumeralType::Count => "count",
            NumeralType::Order => "order",
            NumeralType::Union => "union",
        }
    }
}

impl fmt::Display for NumeralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumeralType {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "count" => Ok(NumeralType::Count),
            "order" => Ok(NumeralType::Order),
            "union" => Ok(NumeralType::Union),
            other => Err(TextitError::invalid_argument(format!(
                "unknown numeral type: {other}"
            ))),
        }
    }
}

/// Output format of a generated numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralFormat {
    /// Digits only ("1234")
    Number,
    /// Digits plus the counted word ("1234 рубля")
    NumberString,
    /// Fully spelled out ("одна тысяча двести тридцать четыре рубля")
    String,
}

impl NumeralFormat {
    /// Wire name of the format. Mixed case is the service's own spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            NumeralFormat::Number => "Number",
            NumeralFormat::NumberString => "Number-string",
            NumeralFormat::String => "string",
        }
    }
}

impl fmt::Display for NumeralFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumeralFormat {
    type Err = TextitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "number" => Ok(NumeralFormat::Number),
            "number-string" => Ok(NumeralFormat::NumberString),
            "string" => Ok(NumeralFormat::String),
            other => Err(TextitError::invalid_argument(format!(
                "unknown numeral format: {other}"
            ))),
        }
    }
}

/// Target form for a `setform` request.
///
/// Fields left unset are omitted from the outgoing command, letting the
/// service apply its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetForm {
    /// Required part of speech
    pub part: Option<PartOfSpeech>,
    /// Grammatical number
    pub number: Option<Number>,
    /// Grammatical gender
    pub gender: Option<Gender>,
    /// Grammatical case
    pub case: Option<Case>,
    /// Verb tense
    pub tense: Option<Tense>,
    /// Verb person
    pub person: Option<Person>,
    /// Adjective/participle form
    pub form: Option<Form>,
    /// Verb aspect
    pub aspect: Option<Aspect>,
}

impl TargetForm {
    /// Create an empty target form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a part of speech.
    pub fn with_part(mut self, part: PartOfSpeech) -> Self {
        self.part = Some(part);
        self
    }

    /// Request a grammatical number.
    pub fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    /// Request a grammatical gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Request a grammatical case.
    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    /// Request a verb tense.
    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }

    /// Request a verb person.
    pub fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    /// Request an adjective/participle form.
    pub fn with_form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    /// Request a verb aspect.
    pub fn with_aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = Some(aspect);
        self
    }
}

/// Parameters of a `numeral` request.
///
/// Unlike [`TargetForm`] every field here is always serialized; the
/// defaults mirror the service defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralRequest {
    /// Number to spell out. Negative numbers are not supported by the
    /// API, which the type makes unrepresentable.
    pub number: u64,
    /// Name of the counted object (e.g. рубль)
    pub word: String,
    /// Case of the result
    pub case: Case,
    /// Kind of numeral (the API calls this parameter `direct`)
    pub direct: NumeralType,
    /// Abbreviate large orders (тыс., млн)
    pub reduce: bool,
    /// Output format
    pub format: NumeralFormat,
}

impl NumeralRequest {
    /// Numeral request with service defaults: nominative count numeral,
    /// spelled out in full.
    pub fn new(number: u64, word: impl Into<String>) -> Self {
        Self {
            number,
            word: word.into(),
            case: Case::Nominative,
            direct: NumeralType::Count,
            reduce: false,
            format: NumeralFormat::String,
        }
    }

    /// Set the case of the result.
    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// Set the kind of numeral.
    pub fn with_direct(mut self, direct: NumeralType) -> Self {
        self.direct = direct;
        self
    }

    /// Abbreviate large orders (тыс., млн and so on).
    pub fn with_reduce(mut self, reduce: bool) -> Self {
        self.reduce = reduce;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: NumeralFormat) -> Self {
        self.format = format;
        self
    }
}

/// A word returned by the API together with the morphological features
/// and word parts the service recognized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordResult {
    /// The word itself (transformed, suggested or analyzed)
    pub word: String,
    /// Part of speech
    pub part: Option<PartOfSpeech>,
    /// Grammatical case
    pub case: Option<Case>,
    /// Adjective/participle form
    pub form: Option<Form>,
    /// Grammatical gender
    pub gender: Option<Gender>,
    /// Verb aspect
    pub aspect: Option<Aspect>,
    /// Animacy
    pub animacy: Option<Animacy>,
    /// Grammatical number
    pub number: Option<Number>,
    /// Verb person
    pub person: Option<Person>,
    /// Verb tense
    pub tense: Option<Tense>,
    /// Приставка
    pub prefix: Option<String>,
    /// Word stem (основа)
    pub base: Option<String>,
    /// Интерфикс
    pub interfix: Option<String>,
    /// Суффикс
    pub suffix: Option<String>,
    /// Окончание
    pub ending: Option<String>,
    /// Постфикс
    pub postfix: Option<String>,
    /// Initial letter(s) for abbreviated words
    pub initial: Option<String>,
    /// Lemma (normal form) of the word
    pub lemma: Option<String>,
    /// How the service recognized the word
    pub word_type: Option<WordType>,
    /// Service confidence for this candidate
    pub probability: Option<f64>,
}

/// Text representation of a number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumeralResult {
    /// Numeric part of the answer
    pub number: String,
    /// Text part of the answer
    pub text: String,
}

impl NumeralResult {
    /// Number and text joined with a space.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.number, self.text)
    }
}

/// A spelling error found by the `speller` method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellerResult {
    /// The misspelled word
    pub word: String,
    /// Position of the word in the checked text
    pub position: usize,
    /// Suggested corrections, best first
    pub correct: Vec<String>,
}

/// One parsed reply of a flushed batch, in enqueue order.
///
/// The variant is determined by the method that produced the entry;
/// see [`crate::core::response`] for the mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchReply {
    /// Reply to `correct`, `hint`, `cognate` or `synonym`
    Words(Vec<WordResult>),
    /// Reply to `word` or `setform`
    Word(WordResult),
    /// Reply to `numeral`
    Numeral(NumeralResult),
    /// Reply to `speller`; `None` when the text had no errors
    Speller(Option<SpellerResult>),
    /// Reply to `lattocyr`
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_codes_round_trip() {
        for case in [
            Case::Nominative,
            Case::Genitive,
            Case::Dative,
            Case::Accusative,
            Case::Instrumental,
            Case::Prepositional,
        ] {
            assert_eq!(Case::from_code(u64::from(case.code())), Some(case));
        }
        assert_eq!(Case::Dative.code(), 3);
        assert_eq!(Case::from_code(0), None);
        assert_eq!(Case::from_code(7), None);
    }

    #[test]
    fn test_part_of_speech_codes() {
        assert_eq!(PartOfSpeech::Noun.code(), 1);
        assert_eq!(PartOfSpeech::Predicative.code(), 14);
        assert_eq!(PartOfSpeech::from_code(12), Some(PartOfSpeech::VerbalParticiple));
        assert_eq!(PartOfSpeech::from_code(15), None);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Dative".parse::<Case>().unwrap(), Case::Dative);
        assert_eq!("PLURAL".parse::<Number>().unwrap(), Number::Plural);
        assert_eq!("noun".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        let err = "vocative".parse::<Case>().unwrap_err();
        assert!(matches!(err, TextitError::InvalidArgument { .. }));
    }

    #[test]
    fn test_numeral_format_wire_names() {
        assert_eq!(NumeralFormat::Number.as_str(), "Number");
        assert_eq!(NumeralFormat::NumberString.as_str(), "Number-string");
        assert_eq!(NumeralFormat::String.as_str(), "string");
        assert_eq!(
            "number-string".parse::<NumeralFormat>().unwrap(),
            NumeralFormat::NumberString
        );
    }

    #[test]
    fn test_target_form_builder() {
        let form = TargetForm::new()
            .with_case(Case::Dative)
            .with_number(Number::Plural);
        assert_eq!(form.case, Some(Case::Dative));
        assert_eq!(form.number, Some(Number::Plural));
        assert_eq!(form.part, None);
        assert_eq!(form.gender, None);
    }

    #[test]
    fn test_numeral_request_defaults() {
        let request = NumeralRequest::new(1234, "рубль");
        assert_eq!(request.case, Case::Nominative);
        assert_eq!(request.direct, NumeralType::Count);
        assert!(!request.reduce);
        assert_eq!(request.format, NumeralFormat::String);
    }

    #[test]
    fn test_numeral_result_full_text() {
        let result = NumeralResult {
            number: "1234".to_string(),
            text: "рубля".to_string(),
        };
        assert_eq!(result.full_text(), "1234 рубля");
    }
}
