//! Async TextIT client
//!
//! [`TextitClient`] owns the transport and the batch queue. Every API
//! operation exists in two flavors: the plain method sends one command
//! right away and parses its reply, the `defer_*` variant validates the
//! input and enqueues the command for a later [`flush`]. Clones share
//! the connection pool and the queue.
//!
//! [`flush`]: TextitClient::flush

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::batch::BatchQueue;
use crate::core::command::{self, Command};
use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TextitError};
use crate::core::models::{
    BatchReply, NumeralRequest, NumeralResult, SpellerResult, TargetForm, WordResult,
};
use crate::core::response;
use crate::core::transport::{HttpTransport, Transport};

/// Client for the TextIT morphology API.
#[derive(Debug, Clone)]
pub struct TextitClient {
    transport: Arc<dyn Transport>,
    queue: BatchQueue,
}

impl TextitClient {
    /// Create a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over an explicit transport. Tests use this to
    /// substitute a mock.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            queue: BatchQueue::new(),
        }
    }

    /// Correction variants for a misspelled word.
    pub async fn correct(&self, word: &str) -> Result<Vec<WordResult>> {
        let reply = self.transport.send_one(&command::correct(word)?).await?;
        response::parse_word_list(&reply)
    }

    /// Suggestions for the next word after `text`.
    pub async fn hint(&self, text: &str) -> Result<Vec<WordResult>> {
        let reply = self.transport.send_one(&command::hint(text)?).await?;
        response::parse_word_list(&reply)
    }

    /// Text representation of a number.
    pub async fn numeral(&self, request: &NumeralRequest) -> Result<NumeralResult> {
        let reply = self.transport.send_one(&command::numeral(request)?).await?;
        response::parse_numeral(&reply)
    }

    /// Spell-check `text`; `None` means no errors were found.
    pub async fn speller(&self, text: &str) -> Result<Option<SpellerResult>> {
        let reply = self.transport.send_one(&command::speller(text)?).await?;
        response::parse_speller(&reply)
    }

    /// Word parts, morphological features and the lemma of a word.
    pub async fn word_info(&self, word: &str) -> Result<WordResult> {
        let reply = self.transport.send_one(&command::word_info(word)?).await?;
        response::parse_candidates(&reply)
    }

    /// The word put into the requested form.
    pub async fn set_form(&self, word: &str, form: &TargetForm) -> Result<WordResult> {
        let reply = self
            .transport
            .send_one(&command::set_form(word, form)?)
            .await?;
        response::parse_candidates(&reply)
    }

    /// Words sharing the root of `word`.
    pub async fn cognate(&self, word: &str) -> Result<Vec<WordResult>> {
        let reply = self.transport.send_one(&command::cognate(word)?).await?;
        response::parse_word_list(&reply)
    }

    /// Synonyms of `word`.
    pub async fn synonym(&self, word: &str) -> Result<Vec<WordResult>> {
        let reply = self.transport.send_one(&command::synonym(word)?).await?;
        response::parse_word_list(&reply)
    }

    /// Text typed in the Latin keyboard layout converted to Cyrillic.
    pub async fn lat_to_cyr(&self, text: &str) -> Result<String> {
        let reply = self.transport.send_one(&command::lat_to_cyr(text)?).await?;
        response::parse_text(&reply)
    }

    /// Defer a `correct` command to the batch.
    pub async fn defer_correct(&self, word: &str) -> Result<()> {
        self.defer(command::correct(word)?).await
    }

    /// Defer a `hint` command to the batch.
    pub async fn defer_hint(&self, text: &str) -> Result<()> {
        self.defer(command::hint(text)?).await
    }

    /// Defer a `numeral` command to the batch.
    pub async fn defer_numeral(&self, request: &NumeralRequest) -> Result<()> {
        self.defer(command::numeral(request)?).await
    }

    /// Defer a `speller` command to the batch.
    pub async fn defer_speller(&self, text: &str) -> Result<()> {
        self.defer(command::speller(text)?).await
    }

    /// Defer a `word` command to the batch.
    pub async fn defer_word_info(&self, word: &str) -> Result<()> {
        self.defer(command::word_info(word)?).await
    }

    /// Defer a `setform` command to the batch.
    pub async fn defer_set_form(&self, word: &str, form: &TargetForm) -> Result<()> {
        self.defer(command::set_form(word, form)?).await
    }

    /// Defer a `cognate` command to the batch.
    pub async fn defer_cognate(&self, word: &str) -> Result<()> {
        self.defer(command::cognate(word)?).await
    }

    /// Defer a `synonym` command to the batch.
    pub async fn defer_synonym(&self, word: &str) -> Result<()> {
        self.defer(command::synonym(word)?).await
    }

    /// Defer a `lattocyr` command to the batch.
    pub async fn defer_lat_to_cyr(&self, text: &str) -> Result<()> {
        self.defer(command::lat_to_cyr(text)?).await
    }

    async fn defer(&self, command: Command) -> Result<()> {
        self.queue.push(command).await;
        Ok(())
    }

    /// Number of commands waiting in the batch.
    pub async fn pending(&self) -> usize {
        self.queue.len().await
    }

    /// Send every deferred command as one batch and return the parsed
    /// replies in enqueue order.
    ///
    /// Each reply is parsed independently, so one malformed element does
    /// not invalidate its siblings; a reply count different from the
    /// command count fails the whole batch, since positional
    /// correspondence can no longer be trusted. Flushing an empty queue
    /// performs no network call. A flush that fails in transit consumes
    /// the batch; entries are never re-queued.
    pub async fn flush(&self) -> Result<Vec<Result<BatchReply>>> {
        let pending = self.queue.take_all().await;
        if pending.is_empty() {
            debug!("Flush of an empty batch, skipping network call");
            return Ok(Vec::new());
        }

        let methods: Vec<_> = pending.iter().map(|entry| entry.method()).collect();
        let commands: Vec<_> = pending
            .into_iter()
            .map(|entry| entry.into_command())
            .collect();

        info!("Flushing batch of {} command(s)", commands.len());
        let replies = self.transport.send_batch(&commands).await?;

        if replies.len() != methods.len() {
            return Err(TextitError::parse(format!(
                "sent {} command(s) but received {} replies",
                methods.len(),
                replies.len()
            )));
        }

        Ok(methods
            .into_iter()
            .zip(replies.iter())
            .map(|(method, reply)| response::parse_reply(method, reply))
            .collect())
    }

    /// Release the client, warning about any commands that were deferred
    /// but never flushed.
    pub async fn close(self) {
        let abandoned = self.queue.take_all().await;
        if !abandoned.is_empty() {
            warn!(
                "Closing client with {} unflushed command(s), dropping them",
                abandoned.len()
            );
        }
        info!("TextIT client closed");
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::Mutex;

    use super::*;
    use crate::core::models::{Case, Number, PartOfSpeech};

    /// Transport double: records every call and replays scripted replies.
    #[derive(Debug, Default)]
    struct MockTransport {
        calls: Mutex<Vec<Vec<Value>>>,
        replies: Mutex<Vec<Result<Vec<Value>>>>,
    }

    impl MockTransport {
        fn scripted(replies: Vec<Result<Vec<Value>>>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                replies: Mutex::new(replies),
            })
        }

        async fn calls(&self) -> Vec<Vec<Value>> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send_one(&self, command: &Command) -> Result<Value> {
            let mut replies = self.send_batch(std::slice::from_ref(command)).await?;
            Ok(replies.remove(0))
        }

        async fn send_batch(&self, commands: &[Command]) -> Result<Vec<Value>> {
            self.calls
                .lock()
                .await
                .push(commands.iter().map(Command::to_value).collect());
            self.replies.lock().await.remove(0)
        }
    }

    #[tokio::test]
    async fn test_immediate_call_sends_exact_word_once() {
        let transport =
            MockTransport::scripted(vec![Ok(vec![json!([{"word": "ананасам"}])])]);
        let client = TextitClient::with_transport(transport.clone());

        let form = TargetForm::new()
            .with_case(Case::Dative)
            .with_number(Number::Plural);
        let result = client.set_form("ананас", &form).await.unwrap();
        assert_eq!(result.word, "ананасам");

        let calls = transport.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(
            calls[0][0],
            json!({"func": "setform", "word": "ананас", "case": 3, "number": 2})
        );
    }

    #[tokio::test]
    async fn test_empty_word_never_reaches_the_transport() {
        let transport = MockTransport::scripted(vec![]);
        let client = TextitClient::with_transport(transport.clone());

        let err = client.set_form("", &TargetForm::new()).await.unwrap_err();
        assert!(matches!(err, TextitError::InvalidArgument { .. }));
        let err = client.defer_correct("").await.unwrap_err();
        assert!(matches!(err, TextitError::InvalidArgument { .. }));

        assert!(transport.calls().await.is_empty());
        assert_eq!(client.pending().await, 0);
    }

    #[tokio::test]
    async fn test_flush_keeps_enqueue_order() {
        let transport = MockTransport::scripted(vec![Ok(vec![
            json!([{"word": "яблоки"}]),
            json!([{"word": "персики"}]),
            json!([{"word": "груши"}]),
        ])]);
        let client = TextitClient::with_transport(transport.clone());

        let form = TargetForm::new()
            .with_part(PartOfSpeech::Noun)
            .with_number(Number::Plural);
        for word in ["яблоко", "персик", "груша"] {
            client.defer_set_form(word, &form).await.unwrap();
        }
        assert_eq!(client.pending().await, 3);

        let replies = client.flush().await.unwrap();
        assert_eq!(client.pending().await, 0);

        let words: Vec<_> = replies
            .into_iter()
            .map(|reply| match reply.unwrap() {
                BatchReply::Word(word) => word.word,
                other => panic!("unexpected reply: {other:?}"),
            })
            .collect();
        assert_eq!(words, vec!["яблоки", "персики", "груши"]);

        // One network call carrying all three commands in order.
        let calls = transport.calls().await;
        assert_eq!(calls.len(), 1);
        let sent: Vec<_> = calls[0]
            .iter()
            .map(|c| c["word"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(sent, vec!["яблоко", "персик", "груша"]);
    }

    #[tokio::test]
    async fn test_flush_of_empty_queue_skips_network() {
        let transport = MockTransport::scripted(vec![]);
        let client = TextitClient::with_transport(transport.clone());

        let replies = client.flush().await.unwrap();
        assert!(replies.is_empty());
        assert!(transport.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_flush_length_mismatch_fails_whole_batch() {
        let transport =
            MockTransport::scripted(vec![Ok(vec![json!([{"word": "яблоки"}])])]);
        let client = TextitClient::with_transport(transport);

        client.defer_correct("яблако").await.unwrap();
        client.defer_correct("персек").await.unwrap();

        let err = client.flush().await.unwrap_err();
        assert!(matches!(err, TextitError::ParseError { .. }));
    }

    #[tokio::test]
    async fn test_one_bad_element_leaves_siblings_parsed() {
        let transport = MockTransport::scripted(vec![Ok(vec![
            json!([{"word": "яблоки"}]),
            json!([{"part": 1}]),
            json!([{"word": "груши"}]),
        ])]);
        let client = TextitClient::with_transport(transport);

        for word in ["яблоко", "персик", "груша"] {
            client.defer_word_info(word).await.unwrap();
        }
        let replies = client.flush().await.unwrap();
        assert_eq!(replies.len(), 3);
        assert!(replies[0].is_ok());
        assert!(matches!(
            replies[1].as_ref().unwrap_err(),
            TextitError::ParseError { .. }
        ));
        assert!(replies[2].is_ok());
    }

    #[tokio::test]
    async fn test_failed_flush_consumes_the_batch() {
        let transport = MockTransport::scripted(vec![Err(TextitError::NetworkError {
            message: "connection reset".to_string(),
        })]);
        let client = TextitClient::with_transport(transport);

        client.defer_correct("слово").await.unwrap();
        assert!(client.flush().await.is_err());
        assert_eq!(client.pending().await, 0);
    }

    #[tokio::test]
    async fn test_mixed_batch_replies_dispatch_by_method() {
        let transport = MockTransport::scripted(vec![Ok(vec![
            json!([{"word": "опечатка"}, {"word": "печатка"}]),
            json!([{"number": "21", "text": "рубль"}]),
            json!([{"text": "Пример текста"}]),
            json!(null),
        ])]);
        let client = TextitClient::with_transport(transport);

        client.defer_correct("очепатка").await.unwrap();
        client
            .defer_numeral(&NumeralRequest::new(21, "рубль"))
            .await
            .unwrap();
        client.defer_lat_to_cyr("Ghbvth ntrcnf").await.unwrap();
        client.defer_speller("Пример текста").await.unwrap();

        let replies = client.flush().await.unwrap();
        assert!(matches!(
            replies[0].as_ref().unwrap(),
            BatchReply::Words(words) if words.len() == 2
        ));
        assert!(matches!(
            replies[1].as_ref().unwrap(),
            BatchReply::Numeral(numeral) if numeral.full_text() == "21 рубль"
        ));
        assert_eq!(
            replies[2].as_ref().unwrap(),
            &BatchReply::Text("Пример текста".to_string())
        );
        assert_eq!(replies[3].as_ref().unwrap(), &BatchReply::Speller(None));
    }

    #[tokio::test]
    async fn test_clones_share_the_queue() {
        let transport = MockTransport::scripted(vec![Ok(vec![
            json!([{"word": "один"}]),
            json!([{"word": "два"}]),
        ])]);
        let client = TextitClient::with_transport(transport);
        let clone = client.clone();

        client.defer_correct("адин").await.unwrap();
        clone.defer_correct("дво").await.unwrap();
        assert_eq!(client.pending().await, 2);

        let replies = clone.flush().await.unwrap();
        assert_eq!(replies.len(), 2);
        assert_eq!(client.pending().await, 0);
    }

    #[tokio::test]
    async fn test_missing_word_field_is_a_parse_error() {
        let transport = MockTransport::scripted(vec![Ok(vec![json!([{"lemma": "нет"}])])]);
        let client = TextitClient::with_transport(transport);

        let err = client.word_info("слово").await.unwrap_err();
        assert!(matches!(err, TextitError::ParseError { .. }));
    }

    #[tokio::test]
    async fn test_close_drops_unflushed_commands() {
        let transport = MockTransport::scripted(vec![]);
        let client = TextitClient::with_transport(transport.clone());

        client.defer_correct("слово").await.unwrap();
        client.close().await;
        assert!(transport.calls().await.is_empty());
    }
}
