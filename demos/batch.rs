//! Deferred-batch demo: pluralize several words in one round trip

use dotenvy::dotenv;
use textit_client::{BatchReply, Number, PartOfSpeech, TargetForm, TextitClient};

#[tokio::main]
async fn main() {
    dotenv().ok();

    println!("=== TextIT batch demo ===");

    let client = match TextitClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("Failed to create client: {e}");
            return;
        }
    };

    let words = ["яблоко", "персик", "груша"];
    let form = TargetForm::new()
        .with_part(PartOfSpeech::Noun)
        .with_number(Number::Plural);

    for word in words {
        if let Err(e) = client.defer_set_form(word, &form).await {
            println!("Failed to defer {word}: {e}");
            return;
        }
    }
    println!("Deferred {} commands", client.pending().await);

    match client.flush().await {
        Ok(replies) => {
            for (word, reply) in words.iter().zip(replies) {
                match reply {
                    Ok(BatchReply::Word(result)) => println!("{word} -> {}", result.word),
                    Ok(other) => println!("{word} -> unexpected reply: {other:?}"),
                    Err(e) => println!("{word} -> error: {e}"),
                }
            }
        }
        Err(e) => println!("Flush failed: {e}"),
    }

    client.close().await;
}
