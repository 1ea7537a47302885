//! Simple immediate-mode demo: decline a word and spell a number

use dotenvy::dotenv;
use textit_client::{Case, Number, NumeralRequest, TargetForm, TextitClient};

#[tokio::main]
async fn main() {
    dotenv().ok();

    println!("=== TextIT simple demo ===");

    let client = match TextitClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("Failed to create client: {e}");
            return;
        }
    };

    // Put "ананас" into dative plural
    let form = TargetForm::new()
        .with_case(Case::Dative)
        .with_number(Number::Plural);
    match client.set_form("ананас", &form).await {
        Ok(result) => println!("ананас (dative plural) -> {}", result.word),
        Err(e) => println!("set_form failed: {e}"),
    }

    // Spell out an amount of money
    let request = NumeralRequest::new(1234, "рубль");
    match client.numeral(&request).await {
        Ok(result) => println!("1234 рубль -> {}", result.full_text()),
        Err(e) => println!("numeral failed: {e}"),
    }

    // Look for a typo
    match client.speller("Пример тектса").await {
        Ok(Some(error)) => println!(
            "Found typo: {} at {} (suggestions: {})",
            error.word,
            error.position,
            error.correct.join(", ")
        ),
        Ok(None) => println!("No typos found"),
        Err(e) => println!("speller failed: {e}"),
    }

    client.close().await;
}
