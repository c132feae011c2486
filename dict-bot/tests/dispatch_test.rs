//! End-to-end tests for the per-message chain built by [`dict_bot::build_handler_chain`].
//!
//! The dictionary API is mocked with `mockito`; Telegram is replaced by [`MockBot`], which records
//! replies. Each test drives one inbound message through the chain and asserts on what was sent.

mod common;

use std::sync::Arc;

use common::mock_bot::{MockBot, SentRecord};
use common::text_message;
use dbot_core::{DbotError, HandlerResponse};
use dict_bot::build_handler_chain;
use dictionary::{DictionaryClient, DEFAULT_TIMEOUT, NOT_FOUND_MESSAGE};
use handler_chain::HandlerChain;
use tokio::sync::RwLock;

const HELLO_BODY: &str = r#"[{
    "word": "hello",
    "meanings": [{
        "partOfSpeech": "exclamation",
        "definitions": [{"definition": "used as a greeting"}],
        "synonyms": ["hi"],
        "antonyms": []
    }]
}]"#;

fn chain_with(
    bot: Arc<MockBot>,
    server_url: &str,
    bot_username: Option<&str>,
    source_url: Option<&str>,
) -> HandlerChain {
    let dictionary = DictionaryClient::new(server_url, DEFAULT_TIMEOUT).unwrap();
    build_handler_chain(
        bot,
        Arc::new(dictionary),
        Arc::new(RwLock::new(bot_username.map(str::to_string))),
        source_url.map(str::to_string),
    )
}

/// **Scenario 1: "hello" with one meaning gets the formatted definition.**
#[tokio::test]
async fn test_hello_is_defined() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/entries/en/hello")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HELLO_BODY)
        .expect(1)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), None, None);

    let response = chain.handle(&text_message("hello")).await.unwrap();

    mock.assert_async().await;
    let expected = "Definitions and details for \"hello\":\n\n\
                    1. (exclamation) used as a greeting\n   Synonyms: hi\n\n";
    assert_eq!(response, HandlerResponse::Reply(expected.to_string()));
    assert_eq!(
        bot.sent(),
        vec![SentRecord {
            chat_id: 456,
            text: expected.to_string(),
        }]
    );
}

/// **Test: surrounding whitespace is trimmed before the lookup.**
#[tokio::test]
async fn test_input_is_trimmed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/entries/en/hello")
        .with_status(200)
        .with_body(HELLO_BODY)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), None, None);

    chain.handle(&text_message("  hello \n")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(bot.sent().len(), 1);
}

/// **Scenario 2: a 404 gets exactly the not-found message.**
#[tokio::test]
async fn test_unknown_word_gets_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/entries/en/zzzzz")
        .with_status(404)
        .with_body(r#"{"title":"No Definitions Found"}"#)
        .expect(1)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), None, None);

    let response = chain.handle(&text_message("zzzzz")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response, HandlerResponse::Reply(NOT_FOUND_MESSAGE.to_string()));
    assert_eq!(
        bot.sent(),
        vec![SentRecord {
            chat_id: 456,
            text: NOT_FOUND_MESSAGE.to_string(),
        }]
    );
}

/// **Test: server errors and malformed JSON reach the user as the same not-found message.**
#[tokio::test]
async fn test_upstream_failures_collapse_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _broken = server
        .mock("GET", "/api/v2/entries/en/broken")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;
    let _down = server
        .mock("GET", "/api/v2/entries/en/down")
        .with_status(500)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), None, None);

    chain.handle(&text_message("broken")).await.unwrap();
    chain.handle(&text_message("down")).await.unwrap();

    let texts: Vec<String> = bot.sent().into_iter().map(|r| r.text).collect();
    assert_eq!(texts, vec![NOT_FOUND_MESSAGE, NOT_FOUND_MESSAGE]);
}

/// **Test: an unreachable dictionary API gets the not-found message.**
#[tokio::test]
async fn test_unreachable_api_gets_not_found() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &format!("http://{}", addr), None, None);

    chain.handle(&text_message("hello")).await.unwrap();

    assert_eq!(bot.sent()[0].text, NOT_FOUND_MESSAGE);
}

/// **Scenario 3: whitespace-only input sends nothing and calls no API.**
#[tokio::test]
async fn test_blank_input_is_ignored() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), None, None);

    let response = chain.handle(&text_message("   \t ")).await.unwrap();
    chain.handle(&text_message("")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.sent().is_empty());
}

/// **Test: /start greets the user by first name without a lookup.**
#[tokio::test]
async fn test_start_greets_user() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), Some("dict_bot"), None);

    chain.handle(&text_message("/start")).await.unwrap();
    chain.handle(&text_message("/start@dict_bot")).await.unwrap();

    mock.assert_async().await;
    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    for record in sent {
        assert!(record.text.starts_with("👋 Hi Ada, I can help you find the definitions"));
    }
}

/// **Test: /source replies with the configured link.**
#[tokio::test]
async fn test_source_replies_with_link() {
    let server = mockito::Server::new_async().await;
    let bot = MockBot::new();
    let chain = chain_with(
        bot.clone(),
        &server.url(),
        None,
        Some("https://example.com/dict-bot"),
    );

    chain.handle(&text_message("/source")).await.unwrap();

    assert_eq!(bot.sent()[0].text, "📦 Source code: https://example.com/dict-bot");
}

/// **Test: /help lists the commands.**
#[tokio::test]
async fn test_help_lists_commands() {
    let server = mockito::Server::new_async().await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), None, None);

    chain.handle(&text_message("/help")).await.unwrap();

    let text = &bot.sent()[0].text;
    assert!(text.contains("/start"));
    assert!(text.contains("/source"));
}

/// **Test: a command addressed to another bot falls through to a lookup.**
#[tokio::test]
async fn test_command_for_other_bot_is_looked_up() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(r"^/api/v2/entries/en/.*start.*$".to_string()),
        )
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let bot = MockBot::new();
    let chain = chain_with(bot.clone(), &server.url(), Some("dict_bot"), None);

    chain.handle(&text_message("/start@other_bot")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(bot.sent()[0].text, NOT_FOUND_MESSAGE);
}

/// **Test: a failed Telegram send is returned as an error from the chain.**
#[tokio::test]
async fn test_send_failure_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/entries/en/hello")
        .with_status(200)
        .with_body(HELLO_BODY)
        .create_async()
        .await;
    let chain = chain_with(MockBot::failing(), &server.url(), None, None);

    let result = chain.handle(&text_message("hello")).await;

    assert!(matches!(result, Err(DbotError::Bot(_))));
}
