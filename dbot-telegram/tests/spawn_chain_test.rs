//! Tests for [`dbot_telegram::spawn_chain`]: per-message isolation of handler failures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Chat, DbotError, Handler, HandlerResponse, Message, Result, User};
use dbot_telegram::spawn_chain;
use handler_chain::HandlerChain;

fn message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 1,
            username: None,
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 10,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Panics on "boom", errors on "fail", counts everything else.
struct FlakyHandler {
    handled: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for FlakyHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.content.as_str() {
            "boom" => panic!("handler panicked"),
            "fail" => Err(DbotError::Bot("send failed".to_string())),
            _ => {
                self.handled.fetch_add(1, Ordering::SeqCst);
                Ok(HandlerResponse::Reply("ok".to_string()))
            }
        }
    }
}

/// **Test: a panic in one message's task does not stop later messages.**
#[tokio::test]
async fn test_panic_is_isolated_to_its_task() {
    let handled = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(FlakyHandler {
        handled: handled.clone(),
    }));

    let crashed = spawn_chain(chain.clone(), message("boom")).await;
    assert!(crashed.unwrap_err().is_panic());

    spawn_chain(chain, message("hello")).await.unwrap();
    assert_eq!(handled.load(Ordering::SeqCst), 1);
}

/// **Test: a handler error is logged, not propagated; the task completes normally.**
#[tokio::test]
async fn test_error_is_contained() {
    let handled = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(FlakyHandler {
        handled: handled.clone(),
    }));

    spawn_chain(chain.clone(), message("fail")).await.unwrap();
    spawn_chain(chain, message("word")).await.unwrap();

    assert_eq!(handled.load(Ordering::SeqCst), 1);
}

/// **Test: many messages run concurrently without shared state.**
#[tokio::test]
async fn test_concurrent_messages() {
    let handled = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(FlakyHandler {
        handled: handled.clone(),
    }));

    let handles: Vec<_> = (0..20)
        .map(|i| spawn_chain(chain.clone(), message(&format!("word{}", i))))
        .collect();
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(handled.load(Ordering::SeqCst), 20);
}
