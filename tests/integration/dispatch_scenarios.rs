//! End-to-end dispatch behavior through a scripted provider.

use crate::integration::test_utils::{sample_brief, ScriptedProvider};
use content_studio::api::StudioApi;
use content_studio::brief::{ContentBrief, GenerationAction, GenerationOptions};
use content_studio::catalog::FallbackCatalog;
use content_studio::delivery::{DeliveryChannel, Severity};
use content_studio::dispatch::{ProviderOutcome, RequestDispatcher};
use content_studio::error::{ApiError, ProviderError};
use content_studio::meter::{CreditAccount, CreditMeter};
use content_studio::normalizer::{FallbackReason, Normalization};
use content_studio::package::PackageField;
use content_studio::session::SessionStore;
use std::sync::Arc;
use std::time::Duration;

fn dispatcher_with(
    provider: Arc<ScriptedProvider>,
    balance: u32,
) -> (RequestDispatcher, Arc<CreditMeter>) {
    let meter = Arc::new(CreditMeter::new(CreditAccount {
        balance,
        period_max: 50,
    }));
    let dispatcher = RequestDispatcher::new(
        provider,
        Arc::clone(&meter),
        RequestDispatcher::DEFAULT_REQUEST_TIMEOUT,
    );
    (dispatcher, meter)
}

#[tokio::test]
async fn last_credit_with_prose_reply_yields_catalog_package() {
    let provider = Arc::new(ScriptedProvider::replying(
        "Remote work is here to stay, and honestly that's great for creators...",
    ));
    let (dispatcher, meter) = dispatcher_with(Arc::clone(&provider), 1);
    let channel = DeliveryChannel::default();

    let brief = ContentBrief::new("future of remote work");
    let result = dispatcher
        .dispatch(
            GenerationAction::GenerateContent,
            &brief,
            &GenerationOptions::default(),
        )
        .await;
    let notification = channel.deliver(&result);
    let outcome = result.unwrap();

    assert_eq!(meter.balance(), 0);
    assert_eq!(outcome.credits_remaining, 0);
    assert_eq!(provider.calls(), 1);
    assert_eq!(
        outcome.package,
        FallbackCatalog::entry(GenerationAction::GenerateContent)
    );
    assert_eq!(outcome.package.hooks.len(), 5);
    assert_eq!(outcome.package.hashtags.len(), 15);
    assert_eq!(
        outcome.normalization,
        Normalization::Fallback {
            reason: FallbackReason::Unparsable
        }
    );
    assert_eq!(notification.severity, Severity::Info);
    assert_eq!(notification.title, "Content Generated");
}

#[tokio::test]
async fn empty_balance_never_reaches_provider() {
    let provider = Arc::new(ScriptedProvider::replying("{}"));
    let (dispatcher, meter) = dispatcher_with(Arc::clone(&provider), 0);
    let channel = DeliveryChannel::default();

    for action in GenerationAction::ALL {
        let result = dispatcher
            .dispatch(action, &sample_brief(), &GenerationOptions::default())
            .await;
        assert!(matches!(result, Err(ApiError::QuotaExhausted)));
        let notification = channel.deliver(&result);
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.title, "No Credits");
    }

    assert_eq!(provider.calls(), 0);
    assert_eq!(meter.balance(), 0);
}

#[tokio::test]
async fn fenced_reply_with_malformed_hashtags_keeps_valid_hooks() {
    let reply = "Here you go!\n```json\n{\n  \"hooks\": [\"Hook one\", \"Hook two\", \"Hook three\"],\n  \"script\": \"A real script.\",\n  \"caption\": \"A real caption.\",\n  \"hashtags\": \"#notalist\",\n  \"bRollList\": [\"Desk shot\"],\n  \"thumbnailConcept\": \"Split screen\"\n}\n```\nEnjoy.";
    let provider = Arc::new(ScriptedProvider::replying(reply));
    let (dispatcher, _meter) = dispatcher_with(provider, 10);

    let outcome = dispatcher
        .dispatch(
            GenerationAction::GenerateContent,
            &sample_brief(),
            &GenerationOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome.package.hooks,
        vec!["Hook one", "Hook two", "Hook three"]
    );
    assert_eq!(
        outcome.package.hashtags,
        FallbackCatalog::sequence(GenerationAction::GenerateContent, PackageField::Hashtags)
    );
    assert_eq!(outcome.package.script, "A real script.");
    assert_eq!(
        outcome.normalization,
        Normalization::Parsed {
            substituted: vec![PackageField::Hashtags]
        }
    );
}

#[tokio::test]
async fn blank_topic_is_rejected_without_spending_credit() {
    let provider = Arc::new(ScriptedProvider::replying("{}"));
    let (dispatcher, meter) = dispatcher_with(Arc::clone(&provider), 3);

    let result = dispatcher
        .dispatch(
            GenerationAction::GenerateHooks,
            &ContentBrief::new("   "),
            &GenerationOptions::default(),
        )
        .await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert_eq!(meter.balance(), 3);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn provider_failure_still_spends_the_credit() {
    let provider = Arc::new(ScriptedProvider::failing(ProviderError::RateLimited(
        "slow down".into(),
    )));
    let (dispatcher, meter) = dispatcher_with(Arc::clone(&provider), 2);

    let outcome = dispatcher
        .dispatch(
            GenerationAction::GenerateScript,
            &sample_brief(),
            &GenerationOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(meter.balance(), 1);
    assert_eq!(
        outcome.provider,
        ProviderOutcome::Failed(ProviderError::RateLimited("slow down".into()))
    );
    assert_eq!(
        outcome.package,
        FallbackCatalog::entry(GenerationAction::GenerateScript)
    );
}

#[tokio::test(start_paused = true)]
async fn slow_provider_is_cut_off_by_dispatch_timeout() {
    let provider =
        Arc::new(ScriptedProvider::replying("{\"hooks\": [\"late\"]}").with_delay(Duration::from_secs(120)));
    let meter = Arc::new(CreditMeter::new(CreditAccount::full(5)));
    let dispatcher = RequestDispatcher::new(
        provider.clone(),
        Arc::clone(&meter),
        Duration::from_secs(30),
    );

    let outcome = dispatcher
        .dispatch(
            GenerationAction::GenerateHooks,
            &sample_brief(),
            &GenerationOptions::default(),
        )
        .await
        .unwrap();

    assert!(matches!(
        outcome.provider,
        ProviderOutcome::Failed(ProviderError::Timeout(_))
    ));
    assert_eq!(
        outcome.package,
        FallbackCatalog::entry(GenerationAction::GenerateHooks)
    );
    assert_eq!(meter.balance(), 4);
}

#[tokio::test]
async fn regenerate_is_billed_as_another_dispatch() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("{\"hooks\": [\"first\"]}".to_string()),
        Ok("{\"hooks\": [\"second\"]}".to_string()),
    ]));
    let (dispatcher, meter) = dispatcher_with(Arc::clone(&provider), 5);
    let brief = sample_brief();
    let options = GenerationOptions::default();

    let first = dispatcher
        .dispatch(GenerationAction::GenerateHooks, &brief, &options)
        .await
        .unwrap();
    let second = dispatcher
        .dispatch(GenerationAction::GenerateHooks, &brief, &options)
        .await
        .unwrap();

    assert_eq!(first.package.hooks, vec!["first"]);
    assert_eq!(second.package.hooks, vec!["second"]);
    assert_eq!(meter.balance(), 3);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn concurrent_dispatches_never_overspend() {
    let provider = Arc::new(ScriptedProvider::replying("{\"hooks\": [\"h\"]}"));
    let meter = Arc::new(CreditMeter::new(CreditAccount {
        balance: 3,
        period_max: 3,
    }));
    let dispatcher = Arc::new(RequestDispatcher::new(
        provider.clone(),
        Arc::clone(&meter),
        RequestDispatcher::DEFAULT_REQUEST_TIMEOUT,
    ));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let dispatcher = Arc::clone(&dispatcher);
        handles.push(tokio::spawn(async move {
            dispatcher
                .dispatch(
                    GenerationAction::GenerateHooks,
                    &sample_brief(),
                    &GenerationOptions::default(),
                )
                .await
        }));
    }

    let mut remaining = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(outcome) => remaining.push(outcome.credits_remaining),
            Err(ApiError::QuotaExhausted) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    remaining.sort_unstable();
    assert_eq!(remaining, vec![0, 1, 2]);
    assert_eq!(rejected, 7);
    assert_eq!(meter.balance(), 0);
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn api_facade_queues_one_notification_per_request() {
    let provider = Arc::new(ScriptedProvider::replying(
        "{\"hooks\": [\"a\", \"b\"], \"script\": \"s\", \"caption\": \"c\", \"hashtags\": [\"#x\"], \"bRollList\": [\"shot\"], \"thumbnailConcept\": \"t\"}",
    ));
    let session = Arc::new(SessionStore::in_memory(
        CreditAccount::full(2),
        Duration::from_secs(5),
    ));
    let api = StudioApi::new(
        provider.clone(),
        Arc::clone(&session),
        RequestDispatcher::DEFAULT_REQUEST_TIMEOUT,
    );

    let (first, n1) = api
        .dispatch(
            GenerationAction::GenerateContent,
            &sample_brief(),
            &GenerationOptions::default(),
        )
        .await;
    let (_, n2) = api
        .dispatch(
            GenerationAction::GenerateContent,
            &sample_brief(),
            &GenerationOptions::default(),
        )
        .await;
    let (third, n3) = api
        .dispatch(
            GenerationAction::GenerateContent,
            &sample_brief(),
            &GenerationOptions::default(),
        )
        .await;

    assert_eq!(
        first.unwrap().normalization,
        Normalization::Parsed {
            substituted: vec![]
        }
    );
    assert!(matches!(third, Err(ApiError::QuotaExhausted)));
    assert_eq!(n1.severity, Severity::Success);
    assert!(n1.message.contains("1 credit remaining."));
    assert!(n2.message.contains("0 credits remaining."));
    assert_eq!(n3.title, "No Credits");
    assert_eq!(session.delivery().len(), 3);
    assert_eq!(provider.calls(), 2);
}
