//! Unit tests for the challenge crate

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;

    #[test]
    fn test_challenge_creation() {
        let challenge = Challenge::new("abc".to_string(), 1_000, 300_000);

        assert_eq!(challenge.value, "abc");
        assert_eq!(challenge.issued_at_ms, 1_000);
        assert_eq!(challenge.expires_at_ms, 301_000);
        assert!(!challenge.consumed);
    }

    #[test]
    fn test_expiry_boundary() {
        let challenge = Challenge::new("abc".to_string(), 0, 1_000);

        assert!(!challenge.is_expired_at(999));
        assert!(!challenge.is_expired_at(1_000));
        assert!(challenge.is_expired_at(1_001));
    }

    #[test]
    fn test_consume_transitions_once() {
        let mut challenge = Challenge::new("abc".to_string(), 0, 1_000);

        assert_eq!(challenge.consume_at(10), Ok(()));
        assert!(challenge.consumed);
        assert_eq!(
            challenge.consume_at(20),
            Err(ChallengeRejection::AlreadyConsumed)
        );
    }

    #[test]
    fn test_consume_expired_leaves_record_untouched() {
        let mut challenge = Challenge::new("abc".to_string(), 0, 1_000);

        assert_eq!(challenge.consume_at(5_000), Err(ChallengeRejection::Expired));
        assert!(!challenge.consumed);
    }

    #[test]
    fn test_timestamps_convert() {
        let challenge = Challenge::new("abc".to_string(), 1_700_000_000_000, 300_000);
        assert_eq!(challenge.issued_at().timestamp_millis(), 1_700_000_000_000);
        assert_eq!(challenge.expires_at().timestamp_millis(), 1_700_000_300_000);
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(ChallengeRejection::Unknown.to_string(), "unknown");
        assert_eq!(
            ChallengeRejection::AlreadyConsumed.to_string(),
            "already consumed"
        );
        assert_eq!(ChallengeRejection::Expired.to_string(), "expired");
    }
}

#[cfg(test)]
mod store_tests {
    use crate::application::config::ChallengeConfig;
    use crate::domain::entities::ChallengeRejection;
    use crate::domain::store::ChallengeStore;
    use crate::error::ChallengeError;
    use crate::infra::memory::InMemoryChallengeStore;
    use platform::clock::ManualClock;
    use std::sync::Arc;
    use std::time::Duration;

    fn store_with_clock() -> (Arc<InMemoryChallengeStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let store = InMemoryChallengeStore::with_clock(
            Arc::new(ChallengeConfig::default()),
            clock.clone(),
        );
        (Arc::new(store), clock)
    }

    fn assert_rejected(result: Result<(), ChallengeError>, expected: ChallengeRejection) {
        match result {
            Err(ChallengeError::InvalidChallenge(reason)) => assert_eq!(reason, expected),
            other => panic!("expected InvalidChallenge({expected:?}), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_issues_unconsumed_challenge_with_five_minute_ttl() {
        let (store, _clock) = store_with_clock();

        let challenge = store.create().await.unwrap();

        assert!(!challenge.value.is_empty());
        assert!(!challenge.consumed);
        assert_eq!(challenge.issued_at_ms, 1_700_000_000_000);
        assert_eq!(challenge.expires_at_ms - challenge.issued_at_ms, 5 * 60 * 1000);
        assert_eq!(store.get(&challenge.value), Some(challenge));
    }

    #[tokio::test]
    async fn test_create_issues_distinct_values() {
        let (store, _clock) = store_with_clock();

        let a = store.create().await.unwrap();
        let b = store.create().await.unwrap();

        assert_ne!(a.value, b.value);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_consume_succeeds_once() {
        let (store, _clock) = store_with_clock();
        let challenge = store.create().await.unwrap();

        store.consume(&challenge.value).await.unwrap();

        assert!(store.get(&challenge.value).unwrap().consumed);
        assert_rejected(
            store.consume(&challenge.value).await,
            ChallengeRejection::AlreadyConsumed,
        );
    }

    #[tokio::test]
    async fn test_consume_unknown_fails() {
        let (store, _clock) = store_with_clock();

        assert_rejected(
            store.consume("UNKNOWN_CHALLENGE").await,
            ChallengeRejection::Unknown,
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_consume_expired_fails_even_if_never_consumed() {
        let (store, clock) = store_with_clock();
        let challenge = store.create().await.unwrap();

        clock.advance(Duration::from_secs(5 * 60) + Duration::from_millis(1));

        assert_rejected(
            store.consume(&challenge.value).await,
            ChallengeRejection::Expired,
        );
        assert!(!store.get(&challenge.value).unwrap().consumed);
    }

    #[tokio::test]
    async fn test_consume_at_exact_expiry_succeeds() {
        let (store, clock) = store_with_clock();
        let challenge = store.create().await.unwrap();

        clock.set(challenge.expires_at_ms);

        store.consume(&challenge.value).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_consume_first_consumer_wins() {
        let (store, _clock) = store_with_clock();
        let challenge = store.create().await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..64 {
            let store = store.clone();
            let value = challenge.value.clone();
            handles.push(tokio::spawn(async move { store.consume(&value).await }));
        }

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(ChallengeError::InvalidChallenge(ChallengeRejection::AlreadyConsumed)) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(successes, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_distinct_challenges_consume_independently() {
        let (store, _clock) = store_with_clock();

        let mut values = Vec::new();
        for _ in 0..16 {
            values.push(store.create().await.unwrap().value);
        }

        let mut handles = Vec::new();
        for value in values {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.consume(&value).await }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use crate::application::config::ChallengeConfig;
    use crate::application::issue_challenge::IssueChallengeUseCase;
    use crate::infra::memory::InMemoryChallengeStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_issue_challenge_output_matches_record() {
        let store = Arc::new(InMemoryChallengeStore::new(Arc::new(
            ChallengeConfig::default(),
        )));
        let use_case = IssueChallengeUseCase::new(store.clone());

        let output = use_case.execute().await.unwrap();

        let record = store.get(&output.value).unwrap();
        assert_eq!(output.expires_at, record.expires_at());
        assert_eq!(output.issued_at, record.issued_at());
        assert!(!record.consumed);
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = ChallengeConfig::default();

        assert_eq!(config.challenge_bytes_len, 32);
        assert_eq!(config.challenge_ttl, Duration::from_secs(300));
        assert_eq!(config.challenge_ttl_ms(), 300_000);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::entities::ChallengeRejection;
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(ChallengeError, StatusCode)> = vec![
            (
                ChallengeError::InvalidChallenge(ChallengeRejection::Expired),
                StatusCode::GONE,
            ),
            (
                ChallengeError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let err: AppError = ChallengeError::InvalidChallenge(ChallengeRejection::Unknown).into();
        assert_eq!(err.kind(), ErrorKind::Gone);
        assert!(err.message().contains("unknown"));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::ChallengeConfig;
    use crate::infra::memory::InMemoryChallengeStore;
    use crate::presentation::router::challenge_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_challenge_returns_value_and_expiry() {
        let store = Arc::new(InMemoryChallengeStore::new(Arc::new(
            ChallengeConfig::default(),
        )));
        let app = challenge_router(store.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/challenge")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let value = json["value"].as_str().unwrap();
        assert!(json["expiresAt"].is_string());
        assert!(store.get(value).is_some());
    }
}
