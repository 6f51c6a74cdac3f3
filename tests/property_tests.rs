//! Property-based tests for request building.
//!
//! These cover the pieces every route relies on: path encoding, pagination
//! parameters, credential parsing and date formatting.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use octokit::clients::{IssueRouter, NotificationRouter};
use octokit::router::{encode_reference, encode_segment};
use octokit::testing::MockSession;
use octokit::time::{format_rfc3339, parse_rfc3339};
use octokit::{Credential, HttpTransport, NotificationFilter, Openness, Page, TokenConfiguration};

fn transport() -> HttpTransport {
    HttpTransport::with_session(
        TokenConfiguration::new(Some("12345")),
        Arc::new(MockSession::new()),
    )
}

/// Owner, repository and label names, including characters that must be escaped.
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _\\-\\.#?%&+:]{1,40}".prop_filter("dot segments are resolved away", |s| {
        s != "." && s != ".."
    })
}

proptest! {
    /// Encoding a segment and decoding it again gives back the input.
    #[test]
    fn test_segment_round_trip(raw in segment()) {
        let encoded = encode_segment(&raw);
        let decoded = urlencoding::decode(&encoded).expect("Encoded segment should decode");
        prop_assert_eq!(decoded.as_ref(), raw.as_str());
    }

    /// An encoded segment never introduces a path or query separator.
    #[test]
    fn test_segment_has_no_separators(raw in segment()) {
        let encoded = encode_segment(&raw);
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('#'));
    }

    /// References keep exactly their `/` separators.
    #[test]
    fn test_reference_keeps_slashes(parts in prop::collection::vec("[a-zA-Z0-9 _\\-\\.]{1,12}", 1..5)) {
        let reference = parts.join("/");
        let encoded = encode_reference(&reference);
        prop_assert_eq!(
            encoded.matches('/').count(),
            reference.matches('/').count()
        );
    }

    /// Every path segment lands in the request URL and decodes back intact.
    #[test]
    fn test_issue_route_url(owner in segment(), repo in segment(), page in 1u32..1000, per_page in 1u32..=100) {
        let route = IssueRouter::List {
            owner: &owner,
            repo: &repo,
            state: Openness::Open,
            page: Page::new(page, per_page),
        };
        let request = transport().build_request(&route).expect("Request should build");

        let segments: Vec<_> = request
            .url
            .path_segments()
            .expect("URL should have a path")
            .map(|s| urlencoding::decode(s).expect("Segment should decode").into_owned())
            .collect();
        prop_assert_eq!(segments, vec!["repos".to_string(), owner, repo, "issues".to_string()]);

        let query = request.query_pairs();
        prop_assert_eq!(
            query,
            vec![
                ("state".to_string(), "open".to_string()),
                ("page".to_string(), page.to_string()),
                ("per_page".to_string(), per_page.to_string()),
            ]
        );
    }

    /// `page` always precedes `per_page`, and `next` only moves the page.
    #[test]
    fn test_page_params(page in 1u32..u32::MAX, per_page in 1u32..=100) {
        let mut params = Vec::new();
        Page::new(page, per_page).extend(&mut params);
        prop_assert_eq!(
            params,
            vec![("page", page.to_string()), ("per_page", per_page.to_string())]
        );

        let next = Page::new(page, per_page).next();
        prop_assert_eq!(next.page, page + 1);
        prop_assert_eq!(next.per_page, per_page);
    }

    /// Tokens with a colon become Basic credentials split at the first colon.
    #[test]
    fn test_credential_split(user in "[a-zA-Z0-9\\-]{1,20}", password in "[a-zA-Z0-9:]{0,20}") {
        let token = format!("{user}:{password}");
        match Credential::from_token(&token) {
            Credential::Basic { username, password: parsed } => {
                prop_assert_eq!(username, user);
                prop_assert_eq!(parsed, password);
            }
            Credential::Bearer(_) => prop_assert!(false, "expected basic credential"),
        }
    }

    /// Tokens without a colon are sent as Bearer tokens unchanged.
    #[test]
    fn test_credential_bearer(token in "[a-zA-Z0-9_]{1,40}") {
        prop_assert!(matches!(Credential::from_token(&token), Credential::Bearer(ref t) if *t == token));
    }

    /// Formatting then parsing a second-precision timestamp is lossless.
    #[test]
    fn test_rfc3339_round_trip(secs in 0i64..4_102_444_800) {
        let date = Utc.timestamp_opt(secs, 0).single().expect("Timestamp should be valid");
        let formatted = format_rfc3339(&date);

        prop_assert!(formatted.ends_with('Z'));
        prop_assert_eq!(formatted.len(), "2014-11-01T00:00:00Z".len());
        prop_assert_eq!(parse_rfc3339(&formatted), Some(date));
    }

    /// `all` and `participating` are always sent; dates only when set.
    #[test]
    fn test_notification_filter_params(
        all in any::<bool>(),
        participating in any::<bool>(),
        since in prop::option::of(0i64..4_102_444_800),
        before in prop::option::of(0i64..4_102_444_800),
    ) {
        let mut filter = NotificationFilter::new().all(all).participating(participating);
        if let Some(secs) = since {
            filter = filter.since(Utc.timestamp_opt(secs, 0).single().expect("valid"));
        }
        if let Some(secs) = before {
            filter = filter.before(Utc.timestamp_opt(secs, 0).single().expect("valid"));
        }

        let request = transport()
            .build_request(&NotificationRouter::List(&filter, Page::default()))
            .expect("Request should build");
        let query = request.query_pairs();

        let expected = 4 + usize::from(since.is_some()) + usize::from(before.is_some());
        prop_assert_eq!(query.len(), expected);
        prop_assert_eq!(&query[0], &("all".to_string(), all.to_string()));
        prop_assert_eq!(&query[1], &("participating".to_string(), participating.to_string()));
        prop_assert!(request.body.is_none());
    }
}
