use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn signup_endpoint_formats_expected_path() {
    assert_eq!(signup_endpoint("Chess", "a@x.com"), "/activities/Chess/signup?email=a%40x.com");
}

#[test]
fn unregister_endpoint_formats_expected_path() {
    assert_eq!(
        unregister_endpoint("Chess", "a@x.com"),
        "/activities/Chess/unregister?email=a%40x.com"
    );
}

#[test]
fn roster_endpoint_encodes_spaces_and_slashes_in_name() {
    assert_eq!(
        signup_endpoint("Art / Design Club", "b@x.com"),
        "/activities/Art%20%2F%20Design%20Club/signup?email=b%40x.com"
    );
}

#[test]
fn roster_endpoint_encodes_plus_in_email() {
    assert_eq!(
        signup_endpoint("Chess", "a+tag@x.com"),
        "/activities/Chess/signup?email=a%2Btag%40x.com"
    );
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn rejection_carries_string_detail() {
    let body = ErrorResponse { detail: Some(serde_json::json!("Already signed up")) };
    assert_eq!(
        rejection(400, Some(body)),
        ApiError::Rejected { status: 400, detail: Some("Already signed up".to_owned()) }
    );
}

#[test]
fn rejection_without_body_has_no_detail() {
    assert_eq!(rejection(500, None), ApiError::Rejected { status: 500, detail: None });
}

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::Rejected { status: 400, detail: Some("Already signed up".to_owned()) };
    assert_eq!(err.user_message("An error occurred", "Failed"), "Already signed up");
}

#[test]
fn user_message_falls_back_when_detail_missing() {
    let err = ApiError::Rejected { status: 404, detail: None };
    assert_eq!(err.user_message("An error occurred", "Failed"), "An error occurred");
}

#[test]
fn user_message_uses_transport_fallback_for_network_and_decode() {
    let fallback = "Failed to sign up. Please try again.";
    assert_eq!(ApiError::Transport("offline".into()).user_message("x", fallback), fallback);
    assert_eq!(ApiError::Decode("bad json".into()).user_message("x", fallback), fallback);
    assert_eq!(ApiError::Unavailable.user_message("x", fallback), fallback);
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Rejected { status: 401, detail: None };
    assert_eq!(err.to_string(), "request rejected: status 401");
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    assert_eq!(futures::executor::block_on(fetch_activities()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(signup("Chess", "a@x.com")), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(verify_teacher("Basic abc")), Err(ApiError::Unavailable));
}
