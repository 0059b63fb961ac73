use cardinal_server_lib::data::models::user::UserRole;
use cardinal_server_lib::security::jwt::AccessClaims;
use cardinal_server_lib::services::payment_gateway::IntentStatus;

#[test]
fn provider_statuses_map_onto_coarse_set() {
    assert_eq!(IntentStatus::from_provider("succeeded"), IntentStatus::Succeeded);
    assert_eq!(IntentStatus::from_provider("processing"), IntentStatus::Processing);
    assert_eq!(IntentStatus::from_provider("canceled"), IntentStatus::Failed);
    assert_eq!(
        IntentStatus::from_provider("payment_failed"),
        IntentStatus::Failed
    );
}

#[test]
fn unknown_provider_statuses_require_client_action() {
    assert_eq!(
        IntentStatus::from_provider("requires_payment_method"),
        IntentStatus::RequiresAction
    );
    assert_eq!(
        IntentStatus::from_provider("requires_confirmation"),
        IntentStatus::RequiresAction
    );
    assert_eq!(IntentStatus::from_provider(""), IntentStatus::RequiresAction);
}

#[test]
fn claims_expose_role_and_identity() {
    let claims = AccessClaims {
        sub: 42,
        iat: 0,
        exp: 0,
        role: "Admin".to_string(),
    };

    assert_eq!(claims.user_id(), 42);
    assert_eq!(claims.role(), UserRole::Admin);
    assert!(claims.is_admin());
}

#[test]
fn unknown_role_strings_fall_back_to_user() {
    let claims = AccessClaims {
        sub: 7,
        iat: 0,
        exp: 0,
        role: "superuser".to_string(),
    };

    assert_eq!(claims.role(), UserRole::User);
    assert!(!claims.is_admin());
}

#[test]
fn role_parsing_is_case_insensitive() {
    assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
    assert_eq!("ADMIN".parse::<UserRole>(), Ok(UserRole::Admin));
    assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
    assert!("guest".parse::<UserRole>().is_err());
}
