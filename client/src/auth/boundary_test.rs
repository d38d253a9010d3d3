use super::*;

#[test]
fn pending_check_waits() {
    assert_eq!(boundary_action(None, "/auth/signin"), BoundaryAction::Wait);
}

#[test]
fn valid_session_renders_children() {
    assert_eq!(boundary_action(Some(&Ok(SessionStatus::Valid)), "/auth/signin"), BoundaryAction::Render);
}

#[test]
fn absent_session_redirects_to_sign_in() {
    assert_eq!(
        boundary_action(Some(&Ok(SessionStatus::Absent)), "/auth/signin"),
        BoundaryAction::Redirect("/auth/signin".to_owned())
    );
}

#[test]
fn failed_check_redirects_like_absent_session() {
    let check = Err(AuthError::Network("offline".to_owned()));
    assert_eq!(boundary_action(Some(&check), "/auth/signin"), BoundaryAction::Redirect("/auth/signin".to_owned()));
}

#[test]
fn redirect_uses_client_sign_in_path() {
    assert_eq!(
        boundary_action(Some(&Ok(SessionStatus::Absent)), "/login"),
        BoundaryAction::Redirect("/login".to_owned())
    );
}
