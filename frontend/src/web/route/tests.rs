use super::*;

#[test]
fn parses_known_paths() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/explore"), AppRoute::Explore(None));
    assert_eq!(AppRoute::from_path("/maps"), AppRoute::Maps);
    assert_eq!(AppRoute::from_path("/detail/42"), AppRoute::Detail(42));
    assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
    assert_eq!(AppRoute::from_path("/settings"), AppRoute::Settings);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
}

#[test]
fn trailing_slashes_are_ignored() {
    assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/explore/"), AppRoute::Explore(None));
}

#[test]
fn unknown_paths_fall_back_to_home() {
    assert_eq!(AppRoute::from_path("/does-not-exist"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/detail"), AppRoute::Home);
}

#[test]
fn malformed_detail_ids_fall_back_to_home() {
    assert_eq!(AppRoute::from_path("/detail/abc"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/detail/-3"), AppRoute::Home);
}

#[test]
fn explore_reads_the_category_query() {
    assert_eq!(
        AppRoute::from_path("/explore?category=alam"),
        AppRoute::Explore(Some("alam".to_string()))
    );
    assert_eq!(
        AppRoute::from_path("/explore?foo=1&category=budaya"),
        AppRoute::Explore(Some("budaya".to_string()))
    );
}

#[test]
fn explore_ignores_an_empty_category() {
    assert_eq!(
        AppRoute::from_path("/explore?category="),
        AppRoute::Explore(None)
    );
}

#[test]
fn to_path_round_trips() {
    let routes = [
        AppRoute::Home,
        AppRoute::Explore(None),
        AppRoute::Explore(Some("alam".to_string())),
        AppRoute::Maps,
        AppRoute::Detail(7),
        AppRoute::Profile,
        AppRoute::Settings,
        AppRoute::Login,
        AppRoute::Register,
    ];
    for route in routes {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

#[test]
fn guests_are_redirected_to_login_from_protected_routes() {
    let protected = [
        AppRoute::Home,
        AppRoute::Explore(None),
        AppRoute::Maps,
        AppRoute::Detail(1),
        AppRoute::Profile,
        AppRoute::Settings,
    ];
    for route in protected {
        assert_eq!(
            check_access(&route, false),
            Access::Redirect(AppRoute::Login),
            "route: {route}"
        );
    }
}

#[test]
fn guests_may_visit_the_auth_screens() {
    assert_eq!(check_access(&AppRoute::Login, false), Access::Granted);
    assert_eq!(check_access(&AppRoute::Register, false), Access::Granted);
}

#[test]
fn authenticated_users_are_sent_home_from_the_auth_screens() {
    assert_eq!(
        check_access(&AppRoute::Login, true),
        Access::Redirect(AppRoute::Home)
    );
    assert_eq!(
        check_access(&AppRoute::Register, true),
        Access::Redirect(AppRoute::Home)
    );
}

#[test]
fn authenticated_users_pass_protected_routes() {
    assert_eq!(check_access(&AppRoute::Detail(9), true), Access::Granted);
    assert_eq!(check_access(&AppRoute::Settings, true), Access::Granted);
}
