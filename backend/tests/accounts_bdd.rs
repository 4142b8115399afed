//! Behaviour tests for sign-up, login and logout.
//!
//! These scenarios confirm that sign-up validates its fields, that login
//! honours only local `next` targets and that logout forgets the reader.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

// Each suite uses a different subset of the request helpers.
#[allow(dead_code)]
#[path = "support/pages.rs"]
mod pages;

use actix_web::test::{self};
use chrono::NaiveDate;
use news_backend::inbound::http::forms::{INVALID_LOGIN, PASSWORD_MISMATCH, USERNAME_TAKEN};
use news_backend::inbound::http::test_utils::TEST_SESSION_COOKIE;
use news_backend::test_support::{TestWorld, test_app};
use pages::{Page, Visitor, get, login, post, run_async};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;

const NEW_READER: &str = "новичок";
const NEW_PASSWORD: &str = "s3cret";

const SIGN_UP_FORM: [(&str, &str); 3] = [
    ("username", NEW_READER),
    ("password1", NEW_PASSWORD),
    ("password2", NEW_PASSWORD),
];

#[fixture]
fn world() -> TestWorld {
    TestWorld::new()
}

fn form_errors(page: &Page) -> serde_json::Value {
    assert_eq!(page.status, 200);
    page.json()["form"]["errors"].clone()
}

fn assert_login_is_next(page: &Page) {
    assert_eq!(page.status, 302);
    assert_eq!(page.location.as_deref(), Some("/auth/login/"));
}

/// A visitor working through the account pages.
struct AccountVisit {
    visitor: Visitor,
    form: Vec<(&'static str, &'static str)>,
}

#[fixture]
fn account() -> AccountVisit {
    AccountVisit {
        visitor: Visitor::new(TestWorld::new()),
        form: Vec::new(),
    }
}

#[given("a sign-up form for a new reader")]
fn a_sign_up_form_for_a_new_reader(account: &mut AccountVisit) {
    account.form = SIGN_UP_FORM.to_vec();
}

#[given("the username is already taken")]
fn the_username_is_already_taken(account: &mut AccountVisit) {
    run_async(account.visitor.site.register(NEW_READER, "other"));
}

#[given("a registered reader")]
fn a_registered_reader(account: &mut AccountVisit) {
    run_async(account.visitor.site.register("reader", "pw"));
}

#[when("the visitor submits the sign-up form")]
fn the_visitor_submits_the_sign_up_form(account: &mut AccountVisit) {
    let form = account.form.clone();
    account.visitor.post("/auth/signup/", &form);
}

#[when("the reader logs in with next pointing at another site")]
fn the_reader_logs_in_with_next_pointing_at_another_site(account: &mut AccountVisit) {
    account.visitor.post(
        "/auth/login/",
        &[
            ("username", "reader"),
            ("password", "pw"),
            ("next", "https://evil.example/"),
        ],
    );
}

#[then("the login page is next")]
fn the_login_page_is_next(account: &mut AccountVisit) {
    assert_login_is_next(account.visitor.page());
}

#[then("the new reader can log in")]
fn the_new_reader_can_log_in(account: &mut AccountVisit) {
    account.visitor.sign_in_as(NEW_READER, NEW_PASSWORD);
    account.visitor.get("/");
    assert_eq!(account.visitor.page().status, 200);
}

#[then("the sign-up page names the taken username")]
fn the_sign_up_page_names_the_taken_username(account: &mut AccountVisit) {
    let page = account.visitor.page();
    assert_eq!(form_errors(page), json!({"username": [USERNAME_TAKEN]}));
    assert_eq!(page.json()["form"]["initial"]["username"], NEW_READER);
}

#[then("the reader lands on the home page")]
fn the_reader_lands_on_the_home_page(account: &mut AccountVisit) {
    let page = account.visitor.page();
    assert_eq!(page.status, 302);
    assert_eq!(page.location.as_deref(), Some("/"));
}

#[rstest]
#[actix_web::test]
async fn new_readers_can_sign_up_and_log_in(world: TestWorld) {
    let app = test::init_service(test_app(world.http_state())).await;

    let page = post(&app, "/auth/signup/", &SIGN_UP_FORM, None).await;

    assert_login_is_next(&page);
    let cookie = login(&app, NEW_READER, NEW_PASSWORD).await;
    assert!(!cookie.value().is_empty());
}

#[rstest]
#[actix_web::test]
async fn taken_usernames_are_rejected(world: TestWorld) {
    world.register(NEW_READER, "other").await;
    let app = test::init_service(test_app(world.http_state())).await;

    let page = post(&app, "/auth/signup/", &SIGN_UP_FORM, None).await;

    assert_eq!(form_errors(&page), json!({"username": [USERNAME_TAKEN]}));
    assert_eq!(page.json()["form"]["initial"]["username"], NEW_READER);
}

#[rstest]
#[case(&[("username", "reader"), ("password1", "a"), ("password2", "b")], "password2")]
#[case(&[("username", "two words"), ("password1", "a"), ("password2", "a")], "username")]
#[case(&[("username", "reader"), ("password1", ""), ("password2", "")], "password1")]
#[actix_web::test]
async fn invalid_sign_ups_name_the_offending_field(
    world: TestWorld,
    #[case] form: &[(&str, &str)],
    #[case] field: &str,
) {
    let app = test::init_service(test_app(world.http_state())).await;

    let page = post(&app, "/auth/signup/", form, None).await;

    let errors = form_errors(&page);
    let fields: Vec<&String> = errors.as_object().expect("errors object").keys().collect();
    assert_eq!(fields, [field]);
    assert!(page.json()["form"]["initial"].get("password1").is_none());
}

#[rstest]
#[actix_web::test]
async fn mismatched_passwords_use_the_mismatch_message(world: TestWorld) {
    let app = test::init_service(test_app(world.http_state())).await;
    let form = [("username", "reader"), ("password1", "a"), ("password2", "b")];

    let page = post(&app, "/auth/signup/", &form, None).await;

    assert_eq!(
        form_errors(&page),
        json!({"password2": [PASSWORD_MISMATCH]})
    );
}

#[rstest]
#[case("wrong-password")]
#[case("")]
#[actix_web::test]
async fn bad_credentials_re_render_the_login_form(world: TestWorld, #[case] password: &str) {
    world.register("reader", "pw").await;
    let app = test::init_service(test_app(world.http_state())).await;

    let page = post(
        &app,
        "/auth/login/",
        &[("username", "reader"), ("password", password)],
        None,
    )
    .await;

    assert_eq!(page.status, 200);
    assert_eq!(page.json()["form"]["initial"]["username"], "reader");
    let form = &page.json()["form"];
    let has_errors = form["nonFieldErrors"] == json!([INVALID_LOGIN])
        || form["errors"].as_object().is_some_and(|errors| !errors.is_empty());
    assert!(has_errors, "unexpected form: {form}");
}

#[rstest]
#[case(Some("/news/3/"), "/news/3/")]
#[case(Some("https://evil.example/"), "/")]
#[case(Some("//evil.example/"), "/")]
#[case(None, "/")]
#[actix_web::test]
async fn login_redirects_only_to_local_next(
    world: TestWorld,
    #[case] next: Option<&str>,
    #[case] expected: &str,
) {
    world.register("reader", "pw").await;
    let app = test::init_service(test_app(world.http_state())).await;
    let mut form = vec![("username", "reader"), ("password", "pw")];
    if let Some(next) = next {
        form.push(("next", next));
    }

    let page = post(&app, "/auth/login/", &form, None).await;

    assert_eq!(page.status, 302);
    assert_eq!(page.location.as_deref(), Some(expected));
}

#[rstest]
#[actix_web::test]
async fn login_page_echoes_next(world: TestWorld) {
    let app = test::init_service(test_app(world.http_state())).await;

    let page = get(&app, "/auth/login/?next=/news/1/", None).await;

    assert_eq!(page.status, 200);
    assert_eq!(page.json()["next"], "/news/1/");
}

#[rstest]
#[actix_web::test]
async fn logout_forgets_the_reader(world: TestWorld) {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    let news = world.publish("Новость", date).await;
    world.register("reader", "pw").await;
    let app = test::init_service(test_app(world.http_state())).await;
    let cookie = login(&app, "reader", "pw").await;

    let req = test::TestRequest::post()
        .uri("/auth/logout/")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 200);
    let cleared = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == TEST_SESSION_COOKIE)
        .expect("session cookie is cleared")
        .into_owned();
    assert!(cleared.value().is_empty());

    let detail = get(&app, &format!("/news/{}/", news.id), Some(&cleared)).await;
    assert!(detail.json().get("form").is_none());
}

#[scenario(
    path = "tests/features/accounts.feature",
    name = "A new reader signs up"
)]
fn a_new_reader_signs_up(account: AccountVisit) {
    drop(account);
}

#[scenario(
    path = "tests/features/accounts.feature",
    name = "Taken usernames are refused"
)]
fn taken_usernames_are_refused(account: AccountVisit) {
    drop(account);
}

#[scenario(
    path = "tests/features/accounts.feature",
    name = "Login ignores an external next target"
)]
fn login_ignores_an_external_next_target(account: AccountVisit) {
    drop(account);
}
