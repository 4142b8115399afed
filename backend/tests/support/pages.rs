//! Request helpers shared by the page behaviour suites.

use std::future::Future;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::test;
use news_backend::domain::TRACE_ID_HEADER;
use news_backend::inbound::http::test_utils::TEST_SESSION_COOKIE;
use news_backend::test_support::{TestWorld, test_app};
use serde_json::Value;

/// Initialised test application.
pub trait PageApp:
    Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

impl<S> PageApp for S where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

/// Response status, `Location` and trace headers, and the JSON body when
/// there is one.
#[derive(Debug)]
pub struct Page {
    pub status: u16,
    pub location: Option<String>,
    pub trace_id: Option<String>,
    pub body: Option<Value>,
}

impl Page {
    async fn read<B: MessageBody>(res: ServiceResponse<B>) -> Self {
        let status = res.status().as_u16();
        let location = header_value(&res, header::LOCATION.as_str());
        let trace_id = header_value(&res, TRACE_ID_HEADER);
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).ok();
        Self {
            status,
            location,
            trace_id,
            body,
        }
    }

    /// JSON body, panicking when the response had none.
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("JSON page context")
    }
}

fn header_value<B>(res: &ServiceResponse<B>, name: &str) -> Option<String> {
    res.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Sign in through the login form and return the session cookie.
pub async fn login(app: &impl PageApp, username: &str, password: &str) -> Cookie<'static> {
    let req = test::TestRequest::post()
        .uri("/auth/login/")
        .set_form([("username", username), ("password", password)])
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status().as_u16(), 302, "login should redirect");
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == TEST_SESSION_COOKIE)
        .expect("session cookie")
        .into_owned()
}

fn with_cookie(req: test::TestRequest, cookie: Option<&Cookie<'static>>) -> test::TestRequest {
    match cookie {
        Some(cookie) => req.cookie(cookie.clone()),
        None => req,
    }
}

pub async fn get(app: &impl PageApp, path: &str, cookie: Option<&Cookie<'static>>) -> Page {
    let req = with_cookie(test::TestRequest::get().uri(path), cookie).to_request();
    Page::read(test::call_service(app, req).await).await
}

/// Submit a form-encoded POST.
pub async fn post(
    app: &impl PageApp,
    path: &str,
    form: &[(&str, &str)],
    cookie: Option<&Cookie<'static>>,
) -> Page {
    let req = with_cookie(test::TestRequest::post().uri(path), cookie)
        .set_form(form)
        .to_request();
    Page::read(test::call_service(app, req).await).await
}

pub async fn delete(app: &impl PageApp, path: &str, cookie: Option<&Cookie<'static>>) -> Page {
    let req = with_cookie(test::TestRequest::delete().uri(path), cookie).to_request();
    Page::read(test::call_service(app, req).await).await
}

/// Drive `future` to completion from a synchronous scenario step.
pub fn run_async<T>(future: impl Future<Output = T>) -> T {
    tokio::runtime::Runtime::new()
        .expect("runtime")
        .block_on(future)
}

enum Request<'a> {
    Get,
    Post(&'a [(&'a str, &'a str)]),
    Delete,
}

/// Someone browsing a [`TestWorld`] from scenario steps.
///
/// Each request runs against a freshly built application whose session key
/// is new, so a signed-in visitor logs in again before every request.
pub struct Visitor {
    pub site: TestWorld,
    credentials: Option<(String, String)>,
    requested: Option<String>,
    page: Option<Page>,
}

impl Visitor {
    pub fn new(site: TestWorld) -> Self {
        Self {
            site,
            credentials: None,
            requested: None,
            page: None,
        }
    }

    pub fn sign_in_as(&mut self, username: &str, password: &str) {
        self.credentials = Some((username.to_owned(), password.to_owned()));
    }

    pub fn get(&mut self, path: &str) {
        self.send(path, Request::Get);
    }

    pub fn post(&mut self, path: &str, form: &[(&str, &str)]) {
        self.send(path, Request::Post(form));
    }

    pub fn delete(&mut self, path: &str) {
        self.send(path, Request::Delete);
    }

    /// Response to the latest request.
    pub fn page(&self) -> &Page {
        self.page.as_ref().expect("a page was requested")
    }

    /// Path of the latest request.
    pub fn requested(&self) -> &str {
        self.requested.as_deref().expect("a page was requested")
    }

    fn send(&mut self, path: &str, request: Request<'_>) {
        let state = self.site.http_state();
        let credentials = self.credentials.clone();
        let page = run_async(async move {
            let app = test::init_service(test_app(state)).await;
            let cookie = match credentials {
                Some((username, password)) => Some(login(&app, &username, &password).await),
                None => None,
            };
            match request {
                Request::Get => get(&app, path, cookie.as_ref()).await,
                Request::Post(form) => post(&app, path, form, cookie.as_ref()).await,
                Request::Delete => delete(&app, path, cookie.as_ref()).await,
            }
        });
        self.requested = Some(path.to_owned());
        self.page = Some(page);
    }
}
