//! Shared harness running the full REST stack over a seeded registry.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use academic_backend::Trace;
use academic_backend::domain::AcademicRecordsService;
use academic_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use academic_backend::inbound::http::api_scope;
use academic_backend::inbound::http::state::HttpState;
use academic_registry::AcademicRegistry;
use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use awc::Client;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct HttpWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
}

pub(crate) type SharedWorld = Rc<RefCell<HttpWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        // `LocalSet` must be driven on the thread that owns it; the future
        // must not borrow the world.
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

async fn spawn_seeded_server() -> Result<(String, ServerHandle), String> {
    let service = Arc::new(AcademicRecordsService::new(Arc::new(
        AcademicRegistry::default(),
    )));
    let settings = ExampleDataSettings {
        enabled: true,
        fixture_path: None,
    };
    seed_example_data_on_startup(&settings, service.as_ref())
        .await
        .map_err(|err| err.to_string())?;

    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(HttpState::from_service(&service));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .wrap(Trace)
            .service(api_scope())
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn seeded_world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let (base_url, server) = local
        .block_on(&runtime, spawn_seeded_server())
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(HttpWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_body: None,
        })),
    }
}

/// Send a request and return the status with the JSON body (`Null` when empty).
pub(crate) fn send(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) -> (u16, Value) {
    with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Some(payload) => request.send_json(&payload).await.expect("json request"),
            None => request.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let body = response.body().await.expect("body");
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("json body")
        };
        (status, json)
    })
}

/// Send a request and remember its outcome for later assertions.
pub(crate) fn perform(world: &SharedWorld, method: Method, path: &str, payload: Option<Value>) {
    let (status, body) = send(world, method, path, payload);
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_body = Some(body);
}

fn find_id(world: &SharedWorld, path: &str, key: &str, value: &str) -> String {
    let (_, body) = send(world, Method::GET, path, None);
    body.as_array()
        .and_then(|items| items.iter().find(|item| item[key] == value))
        .and_then(|item| item["id"].as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| panic!("no entry with {key} = {value} at {path}"))
}

pub(crate) fn learner_id(world: &SharedWorld, registration_number: &str) -> String {
    find_id(world, "/api/v1/learners", "registrationNumber", registration_number)
}

pub(crate) fn course_id(world: &SharedWorld, code: &str) -> String {
    find_id(world, "/api/v1/courses", "code", code)
}
