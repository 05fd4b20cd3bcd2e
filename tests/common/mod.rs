//! Shared fixtures for integration tests.
//!
//! Fixtures serve two boards from a [`MockHttpClient`]:
//!
//! ```text
//! /b/    12345 (3 posts), 67890 (1 post)
//! /pr/   no threads
//! ```

#![allow(dead_code)]

use serde_json::json;

use chanview::adapters::MockHttpClient;
use chanview::api::ChanApi;
use chanview::app::{App, NavCommand, NavConfig, NavEvent};
use chanview::runner;

pub const BASE_URL: &str = "http://chan.test";

/// API backed by a mock client with the fixture data installed.
pub fn fixture_api() -> (ChanApi<MockHttpClient>, MockHttpClient) {
    let client = MockHttpClient::new();
    let api = ChanApi::with_base_url(client.clone(), BASE_URL);

    client.set_json(
        &api.boards_url(),
        json!({
            "Разное": [{"id": "b", "category": "Разное", "name": "Бред"}],
            "Тематика": [{"id": "pr", "category": "Тематика", "name": "Программирование"}]
        }),
    );
    client.set_json(
        &api.threads_url("b"),
        json!({"threads": [
            {"num": 12345, "subject": "first", "comment": "hello<br>world"},
            {"num": "67890", "subject": "second", "comment": "bye"}
        ]}),
    );
    client.set_json(&api.threads_url("pr"), json!({"threads": []}));
    client.set_json(
        &api.posts_url("b", 12345),
        json!({"threads": [{"posts": [
            {"num": 12345, "comment": "op", "date": "01/01/24 Пнд 12:00:00",
             "files": [{"name": "1.png", "fullname": "cat.png", "path": "/b/src/12345/1.png"}]},
            {"num": 12346, "comment": "&gt;&gt;12345<br>reply", "date": "01/01/24 Пнд 12:01:00"},
            {"num": 12347, "comment": "third", "date": "01/01/24 Пнд 12:02:00"}
        ]}]}),
    );
    client.set_json(
        &api.posts_url("b", 67890),
        json!({"threads": [{"posts": [
            {"num": 67890, "comment": "only", "date": "02/01/24"}
        ]}]}),
    );

    (api, client)
}

/// App with the startup fetch already completed against `api`.
pub async fn started_app(api: &ChanApi<MockHttpClient>, config: NavConfig) -> App {
    let mut app = App::new(config);
    app.handle(NavEvent::Resize { width: 78, rows: 10 });
    let command = app.start();
    assert_eq!(command, NavCommand::FetchBoards);
    runner::execute(&mut app, api, &command).await;
    app
}
