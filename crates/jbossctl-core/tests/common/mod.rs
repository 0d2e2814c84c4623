// Scripted transport shared by the core integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use jbossctl_api::{Error, RawResponse, Transport};
use jbossctl_core::Controller;

enum Reply {
    Http(RawResponse),
    Unreachable,
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    calls: Vec<Value>,
}

/// Replays canned replies in order and records every request body.
///
/// Clones share the same script, so a test can keep a handle after moving
/// one into a `Controller`.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    fn push(&self, reply: Reply) -> &Self {
        self.script.lock().unwrap().replies.push_back(reply);
        self
    }

    fn http(&self, status: u16, body: String) -> &Self {
        self.push(Reply::Http(RawResponse { status, body }))
    }

    /// `{"outcome": "success", "result": result}`
    pub fn success(&self, result: Value) -> &Self {
        self.http(200, json!({ "outcome": "success", "result": result }).to_string())
    }

    /// `{"outcome": "failed", "failure-description": description}`
    pub fn failure(&self, description: &str) -> &Self {
        self.http(
            500,
            json!({ "outcome": "failed", "failure-description": description }).to_string(),
        )
    }

    /// HTTP error without a body.
    pub fn empty_error(&self, status: u16) -> &Self {
        self.http(status, String::new())
    }

    pub fn unreachable(&self) -> &Self {
        self.push(Reply::Unreachable)
    }

    /// Every request body sent so far, decoded.
    pub fn calls(&self) -> Vec<Value> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().calls.len()
    }

    /// Requests sent after the first `skip`.
    pub fn calls_after(&self, skip: usize) -> Vec<Value> {
        self.calls().into_iter().skip(skip).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn post(&self, body: String) -> Result<RawResponse, Error> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(serde_json::from_str(&body).unwrap());
        match script.replies.pop_front() {
            Some(Reply::Http(response)) => Ok(response),
            Some(Reply::Unreachable) => Err(Error::server("Error requesting: connection refused")),
            None => panic!("unscripted request: {body}"),
        }
    }
}

// ── Canned topologies ───────────────────────────────────────────────

/// Requests issued by standalone discovery.
pub const STANDALONE_DISCOVERY_CALLS: usize = 2;

/// Requests issued by `domain_transport` discovery.
pub const DOMAIN_DISCOVERY_CALLS: usize = 6;

pub fn root_resource(name: &str, launch_type: &str) -> Value {
    json!({
        "name": name,
        "product-name": "JBoss EAP",
        "product-version": "7.4.0.GA",
        "release-codename": "",
        "release-version": "15.0.0.Final-redhat-00001",
        "launch-type": launch_type,
        "local-host-name": if launch_type == "DOMAIN" { json!("master") } else { Value::Null },
        "system-property": {
            "env": { "value": "prod", "boot-time": true },
            "region": { "value": "eu" }
        }
    })
}

pub fn standalone_transport(name: &str) -> ScriptedTransport {
    let transport = ScriptedTransport::default();
    transport
        .success(root_resource(name, "STANDALONE"))
        .success(json!("STANDALONE"));
    transport
}

/// One master host and one host controller (`slave`) with two servers.
pub fn domain_transport() -> ScriptedTransport {
    let transport = ScriptedTransport::default();
    transport
        .success(root_resource("Unnamed Domain", "DOMAIN"))
        .success(json!("DOMAIN"))
        .success(json!(["master", "slave"]))
        .success(json!({ "name": "master", "master": true, "host-state": "running" }))
        .success(json!({ "name": "slave", "master": false, "host-state": "running" }))
        .success(json!({
            "server-one": { "name": "server-one", "group": "main-server-group", "status": "STARTED" },
            "server-two": { "name": "server-two", "group": "other-server-group", "status": "STOPPED" }
        }));
    transport
}

pub async fn standalone(name: &str) -> (ScriptedTransport, Controller<ScriptedTransport>) {
    let transport = standalone_transport(name);
    let controller = Controller::with_transport(transport.clone()).await.unwrap();
    (transport, controller)
}

pub async fn domain() -> (ScriptedTransport, Controller<ScriptedTransport>) {
    let transport = domain_transport();
    let controller = Controller::with_transport(transport.clone()).await.unwrap();
    (transport, controller)
}
