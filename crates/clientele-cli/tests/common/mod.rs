use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::MockServer;

/// Collection endpoint of a mock backend.
pub fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}/client", server.address().port())
}

/// Run the CLI binary against `api_url`.
pub fn run_cli(args: &[&str], api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clientele"));
    cmd.args(args);
    cmd.env("CLIENTELE_API_URL", api_url);
    cmd.env("CLIENTELE_TIMEOUT", "5");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], api_url: &str) -> String {
    let output = run_cli(args, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure.
pub fn run_cli_failure(args: &[&str], api_url: &str) -> String {
    let output = run_cli(args, api_url);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// A record as the backend returns it.
pub fn record_json(id: i64, first_name: &str, enabled: bool) -> Value {
    json!({
        "id": id,
        "nombre": first_name,
        "apellidos": "Quispe",
        "direccion": "Av. Sol 123",
        "numero_documento": 40000000 + id,
        "email": format!("client{id}@example.pe"),
        "edad": 30,
        "telefono": 987654321,
        "fecha_nacimiento": "1990-06-15",
        "pais": "Peru",
        "habilitado": enabled
    })
}

/// A listing page holding records `ids`.
pub fn list_body(ids: std::ops::Range<i64>, total: u64) -> Value {
    let data: Vec<Value> = ids.map(|id| record_json(id, "Ana", true)).collect();
    json!({
        "data": data,
        "meta": { "recordsTotal": total, "recordsFiltered": total }
    })
}
