//! End-to-end integration tests for the opview CLI

use std::process::Command;

use tempfile::tempdir;

const MODEL: &str = r#"
{
    "name": "Petstore",
    "operations": [
        {
            "id": "getPetById",
            "method": "GET",
            "path": "/pets/{id}",
            "path_params": [
                { "name": "id", "data_type": "Long", "required": true }
            ],
            "responses": [
                { "code": "200", "data_type": "Pet" }
            ]
        },
        {
            "id": "deletePet",
            "method": "DELETE",
            "path": "/pets/{id}",
            "path_params": [
                { "name": "id", "data_type": "Long", "required": true }
            ],
            "responses": [
                { "code": "204" }
            ]
        }
    ]
}
"#;

fn opview() -> Command {
    Command::new(env!("CARGO_BIN_EXE_opview"))
}

#[test]
fn synthesize_writes_enriched_model_to_stdout() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("petstore.model.json");
    std::fs::write(&model_path, MODEL).unwrap();

    let output = opview()
        .args(["synthesize", "--model-path"])
        .arg(&model_path)
        .output()
        .expect("failed to run opview");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"dispatch-constructor\": \"Get\""));
    assert!(stdout.contains("\"path-template\": \"/pets/${id}\""));
    // default target is the cask server rendition
    assert!(stdout.contains("\"return-type\": \"ServiceResponse[Pet]\""));
    assert!(stdout.contains("request : cask.Request"));
}

#[test]
fn synthesize_honors_exclude_filter_and_output_file() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("petstore.model.json");
    let out_path = dir.path().join("enriched.json");
    std::fs::write(&model_path, MODEL).unwrap();

    let output = opview()
        .args(["synthesize", "--target", "scala_client", "--exclude", "deletePet"])
        .arg("--model-path")
        .arg(&model_path)
        .arg("--output")
        .arg(&out_path)
        .output()
        .expect("failed to run opview");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let enriched = std::fs::read_to_string(&out_path).unwrap();
    assert!(enriched.contains("getPetById"));
    assert!(!enriched.contains("deletePet"));
    // client rendition: no envelope, no synthetic request parameter
    assert!(enriched.contains("\"return-type\": \"Pet\""));
    assert!(!enriched.contains("cask.Request"));
}

#[test]
fn synthesize_fails_on_unmatched_placeholder() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("broken.model.json");
    std::fs::write(
        &model_path,
        r#"{
            "name": "Broken",
            "operations": [
                { "id": "broken", "method": "get", "path": "/a/{x}/b/{y}",
                  "path_params": [ { "name": "x", "data_type": "String", "required": true } ] }
            ]
        }"#,
    )
    .unwrap();

    let output = opview()
        .args(["synthesize", "--model-path"])
        .arg(&model_path)
        .output()
        .expect("failed to run opview");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken"));
    assert!(stderr.contains("{y}"));
}
