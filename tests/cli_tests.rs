mod common;

use common::{run_ytnotes, TestEnv};

#[test]
fn ytnotes_help_shows_usage() {
    let output = run_ytnotes(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("summarize"));
    assert!(stdout.contains("serve"));
}

#[test]
fn ytnotes_version_shows_version() {
    let output = run_ytnotes(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("ytnotes "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_ytnotes(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("ytnotes"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_lists_defaults() {
    let output = run_ytnotes(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[transcript]"));
    assert!(stdout.contains(r#"languages = ["#));
    assert!(stdout.contains("gemini-2.5-flash"));
    assert!(stdout.contains("port = 8501"));
}

#[test]
fn config_show_redacts_api_key() {
    let env = TestEnv::new().with_api_key("super-secret-key");
    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("<redacted>"));
    assert!(!stdout.contains("super-secret-key"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_ytnotes(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(
        first.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn configured_languages_are_used() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[transcript]
languages = ["de", "en"]
"#,
    );

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains(r#""de""#));
    assert!(!stdout.contains(r#""hi""#));
}

#[test]
fn empty_language_list_is_a_config_error() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[transcript]
languages = []
"#,
    );

    let output = env.run(&["doctor"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("transcript.languages"));
}

#[test]
fn resolve_prints_id_and_thumbnail() {
    let output = run_ytnotes(&["resolve", "https://youtu.be/dQw4w9WgXcQ?t=42"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        ["dQw4w9WgXcQ", "https://i.ytimg.com/vi/dQw4w9WgXcQ/0.jpg"]
    );
}

#[test]
fn resolve_rejects_non_video_links() {
    let output = run_ytnotes(&["resolve", "https://example.com/watch?v=dQw4w9WgXcQ"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Invalid YouTube URL"),
        "expected invalid url error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_requires_api_key() {
    let output = run_ytnotes(&["summarize", "https://youtu.be/dQw4w9WgXcQ"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Gemini API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_rejects_invalid_link_before_network() {
    let env = TestEnv::new().with_api_key("test-key");
    let output = env.run(&["summarize", "not a video link"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Invalid YouTube URL"),
        "expected invalid url error, got:\n{}",
        stderr
    );
}

#[test]
fn transcript_rejects_invalid_link() {
    let output = run_ytnotes(&["transcript", "https://vimeo.com/123"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid YouTube URL"));
}
