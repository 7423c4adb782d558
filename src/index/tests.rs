//! Tests for derived indexes.

use super::*;
use crate::config::{ByteConfig, LintCommand, LlmConfig, LspConfig, ProviderName};
use crate::error::{ConfigError, ProviderIssue};
use std::path::Path;
use std::time::Duration;

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

fn matcher(list: &[&str]) -> IgnoreMatcher {
    let (matcher, rejected) = IgnoreMatcher::compile(&patterns(list));
    assert!(rejected.is_empty(), "unexpected rejections: {:?}", rejected);
    matcher
}

fn command(argv: &[&str], languages: &[&str]) -> LintCommand {
    LintCommand {
        command: argv.iter().map(|s| s.to_string()).collect(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
    }
}

fn argv(commands: &[&LintCommand]) -> Vec<String> {
    commands.iter().map(|c| c.display()).collect()
}

// ============================================================================
// Ignore matcher
// ============================================================================

#[test]
fn test_default_patterns() {
    let config = ByteConfig::default();
    let (matcher, rejected) = IgnoreMatcher::compile(&config.files.ignore);

    assert!(rejected.is_empty());
    assert!(matcher.is_ignored("node_modules/x.js"));
    assert!(matcher.is_ignored("web/node_modules/react/index.js"));
    assert!(matcher.is_ignored("src/__pycache__/mod.cpython-312.pyc"));
    assert!(matcher.is_ignored("a/b/c.pyc"));
    assert!(matcher.is_ignored(".byte/cache/session.json"));
    assert!(matcher.is_ignored(".env"));
    assert!(!matcher.is_ignored("src/main.py"));
    assert!(!matcher.is_ignored("build.rs"));
    assert!(!matcher.is_ignored(".envrc"));
    assert!(!matcher.is_ignored("docs/.byte/cache/x"));
}

#[test]
fn test_unanchored_pattern_matches_any_depth() {
    let matcher = matcher(&["*.log", "tmp"]);

    assert!(matcher.is_ignored("debug.log"));
    assert!(matcher.is_ignored("a/b/debug.log"));
    assert!(matcher.is_ignored("tmp"));
    assert!(matcher.is_ignored("deep/tmp/file.txt"));
    assert!(!matcher.is_ignored("tmpfile"));
}

#[test]
fn test_leading_slash_anchors() {
    let matcher = matcher(&["/target"]);

    assert!(matcher.is_ignored("target/debug/app"));
    assert!(!matcher.is_ignored("crates/core/target/debug/app"));
}

#[test]
fn test_inner_slash_anchors() {
    let matcher = matcher(&["docs/*.md"]);

    assert!(matcher.is_ignored("docs/intro.md"));
    assert!(!matcher.is_ignored("docs/guide/intro.md"));
    assert!(!matcher.is_ignored("site/docs/intro.md"));
}

#[test]
fn test_trailing_slash_matches_directories_only() {
    let matcher = matcher(&["logs/"]);

    assert!(!matcher.is_ignored("logs"));
    assert!(matcher.is_ignored("logs/today.txt"));
    assert!(matcher.is_ignored_dir("logs"));
    assert!(matcher.is_ignored_dir("app/logs"));
}

#[test]
fn test_ignored_dir_checks_ancestors() {
    let matcher = matcher(&["node_modules"]);

    assert!(matcher.is_ignored_dir("node_modules/react"));
    assert!(!matcher.is_ignored_dir("src/components"));
}

#[test]
fn test_paths_are_normalized() {
    let matcher = matcher(&["node_modules"]);

    assert!(matcher.is_ignored("./node_modules/x.js"));
    assert!(matcher.is_ignored("/node_modules/x.js"));
    assert!(matcher.is_ignored("node_modules\\x.js"));
    assert!(!matcher.is_ignored(""));
}

#[test]
fn test_blank_and_comment_patterns_skipped() {
    let matcher = matcher(&["", "   ", "# generated", "*.log"]);
    assert_eq!(matcher.len(), 1);
}

#[test]
fn test_backslash_escapes_are_literal() {
    let matcher = matcher(&[r"\#notes", r"foo\[1\]", r"\!important.txt"]);
    assert_eq!(matcher.len(), 3);

    assert!(matcher.is_ignored("#notes"));
    assert!(matcher.is_ignored("drafts/#notes"));
    assert!(matcher.is_ignored("foo[1]"));
    assert!(!matcher.is_ignored("foo1"));
    assert!(matcher.is_ignored("!important.txt"));
    assert!(!matcher.is_ignored("important.txt"));
}

#[test]
fn test_invalid_patterns_rejected_individually() {
    let (matcher, rejected) = IgnoreMatcher::compile(&patterns(&["*.log", "!keep.log", "src/[", "tmp"]));

    let indexes: Vec<usize> = rejected
        .iter()
        .map(|v| match v {
            crate::validate::Violation::MalformedArrayElement { path, index, .. } => {
                assert_eq!(path, "files.ignore");
                *index
            }
            other => panic!("unexpected violation: {:?}", other),
        })
        .collect();
    assert_eq!(indexes, vec![1, 2]);
    assert!(rejected[0].to_string().starts_with("files.ignore[1]:"));

    assert!(matcher.is_ignored("tmp/x"));
    assert!(matcher.is_ignored("a.log"));
    assert!(!matcher.is_ignored("src/main.rs"));
}

#[test]
fn test_matching_pattern() {
    let matcher = matcher(&["*.pyc", "node_modules"]);

    assert_eq!(matcher.matching_pattern("node_modules/a/b.js"), Some("node_modules"));
    assert_eq!(matcher.matching_pattern("pkg/mod.pyc"), Some("*.pyc"));
    assert_eq!(matcher.matching_pattern("pkg/mod.py"), None);
}

#[test]
fn test_empty_matcher_ignores_nothing() {
    let matcher = IgnoreMatcher::default();

    assert!(matcher.is_empty());
    assert!(!matcher.is_ignored("anything/at/all"));
}

// ============================================================================
// Lint dispatch
// ============================================================================

fn sample_dispatch() -> LintDispatch {
    LintDispatch::build(&[
        command(&["ruff", "check"], &["python"]),
        command(&["prettier", "--write"], &["typescript", "javascript"]),
        command(&["codespell"], &[]),
    ])
}

#[test]
fn test_specific_commands_then_wildcards() {
    let dispatch = sample_dispatch();

    assert_eq!(
        argv(&dispatch.for_language("python")),
        vec!["ruff check", "codespell"]
    );
    assert_eq!(argv(&dispatch.for_language("go")), vec!["codespell"]);
    assert_eq!(
        argv(&dispatch.for_language("javascript")),
        vec!["prettier --write", "codespell"]
    );
}

#[test]
fn test_language_lookup_is_case_insensitive() {
    let dispatch = sample_dispatch();

    assert_eq!(dispatch.for_language("Python"), dispatch.for_language("python"));
    assert_eq!(dispatch.for_language(" TypeScript "), dispatch.for_language("typescript"));
}

#[test]
fn test_declaration_order_preserved_across_wildcards() {
    let dispatch = LintDispatch::build(&[
        command(&["black"], &["python"]),
        command(&["codespell"], &[]),
        command(&["mypy"], &["Python", "python"]),
    ]);

    assert_eq!(
        argv(&dispatch.for_language("python")),
        vec!["black", "mypy", "codespell"]
    );
}

#[test]
fn test_for_path_uses_language_and_extension() {
    let dispatch = LintDispatch::build(&[
        command(&["ruff", "check"], &["python"]),
        command(&["pyupgrade"], &[".py"]),
        command(&["gofmt", "-l"], &["go"]),
    ]);

    assert_eq!(
        argv(&dispatch.for_path(Path::new("src/app.py"))),
        vec!["ruff check", "pyupgrade"]
    );
    assert_eq!(argv(&dispatch.for_path(Path::new("main.go"))), vec!["gofmt -l"]);
    assert!(dispatch.for_path(Path::new("README")).is_empty());
}

#[test]
fn test_plan_appends_file() {
    let dispatch = sample_dispatch();
    let plan = dispatch.plan(&["a.py", "b.go"]);

    let rendered: Vec<(String, Vec<String>)> = plan
        .into_iter()
        .map(|inv| (inv.file.display().to_string(), inv.argv))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("a.py".to_string(), vec!["ruff".into(), "check".into(), "a.py".into()]),
            ("a.py".to_string(), vec!["codespell".into(), "a.py".into()]),
            ("b.go".to_string(), vec!["codespell".into(), "b.go".into()]),
        ]
    );
}

#[test]
fn test_languages_listed() {
    let dispatch = sample_dispatch();
    let languages: Vec<&str> = dispatch.languages().collect();
    assert_eq!(languages, vec!["javascript", "python", "typescript"]);
}

#[test]
fn test_empty_dispatch() {
    let dispatch = LintDispatch::default();

    assert!(dispatch.is_empty());
    assert!(dispatch.for_language("python").is_empty());
    assert!(dispatch.plan(&["a.py"]).is_empty());
}

// ============================================================================
// Language detection
// ============================================================================

#[test]
fn test_language_for_path() {
    assert_eq!(language_for_path(Path::new("src/lib.rs")), Some("rust"));
    assert_eq!(language_for_path(Path::new("App.TSX")), Some("typescript"));
    assert_eq!(language_for_path(Path::new("docker/Dockerfile")), Some("dockerfile"));
    assert_eq!(language_for_path(Path::new("Makefile")), Some("makefile"));
    assert_eq!(language_for_path(Path::new("schema.proto")), None);
    assert_eq!(language_for_path(Path::new("LICENSE")), None);
}

#[test]
fn test_extension_of() {
    assert_eq!(extension_of(Path::new("a/b.PY")).as_deref(), Some("py"));
    assert_eq!(extension_of(Path::new("noext")), None);
}

// ============================================================================
// LSP index
// ============================================================================

fn sample_lsp() -> LspIndex {
    let yaml = r#"
enable: true
timeout: 12
servers:
  pyright:
    command: [pyright-langserver, --stdio]
    languages: [Python]
  tsserver:
    command: typescript-language-server --stdio
    languages: [typescript, javascript]
  buf:
    command: [buf, lsp]
    languages: [proto]
"#;
    let config: LspConfig = serde_yaml::from_str(yaml).unwrap();
    LspIndex::build(&config)
}

#[test]
fn test_lsp_uniform_timeout() {
    let index = sample_lsp();

    assert!(index.is_enabled());
    assert_eq!(index.timeout(), Duration::from_secs(12));
    assert_eq!(LspIndex::default().timeout(), Duration::from_secs(30));
}

#[test]
fn test_lsp_server_for_language() {
    let index = sample_lsp();

    let server = index.server_for_language("PYTHON").unwrap();
    assert_eq!(server.name, "pyright");
    assert_eq!(server.command, vec!["pyright-langserver", "--stdio"]);
    assert_eq!(index.server_for_language("javascript").unwrap().name, "tsserver");
    assert!(index.server_for_language("rust").is_none());
}

#[test]
fn test_lsp_server_for_path() {
    let index = sample_lsp();

    assert_eq!(index.server_for_path(Path::new("web/app.tsx")).unwrap().name, "tsserver");
    assert_eq!(index.server_for_path(Path::new("api/v1.proto")).unwrap().name, "buf");
    assert!(index.server_for_path(Path::new("main.rs")).is_none());
}

#[test]
fn test_lsp_string_command_split() {
    let index = sample_lsp();
    let server = index.server("tsserver").unwrap();

    assert_eq!(server.command, vec!["typescript-language-server", "--stdio"]);
    assert!(server.settings.get("languages").is_some());
    assert_eq!(index.servers().count(), 3);
}

#[test]
fn test_lsp_servers_keep_declaration_order() {
    let index = sample_lsp();
    let names: Vec<&str> = index.servers().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["pyright", "tsserver", "buf"]);
}

#[test]
fn test_lsp_language_collision_last_declared_wins() {
    let yaml = r#"
servers:
  zeta:
    command: [zeta-ls]
    languages: [python]
  alpha:
    command: [alpha-ls]
    languages: [Python, cython]
"#;
    let config: LspConfig = serde_yaml::from_str(yaml).unwrap();
    let index = LspIndex::build(&config);

    assert_eq!(index.server_for_language("python").unwrap().name, "alpha");
    assert_eq!(index.server_for_language("cython").unwrap().name, "alpha");
    assert_eq!(index.server_for_path(Path::new("app/main.py")).unwrap().name, "alpha");
    assert_eq!(index.server("zeta").unwrap().command, vec!["zeta-ls"]);
}

// ============================================================================
// Provider resolution
// ============================================================================

#[test]
fn test_provider_disabled() {
    let err = resolve_provider(&LlmConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::ProviderNotEnabled {
            provider: ProviderName::Anthropic,
            issue: ProviderIssue::Disabled,
        }
    ));
}

#[test]
fn test_provider_missing_or_blank_key() {
    let mut llm = LlmConfig::default();
    llm.anthropic.enable = true;
    let err = resolve_provider(&llm).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ProviderNotEnabled {
            issue: ProviderIssue::MissingApiKey,
            ..
        }
    ));

    llm.anthropic.api_key = Some("   ".to_string());
    assert!(resolve_provider(&llm).is_err());
}

#[test]
fn test_provider_resolved() {
    let mut llm = LlmConfig::default();
    llm.model = ProviderName::Openai;
    llm.openai.enable = true;
    llm.openai.api_key = Some("sk-test".to_string());
    llm.openai
        .model_params
        .insert("temperature".to_string(), serde_yaml::Value::from(0.1));

    let active = resolve_provider(&llm).unwrap();

    assert_eq!(active.name, ProviderName::Openai);
    assert_eq!(active.api_key, "sk-test");
    assert_eq!(active.model_params.len(), 1);
    assert!(!format!("{:?}", active).contains("sk-test"));
}

#[test]
fn test_derived_index_reports_rejected_patterns() {
    let mut config = ByteConfig::default();
    config.files.ignore = patterns(&["dist", "!dist/keep"]);

    let (index, rejected) = DerivedIndex::build(&config);

    assert_eq!(rejected.len(), 1);
    assert!(index.ignore.is_ignored("dist/app.js"));
    assert!(index.lint.is_empty());
}
