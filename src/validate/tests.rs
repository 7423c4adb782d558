//! Tests for schema validation and default merging.

use super::*;
use crate::config::{ByteConfig, LintCommand, ProviderName, SyntaxTheme, UiTheme};
use crate::loader::parse_str;
use crate::schema::registry;

fn run(yaml: &str) -> Result<Validated, ValidationError> {
    let tree = parse_str(yaml, None).unwrap();
    validate(&tree, registry())
}

fn typed(yaml: &str) -> (ByteConfig, ValidationReport) {
    let validated = run(yaml).unwrap();
    let config = serde_yaml::from_value(validated.tree).unwrap();
    (config, validated.report)
}

#[test]
fn test_empty_tree_resolves_to_defaults() {
    let validated = run("").unwrap();

    assert_eq!(validated.tree, registry().defaults());
    assert!(validated.report.is_clean());
}

#[test]
fn test_partial_section_keeps_sibling_defaults() {
    let (config, _) = typed("lsp:\n  enable: true\n");

    assert!(config.lsp.enable);
    assert_eq!(config.lsp.timeout, 30);
    assert!(config.lsp.servers.is_empty());
    assert_eq!(config.cli, ByteConfig::default().cli);
}

#[test]
fn test_null_section_and_field_take_defaults() {
    let (config, report) = typed("cli:\nlint:\n  enable: ~\n");

    assert_eq!(config.cli.ui_theme, UiTheme::Mocha);
    assert!(config.lint.enable);
    assert!(report.is_clean());
}

#[test]
fn test_every_enum_member_accepted() {
    for value in UiTheme::VARIANTS {
        let (config, _) = typed(&format!("cli:\n  ui_theme: {}\n", value));
        assert_eq!(config.cli.ui_theme.as_str(), *value);
        assert_eq!(UiTheme::from_str(value), Some(config.cli.ui_theme));
    }
    for value in SyntaxTheme::VARIANTS {
        let (config, _) = typed(&format!("cli:\n  syntax_theme: {}\n", value));
        assert_eq!(config.cli.syntax_theme.as_str(), *value);
    }
    for value in ProviderName::VARIANTS {
        let (config, _) = typed(&format!("llm:\n  model: {}\n", value));
        assert_eq!(config.llm.model.as_str(), *value);
    }
}

#[test]
fn test_invalid_enum_value() {
    let err = run("cli:\n  ui_theme: solarized\n").unwrap_err();

    assert_eq!(
        err.violations,
        vec![Violation::InvalidEnumValue {
            path: "cli.ui_theme".to_string(),
            value: "solarized".to_string(),
            allowed: UiTheme::VARIANTS.iter().map(|v| v.to_string()).collect(),
        }]
    );
}

#[test]
fn test_enum_is_case_sensitive() {
    let err = run("llm:\n  model: OpenAI\n").unwrap_err();
    assert!(matches!(
        &err.violations[0],
        Violation::InvalidEnumValue { path, .. } if path == "llm.model"
    ));
}

#[test]
fn test_type_mismatch() {
    let err = run("lsp:\n  timeout: soon\n").unwrap_err();

    assert_eq!(
        err.violations,
        vec![Violation::TypeMismatch {
            path: "lsp.timeout".to_string(),
            expected: "non-negative integer".to_string(),
            actual: "string",
        }]
    );
}

#[test]
fn test_negative_and_float_integers_rejected() {
    let err = run("edit_format:\n  mask_message_count: -1\nlsp:\n  timeout: 1.5\n").unwrap_err();
    let actual: Vec<_> = err
        .violations
        .iter()
        .map(|v| match v {
            Violation::TypeMismatch { path, actual, .. } => (path.as_str(), *actual),
            other => panic!("unexpected violation: {:?}", other),
        })
        .collect();

    assert_eq!(
        actual,
        vec![
            ("edit_format.mask_message_count", "integer"),
            ("lsp.timeout", "float")
        ]
    );
}

#[test]
fn test_all_violations_collected() {
    let yaml = "\
cli:
  ui_theme: neon
  syntax_theme: 7
lint:
  enable: sometimes
web:
  chrome_binary_location: [a, b]
";
    let err = run(yaml).unwrap_err();
    let paths: Vec<&str> = err.violations.iter().map(Violation::path).collect();

    assert_eq!(
        paths,
        vec![
            "cli.ui_theme",
            "cli.syntax_theme",
            "lint.enable",
            "web.chrome_binary_location"
        ]
    );
    assert!(err.to_string().contains("4 problem(s)"));
}

#[test]
fn test_section_must_be_mapping() {
    let err = run("files: [a, b]\n").unwrap_err();
    assert_eq!(
        err.violations,
        vec![Violation::TypeMismatch {
            path: "files".to_string(),
            expected: "mapping".to_string(),
            actual: "array",
        }]
    );
}

#[test]
fn test_root_must_be_mapping() {
    let err = run("- just\n- a list\n").unwrap_err();
    assert_eq!(err.violations[0].path(), "<root>");
}

#[test]
fn test_string_list_element_mismatch() {
    let err = run("files:\n  ignore: [target, 3]\n").unwrap_err();
    assert_eq!(err.violations[0].path(), "files.ignore[1]");
}

#[test]
fn test_user_ignore_replaces_defaults() {
    let (config, _) = typed("files:\n  ignore: [target]\n");
    assert_eq!(config.files.ignore, vec!["target".to_string()]);
}

#[test]
fn test_unknown_keys_are_warnings() {
    let (config, report) = typed("experimental:\n  x: 1\ncli:\n  font: mono\n");

    assert_eq!(config, ByteConfig::default());
    assert_eq!(
        report.warnings,
        vec![
            Warning::UnknownKey {
                path: "experimental".to_string()
            },
            Warning::UnknownKey {
                path: "cli.font".to_string()
            },
        ]
    );
    assert!(report.dropped.is_empty());
}

#[test]
fn test_lint_commands_merge_in_order() {
    let yaml = "\
lint:
  commands:
    - command: [ruff, check, --fix]
      languages: [python]
    - command: prettier --write
      languages: [typescript, javascript]
    - command: [codespell]
";
    let (config, report) = typed(yaml);

    assert!(report.is_clean());
    assert_eq!(
        config.lint.commands,
        vec![
            LintCommand {
                command: vec!["ruff".into(), "check".into(), "--fix".into()],
                languages: vec!["python".into()],
            },
            LintCommand {
                command: vec!["prettier".into(), "--write".into()],
                languages: vec!["typescript".into(), "javascript".into()],
            },
            LintCommand {
                command: vec!["codespell".into()],
                languages: Vec::new(),
            },
        ]
    );
}

#[test]
fn test_quoted_command_string_split_shell_style() {
    let (config, _) = typed("lint:\n  commands:\n    - command: \"eslint --rule 'no-console: off'\"\n");
    assert_eq!(
        config.lint.commands[0].command,
        vec!["eslint", "--rule", "no-console: off"]
    );
}

#[test]
fn test_malformed_lint_element_dropped_alone() {
    let yaml = "\
lint:
  commands:
    - command: [ruff, check]
      languages: [python]
    - languages: [go]
    - command: [gofmt, -l]
      languages: [go]
";
    let (config, report) = typed(yaml);

    assert_eq!(config.lint.commands.len(), 2);
    assert_eq!(config.lint.commands[1].command, vec!["gofmt", "-l"]);
    assert_eq!(
        report.dropped,
        vec![Violation::MalformedArrayElement {
            path: "lint.commands".to_string(),
            index: 1,
            reason: "missing required field `command`".to_string(),
        }]
    );
    assert!(report.dropped[0].is_element_scoped());
}

#[test]
fn test_lint_element_reasons() {
    let yaml = "\
lint:
  commands:
    - just-a-string
    - command: []
    - command: [ruff, 3]
    - command: \"unterminated 'quote\"
    - command: [ruff]
      languages: python
";
    let (config, report) = typed(yaml);

    assert!(config.lint.commands.is_empty());
    let indexes: Vec<usize> = report
        .dropped
        .iter()
        .map(|v| match v {
            Violation::MalformedArrayElement { index, .. } => *index,
            other => panic!("unexpected violation: {:?}", other),
        })
        .collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4]);

    let reasons: Vec<String> = report.dropped.iter().map(|v| v.to_string()).collect();
    assert!(reasons[0].contains("expected a mapping, found string"));
    assert!(reasons[1].contains("must not be empty"));
    assert!(reasons[2].contains("must be strings"));
    assert!(reasons[3].contains("could not be parsed"));
    assert!(reasons[4].contains("lint.commands[4].languages"));
}

#[test]
fn test_dropped_elements_reported_with_structural_errors() {
    let yaml = "\
cli:
  ui_theme: neon
lint:
  commands:
    - languages: [go]
";
    let err = run(yaml).unwrap_err();

    assert_eq!(err.violations.len(), 2);
    assert!(!err.violations[0].is_element_scoped());
    assert!(err.violations[1].is_element_scoped());
}

#[test]
fn test_unknown_element_key_warns_but_keeps_element() {
    let (config, report) = typed("lint:\n  commands:\n    - command: [ruff]\n      when: always\n");

    assert_eq!(config.lint.commands.len(), 1);
    assert_eq!(
        report.warnings,
        vec![Warning::UnknownKey {
            path: "lint.commands[0].when".to_string()
        }]
    );
}

#[test]
fn test_unknown_element_key_reported_when_element_dropped() {
    let (config, report) = typed("lint:\n  commands:\n    - comand: [ruff]\n      languages: [python]\n");

    assert!(config.lint.commands.is_empty());
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(
        report.warnings,
        vec![Warning::UnknownKey {
            path: "lint.commands[0].comand".to_string()
        }]
    );
}

#[test]
fn test_model_params_forwarded_verbatim() {
    let yaml = "\
llm:
  openai:
    enable: true
    model_params:
      temperature: 0.2
      stop: [\"\\n\"]
      nested: {a: 1}
";
    let (config, report) = typed(yaml);
    let params = &config.llm.openai.model_params;

    assert!(report.is_clean());
    assert_eq!(params.len(), 3);
    assert_eq!(params["temperature"], Value::from(0.2));
    assert!(params["nested"].is_mapping());
}

#[test]
fn test_model_params_must_be_mapping() {
    let err = run("llm:\n  gemini:\n    model_params: 12\n").unwrap_err();
    assert_eq!(err.violations[0].path(), "llm.gemini.model_params");
}

#[test]
fn test_lsp_servers_forwarded() {
    let yaml = "\
lsp:
  servers:
    pyright:
      command: [pyright-langserver, --stdio]
      languages: [python]
    gopls:
";
    let (config, _) = typed(yaml);

    assert_eq!(config.lsp.servers.len(), 2);
    assert_eq!(config.lsp.servers["gopls"], Value::Mapping(Mapping::new()));
    assert!(config.lsp.servers["pyright"].get("languages").is_some());
    let names: Vec<&str> = config.lsp.servers.keys().filter_map(Value::as_str).collect();
    assert_eq!(names, vec!["pyright", "gopls"]);
}

#[test]
fn test_lsp_server_must_be_mapping() {
    let err = run("lsp:\n  servers:\n    pyright: yes-please\n").unwrap_err();
    assert_eq!(err.violations[0].path(), "lsp.servers.pyright");
}

#[test]
fn test_api_key_null_and_string() {
    let (config, _) = typed("llm:\n  anthropic:\n    api_key: ~\n  gemini:\n    api_key: g-123\n");

    assert_eq!(config.llm.anthropic.api_key, None);
    assert_eq!(config.llm.gemini.api_key.as_deref(), Some("g-123"));
}

#[test]
fn test_validation_is_deterministic() {
    let yaml = "lint:\n  commands:\n    - command: [ruff]\n    - 4\nfuture: true\n";
    assert_eq!(run(yaml).unwrap(), run(yaml).unwrap());
}
