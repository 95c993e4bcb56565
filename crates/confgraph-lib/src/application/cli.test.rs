// Tests for CLI argument parsing

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = parse(&["confgraph"]);
    assert!(cli.command.is_none());
}

#[test]
fn test_resolve_with_module_ids() {
    let cli = parse(&["confgraph", "resolve", "1", "2", "3"]);
    match cli.command {
        Some(Commands::Resolve {
            modules,
            request,
            with_modules,
            format,
        }) => {
            assert_eq!(modules, vec![1, 2, 3]);
            assert!(request.is_none());
            assert!(!with_modules);
            assert_eq!(format, Encoding::Json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_resolve_flags() {
    let cli = parse(&[
        "confgraph",
        "resolve",
        "--with-modules",
        "--format",
        "text",
        "--request",
        "refs.json",
        "--graph",
        "graph.toml",
    ]);
    assert_eq!(
        cli.config.graph.as_deref(),
        Some(std::path::Path::new("graph.toml"))
    );
    match cli.command {
        Some(Commands::Resolve {
            modules,
            request,
            with_modules,
            format,
        }) => {
            assert!(modules.is_empty());
            assert_eq!(request.as_deref(), Some(std::path::Path::new("refs.json")));
            assert!(with_modules);
            assert_eq!(format, Encoding::Text);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_config_flags_are_accepted_in_subcommand_position() {
    let cli = parse(&["confgraph", "items", "--graph", "g.toml", "--log-level", "2"]);
    assert_eq!(cli.config.graph.as_deref(), Some(std::path::Path::new("g.toml")));
    assert_eq!(cli.config.log_level, 2);
}

#[test]
fn test_listing_subcommands_parse() {
    assert!(matches!(
        parse(&["confgraph", "items"]).command,
        Some(Commands::Items)
    ));
    assert!(matches!(
        parse(&["confgraph", "dependencies"]).command,
        Some(Commands::Dependencies)
    ));
}

#[test]
fn test_invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["confgraph", "resolve", "--format", "yaml"]).is_err());
}
