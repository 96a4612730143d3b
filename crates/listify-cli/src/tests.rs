use super::*;

#[test]
fn parses_rank_with_defaults() {
    let cli = Cli::try_parse_from(["listify", "rank", "canvas tote", "buy tote bag"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Rank {
            ref keywords,
            ref attrs,
            attributes_file: None,
            max_keywords: listify_seo::DEFAULT_MAX_KEYWORDS,
        } if keywords == &["canvas tote", "buy tote bag"] && attrs.is_empty()
    ));
}

#[test]
fn parses_rank_attributes_and_limit() {
    let cli = Cli::try_parse_from([
        "listify",
        "rank",
        "tote",
        "--attr",
        "color=navy",
        "--attr",
        "material=canvas",
        "--attributes-file",
        "attrs.yaml",
        "--max-keywords",
        "3",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Rank {
            keywords,
            attrs,
            attributes_file,
            max_keywords,
        } => {
            assert_eq!(keywords, vec!["tote"]);
            assert_eq!(
                attrs,
                vec![
                    ("color".to_string(), "navy".to_string()),
                    ("material".to_string(), "canvas".to_string()),
                ]
            );
            assert_eq!(attributes_file, Some(PathBuf::from("attrs.yaml")));
            assert_eq!(max_keywords, 3);
        }
        other => panic!("expected rank command, got {other:?}"),
    }
}

#[test]
fn rank_requires_keywords() {
    assert!(Cli::try_parse_from(["listify", "rank"]).is_err());
}

#[test]
fn rank_rejects_malformed_attr() {
    assert!(Cli::try_parse_from(["listify", "rank", "tote", "--attr", "navy"]).is_err());
}

#[test]
fn parses_price_command() {
    let cli = Cli::try_parse_from([
        "listify", "price", "--title", "Trail Runner", "--category", "shoes",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Price {
            ref title,
            category: Some(ref c),
        } if title == "Trail Runner" && c == "shoes"
    ));
}

#[test]
fn price_requires_title() {
    assert!(Cli::try_parse_from(["listify", "price"]).is_err());
}

#[test]
fn listing_input_defaults_to_stdin() {
    let cli = Cli::try_parse_from(["listify", "listing"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Listing { ref input } if input == "-"));
}

#[test]
fn parses_listing_input_file() {
    let cli = Cli::try_parse_from(["listify", "listing", "--input", "analysis.json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Listing { ref input } if input == "analysis.json"));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["listify"]).is_err());
}
