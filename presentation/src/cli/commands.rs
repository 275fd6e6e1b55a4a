//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use docbase_domain::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PostId};
use std::path::PathBuf;

/// CLI arguments for docbase
#[derive(Parser, Debug)]
#[command(name = "docbase")]
#[command(author, version, about = "A CLI tool to make DocBase more convenient")]
#[command(long_about = r#"
A command-line client for the DocBase API.

Search, list and fetch posts, list tags, and rename tags across every post
that carries them.

Credentials are read from (in priority order):
1. --token / --domain
2. DOCBASE_API_TOKEN / DOCBASE_DOMAIN
3. --config <path>, ./docbase.toml, ~/.config/docbase/config.toml

Example:
  docbase post search "release notes"
  docbase post list --per-page 50 --format "{{ id }} {{ title }}" "tag:howto"
  docbase tag edit old-name=new-name typo=fixed
"#)]
pub struct Cli {
    /// Access token for the DocBase API
    #[arg(long, env = "DOCBASE_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Team domain (`myteam` for myteam.docbase.io)
    #[arg(long, env = "DOCBASE_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manipulate posts
    #[command(visible_alias = "posts")]
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Manipulate tags
    #[command(visible_alias = "tags")]
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PostCommands {
    /// Search words in post titles and bodies
    Search(PostSearchArgs),
    /// List posts
    List(PostListArgs),
    /// Get a post
    Get(PostGetArgs),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TagCommands {
    /// List tags
    #[command(visible_alias = "ls")]
    List,
    /// Rename tags on every post that carries them
    Edit(TagEditArgs),
}

/// Page selection shared by the listing commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Number of posts per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PostSearchArgs {
    /// Text to search for
    pub query: String,

    #[command(flatten)]
    pub pages: PageArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PostListArgs {
    /// Search query in DocBase syntax (default: all posts)
    pub query: Option<String>,

    #[command(flatten)]
    pub pages: PageArgs,

    /// Template to show each post (e.g. "{{ id }} {{ title }}")
    #[arg(long)]
    pub format: Option<String>,

    /// Fetch every page instead of one
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PostGetArgs {
    /// Post id
    pub id: PostId,

    /// Template to show the post
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TagEditArgs {
    /// Renames as OLD=NEW pairs
    #[arg(value_name = "OLD=NEW", required = true, num_args = 1..)]
    pub tags: Vec<String>,

    /// Show what would change without updating any post
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_post_list_defaults() {
        let cli = parse(&["docbase", "post", "list"]);
        let Some(Commands::Post {
            command: PostCommands::List(args),
        }) = cli.command
        else {
            panic!("expected post list");
        };
        assert_eq!(args.pages.page, 1);
        assert_eq!(args.pages.per_page, 20);
        assert!(args.query.is_none());
        assert!(args.format.is_none());
        assert!(!args.all);
    }

    #[test]
    fn test_aliases() {
        let cli = parse(&["docbase", "posts", "search", "word"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Post {
                command: PostCommands::Search(_)
            })
        ));

        let cli = parse(&["docbase", "tags", "ls"]);
        assert_eq!(
            cli.command,
            Some(Commands::Tag {
                command: TagCommands::List
            })
        );
    }

    #[test]
    fn test_tag_edit_requires_pairs() {
        assert!(Cli::try_parse_from(["docbase", "tag", "edit"]).is_err());

        let cli = parse(&["docbase", "tag", "edit", "a=b", "c=d", "--dry-run"]);
        let Some(Commands::Tag {
            command: TagCommands::Edit(args),
        }) = cli.command
        else {
            panic!("expected tag edit");
        };
        assert_eq!(args.tags, vec!["a=b", "c=d"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_post_get_parses_id() {
        let cli = parse(&["docbase", "post", "get", "42"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Post {
                command: PostCommands::Get(PostGetArgs { id, .. })
            }) if id == PostId::new(42)
        ));
        assert!(Cli::try_parse_from(["docbase", "post", "get", "abc"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "docbase", "post", "list", "--domain", "team", "--token", "t", "-vv",
        ]);
        assert_eq!(cli.domain.as_deref(), Some("team"));
        assert_eq!(cli.token.as_deref(), Some("t"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_all_conflicts_with_page() {
        assert!(Cli::try_parse_from(["docbase", "post", "list", "--all", "--page", "2"]).is_err());
    }
}
