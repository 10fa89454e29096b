use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring matched against titles and hashtags.
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,
    /// Keep links carrying any of these hashtags (repeatable, case-sensitive).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    #[arg(long, value_parser = parse_top_n)]
    pub top: Option<usize>,
}

#[derive(Debug, Args)]
pub struct TagsArgs {
    #[arg(long, value_parser = parse_top_n)]
    pub top: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ShortenArgs {
    #[arg(allow_hyphen_values = true)]
    pub url: String,
}

#[derive(Debug, Args)]
pub struct EscapeArgs {
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

fn parse_top_n(raw: &str) -> std::result::Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if value == 0 {
        return Err("top must be >= 1".to_string());
    }
    Ok(value)
}
