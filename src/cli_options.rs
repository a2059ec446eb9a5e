use camino::Utf8PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Play tic-tac-toe against a computer that never loses")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config",
        default = "Utf8PathBuf::from(\"./config.toml\")"
    )]
    pub config: Utf8PathBuf,

    #[argh(
        option,
        description = "stop after this many games. by default, play until the input is closed"
    )]
    pub games: Option<u32>,
}
