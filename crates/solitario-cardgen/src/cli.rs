use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use solitario_core::model::suit::Suit;

/// Print the HTML card faces of one suit, ace to king.
#[derive(Debug, Parser)]
#[command(name = "generate-cards", about = "Create card templates")]
pub struct Cli {
    /// Suit to create templates for.
    #[arg(value_parser = suit_parser())]
    pub suit: Suit,
}

/// Case-sensitive choice over the suit names, resolved through `Suit::from_str`.
fn suit_parser() -> impl TypedValueParser<Value = Suit> {
    PossibleValuesParser::new(Suit::names()).try_map(|name| name.parse::<Suit>())
}

impl Cli {
    /// Parse the process arguments, exiting with status 2 on a usage error.
    ///
    /// A rejected suit also gets the usage synopsis, which clap only prints
    /// by itself for a missing argument.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                if err.kind() == ErrorKind::InvalidValue {
                    eprintln!("{}", Self::command().render_usage());
                }
                err.exit()
            }
        }
    }
}
