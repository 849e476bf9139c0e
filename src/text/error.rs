use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Display, Clone, PartialEq, Eq, Error, IsVariant)]
pub enum FormatError {
    #[display("unmatched '{brace}' at byte {position} of template")]
    UnmatchedBrace { brace: char, position: usize },
    #[display("invalid argument reference '{field}'")]
    InvalidField { field: String },
    #[display("invalid format spec '{spec}'")]
    InvalidSpec { spec: String },
    #[display("cannot switch between automatic and manual argument indexing")]
    MixedIndexing,
    #[display("missing positional argument {index}")]
    MissingArgument { index: usize },
    #[display("missing named argument '{name}'")]
    MissingNamed { name: String },
    #[display("format type '{presentation}' is not valid for {argument} arguments")]
    IncompatibleType { presentation: char, argument: &'static str },
    #[display("precision is not allowed for {argument} arguments")]
    PrecisionNotAllowed { argument: &'static str },
}
