use std::str::FromStr;

use thiserror::Error;

use postboard_core::domain::{PostField, PostId};

/// One user action, read from a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type into one of the "new post" fields.
    Input(PostField, String),
    Add,
    Edit(PostId),
    /// Type into a field of the row being edited.
    Set(PostField, String),
    Save,
    Delete(PostId),
    Reload,
    Help,
    Quit,
    /// Blank line: just redraw.
    Redraw,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs a post id")]
    MissingId(&'static str),
    #[error("`{0}` is not a post id")]
    BadId(String),
    #[error("`set` needs a field: title, views or image")]
    MissingField,
    #[error("unknown field `{0}`")]
    BadField(String),
}

pub const HELP: &str = "\
commands:
  views <n>  title <text>  image <url>   fill the input line
  add                                    create a post from the input line
  edit <id>                              start editing a row
  set <title|views|image> <value>        change the row being edited
  save                                   save the row being edited
  delete <id>                            delete a row
  reload                                 fetch the list again
  help | quit";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = split_word(line.trim_start());

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Redraw),
            "views" => Ok(Command::Input(PostField::Views, rest.to_string())),
            "title" => Ok(Command::Input(PostField::Title, rest.to_string())),
            "image" => Ok(Command::Input(PostField::Image, rest.to_string())),
            "add" => Ok(Command::Add),
            "edit" => parse_id("edit", rest).map(Command::Edit),
            "delete" | "del" => parse_id("delete", rest).map(Command::Delete),
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(ParseError::MissingField);
                }
                let field = field
                    .parse::<PostField>()
                    .map_err(|_| ParseError::BadField(field.to_string()))?;
                Ok(Command::Set(field, value.to_string()))
            }
            "save" => Ok(Command::Save),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

/// Split off the first word. The remainder keeps its inner spacing; only
/// the single separating space is dropped.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<PostId, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    raw.parse().map_err(|_| ParseError::BadId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn test_input_keeps_text_verbatim() {
        assert_eq!(
            parse("title  Hello world "),
            Ok(Command::Input(PostField::Title, " Hello world ".into()))
        );
        assert_eq!(parse("views"), Ok(Command::Input(PostField::Views, String::new())));
        assert_eq!(
            parse("views abc\n"),
            Ok(Command::Input(PostField::Views, "abc".into()))
        );
    }

    #[test]
    fn test_row_actions() {
        assert_eq!(parse("edit 3"), Ok(Command::Edit(PostId(3))));
        assert_eq!(parse("DELETE 12"), Ok(Command::Delete(PostId(12))));
        assert_eq!(parse("del 1"), Ok(Command::Delete(PostId(1))));
        assert_eq!(parse("save"), Ok(Command::Save));
        assert_eq!(
            parse("set views 99"),
            Ok(Command::Set(PostField::Views, "99".into()))
        );
        assert_eq!(parse("set image"), Ok(Command::Set(PostField::Image, String::new())));
    }

    #[test]
    fn test_bad_lines() {
        assert_eq!(parse("edit"), Err(ParseError::MissingId("edit")));
        assert_eq!(parse("delete x"), Err(ParseError::BadId("x".into())));
        assert_eq!(parse("set"), Err(ParseError::MissingField));
        assert_eq!(parse("set body x"), Err(ParseError::BadField("body".into())));
        assert_eq!(parse("publish"), Err(ParseError::Unknown("publish".into())));
    }

    #[test]
    fn test_blank_line_redraws() {
        assert_eq!(parse("   "), Ok(Command::Redraw));
        assert_eq!(parse(""), Ok(Command::Redraw));
    }
}
