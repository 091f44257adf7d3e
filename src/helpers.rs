use crate::{
    error::{QuizError, Result},
    models::communication::Command,
};

pub const HELP_LINES: [&str; 9] = [
    "select <n>   choose option n of the current question",
    "next         go to the next question",
    "prev         go to the previous question",
    "jump <k>     open question k (answered questions and the first unanswered one)",
    "submit       finish the quiz from the last question",
    "restart      start over from the score screen",
    "show         print the current screen again",
    "help         list commands",
    "quit         leave the quiz",
];

/// Parses one input line. JSON objects are read as tagged [`Command`]s,
/// anything else as the 1-based shorthand listed in [`HELP_LINES`].
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.starts_with('{') {
        return serde_json::from_str(line)
            .map_err(|error| QuizError::MalformedCommand(error.to_string()));
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let argument = words.next();
    if let Some(extra) = words.next() {
        return Err(QuizError::MalformedCommand(format!(
            "unexpected argument '{}'",
            extra
        )));
    }

    let command = match keyword.as_str() {
        "select" | "s" => Command::SelectAnswer {
            answer_index: parse_position(&keyword, argument)?,
        },
        "jump" | "j" => Command::JumpTo {
            question_index: parse_position(&keyword, argument)?,
        },
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "submit" => Command::Submit,
        "restart" => Command::Restart,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(QuizError::UnknownCommand(line.to_string())),
    };

    if argument.is_some() && !matches!(command, Command::SelectAnswer { .. } | Command::JumpTo { .. }) {
        return Err(QuizError::MalformedCommand(format!(
            "'{}' takes no argument",
            keyword
        )));
    }

    Ok(command)
}

// 1-based on the surface, 0-based in commands.
fn parse_position(keyword: &str, argument: Option<&str>) -> Result<usize> {
    let argument = argument.ok_or_else(|| {
        QuizError::MalformedCommand(format!("'{}' needs a number", keyword))
    })?;
    match argument.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(QuizError::MalformedCommand(format!(
            "'{}' is not a positive number",
            argument
        ))),
    }
}
