use iced_toast::app::{run, Flags};
use iced_toast::toast::Position;
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        position: args
            .opt_value_from_fn("--position", parse_position)
            .unwrap(),
        message: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    run(flags)
}

fn parse_position(value: &str) -> Result<Position, String> {
    match value {
        "top" => Ok(Position::Top),
        "center" => Ok(Position::Center),
        "bottom" => Ok(Position::Bottom),
        other => Err(format!("unknown position: {other}")),
    }
}
