use owo_colors::{OwoColorize, Rgb, Stream, Style};

pub const ICON_SUCCESS: &str = "✓";
pub const ICON_POINTER: &str = "→";

pub fn primary() -> Rgb {
    Rgb(114, 227, 173)
}

pub fn error() -> Rgb {
    Rgb(202, 50, 20)
}

pub fn warning() -> Rgb {
    Rgb(245, 158, 11)
}

pub fn success() -> Rgb {
    Rgb(114, 227, 173)
}

fn strong(color: Rgb) -> Style {
    Style::new().color(color).bold()
}

// Styling is skipped when the stream is not a color terminal, or when
// `owo_colors::set_override(false)` was called for --no-color / NO_COLOR.

pub fn dimmed(text: &str) -> String {
    format!("{}", text.if_supports_color(Stream::Stdout, |t| t.dimmed()))
}

pub fn success_icon() -> String {
    format!(
        "{}",
        ICON_SUCCESS.if_supports_color(Stream::Stdout, |t| t.style(strong(success())))
    )
}

pub fn pointer_icon() -> String {
    format!(
        "{}",
        ICON_POINTER.if_supports_color(Stream::Stdout, |t| t.color(primary()))
    )
}

pub fn success_message(msg: &str) -> String {
    format!("{} {}", success_icon(), msg)
}

pub fn error_label() -> String {
    format!(
        "{}",
        "Error:".if_supports_color(Stream::Stderr, |t| t.style(strong(error())))
    )
}

pub fn code(text: &str) -> String {
    format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| t.color(warning()))
    )
}

pub fn highlight(text: &str) -> String {
    format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| t.style(strong(primary())))
    )
}

pub fn phase(current: usize, total: usize, message: &str) -> String {
    let counter = format!("[{}/{}]", current, total);
    format!(
        "{} {}",
        counter.if_supports_color(Stream::Stdout, |t| t.style(strong(primary()))),
        message.if_supports_color(Stream::Stdout, |t| t.bold())
    )
}
