use console::style;

pub enum Style {
    Link,    // URLs
    Command, // Commands, inline code, and env variable keys
    UserCode,
    Banner,
    Failure,
    Pending,
    WarningPrefix, // "WARN:" text
    ErrorPrefix,   // "ERROR:", "error:", and "error[code]:" text
    Heading,
    Success,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Command | Style::Pending => style(message_ref).yellow(),
            Style::UserCode => style(message_ref).yellow().bold(),
            Style::Banner => style(message_ref).magenta().bold(),
            Style::Failure => style(message_ref).red(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::Heading => style(message_ref).bold(),
            Style::Success => style(message_ref).green(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("N8R_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
