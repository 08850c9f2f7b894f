// Status output goes to stderr; stdout carries published outputs only.

#[macro_export]
macro_rules! success_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        eprintln!("{} {}", "[SUCCESS]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        eprintln!("{} {}", "  [ERROR]".red().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warning_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        eprintln!("{} {}", "[WARNING]".yellow().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! info_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        eprintln!("{} {}", "   [INFO]".cyan().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! command_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize;
        eprintln!("{} {}", "        $".blue().bold(), format!($($arg)*));
    }};
}
