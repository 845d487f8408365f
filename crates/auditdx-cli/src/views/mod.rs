pub mod diagnostic;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;

/// One-line status printer. Colors are dropped when stdout is not a
/// terminal, so piped output stays clean.
pub struct Console {
    color: bool,
}

impl Console {
    pub fn stdout() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn title(&self, text: &str) {
        if self.color {
            println!("{}", text.magenta().bold());
        } else {
            println!("{}", text);
        }
    }

    pub fn header(&self, title: &str) {
        let banner = format!("=== {} ===", title);
        println!();
        if self.color {
            println!("{}", banner.cyan().bold());
        } else {
            println!("{}", banner);
        }
    }

    /// Bold minor heading inside a section
    pub fn section(&self, title: &str) {
        println!();
        if self.color {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
    }

    pub fn success(&self, message: &str) {
        if self.color {
            println!("{} {}", "✓".green(), message);
        } else {
            println!("✓ {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.color {
            println!("{} {}", "✗".red(), message);
        } else {
            println!("✗ {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.color {
            println!("{} {}", "!".yellow(), message);
        } else {
            println!("! {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.color {
            println!("{} {}", "·".blue(), message);
        } else {
            println!("· {}", message);
        }
    }

    pub fn plain(&self, message: &str) {
        println!("{}", message);
    }

    /// Print without a trailing newline, flushed so the cursor sits after
    /// the prompt text
    pub fn prompt(&self, message: &str) {
        print!("{}", message);
        let _ = std::io::stdout().flush();
    }
}
