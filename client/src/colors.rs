/// ANSI escape sequences for drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub x: &'static str,
    pub o: &'static str,
    pub hint: &'static str,
    pub winner: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            x: "\x1b[38;2;238;75;106m",
            o: "\x1b[38;2;15;113;115m",
            hint: "\x1b[2m",
            winner: "\x1b[1;7m",
            reset: "\x1b[0m",
        }
    }

    pub fn dark() -> Self {
        Self {
            x: "\x1b[38;2;255;112;138m",
            o: "\x1b[38;2;72;201;190m",
            hint: "\x1b[38;2;110;110;110m",
            winner: "\x1b[1;7m",
            reset: "\x1b[0m",
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            x: "",
            o: "",
            hint: "",
            winner: "",
            reset: "",
        }
    }

    pub fn for_theme(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", color, text, self.reset)
        }
    }
}
