use owo_colors::Style;

// Stylesheet used to colorize prints.
#[derive(Debug, Default)]
pub(crate) struct Styles {
    pub header_style: Style,
    pub title_style: Style,
    pub label_style: Style,
}

impl Styles {
    pub(crate) fn colorize(&mut self) {
        self.header_style = Style::new().bright_blue().bold();
        self.title_style = Style::new().bright_green();
        self.label_style = Style::new().bright_yellow();
    }
}
