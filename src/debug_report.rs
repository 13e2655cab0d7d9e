use digify::{Token, TokenKind, TokenSequence};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(run: &TokenSequence, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Translating: \"{}\"", run.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if run.tokens.is_empty() {
        println!("{}", palette.dim("  No tokens produced (empty input)"));
    } else {
        for (idx, token) in run.tokens.iter().enumerate() {
            println!("  {}", fmt_token(idx, token, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Digified ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(run.digify(), ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Lex: {}  │  Scan: {}",
        palette.paint(format!("{:?}", run.metrics.total), ansi::GREEN),
        palette.dim(format!("{:?}", run.metrics.lex)),
        palette.paint(format!("{:?}", run.metrics.scan), ansi::CYAN),
    );
    println!();
}

fn fmt_token(idx: usize, token: &Token, palette: &ansi::Palette) -> String {
    let index = palette.paint(format!("[{idx}]"), ansi::GRAY);
    let span = palette.paint(format!("{}..{}", token.span.start, token.span.end), ansi::YELLOW);

    let (label, value) = match token.kind {
        TokenKind::Number(n) => ("number  ", palette.bold(palette.paint(format!("{n}"), ansi::GREEN))),
        TokenKind::Duration(d) => {
            ("duration", palette.bold(palette.paint(format!("{}ms", d.as_millis()), ansi::GREEN)))
        }
        TokenKind::Literal => ("literal ", palette.dim(format!("\"{}\"", preview(&token.body)))),
    };

    format!("{} {} {} {} {}", index, palette.paint(label, ansi::BLUE), span, palette.dim("│"), value)
}

fn preview(body: &str) -> String {
    if body.chars().count() > 40 {
        let head: String = body.chars().take(40).collect();
        format!("{head}…")
    } else {
        body.to_string()
    }
}
