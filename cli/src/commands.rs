use std::io;

pub struct FramesCmd {
    pub from: Option<String>,
    pub to: Option<String>,
    pub count: usize,
    pub exclude_vertical: bool,
    pub output: Box<dyn io::Write>,
}

pub struct NormalizeCmd {
    pub input: String,
    pub strict: bool,
    pub output: Box<dyn io::Write>,
}
