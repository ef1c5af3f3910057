use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads analyzer input from local files or stdin. Bytes are validated as
/// UTF-8 here so the analyzers only ever see decoded text.
#[derive(Debug, Clone)]
pub struct LocalInput {
    base_path: String,
}

impl LocalInput {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl InputSource for LocalInput {
    fn read_input(&self, spec: &str) -> Result<String> {
        let bytes = if spec == "-" {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        } else {
            fs::read(Path::new(&self.base_path).join(spec))?
        };
        Ok(String::from_utf8(bytes)?)
    }
}
