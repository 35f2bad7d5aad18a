use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn load_query(query_text: Option<&str>, query_file: Option<&Path>) -> Result<String, String> {
    if let Some(text) = query_text {
        return Ok(text.to_string());
    }

    if let Some(path) = query_file {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return fs::read_to_string(path)
            .map(|content| content.trim_end().to_string())
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e));
    }

    Err("query is required: use a positional argument or -f/--file".to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf.trim_end().to_string())
}
