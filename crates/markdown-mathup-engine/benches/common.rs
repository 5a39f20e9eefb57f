// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_notebook(size: usize) -> String {
    let base = "# Title\n\nEnergy $$E = mc^2$$ and momentum $$p = mv$$ in one paragraph.\n\n$$$\n\\int_0^1 x^2 \\, dx = \\frac{1}{3}\n$$$\n\n- Bullet with $$x_i$$\n  - Nested `code $$not math$$`\n- Another item\n\n> $$$ \\sum_{n=1}^\\infty \\frac{1}{n^2} $$$\n\n";
    base.repeat(size)
}

/// Paragraphs full of `$$` openers that never close, so every opener scans
/// to the end of its paragraph.
#[allow(dead_code)]
pub fn generate_unclosed_openers(paragraphs: usize, openers: usize) -> String {
    let line = "$$x ".repeat(openers);
    let mut content = String::new();
    for _ in 0..paragraphs {
        content.push_str(&line);
        content.push_str("\n\n");
    }
    content
}
